//! Ether / wei conversions for amounts entered and displayed by the UI.

use thiserror::Error;

/// Decimal places between ether and wei.
pub const WEI_DECIMALS: usize = 18;

/// Wei per ether (10^18).
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("El monto está vacío.")]
    Empty,
    #[error("El monto contiene caracteres no válidos: {0:?}")]
    InvalidDigit(String),
    #[error("El monto admite como máximo 18 decimales.")]
    TooPrecise,
    #[error("El monto es demasiado grande.")]
    Overflow,
}

/// Parse a decimal ether amount (`"1.5"`, `"0.001"`, `"2"`) into wei.
pub fn ether_to_wei(raw: &str) -> Result<u128, UnitError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(UnitError::Empty);
    }

    let (whole, fraction) = raw.split_once('.').unwrap_or((raw, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(UnitError::InvalidDigit(raw.to_string()));
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(UnitError::InvalidDigit(raw.to_string()));
    }
    if fraction.len() > WEI_DECIMALS {
        return Err(UnitError::TooPrecise);
    }

    let whole_wei = parse_digits(whole)?
        .checked_mul(WEI_PER_ETHER)
        .ok_or(UnitError::Overflow)?;

    let scale = 10u128.pow((WEI_DECIMALS - fraction.len()) as u32);
    let fraction_wei = parse_digits(fraction)? * scale;

    whole_wei
        .checked_add(fraction_wei)
        .ok_or(UnitError::Overflow)
}

/// Render wei as ether with trailing zeros trimmed (`1_500_000_000_000_000_000` -> `"1.5"`).
pub fn wei_to_ether(wei: u128) -> String {
    let whole = wei / WEI_PER_ETHER;
    let fraction = wei % WEI_PER_ETHER;
    if fraction == 0 {
        return whole.to_string();
    }
    let digits = format!("{fraction:0width$}", width = WEI_DECIMALS);
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

fn parse_digits(digits: &str) -> Result<u128, UnitError> {
    if digits.is_empty() {
        return Ok(0);
    }
    digits.parse::<u128>().map_err(|_| UnitError::Overflow)
}
