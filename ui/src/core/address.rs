//! Account address parsing for borrower / lender inputs.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

const ADDRESS_BYTES: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("La dirección debe empezar por 0x.")]
    MissingPrefix,
    #[error("La dirección debe tener 40 dígitos hexadecimales (tiene {0}).")]
    Length(usize),
    #[error("La dirección contiene un carácter no hexadecimal: {0:?}")]
    NonHex(char),
}

/// A 20-byte account address. Mixed-case input is accepted without checksum verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Address([u8; ADDRESS_BYTES]);

impl Address {
    /// Abbreviated form for tight layouts, e.g. `0x25238d…8023`.
    pub fn short(&self) -> String {
        let full = self.to_string();
        format!("{}…{}", &full[..8], &full[full.len() - 4..])
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let digits = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .ok_or(AddressError::MissingPrefix)?;

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(AddressError::NonHex(bad));
        }
        if digits.len() != ADDRESS_BYTES * 2 {
            return Err(AddressError::Length(digits.len()));
        }

        let mut bytes = [0u8; ADDRESS_BYTES];
        for (slot, pair) in bytes.iter_mut().zip(digits.as_bytes().chunks_exact(2)) {
            *slot = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
        }
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

// Caller guarantees `digit` is ASCII hex.
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
