//! Loan lifecycle vocabulary and request validation.
//!
//! The lending contract tracks each loan with a numeric status code; the
//! helpers here map those codes to display labels and turn the raw form
//! inputs of a loan request into a validated [`LoanRequest`] and a
//! [`LoanPreview`] the Loans page renders before anything is sent.

use thiserror::Error;
use time::{macros::format_description, Duration, OffsetDateTime};

use super::address::{Address, AddressError};
use super::units::{self, UnitError};

/// Status of a loan as stored by the lending contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanStatus {
    Pending,
    Approved,
    Repaid,
    Liquidated,
    Unknown,
}

impl LoanStatus {
    /// Statuses the contract can report, in lifecycle order.
    pub const KNOWN: [LoanStatus; 4] = [
        LoanStatus::Pending,
        LoanStatus::Approved,
        LoanStatus::Repaid,
        LoanStatus::Liquidated,
    ];

    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Pending,
            1 => Self::Approved,
            2 => Self::Repaid,
            3 => Self::Liquidated,
            _ => Self::Unknown,
        }
    }

    pub fn code(&self) -> Option<u8> {
        match self {
            Self::Pending => Some(0),
            Self::Approved => Some(1),
            Self::Repaid => Some(2),
            Self::Liquidated => Some(3),
            Self::Unknown => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Approved => "Aprobado",
            Self::Repaid => "Reembolsado",
            Self::Liquidated => "Liquidado",
            Self::Unknown => "Desconocido",
        }
    }

    /// CSS modifier, e.g. `loan-status--pending`.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Pending => "loan-status--pending",
            Self::Approved => "loan-status--approved",
            Self::Repaid => "loan-status--repaid",
            Self::Liquidated => "loan-status--liquidated",
            Self::Unknown => "loan-status--unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoanError {
    #[error("El monto y el plazo del préstamo deben ser mayores a 0.")]
    NonPositive,
    #[error("El valor debe ser mayor a 0.")]
    NonPositiveValue,
    #[error(transparent)]
    Amount(#[from] UnitError),
    #[error("El plazo debe ser un número entero de segundos.")]
    Term,
    #[error("El plazo es demasiado largo: la fecha límite queda fuera de rango.")]
    DeadlineOutOfRange,
    #[error("El ID del préstamo debe ser un número entero mayor o igual a 0.")]
    LoanId,
    #[error("La dirección del prestatario no es válida: {0}")]
    Borrower(#[from] AddressError),
    #[error("Marca de tiempo fuera de rango: {0}")]
    Timestamp(i64),
    #[error("No se pudieron leer los préstamos: {0}")]
    Records(String),
}

/// A validated loan request: positive amount (wei) and positive term (seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanRequest {
    pub amount_wei: u128,
    pub term_secs: u64,
    pub borrower: Option<Address>,
}

impl LoanRequest {
    /// Validate raw form inputs. An empty borrower field means "not given".
    pub fn new(amount_ether: &str, term_secs: &str, borrower: &str) -> Result<Self, LoanError> {
        let amount_wei = signed_amount(amount_ether)?;
        let term: i64 = term_secs.trim().parse().map_err(|_| LoanError::Term)?;
        let (Some(amount_wei), true) = (amount_wei, term > 0) else {
            return Err(LoanError::NonPositive);
        };

        let borrower = match borrower.trim() {
            "" => None,
            raw => Some(raw.parse::<Address>()?),
        };

        Ok(Self {
            amount_wei,
            term_secs: term.unsigned_abs(),
            borrower,
        })
    }

    /// Deadline for a request placed at `requested_at`.
    pub fn deadline(&self, requested_at: OffsetDateTime) -> Result<OffsetDateTime, LoanError> {
        let term = i64::try_from(self.term_secs).map_err(|_| LoanError::DeadlineOutOfRange)?;
        requested_at
            .checked_add(Duration::seconds(term))
            .ok_or(LoanError::DeadlineOutOfRange)
    }

    pub fn preview(&self, requested_at: OffsetDateTime) -> Result<LoanPreview, LoanError> {
        let deadline = self.deadline(requested_at)?;
        Ok(LoanPreview {
            amount_ether: units::wei_to_ether(self.amount_wei),
            amount_wei: self.amount_wei.to_string(),
            term: human_term(self.term_secs),
            requested_at: format_timestamp(requested_at),
            deadline: format_timestamp(deadline),
            status: LoanStatus::Pending,
            borrower: self.borrower.map(|addr| addr.to_string()),
        })
    }
}

/// Display-ready summary of a loan request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanPreview {
    pub amount_ether: String,
    pub amount_wei: String,
    pub term: String,
    pub requested_at: String,
    pub deadline: String,
    pub status: LoanStatus,
    pub borrower: Option<String>,
}

/// Parse an ether amount that may carry a sign. `None` means zero or negative.
pub(crate) fn signed_amount(raw: &str) -> Result<Option<u128>, LoanError> {
    let raw = raw.trim();
    match raw.strip_prefix('-') {
        Some(magnitude) => {
            units::ether_to_wei(magnitude)?;
            Ok(None)
        }
        None => Ok(Some(units::ether_to_wei(raw)?).filter(|wei| *wei > 0)),
    }
}

/// `YYYY-MM-DD HH:MM:SS`, in UTC.
pub fn format_timestamp(ts: OffsetDateTime) -> String {
    ts.to_offset(time::UtcOffset::UTC)
        .format(&format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ))
        .unwrap_or_else(|_| "—".to_string())
}

/// Seconds with a coarse reading appended: `"90000 s (1d 1h)"`.
pub(crate) fn human_term(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let coarse = match (days, hours, minutes) {
        (0, 0, 0) => return format!("{secs} s"),
        (0, 0, m) => format!("{m}m"),
        (0, h, _) => format!("{h}h"),
        (d, 0, _) => format!("{d}d"),
        (d, h, _) => format!("{d}d {h}h"),
    };
    format!("{secs} s ({coarse})")
}
