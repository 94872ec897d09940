//! Checks for the other wallet-side operations: collateral deposits,
//! repayments and the lender's approve / liquidate decisions.
//!
//! Nothing here talks to the contract. Each constructor validates raw form
//! input the same way the contract would reject it, so the page can say
//! what is wrong before a transaction is ever signed.

use super::address::Address;
use super::loan::{signed_amount, LoanError};
use super::units;

/// Parse a loan id: a whole number, zero or greater.
pub fn parse_loan_id(raw: &str) -> Result<u64, LoanError> {
    raw.trim().parse().map_err(|_| LoanError::LoanId)
}

fn positive_value(amount_ether: &str) -> Result<u128, LoanError> {
    signed_amount(amount_ether)?.ok_or(LoanError::NonPositiveValue)
}

/// Ether sent along with a collateral deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollateralDeposit {
    pub amount_wei: u128,
}

impl CollateralDeposit {
    pub fn new(amount_ether: &str) -> Result<Self, LoanError> {
        Ok(Self {
            amount_wei: positive_value(amount_ether)?,
        })
    }

    pub fn amount_ether(&self) -> String {
        units::wei_to_ether(self.amount_wei)
    }
}

/// Repayment of one loan by its borrower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repayment {
    pub loan_id: u64,
    pub amount_wei: u128,
}

impl Repayment {
    pub fn new(loan_id: &str, amount_ether: &str) -> Result<Self, LoanError> {
        Ok(Self {
            loan_id: parse_loan_id(loan_id)?,
            amount_wei: positive_value(amount_ether)?,
        })
    }

    pub fn amount_ether(&self) -> String {
        units::wei_to_ether(self.amount_wei)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LenderAction {
    Approve,
    Liquidate,
}

impl LenderAction {
    pub const ALL: [LenderAction; 2] = [LenderAction::Approve, LenderAction::Liquidate];

    /// Stable identifier, used as the `<option>` value.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Liquidate => "liquidate",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.key() == key)
    }
}

/// A lender's decision on one borrower's loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LenderDecision {
    pub action: LenderAction,
    pub borrower: Address,
    pub loan_id: u64,
}

impl LenderDecision {
    pub fn new(action: LenderAction, borrower: &str, loan_id: &str) -> Result<Self, LoanError> {
        let borrower = borrower.parse::<Address>()?;
        Ok(Self {
            action,
            borrower,
            loan_id: parse_loan_id(loan_id)?,
        })
    }
}
