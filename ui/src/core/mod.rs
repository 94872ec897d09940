//! Platform-agnostic loan domain helpers used by the views.

pub mod actions;
pub mod address;
pub mod loan;
pub mod records;
pub mod units;
