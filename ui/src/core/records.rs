//! Display rows for loan records as the lending contract returns them.
//!
//! Two shapes come back from the contract's read calls, both as JSON arrays:
//! the per-borrower listing `[id, amount_wei, term_secs, requested_at, status]`
//! and the detail view `[id, borrower, amount_wei, term_secs, requested_at,
//! deadline, status]`. Timestamps are Unix seconds.

use serde::Deserialize;
use time::OffsetDateTime;

use super::address::Address;
use super::loan::{format_timestamp, human_term, LoanError, LoanStatus};
use super::units;

type DetailTuple = (u64, Address, u128, u64, i64, i64, u8);
type SummaryTuple = (u64, u128, u64, i64, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "DetailTuple")]
struct Detail(LoanRecord);

impl From<DetailTuple> for Detail {
    fn from((id, borrower, amount_wei, term_secs, requested_at, deadline, status): DetailTuple) -> Self {
        Self(LoanRecord {
            id,
            borrower: Some(borrower),
            amount_wei,
            term_secs,
            requested_at,
            deadline: Some(deadline),
            status: LoanStatus::from_code(status),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "SummaryTuple")]
struct Summary(LoanRecord);

impl From<SummaryTuple> for Summary {
    fn from((id, amount_wei, term_secs, requested_at, status): SummaryTuple) -> Self {
        Self(LoanRecord {
            id,
            borrower: None,
            amount_wei,
            term_secs,
            requested_at,
            deadline: None,
            status: LoanStatus::from_code(status),
        })
    }
}

/// One loan as stored on chain. Listing entries carry no borrower or deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanRecord {
    pub id: u64,
    pub borrower: Option<Address>,
    pub amount_wei: u128,
    pub term_secs: u64,
    pub requested_at: i64,
    pub deadline: Option<i64>,
    pub status: LoanStatus,
}

impl LoanRecord {
    pub fn row(&self) -> Result<LoanRow, LoanError> {
        Ok(LoanRow {
            id: self.id.to_string(),
            borrower: self.borrower.map(|addr| addr.to_string()),
            amount_ether: units::wei_to_ether(self.amount_wei),
            term: human_term(self.term_secs),
            requested_at: unix_timestamp(self.requested_at)?,
            deadline: self.deadline.map(unix_timestamp).transpose()?,
            status: self.status,
        })
    }
}

/// Display-ready loan record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanRow {
    pub id: String,
    pub borrower: Option<String>,
    pub amount_ether: String,
    pub term: String,
    pub requested_at: String,
    pub deadline: Option<String>,
    pub status: LoanStatus,
}

/// Parse either a single detail record or a borrower's listing.
pub fn parse_records(json: &str) -> Result<Vec<LoanRecord>, LoanError> {
    if let Ok(Detail(record)) = serde_json::from_str::<Detail>(json) {
        return Ok(vec![record]);
    }
    serde_json::from_str::<Vec<Summary>>(json)
        .map(|listing| listing.into_iter().map(|Summary(record)| record).collect())
        .map_err(|err| LoanError::Records(err.to_string()))
}

pub fn loan_rows(json: &str) -> Result<Vec<LoanRow>, LoanError> {
    parse_records(json)?.iter().map(LoanRecord::row).collect()
}

fn unix_timestamp(secs: i64) -> Result<String, LoanError> {
    OffsetDateTime::from_unix_timestamp(secs)
        .map(format_timestamp)
        .map_err(|_| LoanError::Timestamp(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_record_formats_every_field() {
        let json = r#"[3, "0xC55B44fa88A5389039cECaebcC2D164433908F04",
            1500000000000000000, 90000, 1709294400, 1709384400, 1]"#;
        let rows = loan_rows(json).unwrap();
        assert_eq!(
            rows,
            vec![LoanRow {
                id: "3".into(),
                borrower: Some("0xc55b44fa88a5389039cecaebcc2d164433908f04".into()),
                amount_ether: "1.5".into(),
                term: "90000 s (1d 1h)".into(),
                requested_at: "2024-03-01 12:00:00".into(),
                deadline: Some("2024-03-02 13:00:00".into()),
                status: LoanStatus::Approved,
            }]
        );
    }

    #[test]
    fn listing_keeps_order_and_maps_unknown_status() {
        let json = "[[0, 1000000000000000000, 3600, 0, 2], [1, 250000000000000000, 60, 86400, 7]]";
        let rows = loan_rows(json).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "0");
        assert_eq!(rows[0].amount_ether, "1");
        assert_eq!(rows[0].requested_at, "1970-01-01 00:00:00");
        assert_eq!(rows[0].status, LoanStatus::Repaid);
        assert_eq!(rows[0].borrower, None);
        assert_eq!(rows[0].deadline, None);
        assert_eq!(rows[1].amount_ether, "0.25");
        assert_eq!(rows[1].term, "60 s (1m)");
        assert_eq!(rows[1].status.label(), "Desconocido");
    }

    #[test]
    fn empty_listing_has_no_rows() {
        assert_eq!(loan_rows("[]").unwrap(), Vec::<LoanRow>::new());
    }

    #[test]
    fn malformed_input_is_reported() {
        assert!(matches!(loan_rows("not json"), Err(LoanError::Records(_))));
        assert!(matches!(
            loan_rows(r#"[3, "0x12", 1, 60, 0, 60, 0]"#),
            Err(LoanError::Records(_))
        ));
        assert_eq!(
            loan_rows("[[0, 1, 60, 9223372036854775807, 0]]"),
            Err(LoanError::Timestamp(i64::MAX))
        );
    }
}
