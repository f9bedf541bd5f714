use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::CoreError;

/// Kind of entry in the portfolio timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerKind {
    /// Automatic net-worth snapshot recorded after a value-changing operation
    Snapshot,
    /// Manual money-in entry
    Income,
    /// Manual money-out entry
    Outcome,
}

impl std::fmt::Display for LedgerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerKind::Snapshot => write!(f, "Snapshot"),
            LedgerKind::Income => write!(f, "Income"),
            LedgerKind::Outcome => write!(f, "Outcome"),
        }
    }
}

/// One entry in the unified portfolio timeline.
///
/// Automatic net-worth snapshots and manual income/outcome entries share
/// this shape so the dashboard renders them on a single axis.
/// Snapshot entries are appended, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioHistoryItem {
    /// Unique identifier
    pub id: Uuid,

    /// When the entry was recorded
    pub date: NaiveDateTime,

    /// Snapshot, Income, or Outcome
    pub kind: LedgerKind,

    /// Total portfolio value at this point (0 for manual entries)
    pub value: f64,

    /// Cash amount of a manual entry (0 for snapshots)
    pub amount: f64,

    /// Optional free-text notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Optional holding a manual entry relates to
    #[serde(default)]
    pub asset_id: Option<Uuid>,
}

impl PortfolioHistoryItem {
    /// Create a net-worth snapshot entry.
    #[must_use]
    pub fn snapshot(value: f64, date: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            kind: LedgerKind::Snapshot,
            value,
            amount: 0.0,
            notes: None,
            asset_id: None,
        }
    }

    /// Create a manual income/outcome entry.
    #[must_use]
    pub fn entry(
        kind: LedgerKind,
        amount: f64,
        date: NaiveDateTime,
        notes: Option<String>,
        asset_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            kind,
            value: 0.0,
            amount,
            notes,
            asset_id,
        }
    }
}

/// Display-ready timeline row. The history filter formats dates here —
/// the frontend just renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub id: Uuid,

    /// Short date label, e.g. "Jan 5, 14:30"
    pub label: String,

    /// Portfolio value (snapshots) — chart y-axis
    pub value: f64,

    pub kind: LedgerKind,

    /// Cash amount for manual entries
    pub amount: f64,

    pub notes: Option<String>,
}

/// Parsed range descriptor for timeline queries.
///
/// Accepted inputs: the keywords `1W`, `1M`, `3M`, `YTD`, `1Y`, `ALL`,
/// an explicit `start,end` pair of `YYYY-MM-DD` dates (inclusive), or a
/// single `YYYY-MM-DD` date for an exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRange {
    Week,
    Month,
    ThreeMonths,
    YearToDate,
    Year,
    All,
    /// Inclusive explicit window
    Between(NaiveDate, NaiveDate),
    /// Exact calendar-date match
    Exact(NaiveDate),
}

fn parse_date(s: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidDate(s.trim().to_string()))
}

impl FromStr for HistoryRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "1W" => Ok(HistoryRange::Week),
            "1M" => Ok(HistoryRange::Month),
            "3M" => Ok(HistoryRange::ThreeMonths),
            "YTD" => Ok(HistoryRange::YearToDate),
            "1Y" => Ok(HistoryRange::Year),
            "ALL" => Ok(HistoryRange::All),
            other => {
                if let Some((start, end)) = other.split_once(',') {
                    let start = parse_date(start)?;
                    let end = parse_date(end)?;
                    if start > end {
                        return Err(CoreError::ValidationError(format!(
                            "Range start ({start}) must not be after range end ({end})"
                        )));
                    }
                    Ok(HistoryRange::Between(start, end))
                } else {
                    Ok(HistoryRange::Exact(parse_date(other)?))
                }
            }
        }
    }
}
