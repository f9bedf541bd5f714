use chrono::{Datelike, Duration, Months, NaiveDate, Utc};

use crate::models::history::{HistoryPoint, HistoryRange, PortfolioHistoryItem};

/// Short display format for timeline labels: "Jan 5, 14:30".
const DISPLAY_FORMAT: &str = "%b %-d, %H:%M";

/// Filters the portfolio timeline by a date range and formats it for
/// display.
///
/// Relative ranges count back from the most recent recorded entry
/// (falling back to today when the timeline is empty), not from the
/// current date: "1M" is the month leading up to the last data point.
pub struct HistoryService;

impl HistoryService {
    pub fn new() -> Self {
        Self
    }

    /// Apply `range` to the timeline.
    ///
    /// Output preserves the stored (ascending) order; each entry's date
    /// is formatted into the short display label.
    #[must_use]
    pub fn filter(&self, items: &[PortfolioHistoryItem], range: &HistoryRange) -> Vec<HistoryPoint> {
        let reference = items
            .iter()
            .map(|item| item.date.date())
            .max()
            .unwrap_or_else(|| Utc::now().date_naive());

        let start = Self::start_boundary(range, reference);

        items
            .iter()
            .filter(|item| {
                let date = item.date.date();
                match range {
                    HistoryRange::All => true,
                    HistoryRange::Between(s, e) => date >= *s && date <= *e,
                    HistoryRange::Exact(d) => date == *d,
                    _ => start.map_or(true, |s| date >= s),
                }
            })
            .map(|item| HistoryPoint {
                id: item.id,
                label: item.date.format(DISPLAY_FORMAT).to_string(),
                value: item.value,
                kind: item.kind,
                amount: item.amount,
                notes: item.notes.clone(),
            })
            .collect()
    }

    /// Inclusive lower bound for relative ranges; None when the range
    /// does not impose one.
    fn start_boundary(range: &HistoryRange, reference: NaiveDate) -> Option<NaiveDate> {
        match range {
            HistoryRange::Week => Some(reference - Duration::days(7)),
            HistoryRange::Month => reference
                .checked_sub_months(Months::new(1))
                .or(Some(reference)),
            HistoryRange::ThreeMonths => reference
                .checked_sub_months(Months::new(3))
                .or(Some(reference)),
            HistoryRange::YearToDate => {
                NaiveDate::from_ymd_opt(reference.year(), 1, 1).or(Some(reference))
            }
            HistoryRange::Year => reference
                .checked_sub_months(Months::new(12))
                .or(Some(reference)),
            HistoryRange::All | HistoryRange::Between(..) | HistoryRange::Exact(_) => None,
        }
    }
}

impl Default for HistoryService {
    fn default() -> Self {
        Self::new()
    }
}
