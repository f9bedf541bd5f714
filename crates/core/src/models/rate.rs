use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A persisted USD→IDR rate with its fetch timestamp.
///
/// The rate cache is a single slot: one entry, invalidated as soon as
/// the calendar date of the fetch differs from the current date. Rates
/// move little enough intra-day that one fetch per day is plenty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CachedRate {
    pub rate: f64,
    pub fetched_at: DateTime<Utc>,
}

impl CachedRate {
    #[must_use]
    pub fn new(rate: f64, fetched_at: DateTime<Utc>) -> Self {
        Self { rate, fetched_at }
    }

    /// Fresh iff fetched on the same calendar date as `now`.
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.fetched_at.date_naive() == now.date_naive()
    }

    /// Serialize for a string-valued store slot (the browser build keeps
    /// the cache in localStorage).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self)
            .map_err(|e| CoreError::DataAccess(format!("Failed to serialize rate cache: {e}")))
    }

    /// Parse a store slot written by [`Self::to_json`].
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        serde_json::from_str(raw)
            .map_err(|e| CoreError::DataAccess(format!("Malformed rate cache: {e}")))
    }
}
