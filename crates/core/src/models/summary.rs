use serde::{Deserialize, Serialize};

use super::account::AccountType;
use super::asset::AssetCategory;

/// Chart color for buckets without a dedicated entry in the lookup table.
pub const DEFAULT_BUCKET_COLOR: &str = "#cbd5e1";

/// Best or worst performing holding, ranked by P&L percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performer {
    pub symbol: String,
    pub pnl_percent: f64,
}

/// Snapshot of total net worth and unrealized P&L, in IDR.
/// Derived on every fetch, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Total net worth: converted holding values plus the cash balance
    pub total_value: f64,

    /// Unrealized profit/loss across all holdings (cash excluded)
    pub total_pnl: f64,

    /// (total_pnl / total cost basis) × 100; 0 when nothing was invested
    pub total_pnl_percent: f64,

    /// Signed sum of all cash ledger entries
    pub cash_balance: f64,

    /// Holding with the highest P&L percentage, if any holdings exist
    pub best_performer: Option<Performer>,

    /// Holding with the lowest P&L percentage, if any holdings exist
    pub worst_performer: Option<Performer>,
}

/// What a slice of the allocation breakdown represents: a holding
/// category or a cash account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllocationBucket {
    Category(AssetCategory),
    Account(AccountType),
}

impl std::fmt::Display for AllocationBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocationBucket::Category(category) => write!(f, "{category}"),
            AllocationBucket::Account(account_type) => write!(f, "{account_type}"),
        }
    }
}

impl AllocationBucket {
    /// Fixed chart color per known bucket; neutral slate for the rest.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            AllocationBucket::Category(AssetCategory::IndoStock) => "#2dd4bf",
            AllocationBucket::Category(AssetCategory::UsStock) => "#fbbf24",
            AllocationBucket::Category(AssetCategory::Crypto) => "#a855f7",
            AllocationBucket::Account(AccountType::Savings) => "#34d399",
            AllocationBucket::Account(AccountType::Rdn) => "#60a5fa",
            _ => DEFAULT_BUCKET_COLOR,
        }
    }
}

/// One slice of the allocation breakdown, in IDR.
/// Derived on every fetch, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub bucket: AllocationBucket,

    /// Absolute converted value of the bucket
    pub value: f64,

    /// Share of the grand total × 100; 0 when the grand total is 0
    pub percentage: f64,

    /// Hex color for the chart slice
    pub color: String,
}
