use std::collections::HashMap;

use crate::models::account::{account_balance, AccountSource, CashTransaction};
use crate::models::asset::Asset;
use crate::models::summary::{Allocation, AllocationBucket};
use crate::services::currency_service::CurrencyService;

/// Groups converted values into allocation buckets with shares and colors.
///
/// Holdings bucket by category; cash accounts bucket by account type,
/// but only while their balance is positive (an overdrawn or empty
/// account contributes no slice). All values are IDR.
pub struct AllocationService;

impl AllocationService {
    pub fn new() -> Self {
        Self
    }

    /// Break down net worth by asset category and cash account type.
    ///
    /// Percentages are shares of the grand total (0 when the total is
    /// 0). The result is sorted descending by absolute value — callers
    /// rely on that ordering.
    #[must_use]
    pub fn allocate(
        &self,
        assets: &[Asset],
        accounts: &[AccountSource],
        transactions: &[CashTransaction],
        fx: &CurrencyService,
    ) -> Vec<Allocation> {
        let mut buckets: HashMap<AllocationBucket, f64> = HashMap::new();
        let mut grand_total = 0.0;

        for asset in assets {
            let value = fx.convert_to_idr(asset.market_value(), asset.currency);
            grand_total += value;
            *buckets
                .entry(AllocationBucket::Category(asset.category))
                .or_insert(0.0) += value;
        }

        for account in accounts {
            let balance = account_balance(transactions, account.id);
            if balance <= 0.0 {
                continue;
            }
            let value = fx.convert_to_idr(balance, account.currency);
            grand_total += value;
            *buckets
                .entry(AllocationBucket::Account(account.account_type))
                .or_insert(0.0) += value;
        }

        let mut allocation: Vec<Allocation> = buckets
            .into_iter()
            .map(|(bucket, value)| {
                let percentage = if grand_total == 0.0 {
                    0.0
                } else {
                    (value / grand_total) * 100.0
                };
                Allocation {
                    bucket,
                    value,
                    percentage,
                    color: bucket.color().to_string(),
                }
            })
            .collect();

        // Largest slice first
        allocation.sort_by(|a, b| {
            b.value
                .abs()
                .partial_cmp(&a.value.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        allocation
    }
}

impl Default for AllocationService {
    fn default() -> Self {
        Self::new()
    }
}
