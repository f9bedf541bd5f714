use async_trait::async_trait;

use crate::errors::CoreError;

/// Trait abstraction for exchange-rate providers.
///
/// The dashboard only ever needs one pair (USD→IDR), so the contract is
/// a single fetch. If the API stops working or changes, we replace only
/// the one implementation — the rest of the codebase is untouched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait RateProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the current USD→IDR exchange rate.
    async fn fetch_usd_idr(&self) -> Result<f64, CoreError>;
}
