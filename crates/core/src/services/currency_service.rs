use chrono::{DateTime, Utc};

use crate::errors::CoreError;
use crate::models::asset::Currency;
use crate::models::rate::CachedRate;
use crate::providers::traits::RateProvider;

/// Fallback USD→IDR rate used until a fetch ever succeeds.
pub const DEFAULT_USD_IDR_RATE: f64 = 16_000.0;

/// Single-slot persisted cache for the daily exchange rate.
///
/// A browser build backs this with localStorage; native builds and
/// tests use [`MemoryRateStore`]. Store failures never surface past the
/// currency service.
pub trait RateStore: Send + Sync {
    fn load(&self) -> Result<Option<CachedRate>, CoreError>;
    fn save(&mut self, cached: CachedRate) -> Result<(), CoreError>;
}

/// Rate store with no persistence across processes.
#[derive(Debug, Default)]
pub struct MemoryRateStore {
    slot: Option<CachedRate>,
}

impl MemoryRateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-cached rate (test fixtures).
    #[must_use]
    pub fn with_cached(cached: CachedRate) -> Self {
        Self { slot: Some(cached) }
    }
}

impl RateStore for MemoryRateStore {
    fn load(&self) -> Result<Option<CachedRate>, CoreError> {
        Ok(self.slot)
    }

    fn save(&mut self, cached: CachedRate) -> Result<(), CoreError> {
        self.slot = Some(cached);
        Ok(())
    }
}

/// Owns the process-wide USD→IDR rate.
///
/// Refreshed at most once per calendar day: a stored rate fetched on
/// today's date short-circuits the network call. Every refresh failure
/// (no provider, network error, malformed response) is logged and
/// swallowed — the previous in-memory rate keeps serving conversions,
/// starting from the 16 000 default.
///
/// Mutation goes through `&mut self`, so concurrent writers cannot
/// exist; aggregators read the rate through `&self` between refreshes.
pub struct CurrencyService {
    provider: Option<Box<dyn RateProvider>>,
    store: Box<dyn RateStore>,
    rate: f64,
}

impl CurrencyService {
    pub fn new(provider: Option<Box<dyn RateProvider>>, store: Box<dyn RateStore>) -> Self {
        Self {
            provider,
            store,
            rate: DEFAULT_USD_IDR_RATE,
        }
    }

    /// Current USD→IDR rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Refresh the rate for today. Never fails; see [`Self::refresh_at`].
    pub async fn refresh(&mut self) {
        self.refresh_at(Utc::now()).await;
    }

    /// Refresh the rate as of `now` (injected so tests can pin the
    /// calendar date).
    ///
    /// Cache policy: a stored rate fetched on `now`'s calendar date is
    /// adopted without a network call; anything older triggers exactly
    /// one fetch, whose result is adopted and persisted with the fetch
    /// timestamp.
    pub async fn refresh_at(&mut self, now: DateTime<Utc>) {
        match self.store.load() {
            Ok(Some(cached)) if cached.is_fresh(now) => {
                log::debug!("Using cached exchange rate: {}", cached.rate);
                self.rate = cached.rate;
                return;
            }
            Ok(_) => {}
            Err(e) => log::warn!("Failed to read rate cache: {e}"),
        }

        let Some(provider) = &self.provider else {
            log::warn!(
                "No exchange-rate provider configured; keeping rate {}",
                self.rate
            );
            return;
        };

        match provider.fetch_usd_idr().await {
            Ok(rate) => {
                log::debug!("Fetched exchange rate from {}: {rate}", provider.name());
                self.rate = rate;
                if let Err(e) = self.store.save(CachedRate::new(rate, now)) {
                    log::warn!("Failed to persist rate cache: {e}");
                }
            }
            Err(e) => {
                log::warn!("Exchange rate fetch failed ({e}); keeping rate {}", self.rate);
            }
        }
    }

    /// Convert a monetary amount to IDR. Identity for IDR amounts.
    #[must_use]
    pub fn convert_to_idr(&self, value: f64, currency: Currency) -> f64 {
        match currency {
            Currency::Idr => value,
            Currency::Usd => value * self.rate,
        }
    }
}
