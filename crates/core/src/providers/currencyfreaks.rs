use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use super::traits::RateProvider;

const BASE_URL: &str = "https://api.currencyfreaks.com/v2.0";

/// CurrencyFreaks API provider for the USD→IDR exchange rate.
///
/// - **Requires an API key** (the free tier covers one fetch per day easily).
/// - **Endpoint**: `/rates/latest` with `base` and `symbols` query params.
/// - Rates arrive as decimal *strings* keyed by currency code.
pub struct CurrencyFreaksProvider {
    client: Client,
    api_key: String,
}

impl CurrencyFreaksProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key: api_key.into(),
        }
    }
}

// ── CurrencyFreaks API response types ───────────────────────────────

#[derive(Deserialize)]
struct RatesResponse {
    rates: HashMap<String, String>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RateProvider for CurrencyFreaksProvider {
    fn name(&self) -> &str {
        "CurrencyFreaks"
    }

    async fn fetch_usd_idr(&self) -> Result<f64, CoreError> {
        let url = format!(
            "{BASE_URL}/rates/latest?apikey={}&symbols=IDR&base=USD",
            self.api_key
        );

        // Both failure paths go through From<reqwest::Error>, which
        // redacts the query string (it carries the API key).
        let resp: RatesResponse = self.client.get(&url).send().await?.json().await?;

        let raw = resp.rates.get("IDR").ok_or_else(|| CoreError::Api {
            provider: "CurrencyFreaks".into(),
            message: "No IDR rate in response".into(),
        })?;

        let rate: f64 = raw.parse().map_err(|_| CoreError::Api {
            provider: "CurrencyFreaks".into(),
            message: format!("Unparsable IDR rate: {raw}"),
        })?;

        if !rate.is_finite() || rate <= 0.0 {
            return Err(CoreError::Api {
                provider: "CurrencyFreaks".into(),
                message: format!("Invalid IDR rate: {rate} (must be finite and positive)"),
            });
        }

        Ok(rate)
    }
}
