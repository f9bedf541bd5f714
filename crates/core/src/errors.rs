use thiserror::Error;

/// Unified error type for the entire pundi-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Data access ─────────────────────────────────────────────────
    #[error("Data access error: {0}")]
    DataAccess(String),

    #[error("Asset not found: {0}")]
    AssetNotFound(uuid::Uuid),

    #[error("Account not found: {0}")]
    AccountNotFound(uuid::Uuid),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(uuid::Uuid),

    #[error("History entry not found: {0}")]
    EntryNotFound(uuid::Uuid),

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs to prevent
        // API key leakage. reqwest errors often contain full URLs with secrets.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
