// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants and Display formatting
// ═══════════════════════════════════════════════════════════════════

use uuid::Uuid;

use pundi_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn data_access() {
        let err = CoreError::DataAccess("connection refused".into());
        assert_eq!(err.to_string(), "Data access error: connection refused");
    }

    #[test]
    fn asset_not_found() {
        let id = Uuid::new_v4();
        let err = CoreError::AssetNotFound(id);
        assert_eq!(err.to_string(), format!("Asset not found: {id}"));
    }

    #[test]
    fn account_not_found() {
        let id = Uuid::new_v4();
        let err = CoreError::AccountNotFound(id);
        assert_eq!(err.to_string(), format!("Account not found: {id}"));
    }

    #[test]
    fn transaction_not_found() {
        let id = Uuid::new_v4();
        let err = CoreError::TransactionNotFound(id);
        assert_eq!(err.to_string(), format!("Transaction not found: {id}"));
    }

    #[test]
    fn entry_not_found() {
        let id = Uuid::new_v4();
        let err = CoreError::EntryNotFound(id);
        assert_eq!(err.to_string(), format!("History entry not found: {id}"));
    }

    #[test]
    fn api_error_names_the_provider() {
        let err = CoreError::Api {
            provider: "CurrencyFreaks".into(),
            message: "No IDR rate in response".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error (CurrencyFreaks): No IDR rate in response"
        );
    }

    #[test]
    fn network() {
        let err = CoreError::Network("dns failure".into());
        assert_eq!(err.to_string(), "Network error: dns failure");
    }

    #[test]
    fn validation() {
        let err = CoreError::ValidationError("quantity must be non-negative".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: quantity must be non-negative"
        );
    }

    #[test]
    fn invalid_date() {
        let err = CoreError::InvalidDate("yesterday".into());
        assert_eq!(
            err.to_string(),
            "Invalid date 'yesterday': expected YYYY-MM-DD"
        );
    }
}

// ── Trait bounds ────────────────────────────────────────────────────

mod bounds {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn core_error_is_send_and_sync() {
        assert_send_sync::<CoreError>();
    }

    #[test]
    fn implements_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(CoreError::Network("unreachable".into()));
        assert!(err.source().is_none());
    }
}
