pub mod errors;
pub mod models;
pub mod providers;
pub mod repository;
pub mod services;

use chrono::{FixedOffset, NaiveDateTime, Utc};
use uuid::Uuid;

use errors::CoreError;
use models::{
    account::{AccountSource, AccountType, CashFlow, CashTransaction, NewCashTransaction},
    asset::{Asset, NewAsset},
    history::{HistoryPoint, HistoryRange, LedgerKind, PortfolioHistoryItem},
    settings::Settings,
    summary::{Allocation, PortfolioSummary},
};
use providers::currencyfreaks::CurrencyFreaksProvider;
use providers::traits::RateProvider;
use repository::traits::{AssetRepository, CashAccountRepository};
use services::{
    allocation_service::AllocationService, currency_service::CurrencyService,
    currency_service::MemoryRateStore, history_service::HistoryService,
    summary_service::SummaryService,
};

/// Why a holding is being removed.
/// A loss-motivated removal records a fresh net-worth snapshot so the
/// drop shows up in the timeline; a plain withdrawal does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteReason {
    Withdraw,
    Loss,
}

/// Main entry point for the Pundi dashboard core.
/// Holds the data stores and all services needed to aggregate them.
#[must_use]
pub struct PortfolioDashboard {
    asset_repo: Box<dyn AssetRepository>,
    cash_repo: Box<dyn CashAccountRepository>,
    currency: CurrencyService,
    summary_service: SummaryService,
    allocation_service: AllocationService,
    history_service: HistoryService,
    settings: Settings,
}

impl PortfolioDashboard {
    /// Build a dashboard over the given stores, wiring the exchange-rate
    /// provider from `settings` (the "currencyfreaks" API key). Without a
    /// key the rate stays at the default until one is configured.
    pub fn new(
        asset_repo: Box<dyn AssetRepository>,
        cash_repo: Box<dyn CashAccountRepository>,
        settings: Settings,
    ) -> Self {
        let provider: Option<Box<dyn RateProvider>> = settings
            .api_keys
            .get("currencyfreaks")
            .map(|key| Box::new(CurrencyFreaksProvider::new(key.clone())) as Box<dyn RateProvider>);
        let currency = CurrencyService::new(provider, Box::new(MemoryRateStore::new()));
        Self::build(asset_repo, cash_repo, currency, settings)
    }

    /// Build with a pre-configured currency service (custom provider,
    /// custom rate store, tests).
    pub fn with_currency_service(
        asset_repo: Box<dyn AssetRepository>,
        cash_repo: Box<dyn CashAccountRepository>,
        currency: CurrencyService,
        settings: Settings,
    ) -> Self {
        Self::build(asset_repo, cash_repo, currency, settings)
    }

    // ── Exchange Rate ───────────────────────────────────────────────

    /// Refresh today's USD→IDR rate. Failures fall back silently to the
    /// last known rate; call this once at startup and on demand after.
    pub async fn refresh_exchange_rate(&mut self) {
        self.currency.refresh().await;
    }

    /// The rate currently applied to USD conversions.
    #[must_use]
    pub fn exchange_rate(&self) -> f64 {
        self.currency.rate()
    }

    // ── Holdings ────────────────────────────────────────────────────

    /// All tracked holdings.
    pub async fn get_assets(&self) -> Result<Vec<Asset>, CoreError> {
        self.asset_repo.assets().await
    }

    /// Add a holding, then record the resulting net worth in the timeline.
    ///
    /// The two steps are not transactional: if the snapshot append
    /// fails, the holding stays and the timeline lags one entry.
    pub async fn add_asset(&mut self, draft: NewAsset) -> Result<Asset, CoreError> {
        Self::validate_position(
            &draft.symbol,
            &draft.name,
            draft.quantity,
            draft.avg_price,
            draft.current_price,
        )?;
        let asset = self.asset_repo.add_asset(draft).await?;
        self.record_snapshot().await?;
        Ok(asset)
    }

    /// Full-replace an existing holding, then record the resulting net
    /// worth in the timeline (same caveat as [`Self::add_asset`]).
    pub async fn update_asset(&mut self, asset: Asset) -> Result<(), CoreError> {
        Self::validate_position(
            &asset.symbol,
            &asset.name,
            asset.quantity,
            asset.avg_price,
            asset.current_price,
        )?;
        self.asset_repo.update_asset(asset).await?;
        self.record_snapshot().await?;
        Ok(())
    }

    /// Remove a holding. Only a loss-motivated removal appends a snapshot.
    pub async fn delete_asset(&mut self, id: Uuid, reason: DeleteReason) -> Result<(), CoreError> {
        self.asset_repo.delete_asset(id).await?;
        if reason == DeleteReason::Loss {
            self.record_snapshot().await?;
        }
        Ok(())
    }

    // ── Aggregations ────────────────────────────────────────────────

    /// Net worth and unrealized P&L across all holdings plus cash.
    /// Recomputed from the stores on every call.
    pub async fn get_portfolio_summary(&self) -> Result<PortfolioSummary, CoreError> {
        let (assets, transactions) =
            futures::try_join!(self.asset_repo.assets(), self.cash_repo.transactions(None))?;
        Ok(self
            .summary_service
            .summarize(&assets, &transactions, &self.currency))
    }

    /// Allocation breakdown by holding category and cash account type,
    /// sorted descending by value.
    pub async fn get_asset_allocation(&self) -> Result<Vec<Allocation>, CoreError> {
        let (assets, accounts, transactions) = futures::try_join!(
            self.asset_repo.assets(),
            self.cash_repo.accounts(),
            self.cash_repo.transactions(None),
        )?;
        Ok(self
            .allocation_service
            .allocate(&assets, &accounts, &transactions, &self.currency))
    }

    /// Timeline filtered by a range descriptor (`1W`, `YTD`,
    /// `"2024-01-01,2024-03-31"`, a single date, ...).
    pub async fn get_portfolio_history(
        &self,
        range: &HistoryRange,
    ) -> Result<Vec<HistoryPoint>, CoreError> {
        let items = self.asset_repo.history().await?;
        Ok(self.history_service.filter(&items, range))
    }

    // ── Manual Ledger Entries ───────────────────────────────────────

    /// Record a manual income/outcome entry on the portfolio timeline.
    pub async fn add_ledger_entry(
        &mut self,
        kind: LedgerKind,
        amount: f64,
        notes: Option<String>,
        asset_id: Option<Uuid>,
    ) -> Result<PortfolioHistoryItem, CoreError> {
        Self::validate_amount(amount)?;
        let date = self.local_now();
        self.asset_repo
            .add_entry(kind, amount, date, notes, asset_id)
            .await
    }

    /// Update a manual timeline entry. Snapshot entries are append-only
    /// and cannot be edited.
    pub async fn update_ledger_entry(
        &mut self,
        id: Uuid,
        kind: LedgerKind,
        amount: f64,
        notes: Option<String>,
        asset_id: Option<Uuid>,
    ) -> Result<(), CoreError> {
        Self::validate_amount(amount)?;
        self.asset_repo
            .update_entry(id, kind, amount, notes, asset_id)
            .await
    }

    // ── Cash Accounts ───────────────────────────────────────────────

    /// All cash accounts.
    pub async fn get_accounts(&self) -> Result<Vec<AccountSource>, CoreError> {
        self.cash_repo.accounts().await
    }

    /// Create a cash account (denominated in IDR).
    pub async fn add_account(
        &mut self,
        name: &str,
        account_type: AccountType,
    ) -> Result<AccountSource, CoreError> {
        if name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Account name must not be empty".into(),
            ));
        }
        self.cash_repo.add_account(name.trim(), account_type).await
    }

    /// Remove a cash account and its ledger.
    pub async fn delete_account(&mut self, id: Uuid) -> Result<(), CoreError> {
        self.cash_repo.delete_account(id).await
    }

    /// Ledger entries, newest first, optionally scoped to one account.
    pub async fn get_cash_transactions(
        &self,
        source_id: Option<Uuid>,
    ) -> Result<Vec<CashTransaction>, CoreError> {
        self.cash_repo.transactions(source_id).await
    }

    /// Record money moving in or out of a cash account.
    pub async fn add_cash_transaction(
        &mut self,
        source_id: Uuid,
        flow: CashFlow,
        amount: f64,
        notes: Option<String>,
        performer: Option<String>,
    ) -> Result<CashTransaction, CoreError> {
        Self::validate_amount(amount)?;
        let draft = NewCashTransaction {
            source_id,
            date: self.local_now(),
            flow,
            amount,
            notes,
            performer,
        };
        self.cash_repo.add_transaction(draft).await
    }

    /// Edit a recorded cash transaction (date and account are fixed).
    pub async fn update_cash_transaction(
        &mut self,
        id: Uuid,
        flow: CashFlow,
        amount: f64,
        notes: Option<String>,
        performer: Option<String>,
    ) -> Result<(), CoreError> {
        Self::validate_amount(amount)?;
        self.cash_repo
            .update_transaction(id, flow, amount, notes, performer)
            .await
    }

    /// Remove a recorded cash transaction.
    pub async fn delete_cash_transaction(&mut self, id: Uuid) -> Result<(), CoreError> {
        self.cash_repo.delete_transaction(id).await
    }

    /// Current balance of one account: Income minus Outcome.
    pub async fn account_balance(&self, id: Uuid) -> Result<f64, CoreError> {
        let transactions = self.cash_repo.transactions(Some(id)).await?;
        Ok(models::account::cash_balance(&transactions))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(
        asset_repo: Box<dyn AssetRepository>,
        cash_repo: Box<dyn CashAccountRepository>,
        currency: CurrencyService,
        settings: Settings,
    ) -> Self {
        Self {
            asset_repo,
            cash_repo,
            currency,
            summary_service: SummaryService::new(),
            allocation_service: AllocationService::new(),
            history_service: HistoryService::new(),
            settings,
        }
    }

    /// Recompute total net worth and append it to the timeline.
    async fn record_snapshot(&mut self) -> Result<(), CoreError> {
        let summary = self.get_portfolio_summary().await?;
        let date = self.local_now();
        self.asset_repo
            .append_snapshot(summary.total_value, date)
            .await
    }

    /// Wall-clock time in the configured display timezone.
    fn local_now(&self) -> NaiveDateTime {
        let seconds = self.settings.utc_offset_hours.clamp(-23, 23) * 3600;
        match FixedOffset::east_opt(seconds) {
            Some(offset) => Utc::now().with_timezone(&offset).naive_local(),
            None => Utc::now().naive_utc(),
        }
    }

    fn validate_position(
        symbol: &str,
        name: &str,
        quantity: f64,
        avg_price: f64,
        current_price: f64,
    ) -> Result<(), CoreError> {
        if symbol.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Asset symbol must not be empty".into(),
            ));
        }
        if name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Asset name must not be empty".into(),
            ));
        }
        for (label, value) in [
            ("quantity", quantity),
            ("average price", avg_price),
            ("current price", current_price),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "Asset {label} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    fn validate_amount(amount: f64) -> Result<(), CoreError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Amount must be finite and non-negative, got {amount}"
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for PortfolioDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioDashboard")
            .field("exchange_rate", &self.currency.rate())
            .field("settings", &self.settings)
            .finish()
    }
}
