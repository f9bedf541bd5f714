use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::account::{AccountSource, AccountType, CashFlow, CashTransaction, NewCashTransaction};
use crate::models::asset::{Asset, NewAsset};
use crate::models::history::{LedgerKind, PortfolioHistoryItem};

/// Persistence seam for holdings and the portfolio timeline.
///
/// Two conforming implementations exist: the in-memory store (tests and
/// offline use) and whatever live backend the application wires in.
/// Every method fails with `CoreError::DataAccess` on storage faults;
/// errors propagate unchanged to the caller — no retries.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AssetRepository: Send + Sync {
    /// All tracked holdings.
    async fn assets(&self) -> Result<Vec<Asset>, CoreError>;

    /// Store a new holding; the store assigns the id.
    async fn add_asset(&mut self, draft: NewAsset) -> Result<Asset, CoreError>;

    /// Full replace of an existing holding, matched by id.
    async fn update_asset(&mut self, asset: Asset) -> Result<(), CoreError>;

    /// Remove a holding by id.
    async fn delete_asset(&mut self, id: Uuid) -> Result<(), CoreError>;

    /// Full portfolio timeline in stored (ascending insertion) order.
    async fn history(&self) -> Result<Vec<PortfolioHistoryItem>, CoreError>;

    /// Append a net-worth snapshot. Always inserts a fresh entry so
    /// intra-day changes are all kept.
    async fn append_snapshot(&mut self, value: f64, date: NaiveDateTime) -> Result<(), CoreError>;

    /// Append a manual income/outcome entry to the timeline.
    async fn add_entry(
        &mut self,
        kind: LedgerKind,
        amount: f64,
        date: NaiveDateTime,
        notes: Option<String>,
        asset_id: Option<Uuid>,
    ) -> Result<PortfolioHistoryItem, CoreError>;

    /// Update a manual timeline entry in place. Snapshot entries are
    /// append-only and must be rejected.
    async fn update_entry(
        &mut self,
        id: Uuid,
        kind: LedgerKind,
        amount: f64,
        notes: Option<String>,
        asset_id: Option<Uuid>,
    ) -> Result<(), CoreError>;
}

/// Persistence seam for cash accounts and their ledgers.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CashAccountRepository: Send + Sync {
    /// All cash accounts, oldest first.
    async fn accounts(&self) -> Result<Vec<AccountSource>, CoreError>;

    /// Create an account. New accounts are denominated in IDR.
    async fn add_account(
        &mut self,
        name: &str,
        account_type: AccountType,
    ) -> Result<AccountSource, CoreError>;

    /// Remove an account and its ledger entries.
    async fn delete_account(&mut self, id: Uuid) -> Result<(), CoreError>;

    /// Ledger entries, newest first, optionally scoped to one account.
    async fn transactions(
        &self,
        source_id: Option<Uuid>,
    ) -> Result<Vec<CashTransaction>, CoreError>;

    /// Append a ledger entry; the store assigns the id.
    async fn add_transaction(
        &mut self,
        draft: NewCashTransaction,
    ) -> Result<CashTransaction, CoreError>;

    /// Update a ledger entry in place (date and owning account are fixed).
    async fn update_transaction(
        &mut self,
        id: Uuid,
        flow: CashFlow,
        amount: f64,
        notes: Option<String>,
        performer: Option<String>,
    ) -> Result<(), CoreError>;

    /// Remove a ledger entry by id.
    async fn delete_transaction(&mut self, id: Uuid) -> Result<(), CoreError>;
}
