use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::account::{AccountSource, AccountType, CashFlow, CashTransaction, NewCashTransaction};
use crate::models::asset::{Asset, Currency, NewAsset};
use crate::models::history::{LedgerKind, PortfolioHistoryItem};
use super::traits::{AssetRepository, CashAccountRepository};

/// In-memory holding/timeline store.
///
/// The second conforming implementation next to the live backend: tests
/// exercise the aggregators purely against this one, and it doubles as
/// the offline store.
#[derive(Debug, Default)]
pub struct InMemoryAssetRepository {
    assets: Vec<Asset>,
    history: Vec<PortfolioHistoryItem>,
}

impl InMemoryAssetRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing data (test fixtures, imports).
    #[must_use]
    pub fn with_data(assets: Vec<Asset>, history: Vec<PortfolioHistoryItem>) -> Self {
        Self { assets, history }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AssetRepository for InMemoryAssetRepository {
    async fn assets(&self) -> Result<Vec<Asset>, CoreError> {
        Ok(self.assets.clone())
    }

    async fn add_asset(&mut self, draft: NewAsset) -> Result<Asset, CoreError> {
        let asset = draft.into_asset(Uuid::new_v4());
        self.assets.push(asset.clone());
        Ok(asset)
    }

    async fn update_asset(&mut self, asset: Asset) -> Result<(), CoreError> {
        let slot = self
            .assets
            .iter_mut()
            .find(|a| a.id == asset.id)
            .ok_or(CoreError::AssetNotFound(asset.id))?;
        *slot = asset;
        Ok(())
    }

    async fn delete_asset(&mut self, id: Uuid) -> Result<(), CoreError> {
        let idx = self
            .assets
            .iter()
            .position(|a| a.id == id)
            .ok_or(CoreError::AssetNotFound(id))?;
        self.assets.remove(idx);
        Ok(())
    }

    async fn history(&self) -> Result<Vec<PortfolioHistoryItem>, CoreError> {
        Ok(self.history.clone())
    }

    async fn append_snapshot(&mut self, value: f64, date: NaiveDateTime) -> Result<(), CoreError> {
        self.history.push(PortfolioHistoryItem::snapshot(value, date));
        Ok(())
    }

    async fn add_entry(
        &mut self,
        kind: LedgerKind,
        amount: f64,
        date: NaiveDateTime,
        notes: Option<String>,
        asset_id: Option<Uuid>,
    ) -> Result<PortfolioHistoryItem, CoreError> {
        let item = PortfolioHistoryItem::entry(kind, amount, date, notes, asset_id);
        self.history.push(item.clone());
        Ok(item)
    }

    async fn update_entry(
        &mut self,
        id: Uuid,
        kind: LedgerKind,
        amount: f64,
        notes: Option<String>,
        asset_id: Option<Uuid>,
    ) -> Result<(), CoreError> {
        let item = self
            .history
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(CoreError::EntryNotFound(id))?;
        if item.kind == LedgerKind::Snapshot {
            return Err(CoreError::ValidationError(
                "Snapshot entries are append-only and cannot be updated".into(),
            ));
        }
        item.kind = kind;
        item.amount = amount;
        item.notes = notes;
        item.asset_id = asset_id;
        Ok(())
    }
}

/// In-memory cash account/ledger store.
#[derive(Debug, Default)]
pub struct InMemoryCashAccountRepository {
    accounts: Vec<AccountSource>,
    transactions: Vec<CashTransaction>,
}

impl InMemoryCashAccountRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing data (test fixtures, imports).
    #[must_use]
    pub fn with_data(accounts: Vec<AccountSource>, transactions: Vec<CashTransaction>) -> Self {
        Self {
            accounts,
            transactions,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CashAccountRepository for InMemoryCashAccountRepository {
    async fn accounts(&self) -> Result<Vec<AccountSource>, CoreError> {
        Ok(self.accounts.clone())
    }

    async fn add_account(
        &mut self,
        name: &str,
        account_type: AccountType,
    ) -> Result<AccountSource, CoreError> {
        let account = AccountSource {
            id: Uuid::new_v4(),
            name: name.to_string(),
            account_type,
            currency: Currency::Idr,
        };
        self.accounts.push(account.clone());
        Ok(account)
    }

    async fn delete_account(&mut self, id: Uuid) -> Result<(), CoreError> {
        let idx = self
            .accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or(CoreError::AccountNotFound(id))?;
        self.accounts.remove(idx);
        // Cascade: a deleted account takes its ledger with it
        self.transactions.retain(|t| t.source_id != id);
        Ok(())
    }

    async fn transactions(
        &self,
        source_id: Option<Uuid>,
    ) -> Result<Vec<CashTransaction>, CoreError> {
        let mut transactions: Vec<CashTransaction> = self
            .transactions
            .iter()
            .filter(|t| source_id.map_or(true, |id| t.source_id == id))
            .cloned()
            .collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date)); // newest first
        Ok(transactions)
    }

    async fn add_transaction(
        &mut self,
        draft: NewCashTransaction,
    ) -> Result<CashTransaction, CoreError> {
        if !self.accounts.iter().any(|a| a.id == draft.source_id) {
            return Err(CoreError::AccountNotFound(draft.source_id));
        }
        let transaction = draft.into_transaction(Uuid::new_v4());
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    async fn update_transaction(
        &mut self,
        id: Uuid,
        flow: CashFlow,
        amount: f64,
        notes: Option<String>,
        performer: Option<String>,
    ) -> Result<(), CoreError> {
        let transaction = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CoreError::TransactionNotFound(id))?;
        transaction.flow = flow;
        transaction.amount = amount;
        transaction.notes = notes;
        transaction.performer = performer;
        Ok(())
    }

    async fn delete_transaction(&mut self, id: Uuid) -> Result<(), CoreError> {
        let idx = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(CoreError::TransactionNotFound(id))?;
        self.transactions.remove(idx);
        Ok(())
    }
}
