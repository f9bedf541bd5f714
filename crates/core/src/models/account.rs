use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::asset::Currency;

/// Kind of cash-holding account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Bank savings account
    Savings,
    /// Rekening Dana Nasabah — brokerage settlement account
    #[serde(rename = "RDN")]
    Rdn,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Savings => write!(f, "Savings"),
            AccountType::Rdn => write!(f, "RDN"),
        }
    }
}

/// A cash-holding account. Its balance is never stored — it is always
/// the signed sum of the account's ledger entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSource {
    pub id: Uuid,
    pub name: String,
    pub account_type: AccountType,
    pub currency: Currency,
}

/// Direction of a cash ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CashFlow {
    Income,
    Outcome,
}

impl std::fmt::Display for CashFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CashFlow::Income => write!(f, "Income"),
            CashFlow::Outcome => write!(f, "Outcome"),
        }
    }
}

/// Append-only ledger entry owned by a cash account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashTransaction {
    /// Unique identifier
    pub id: Uuid,

    /// Owning account
    pub source_id: Uuid,

    /// When the money moved
    pub date: NaiveDateTime,

    /// Income or Outcome
    pub flow: CashFlow,

    /// Always non-negative; direction comes from `flow`
    pub amount: f64,

    /// Optional free-text notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Optional label for who performed the transaction
    #[serde(default)]
    pub performer: Option<String>,
}

impl CashTransaction {
    /// Amount with its direction applied: positive for Income, negative for Outcome.
    #[must_use]
    pub fn signed_amount(&self) -> f64 {
        match self.flow {
            CashFlow::Income => self.amount,
            CashFlow::Outcome => -self.amount,
        }
    }
}

/// Draft ledger entry before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCashTransaction {
    pub source_id: Uuid,
    pub date: NaiveDateTime,
    pub flow: CashFlow,
    pub amount: f64,
    pub notes: Option<String>,
    pub performer: Option<String>,
}

impl NewCashTransaction {
    /// Promote the draft into a stored transaction with the given id.
    #[must_use]
    pub fn into_transaction(self, id: Uuid) -> CashTransaction {
        CashTransaction {
            id,
            source_id: self.source_id,
            date: self.date,
            flow: self.flow,
            amount: self.amount,
            notes: self.notes,
            performer: self.performer,
        }
    }
}

/// Balance across all entries: sum of signed amounts.
#[must_use]
pub fn cash_balance(transactions: &[CashTransaction]) -> f64 {
    transactions.iter().map(CashTransaction::signed_amount).sum()
}

/// Balance of one account: sum of signed amounts scoped to `source_id`.
#[must_use]
pub fn account_balance(transactions: &[CashTransaction], source_id: Uuid) -> f64 {
    transactions
        .iter()
        .filter(|t| t.source_id == source_id)
        .map(CashTransaction::signed_amount)
        .sum()
}
