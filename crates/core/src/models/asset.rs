use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Currency a monetary amount is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "IDR")]
    Idr,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Usd => write!(f, "USD"),
            Currency::Idr => write!(f, "IDR"),
        }
    }
}

/// Category of a tracked holding.
/// Determines the default currency and the unit the position trades in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    /// IDX-listed equities — trade in lots of 100 shares
    #[serde(rename = "Indo Stock")]
    IndoStock,
    /// US-listed equities
    #[serde(rename = "US Stock")]
    UsStock,
    /// Cryptocurrencies (BTC, ETH, etc.)
    Crypto,
    /// Bank savings treated as a holding
    Savings,
    /// Rekening Dana Nasabah — brokerage cash account
    #[serde(rename = "RDN")]
    Rdn,
    /// Corporate bonds
    Obligasi,
    /// Money-market mutual funds
    #[serde(rename = "Reksadana Pasar Uang")]
    ReksadanaPasarUang,
    /// Retail government bonds (ORI/SR series)
    #[serde(rename = "SBN Retail")]
    SbnRetail,
    /// Fixed-rate government bond series
    #[serde(rename = "Obligasi FR")]
    ObligasiFr,
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetCategory::IndoStock => write!(f, "Indo Stock"),
            AssetCategory::UsStock => write!(f, "US Stock"),
            AssetCategory::Crypto => write!(f, "Crypto"),
            AssetCategory::Savings => write!(f, "Savings"),
            AssetCategory::Rdn => write!(f, "RDN"),
            AssetCategory::Obligasi => write!(f, "Obligasi"),
            AssetCategory::ReksadanaPasarUang => write!(f, "Reksadana Pasar Uang"),
            AssetCategory::SbnRetail => write!(f, "SBN Retail"),
            AssetCategory::ObligasiFr => write!(f, "Obligasi FR"),
        }
    }
}

impl AssetCategory {
    /// Currency new positions in this category are priced in by default.
    #[must_use]
    pub fn default_currency(&self) -> Currency {
        match self {
            AssetCategory::UsStock | AssetCategory::Crypto => Currency::Usd,
            _ => Currency::Idr,
        }
    }

    /// Trading lot size in base units, for categories that trade in lots.
    /// Quantities are always stored in base units; lots are display-level.
    #[must_use]
    pub fn lot_size(&self) -> Option<f64> {
        match self {
            AssetCategory::IndoStock => Some(100.0),
            _ => None,
        }
    }
}

/// A tracked investment position (stock, crypto, bond-like instrument).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier assigned by the store
    pub id: Uuid,

    /// Ticker symbol, uppercased (e.g., "BBCA", "AAPL", "BTC")
    pub symbol: String,

    /// Human-readable name (e.g., "Bank Central Asia")
    pub name: String,

    /// Category — determines default currency and lot semantics
    pub category: AssetCategory,

    /// Held quantity in base units (fractional allowed)
    pub quantity: f64,

    /// Average acquisition price per base unit
    pub avg_price: f64,

    /// Current market price per base unit
    pub current_price: f64,

    /// Currency both prices are denominated in
    pub currency: Currency,
}

impl Asset {
    /// Current market value: quantity × current price, in the asset's currency.
    #[must_use]
    pub fn market_value(&self) -> f64 {
        self.quantity * self.current_price
    }

    /// Unrealized profit/loss against the average acquisition price.
    #[must_use]
    pub fn unrealized_pnl(&self) -> f64 {
        (self.current_price - self.avg_price) * self.quantity
    }

    /// Profit/loss as a percentage of the average price.
    /// Returns 0 when the average price is 0 (nothing to measure against).
    #[must_use]
    pub fn pnl_percent(&self) -> f64 {
        if self.avg_price == 0.0 {
            return 0.0;
        }
        ((self.current_price - self.avg_price) / self.avg_price) * 100.0
    }

    /// Total acquisition cost: quantity × average price, in the asset's currency.
    #[must_use]
    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.avg_price
    }

    /// Quantity expressed in trading lots, for categories that trade in lots.
    #[must_use]
    pub fn quantity_in_lots(&self) -> Option<f64> {
        self.category.lot_size().map(|lot| self.quantity / lot)
    }
}

/// Draft holding before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAsset {
    pub symbol: String,
    pub name: String,
    pub category: AssetCategory,
    pub quantity: f64,
    pub avg_price: f64,
    pub current_price: f64,
    pub currency: Currency,
}

impl NewAsset {
    /// Create a draft priced in the category's default currency.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        category: AssetCategory,
        quantity: f64,
        avg_price: f64,
        current_price: f64,
    ) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            category,
            quantity,
            avg_price,
            current_price,
            currency: category.default_currency(),
        }
    }

    /// Override the currency (e.g., an IDR-priced crypto position).
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Promote the draft into a stored asset with the given id.
    #[must_use]
    pub fn into_asset(self, id: Uuid) -> Asset {
        Asset {
            id,
            symbol: self.symbol,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            avg_price: self.avg_price,
            current_price: self.current_price,
            currency: self.currency,
        }
    }
}
