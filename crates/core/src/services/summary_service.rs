use crate::models::account::{cash_balance, CashTransaction};
use crate::models::asset::Asset;
use crate::models::summary::{Performer, PortfolioSummary};
use crate::services::currency_service::CurrencyService;

/// Aggregates holdings and the cash ledger into one net-worth snapshot.
///
/// Cash joins the total value but stays out of P&L: an uninvested
/// balance has no acquisition cost to measure against. All monetary
/// output is IDR.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Compute a fresh summary. Synchronous and pure given fetched data;
    /// currency conversion uses the service's current cached rate.
    #[must_use]
    pub fn summarize(
        &self,
        assets: &[Asset],
        transactions: &[CashTransaction],
        fx: &CurrencyService,
    ) -> PortfolioSummary {
        let mut total_value = 0.0;
        let mut total_pnl = 0.0;
        let mut total_cost = 0.0;

        for asset in assets {
            total_value += fx.convert_to_idr(asset.market_value(), asset.currency);
            total_pnl += fx.convert_to_idr(asset.unrealized_pnl(), asset.currency);
            total_cost += fx.convert_to_idr(asset.cost_basis(), asset.currency);
        }

        let cash = cash_balance(transactions);
        total_value += cash;

        let total_pnl_percent = if total_cost == 0.0 {
            0.0
        } else {
            (total_pnl / total_cost) * 100.0
        };

        let best_performer = assets
            .iter()
            .max_by(|a, b| {
                a.pnl_percent()
                    .partial_cmp(&b.pnl_percent())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|a| Performer {
                symbol: a.symbol.clone(),
                pnl_percent: a.pnl_percent(),
            });

        let worst_performer = assets
            .iter()
            .min_by(|a, b| {
                a.pnl_percent()
                    .partial_cmp(&b.pnl_percent())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|a| Performer {
                symbol: a.symbol.clone(),
                pnl_percent: a.pnl_percent(),
            });

        PortfolioSummary {
            total_value,
            total_pnl,
            total_pnl_percent,
            cash_balance: cash,
            best_performer,
            worst_performer,
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
