/*
[INPUT]:  Signed account queries
[OUTPUT]: User account data (balances, notional value, open orders, trades)
[POS]:    HTTP layer - user data endpoints (require signed payload)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

// ### User Endpoints

use rust_decimal::Decimal;

use crate::http::{GeminiClient, GeminiError, Result};
use crate::types::{Balance, NoParams, Order, PastTradesRequest, Trade};

impl GeminiClient {
    /// Balances of every currency in the account
    ///
    /// POST /v1/balances
    pub async fn available_balances(&self) -> Result<Vec<Balance>> {
        self.private_post("/v1/balances", NoParams {}).await
    }

    /// Amount held in `currency` (e.g. "BTC"), or `None` if the account has
    /// no balance entry for it
    pub async fn currency_balance(&self, currency: &str) -> Result<Option<Decimal>> {
        let balances = self.available_balances().await?;
        Ok(balances
            .into_iter()
            .find(|balance| balance.currency == currency)
            .map(|balance| balance.amount))
    }

    /// Account value in USD.
    ///
    /// Only USD, BTC and ETH balances are counted; BTC and ETH are priced at
    /// the last btcusd / ethusd trade. Any other currency is left out.
    pub async fn notional_account_value(&self) -> Result<Decimal> {
        let balances = self.available_balances().await?;
        let mut total = Decimal::ZERO;

        for balance in &balances {
            let value = match balance.currency.as_str() {
                "USD" => Some(balance.amount),
                "BTC" => balance.amount.checked_mul(self.last_price("btcusd").await?),
                "ETH" => balance.amount.checked_mul(self.last_price("ethusd").await?),
                _ => continue,
            };
            total = value
                .and_then(|value| total.checked_add(value))
                .ok_or_else(|| {
                    GeminiError::InvalidResponse(format!(
                        "{} balance {} overflows the notional value",
                        balance.currency, balance.amount
                    ))
                })?;
        }

        Ok(total)
    }

    /// Orders that are still live
    ///
    /// POST /v1/orders
    pub async fn active_orders(&self) -> Result<Vec<Order>> {
        self.private_post("/v1/orders", NoParams {}).await
    }

    /// Most recent trades on `symbol`, at most `limit` of them
    ///
    /// POST /v1/mytrades
    pub async fn past_trades(&self, symbol: &str, limit: u32) -> Result<Vec<Trade>> {
        let req = PastTradesRequest {
            symbol: symbol.to_string(),
            limit_trades: limit,
        };
        self.private_post("/v1/mytrades", req).await
    }
}
