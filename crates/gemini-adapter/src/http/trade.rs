/*
[INPUT]:  Order parameters and order ids
[OUTPUT]: Order confirmations and cancellation results
[POS]:    HTTP layer - trading endpoints (require signed payload)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use rust_decimal::Decimal;
use tracing::info;

use crate::http::{GeminiClient, Result};
use crate::types::{
    CancelAllResponse, CancelOrderRequest, MarketSymbol, NewOrderRequest, NoParams, Order,
    OrderKind, Side,
};

impl GeminiClient {
    /// Place an `exchange limit` order
    ///
    /// POST /v1/order/new
    pub async fn place_order(
        &self,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
        side: Side,
        kind: OrderKind,
    ) -> Result<Order> {
        let req = NewOrderRequest::new(symbol, quantity, price, side, kind);
        info!(symbol, %quantity, %price, %side, %kind, "placing order");
        self.private_post("/v1/order/new", req).await
    }

    /// Place a limit order priced past the last trade so it fills right away.
    ///
    /// Only btcusd, ethusd and ethbtc are supported; anything else fails
    /// before a request is sent.
    pub async fn place_order_at_market_price(
        &self,
        symbol: &str,
        quantity: Decimal,
        side: Side,
    ) -> Result<Order> {
        let market: MarketSymbol = symbol.parse()?;
        let last = self.last_price(market.as_str()).await?;
        let price = market.aggressive_price(last, side)?;
        self.place_order(market.as_str(), quantity, price, side, OrderKind::Limit)
            .await
    }

    /// Cancel a single order
    ///
    /// POST /v1/order/cancel
    pub async fn cancel_order(&self, order_id: u64) -> Result<Order> {
        info!(order_id, "cancelling order");
        self.private_post("/v1/order/cancel", CancelOrderRequest { order_id })
            .await
    }

    /// Cancel every live order on the account
    ///
    /// POST /v1/order/cancel/all
    pub async fn cancel_all_active_orders(&self) -> Result<CancelAllResponse> {
        info!("cancelling all active orders");
        self.private_post("/v1/order/cancel/all", NoParams {}).await
    }
}
