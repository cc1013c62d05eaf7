/*
[INPUT]:  Endpoint path, nonce, and endpoint-specific parameters
[OUTPUT]: Typed request descriptors serialized into signed payloads
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::Serialize;

use super::enums::{OrderKind, Side};
use crate::auth::Nonce;

/// Order type Gemini accepts for every order placed through this client
pub const EXCHANGE_LIMIT: &str = "exchange limit";

/// JSON object carried in `X-GEMINI-PAYLOAD`.
///
/// `request` and `nonce` are always present; `params` contributes the
/// endpoint-specific fields at the top level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestDescriptor<P = NoParams> {
    pub request: String,
    pub nonce: Nonce,
    #[serde(flatten)]
    pub params: P,
}

impl<P: Serialize> RequestDescriptor<P> {
    pub fn new(request: impl Into<String>, nonce: Nonce, params: P) -> Self {
        Self {
            request: request.into(),
            nonce,
            params,
        }
    }
}

/// Endpoints that take nothing beyond `request` and `nonce`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoParams {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrderRequest {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OrderKind>>,
}

impl NewOrderRequest {
    pub fn new(
        symbol: impl Into<String>,
        amount: Decimal,
        price: Decimal,
        side: Side,
        kind: OrderKind,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            price,
            side,
            order_type: EXCHANGE_LIMIT.to_string(),
            options: (kind != OrderKind::Limit).then(|| vec![kind]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PastTradesRequest {
    pub symbol: String,
    pub limit_trades: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CancelOrderRequest {
    pub order_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_descriptor_has_only_request_and_nonce() {
        let descriptor = RequestDescriptor::new("/v1/balances", Nonce::from(7), NoParams {});
        let value = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(value, json!({"request": "/v1/balances", "nonce": 7}));
    }

    #[test]
    fn test_limit_order_omits_options() {
        let order = NewOrderRequest::new(
            "btcusd",
            "0.001".parse().unwrap(),
            "3000".parse().unwrap(),
            Side::Buy,
            OrderKind::Limit,
        );
        let descriptor = RequestDescriptor::new("/v1/order/new", Nonce::from(1), order);
        let value = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(
            value,
            json!({
                "request": "/v1/order/new",
                "nonce": 1,
                "symbol": "btcusd",
                "amount": "0.001",
                "price": "3000",
                "side": "buy",
                "type": "exchange limit"
            })
        );
    }

    #[test]
    fn test_non_limit_order_carries_option() {
        let order = NewOrderRequest::new(
            "ethusd",
            "0.5".parse().unwrap(),
            "1800.25".parse().unwrap(),
            Side::Sell,
            OrderKind::MakerOrCancel,
        );
        let value = serde_json::to_value(&order).unwrap();

        assert_eq!(value["options"], json!(["maker-or-cancel"]));
        assert_eq!(value["type"], json!("exchange limit"));
        assert_eq!(value["price"], json!("1800.25"));
    }

    #[test]
    fn test_field_order_is_stable() {
        let descriptor = RequestDescriptor::new(
            "/v1/mytrades",
            Nonce::from(99),
            PastTradesRequest {
                symbol: "btcusd".to_string(),
                limit_trades: 5,
            },
        );

        assert_eq!(
            serde_json::to_string(&descriptor).unwrap(),
            r#"{"request":"/v1/mytrades","nonce":99,"symbol":"btcusd","limit_trades":5}"#
        );
    }
}
