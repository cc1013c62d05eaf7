/*
[INPUT]:  Symbol identifiers and ticker field names
[OUTPUT]: Market data (symbol list, ticker values)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use crate::http::{GeminiClient, GeminiError, Result};
use crate::types::Ticker;

impl GeminiClient {
    /// List tradable symbols
    ///
    /// GET /v1/symbols
    pub async fn market_symbols(&self) -> Result<Vec<String>> {
        self.public_get("/v1/symbols").await
    }

    /// Ticker for a symbol
    ///
    /// GET /v1/pubticker/{symbol}
    pub async fn ticker(&self, symbol: &str) -> Result<Ticker> {
        self.public_get(&format!("/v1/pubticker/{symbol}")).await
    }

    /// Single field of the ticker, e.g. `last`, `bid`, `ask`, or `volume`
    ///
    /// GET /v1/pubticker/{symbol}
    pub async fn ticker_info(&self, symbol: &str, field: &str) -> Result<Value> {
        let mut ticker: serde_json::Map<String, Value> =
            self.public_get(&format!("/v1/pubticker/{symbol}")).await?;
        ticker
            .remove(field)
            .ok_or_else(|| GeminiError::MissingField {
                field: field.to_string(),
            })
    }

    /// Last trade price for a symbol
    pub async fn last_price(&self, symbol: &str) -> Result<Decimal> {
        let value = self.ticker_info(symbol, "last").await?;
        decimal_from_value(&value).ok_or_else(|| GeminiError::InvalidResponse(format!(
            "ticker `last` for {symbol} is not a number: {value}"
        )))
    }
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(raw) => Decimal::from_str(raw.trim()).ok(),
        Value::Number(number) => {
            let raw = number.to_string();
            Decimal::from_str(&raw)
                .or_else(|_| Decimal::from_scientific(&raw))
                .ok()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::http::GeminiError;
    use crate::http::testing::mock_client as client;
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ticker_body() -> serde_json::Value {
        json!({
            "bid": "19990.00",
            "ask": "20010.00",
            "volume": {"BTC": "2210.5", "USD": "44210000", "timestamp": 1483018200000u64},
            "last": "20000.00"
        })
    }

    #[tokio::test]
    async fn test_market_symbols() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/symbols"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                "btcusd", "ethbtc", "ethusd"
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let symbols = client(&server)
            .market_symbols()
            .await
            .expect("market_symbols failed");

        assert_eq!(symbols, vec!["btcusd", "ethbtc", "ethusd"]);
    }

    #[tokio::test]
    async fn test_ticker_info_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/pubticker/btcusd"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ticker_body()))
            .mount(&server)
            .await;

        let client = client(&server);
        let last = client.ticker_info("btcusd", "last").await.expect("ticker_info");
        assert_eq!(last, json!("20000.00"));

        let volume = client.ticker_info("btcusd", "volume").await.expect("ticker_info");
        assert_eq!(volume["BTC"], json!("2210.5"));

        let price = client.last_price("btcusd").await.expect("last_price");
        assert_eq!(price, Decimal::new(20000, 0));
    }

    #[tokio::test]
    async fn test_ticker_info_missing_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/pubticker/btcusd"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ticker_body()))
            .mount(&server)
            .await;

        let err = client(&server)
            .ticker_info("btcusd", "open")
            .await
            .unwrap_err();

        assert!(matches!(err, GeminiError::MissingField { field } if field == "open"));
    }

    #[tokio::test]
    async fn test_typed_ticker() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/pubticker/ethusd"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ticker_body()))
            .mount(&server)
            .await;

        let ticker = client(&server).ticker("ethusd").await.expect("ticker");

        assert_eq!(ticker.bid, Some(Decimal::new(1999000, 2)));
        assert_eq!(ticker.ask, Some(Decimal::new(2001000, 2)));
        assert_eq!(ticker.last, Some(Decimal::new(20000, 0)));
    }

    #[tokio::test]
    async fn test_unknown_symbol_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/pubticker/nosuch"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "result": "error",
                "reason": "InvalidSymbol",
                "message": "Supplied value 'nosuch' is not a valid symbol"
            })))
            .mount(&server)
            .await;

        let err = client(&server).ticker("nosuch").await.unwrap_err();

        match err {
            GeminiError::Api { status, reason, .. } => {
                assert_eq!(status, 400);
                assert_eq!(reason, "InvalidSymbol");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }
}
