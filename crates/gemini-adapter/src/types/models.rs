/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::enums::Side;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub currency: String,
    #[serde(with = "serde_helpers::decimal")]
    pub amount: Decimal,
    #[serde(default, with = "serde_helpers::decimal_opt")]
    pub available: Option<Decimal>,
    #[serde(
        default,
        rename = "availableForWithdrawal",
        with = "serde_helpers::decimal_opt"
    )]
    pub available_for_withdrawal: Option<Decimal>,
    #[serde(default, rename = "type")]
    pub account_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    #[serde(default, with = "serde_helpers::decimal_opt")]
    pub bid: Option<Decimal>,
    #[serde(default, with = "serde_helpers::decimal_opt")]
    pub ask: Option<Decimal>,
    #[serde(default, with = "serde_helpers::decimal_opt")]
    pub last: Option<Decimal>,
    /// Rolling volume keyed by currency, plus a `timestamp` entry
    #[serde(default)]
    pub volume: HashMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "serde_helpers::id_string")]
    pub order_id: String,
    #[serde(default)]
    pub client_order_id: Option<String>,
    pub symbol: String,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default, with = "serde_helpers::decimal_opt")]
    pub price: Option<Decimal>,
    #[serde(default, with = "serde_helpers::decimal_opt")]
    pub avg_execution_price: Option<Decimal>,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub timestampms: Option<u64>,
    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub is_cancelled: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub was_forced: bool,
    #[serde(default, with = "serde_helpers::decimal_opt")]
    pub executed_amount: Option<Decimal>,
    #[serde(default, with = "serde_helpers::decimal_opt")]
    pub remaining_amount: Option<Decimal>,
    #[serde(default, with = "serde_helpers::decimal_opt")]
    pub original_amount: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    #[serde(with = "serde_helpers::decimal")]
    pub price: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub amount: Decimal,
    #[serde(default)]
    pub timestampms: Option<u64>,
    #[serde(rename = "type")]
    pub trade_type: String,
    #[serde(default)]
    pub aggressor: bool,
    #[serde(default)]
    pub fee_currency: Option<String>,
    #[serde(default, with = "serde_helpers::decimal_opt")]
    pub fee_amount: Option<Decimal>,
    pub tid: u64,
    #[serde(deserialize_with = "serde_helpers::id_string")]
    pub order_id: String,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub is_auction_fill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelAllDetails {
    #[serde(default, rename = "cancelledOrders")]
    pub cancelled_orders: Vec<u64>,
    #[serde(default, rename = "cancelRejects")]
    pub cancel_rejects: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelAllResponse {
    pub result: String,
    pub details: CancelAllDetails,
}

/// Error body returned by the exchange, e.g. on a bad signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub result: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub message: String,
}

impl ApiErrorBody {
    pub fn is_error(&self) -> bool {
        self.result == "error"
    }
}

mod serde_helpers {
    use super::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::str::FromStr;

    fn parse_decimal<E: serde::de::Error>(value: Value) -> Result<Option<Decimal>, E> {
        match value {
            Value::Null => Ok(None),
            Value::String(raw) if raw.trim().is_empty() => Ok(None),
            Value::String(raw) => Decimal::from_str(raw.trim()).map(Some).map_err(E::custom),
            Value::Number(number) => Decimal::from_str(&number.to_string())
                .or_else(|_| Decimal::from_scientific(&number.to_string()))
                .map(Some)
                .map_err(E::custom),
            _ => Err(E::custom("invalid decimal value")),
        }
    }

    /// Decimals arrive as strings from most endpoints and as numbers from a few
    pub mod decimal {
        use super::*;
        use serde::Serializer;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
        where
            D: Deserializer<'de>,
        {
            parse_decimal::<D::Error>(Value::deserialize(deserializer)?)?
                .ok_or_else(|| serde::de::Error::custom("missing decimal value"))
        }

        pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&value.to_string())
        }
    }

    pub mod decimal_opt {
        use super::*;
        use serde::Serializer;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
        where
            D: Deserializer<'de>,
        {
            parse_decimal(Value::deserialize(deserializer)?)
        }

        pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(value) => serializer.serialize_str(&value.to_string()),
                None => serializer.serialize_none(),
            }
        }
    }

    pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(id) => Ok(id),
            Value::Number(id) => Ok(id.to_string()),
            _ => Err(serde::de::Error::custom("invalid id value")),
        }
    }
}
