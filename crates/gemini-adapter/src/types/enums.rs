/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization and parsing support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::http::GeminiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl FromStr for Side {
    type Err = GeminiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(GeminiError::InvalidArgument(format!(
                "unknown side `{other}`, expected buy or sell"
            ))),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Execution option for an `exchange limit` order.
///
/// `Limit` is a plain resting limit order and sends no `options` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderKind {
    Limit,
    MakerOrCancel,
    ImmediateOrCancel,
    FillOrKill,
    AuctionOnly,
    IndicationOfInterest,
}

impl OrderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderKind::Limit => "limit",
            OrderKind::MakerOrCancel => "maker-or-cancel",
            OrderKind::ImmediateOrCancel => "immediate-or-cancel",
            OrderKind::FillOrKill => "fill-or-kill",
            OrderKind::AuctionOnly => "auction-only",
            OrderKind::IndicationOfInterest => "indication-of-interest",
        }
    }
}

impl FromStr for OrderKind {
    type Err = GeminiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "limit" => OrderKind::Limit,
            "maker-or-cancel" => OrderKind::MakerOrCancel,
            "immediate-or-cancel" => OrderKind::ImmediateOrCancel,
            "fill-or-kill" => OrderKind::FillOrKill,
            "auction-only" => OrderKind::AuctionOnly,
            "indication-of-interest" => OrderKind::IndicationOfInterest,
            other => {
                return Err(GeminiError::InvalidArgument(format!(
                    "unknown order kind `{other}`"
                )));
            }
        };
        Ok(kind)
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbols supported by market-price order placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketSymbol {
    BtcUsd,
    EthUsd,
    EthBtc,
}

impl MarketSymbol {
    pub fn as_str(self) -> &'static str {
        match self {
            MarketSymbol::BtcUsd => "btcusd",
            MarketSymbol::EthUsd => "ethusd",
            MarketSymbol::EthBtc => "ethbtc",
        }
    }

    /// Distance from the last trade price used to make a limit order cross
    /// the book immediately
    pub fn price_offset(self) -> Decimal {
        match self {
            MarketSymbol::BtcUsd => Decimal::new(200, 0),
            MarketSymbol::EthUsd => Decimal::new(30, 0),
            MarketSymbol::EthBtc => Decimal::new(1, 2),
        }
    }

    /// Limit price that crosses the book from `last`, never below zero
    pub fn aggressive_price(self, last: Decimal, side: Side) -> Result<Decimal, GeminiError> {
        let price = match side {
            Side::Buy => last.checked_add(self.price_offset()),
            Side::Sell => last.checked_sub(self.price_offset()),
        }
        .ok_or_else(|| {
            GeminiError::InvalidResponse(format!("last price {last} for {self} is out of range"))
        })?;
        Ok(price.max(Decimal::ZERO))
    }
}

impl FromStr for MarketSymbol {
    type Err = GeminiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "btcusd" => Ok(MarketSymbol::BtcUsd),
            "ethusd" => Ok(MarketSymbol::EthUsd),
            "ethbtc" => Ok(MarketSymbol::EthBtc),
            other => Err(GeminiError::InvalidArgument(format!(
                "unsupported symbol `{other}` for market-price orders"
            ))),
        }
    }
}

impl fmt::Display for MarketSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
