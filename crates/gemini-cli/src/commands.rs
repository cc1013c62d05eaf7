/*
[INPUT]:  Parsed subcommand and a configured Gemini client
[OUTPUT]: JSON value of the API result
[POS]:    Command layer - maps CLI subcommands onto client operations
[UPDATE]: When adding subcommands or client operations
*/

use anyhow::{Context, Result};
use clap::Subcommand;
use gemini_adapter::{GeminiClient, OrderKind, Side};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::info;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List tradable symbols
    Symbols,
    /// Show the ticker for a symbol, or one field of it
    Ticker {
        symbol: String,
        /// last, bid, ask or volume
        #[arg(long)]
        field: Option<String>,
    },
    /// Show every balance in the account
    Balances,
    /// Show the amount held in one currency (e.g. BTC)
    Balance { currency: String },
    /// Account value in USD (USD, BTC and ETH only)
    Notional,
    /// List live orders
    Orders,
    /// List recent trades on a symbol
    Trades {
        symbol: String,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    /// Place an exchange limit order
    Order {
        symbol: String,
        amount: Decimal,
        price: Decimal,
        side: Side,
        /// limit, maker-or-cancel, immediate-or-cancel, fill-or-kill, ...
        #[arg(long, default_value = "limit")]
        kind: OrderKind,
    },
    /// Place a limit order priced to fill at the current market
    MarketOrder {
        symbol: String,
        amount: Decimal,
        side: Side,
    },
    /// Cancel one order by id
    Cancel { order_id: u64 },
    /// Cancel every live order
    CancelAll,
}

impl Command {
    pub fn is_private(&self) -> bool {
        !matches!(
            self,
            Command::Symbols | Command::Ticker { .. }
        )
    }
}

/// Execute `command` and return its result as JSON
pub async fn run(client: &GeminiClient, command: Command) -> Result<Value> {
    let value = match command {
        Command::Symbols => to_json(client.market_symbols().await?)?,
        Command::Ticker {
            symbol,
            field: Some(field),
        } => client
            .ticker_info(&symbol, &field)
            .await
            .with_context(|| format!("ticker field {field} for {symbol}"))?,
        Command::Ticker {
            symbol,
            field: None,
        } => to_json(client.ticker(&symbol).await?)?,
        Command::Balances => to_json(client.available_balances().await?)?,
        Command::Balance { currency } => to_json(client.currency_balance(&currency).await?)?,
        Command::Notional => to_json(client.notional_account_value().await?)?,
        Command::Orders => to_json(client.active_orders().await?)?,
        Command::Trades { symbol, limit } => to_json(client.past_trades(&symbol, limit).await?)?,
        Command::Order {
            symbol,
            amount,
            price,
            side,
            kind,
        } => {
            let order = client
                .place_order(&symbol, amount, price, side, kind)
                .await
                .context("place order")?;
            info!(order_id = %order.order_id, "order accepted");
            to_json(order)?
        }
        Command::MarketOrder {
            symbol,
            amount,
            side,
        } => {
            let order = client
                .place_order_at_market_price(&symbol, amount, side)
                .await
                .context("place market-price order")?;
            info!(order_id = %order.order_id, price = ?order.price, "order accepted");
            to_json(order)?
        }
        Command::Cancel { order_id } => to_json(client.cancel_order(order_id).await?)?,
        Command::CancelAll => to_json(client.cancel_all_active_orders().await?)?,
    };
    Ok(value)
}

fn to_json<T: serde::Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context("serialize result")
}
