/*
[INPUT]:  API key and secret from the environment
[OUTPUT]: Balances, open orders, and an example sandbox order
[POS]:    Examples - signed account and trading operations
[UPDATE]: When trading API changes
*/

use gemini_adapter::*;
use rust_decimal::Decimal;

/// Example: Signed operations against the sandbox
///
/// Reads GEMINI_API_KEY and GEMINI_API_SECRET.
#[tokio::main]
async fn main() -> Result<()> {
    let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
    let api_secret = std::env::var("GEMINI_API_SECRET").unwrap_or_default();
    let client = GeminiClient::new(api_key, api_secret, true)?;

    println!("BTC balance: {:?}", client.currency_balance("BTC").await?);
    println!("Notional value (USD): {}", client.notional_account_value().await?);

    // Limit buy of 0.001 BTC at $3000, resting on the book
    let order = client
        .place_order(
            "btcusd",
            Decimal::new(1, 3),
            Decimal::new(3000, 0),
            Side::Buy,
            OrderKind::MakerOrCancel,
        )
        .await?;
    println!("Placed order {} at {:?}", order.order_id, order.price);

    println!("Active orders: {:#?}", client.active_orders().await?);
    println!("Last 5 trades: {:#?}", client.past_trades("btcusd", 5).await?);

    let cancelled = client.cancel_all_active_orders().await?;
    println!("Cancelled: {:?}", cancelled.details.cancelled_orders);
    Ok(())
}
