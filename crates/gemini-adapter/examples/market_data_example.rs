/*
[INPUT]:  Symbol identifier (e.g., "btcusd")
[OUTPUT]: Market data (symbol list, ticker fields)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use gemini_adapter::*;

/// Example: Query market data (no authentication required)
#[tokio::main]
async fn main() {
    println!("=== Gemini Market Data Example ===\n");

    // Public endpoints ignore the credentials
    let client = match GeminiClient::new("", "", false) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    match client.market_symbols().await {
        Ok(symbols) => println!("✓ Symbols: {:?}", symbols),
        Err(e) => println!("✗ Error: {}", e),
    }

    let symbol = "btcusd";

    println!("\nQuerying last price for {}...", symbol);
    match client.ticker_info(symbol, "last").await {
        Ok(last) => println!("✓ Last: {}", last),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying 24h volume for ethusd...");
    match client.ticker_info("ethusd", "volume").await {
        Ok(volume) => println!("✓ Volume: {}", volume),
        Err(e) => println!("✗ Error: {}", e),
    }
}
