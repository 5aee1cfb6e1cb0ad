//! Example: Order lifecycle on the testnet.
//!
//! Run with: cargo run --example futures_trading
//!
//! Validates a limit order through the test endpoint. Set
//! BINANCE_SEND_ORDER=1 to actually place and then cancel it.

use std::env;
use std::sync::Arc;

use binance_futures_client::OrderSide;
use binance_futures_client::auth::EnvCredentials;
use binance_futures_client::rest::{FuturesRestClient, OrderRequest};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt::init();

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set BINANCE_API_KEY and BINANCE_API_SECRET to run this example.");
            return Ok(());
        }
    };
    let client = FuturesRestClient::builder()
        .use_testnet()
        .credentials(credentials)
        .build();

    let order = OrderRequest::limit(
        "btcusdt",
        OrderSide::Buy,
        Decimal::new(1, 3),
        Decimal::from(20_000),
    )
    .client_order_id("demo-order-1");

    println!("=== Test Order ===");
    let response = client.test_order(&order).await?;
    println!("{}: {}", response.status, response.body);

    if env::var("BINANCE_SEND_ORDER").is_ok() {
        println!("\n=== Place Order (Dangerous) ===");
        let response = client.place_order(&order).await?;
        println!("{}: {}", response.status, response.body);

        println!("\n=== Open Orders ===");
        let response = client.list_open_orders(Some("btcusdt")).await?;
        println!("{}: {}", response.status, response.body);

        println!("\n=== Cancel Order ===");
        let response = client.cancel_order("btcusdt", "demo-order-1").await?;
        match response.api_error() {
            Some(error) if error.is_unknown_order() => println!("order already gone"),
            Some(error) => println!("cancel rejected: {}", error),
            None => println!("{}: {}", response.status, response.body),
        }
    }

    Ok(())
}
