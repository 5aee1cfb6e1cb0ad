//! Example: Account overview (positions and non-zero balances).
//!
//! Run with: cargo run --example account_balances
//!
//! Reads BINANCE_API_KEY and BINANCE_API_SECRET (a `.env` file works too).
//! Set BINANCE_PRODUCTION=1 to leave the testnet.

use std::env;
use std::sync::Arc;

use binance_futures_client::auth::EnvCredentials;
use binance_futures_client::rest::{FuturesBalance, FuturesRestClient};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set BINANCE_API_KEY and BINANCE_API_SECRET to run this example.");
            return Ok(());
        }
    };

    let mut builder = FuturesRestClient::builder().credentials(credentials);
    if env::var("BINANCE_PRODUCTION").is_ok() {
        builder = builder.use_production();
    }
    let client = builder.build();

    println!("=== Account ===");
    let account = client.get_account_information().await?;
    println!("code: {}", account.status);
    if let Some(error) = account.api_error() {
        println!("rejected: {}", error);
        return Ok(());
    }
    if let Some(positions) = account.body["positions"].as_array() {
        for position in positions.iter().filter(|p| p["symbol"] == "ETHUSDT") {
            println!("{}", position);
        }
    }

    println!("\n=== Balances ===");
    let response = client.get_balance_information().await?;
    if !response.is_success() {
        println!("code: {}  res: {}", response.status, response.body);
        return Ok(());
    }
    let balances: Vec<FuturesBalance> = response.decode()?;
    for balance in balances.iter().filter(|b| b.balance > Decimal::ZERO) {
        println!("{}: {}", balance.asset, balance.balance);
    }

    Ok(())
}
