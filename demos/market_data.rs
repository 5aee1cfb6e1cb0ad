//! Example: Public market data with human-readable time ranges.
//!
//! Run with: cargo run --example market_data

use binance_futures_client::rest::{AggTradesQuery, FuturesRestClient, KlinesQuery, ServerTime};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = FuturesRestClient::new();

    let time: ServerTime = client.get_server_time().await?.decode()?;
    println!("Server time: {}", time.server_time);

    let query = KlinesQuery::new("btcusdt", "1h")
        .start_time("1 day ago")
        .end_time("now");
    let klines = client.get_klines(&query).await?;
    let rows = klines.body.as_array().map_or(0, Vec::len);
    println!("Hourly candles over the last day: {}", rows);

    let trades = client
        .get_agg_trades(&AggTradesQuery::new("ethusdt").limit(5))
        .await?;
    println!("Recent aggregate trades: {}", trades.body);

    Ok(())
}
