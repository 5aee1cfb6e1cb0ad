use std::sync::Arc;

use binance_futures_client::auth::EnvCredentials;
use binance_futures_client::rest::{FuturesBalance, FuturesRestClient, ServerTime};

fn live_tests_enabled() -> bool {
    std::env::var("BINANCE_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_testnet_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = FuturesRestClient::builder().use_testnet().build();
    let time: ServerTime = client.get_server_time().await?.decode()?;
    assert!(time.server_time > 0);

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_testnet_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = FuturesRestClient::builder()
        .use_testnet()
        .credentials(Arc::new(credentials))
        .build();

    let response = client.get_balance_information().await?;
    assert!(response.is_success(), "balance rejected: {:?}", response.api_error());
    let _balances: Vec<FuturesBalance> = response.decode()?;

    let response = client.list_open_orders(None).await?;
    assert!(response.is_success());

    Ok(())
}
