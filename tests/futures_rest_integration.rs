use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use wiremock::matchers::{body_string, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use binance_futures_client::auth::{Credentials, FixedClock, sign_query};
use binance_futures_client::error::ClientError;
use binance_futures_client::rest::{
    AggTradesQuery, FuturesBalance, FuturesRestClient, KlinesQuery, OrderInfo, OrderRequest,
    PositionRisk, ServerTime,
};
use binance_futures_client::{OrderSide, OrderType};

const API_KEY: &str = "test_key";
const SECRET: &str = "test_secret";
// 2023-06-25T10:46:40Z
const NOW: u64 = 1_687_690_000_000;

fn base_url(server: &MockServer) -> String {
    format!("{}/fapi/v1", server.uri())
}

fn build_signed_client(server: &MockServer) -> FuturesRestClient {
    FuturesRestClient::builder()
        .base_url(base_url(server))
        .credentials(Arc::new(Credentials::new(API_KEY, SECRET)))
        .timestamp_provider(Arc::new(FixedClock(NOW)))
        .build()
}

fn build_public_client(server: &MockServer) -> FuturesRestClient {
    FuturesRestClient::builder()
        .base_url(base_url(server))
        .timestamp_provider(Arc::new(FixedClock(NOW)))
        .build()
}

fn signed(query: &str) -> String {
    format!("{}&signature={}", query, sign_query(query, SECRET).unwrap())
}

#[tokio::test]
async fn test_get_account_information_signs_request() {
    let server = MockServer::start().await;
    let query = format!("timestamp={NOW}");
    let signature = sign_query(&query, SECRET).unwrap();
    let response = serde_json::json!({
        "totalWalletBalance": "23.72469206",
        "positions": [
            { "symbol": "ETHUSDT", "positionAmt": "0.000" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/fapi/v1/account"))
        .and(query_param("timestamp", NOW.to_string()))
        .and(query_param("signature", signature))
        .and(header("X-MBX-APIKEY", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_signed_client(&server);
    let response = client.get_account_information().await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body["positions"][0]["symbol"], "ETHUSDT");
}

#[tokio::test]
async fn test_signature_is_last_query_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fapi/v1/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = build_signed_client(&server);
    client.get_balance_information().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some(signed(&format!("timestamp={NOW}")).as_str()));
}

#[tokio::test]
async fn test_get_balance_information_decodes() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {
            "accountAlias": "SgsR",
            "asset": "USDT",
            "balance": "122.5",
            "crossWalletBalance": "122.5",
            "crossUnPnl": "0.0",
            "availableBalance": "100.0",
            "maxWithdrawAmount": "100.0",
            "marginAvailable": true,
            "updateTime": 1617939110373u64
        },
        {
            "accountAlias": "SgsR",
            "asset": "BNB",
            "balance": "0.00000000",
            "crossWalletBalance": "0.00000000",
            "crossUnPnl": "0.00000000",
            "availableBalance": "0.00000000",
            "maxWithdrawAmount": "0.00000000",
            "marginAvailable": true,
            "updateTime": 0
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/fapi/v1/balance"))
        .and(header("X-MBX-APIKEY", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_signed_client(&server);
    let balances: Vec<FuturesBalance> = client
        .get_balance_information()
        .await
        .unwrap()
        .decode()
        .unwrap();
    let funded: Vec<_> = balances.iter().filter(|b| b.balance > Decimal::ZERO).collect();
    assert_eq!(funded.len(), 1);
    assert_eq!(funded[0].asset, "USDT");
}

#[tokio::test]
async fn test_get_position_risk() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "entryPrice": "1850.5",
        "marginType": "cross",
        "isAutoAddMargin": "false",
        "isolatedMargin": "0.00000000",
        "leverage": "20",
        "liquidationPrice": "0",
        "markPrice": "1860.0",
        "maxNotionalValue": "250000",
        "positionAmt": "0.5",
        "notional": "930.0",
        "symbol": "ETHUSDT",
        "unRealizedProfit": "4.75",
        "positionSide": "BOTH",
        "updateTime": 1687690000000u64
    }]);

    Mock::given(method("GET"))
        .and(path("/fapi/v1/positionRisk"))
        .and(query_param("timestamp", NOW.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_signed_client(&server);
    let positions: Vec<PositionRisk> = client.get_position_risk().await.unwrap().decode().unwrap();
    assert_eq!(positions[0].symbol, "ETHUSDT");
    assert_eq!(positions[0].un_realized_profit, Decimal::from_str("4.75").unwrap());
}

#[tokio::test]
async fn test_place_order_posts_signed_form_body() {
    let server = MockServer::start().await;
    let expected_body = signed(&format!(
        "newClientOrderId=abc123&price=25000.5&quantity=0.010&side=BUY&symbol=BTCUSDT\
         &timeInForce=GTC&timestamp={NOW}&type=LIMIT"
    ));
    let response = serde_json::json!({
        "clientOrderId": "abc123",
        "cumQty": "0",
        "cumQuote": "0",
        "executedQty": "0",
        "orderId": 4611875134427365377u64,
        "avgPrice": "0.00",
        "origQty": "0.010",
        "price": "25000.5",
        "reduceOnly": false,
        "side": "BUY",
        "positionSide": "BOTH",
        "status": "NEW",
        "stopPrice": "0",
        "closePosition": false,
        "symbol": "BTCUSDT",
        "timeInForce": "GTC",
        "type": "LIMIT",
        "origType": "LIMIT",
        "updateTime": 1687690000001u64
    });

    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(header("X-MBX-APIKEY", API_KEY))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_signed_client(&server);
    let order = OrderRequest::limit(
        "btcusdt",
        OrderSide::Buy,
        Decimal::from_str("0.010").unwrap(),
        Decimal::from_str("25000.5").unwrap(),
    )
    .client_order_id("abc123");

    let response = client.place_order(&order).await.unwrap();
    assert!(response.is_success());
    let info: OrderInfo = response.decode().unwrap();
    assert_eq!(info.client_order_id, "abc123");
    assert_eq!(info.order_type, OrderType::Limit);
}

#[tokio::test]
async fn test_test_order_uses_test_endpoint() {
    let server = MockServer::start().await;
    let expected_body = signed(&format!(
        "quantity=1&side=SELL&symbol=ETHUSDT&timestamp={NOW}&type=MARKET"
    ));

    Mock::given(method("POST"))
        .and(path("/fapi/v1/order/test"))
        .and(body_string(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_signed_client(&server);
    let order = OrderRequest::market("ethusdt", OrderSide::Sell, Decimal::ONE);
    let response = client.test_order(&order).await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, serde_json::json!({}));
}

#[tokio::test]
async fn test_list_open_orders_without_symbol_omits_it() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fapi/v1/openOrders"))
        .and(query_param_is_missing("symbol"))
        .and(query_param("timestamp", NOW.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let client = build_signed_client(&server);
    client.list_open_orders(None).await.unwrap();
    client.list_open_orders(Some("")).await.unwrap();
}

#[tokio::test]
async fn test_list_open_orders_normalizes_symbol() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fapi/v1/openOrders"))
        .and(query_param("symbol", "BTCUSDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_signed_client(&server);
    let response = client.list_open_orders(Some("btcusdt")).await.unwrap();
    assert_eq!(response.body, serde_json::json!([]));
}

#[tokio::test]
async fn test_cancel_order_sends_signed_delete() {
    let server = MockServer::start().await;
    let expected_body = signed(&format!(
        "origClientOrderId=abc123&symbol=BTCUSDT&timestamp={NOW}"
    ));

    Mock::given(method("DELETE"))
        .and(path("/fapi/v1/order"))
        .and(header("X-MBX-APIKEY", API_KEY))
        .and(body_string(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "clientOrderId": "abc123",
            "orderId": 283194212u64,
            "status": "CANCELED"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_signed_client(&server);
    let response = client.cancel_order("BTCUSDT", "abc123").await.unwrap();
    assert_eq!(response.body["status"], "CANCELED");
}

#[tokio::test]
async fn test_cancel_order_by_order_id() {
    let server = MockServer::start().await;
    let expected_body = signed(&format!("orderId=283194212&symbol=BTCUSDT&timestamp={NOW}"));

    Mock::given(method("DELETE"))
        .and(path("/fapi/v1/order"))
        .and(body_string(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_signed_client(&server);
    client.cancel_order_by_order_id("btcusdt", 283_194_212).await.unwrap();
}

#[tokio::test]
async fn test_cancel_all_open_orders() {
    let server = MockServer::start().await;
    let expected_body = signed(&format!("symbol=ETHUSDT&timestamp={NOW}"));

    Mock::given(method("DELETE"))
        .and(path("/fapi/v1/allOpenOrders"))
        .and(body_string(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "msg": "The operation of cancel all open order is done."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_signed_client(&server);
    let response = client.cancel_all_open_orders("ethusdt").await.unwrap();
    assert!(response.is_success());
    assert!(response.api_error().is_none());
}

#[tokio::test]
async fn test_error_status_is_returned_as_data() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": -2011,
            "msg": "Unknown order sent."
        })))
        .mount(&server)
        .await;

    let client = build_signed_client(&server);
    let response = client.cancel_order("BTCUSDT", "missing").await.unwrap();
    assert_eq!(response.status, 400);
    assert!(!response.is_success());
    let error = response.api_error().unwrap();
    assert_eq!(error.code, -2011);
    assert_eq!(error.msg, "Unknown order sent.");
}

#[tokio::test]
async fn test_signed_request_without_credentials_fails_before_sending() {
    let server = MockServer::start().await;
    let client = build_public_client(&server);

    let err = client.get_account_information().await.unwrap_err();
    assert!(matches!(err, ClientError::MissingCredentials));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_key_only_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fapi/v1/time"))
        .and(header("X-MBX-APIKEY", API_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "serverTime": 1687690000000u64 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = FuturesRestClient::builder()
        .base_url(base_url(&server))
        .credentials(Arc::new(Credentials::api_key_only(API_KEY)))
        .build();

    let time: ServerTime = client.get_server_time().await.unwrap().decode().unwrap();
    assert_eq!(time.server_time, NOW);

    let err = client.cancel_all_open_orders("BTCUSDT").await.unwrap_err();
    assert!(matches!(err, ClientError::MissingCredentials));
}

#[tokio::test]
async fn test_public_request_has_no_key_or_signature() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fapi/v1/ping"))
        .and(query_param_is_missing("signature"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    client.ping().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("X-MBX-APIKEY").is_none());
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_get_klines_with_time_range() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fapi/v1/klines"))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("interval", "1h"))
        .and(query_param("startTime", (NOW - 86_400_000).to_string()))
        .and(query_param("endTime", "1687651200000"))
        .and(query_param("limit", "24"))
        .and(query_param_is_missing("signature"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([[
            1687564800000u64,
            "30500.0",
            "30600.0",
            "30400.0",
            "30550.0",
            "1200.5",
            1687568399999u64,
            "36650000.0",
            15000,
            "600.2",
            "18320000.0",
            "0"
        ]])))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let query = KlinesQuery::new("btcusdt", "1h")
        .start_time("1 day ago")
        .end_time("2023-06-25")
        .limit(24);
    let response = client.get_klines(&query).await.unwrap();
    assert_eq!(response.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_klines_invalid_time_is_not_sent() {
    let server = MockServer::start().await;
    let client = build_public_client(&server);

    let query = KlinesQuery::new("BTCUSDT", "1m").start_time("");
    let err = client.get_klines(&query).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidTimeFormat(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_agg_trades_pages_from_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fapi/v1/aggTrades"))
        .and(query_param("symbol", "ETHUSDT"))
        .and(query_param("fromId", "26129"))
        .and(query_param("limit", "2"))
        .and(query_param_is_missing("startTime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "a": 26129,
                "p": "1850.10",
                "q": "4.70",
                "f": 27781,
                "l": 27781,
                "T": 1498793709153u64,
                "m": true
            },
            {
                "a": 26130,
                "p": "1850.11",
                "q": "0.10",
                "f": 27782,
                "l": 27782,
                "T": 1498793709160u64,
                "m": false
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let query = AggTradesQuery::new("ethusdt").from_id(26_129).limit(2);
    let response = client.get_agg_trades(&query).await.unwrap();
    assert_eq!(response.body[1]["a"], 26130);
}

#[tokio::test]
async fn test_non_json_body_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fapi/v1/ping"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    match client.ping().await.unwrap_err() {
        ClientError::InvalidResponse(message) => {
            assert!(message.contains("502"));
            assert!(message.contains("Bad Gateway"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_failure_propagates() {
    let client = FuturesRestClient::builder()
        .base_url("http://127.0.0.1:1/fapi/v1")
        .build();

    let err = client.ping().await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::HttpMiddleware(_) | ClientError::Http(_)
    ));
}
