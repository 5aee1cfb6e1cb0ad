//! Signed trading endpoints.
//!
//! Order contents are forwarded as given; the exchange alone decides whether
//! a price, quantity or field combination is acceptable.

use crate::error::ClientError;
use crate::rest::FuturesRestClient;
use crate::rest::endpoints::private;
use crate::rest::types::{ApiResponse, OrderRequest};

impl FuturesRestClient {
    /// Place a new order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use binance_futures_client::rest::{FuturesRestClient, OrderRequest};
    /// use binance_futures_client::auth::StaticCredentials;
    /// use binance_futures_client::OrderSide;
    /// use rust_decimal::Decimal;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = FuturesRestClient::builder().credentials(credentials).build();
    ///
    ///     let quantity = Decimal::new(1, 3);
    ///     let order = OrderRequest::limit("btcusdt", OrderSide::Buy, quantity, Decimal::from(25000))
    ///         .client_order_id("my-order-1");
    ///     let response = client.place_order(&order).await?;
    ///     if let Some(error) = response.api_error() {
    ///         eprintln!("rejected: {}", error);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn place_order(&self, order: &OrderRequest) -> Result<ApiResponse, ClientError> {
        let params = self
            .request()
            .with_params(order.to_params())
            .with_timestamp()
            .build();
        self.post(private::ORDER, params, true).await
    }

    /// Validate an order without placing it.
    pub async fn test_order(&self, order: &OrderRequest) -> Result<ApiResponse, ClientError> {
        let params = self
            .request()
            .with_params(order.to_params())
            .with_timestamp()
            .build();
        self.post(private::TEST_ORDER, params, true).await
    }

    /// List open orders, optionally for one symbol.
    ///
    /// A `None` or empty symbol lists open orders on every symbol.
    pub async fn list_open_orders(
        &self,
        symbol: Option<&str>,
    ) -> Result<ApiResponse, ClientError> {
        let params = self
            .request()
            .with_symbol(symbol.unwrap_or_default())
            .with_timestamp()
            .build();
        self.get(private::OPEN_ORDERS, params, true).await
    }

    /// Cancel an order by its client order ID.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The symbol the order was placed on
    /// * `orig_client_order_id` - The client order ID given at placement
    pub async fn cancel_order(
        &self,
        symbol: &str,
        orig_client_order_id: &str,
    ) -> Result<ApiResponse, ClientError> {
        let params = self
            .request()
            .with_symbol(symbol)
            .with_param("origClientOrderId", orig_client_order_id)
            .with_timestamp()
            .build();
        self.delete(private::ORDER, params, true).await
    }

    /// Cancel an order by its exchange order ID.
    pub async fn cancel_order_by_order_id(
        &self,
        symbol: &str,
        order_id: u64,
    ) -> Result<ApiResponse, ClientError> {
        let params = self
            .request()
            .with_symbol(symbol)
            .with_param("orderId", order_id)
            .with_timestamp()
            .build();
        self.delete(private::ORDER, params, true).await
    }

    /// Cancel all open orders on a symbol.
    pub async fn cancel_all_open_orders(&self, symbol: &str) -> Result<ApiResponse, ClientError> {
        let params = self.request().with_symbol(symbol).with_timestamp().build();
        self.delete(private::ALL_OPEN_ORDERS, params, true).await
    }
}
