//! Signed account endpoints.

use crate::error::ClientError;
use crate::rest::FuturesRestClient;
use crate::rest::endpoints::private;
use crate::rest::types::ApiResponse;

impl FuturesRestClient {
    /// Get account information.
    ///
    /// Returns assets, positions and margin state of the futures account.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use binance_futures_client::rest::FuturesRestClient;
    /// use binance_futures_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = FuturesRestClient::builder().credentials(credentials).build();
    ///
    ///     let response = client.get_account_information().await?;
    ///     if let Some(positions) = response.body["positions"].as_array() {
    ///         for position in positions.iter().filter(|p| p["symbol"] == "ETHUSDT") {
    ///             println!("{}", position);
    ///         }
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_account_information(&self) -> Result<ApiResponse, ClientError> {
        let params = self.request().with_timestamp().build();
        self.get(private::ACCOUNT, params, true).await
    }

    /// Get asset balances.
    ///
    /// Decodes into `Vec<FuturesBalance>` on success.
    pub async fn get_balance_information(&self) -> Result<ApiResponse, ClientError> {
        let params = self.request().with_timestamp().build();
        self.get(private::BALANCE, params, true).await
    }

    /// Get position risk for every symbol.
    ///
    /// Decodes into `Vec<PositionRisk>` on success.
    pub async fn get_position_risk(&self) -> Result<ApiResponse, ClientError> {
        let params = self.request().with_timestamp().build();
        self.get(private::POSITION_RISK, params, true).await
    }
}
