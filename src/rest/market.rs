//! Public market data endpoints.

use crate::error::ClientError;
use crate::request::Params;
use crate::rest::FuturesRestClient;
use crate::rest::endpoints::public;
use crate::rest::types::{AggTradesQuery, ApiResponse, KlinesQuery};

impl FuturesRestClient {
    /// Test connectivity. The body is `{}`.
    pub async fn ping(&self) -> Result<ApiResponse, ClientError> {
        self.get(public::PING, Params::new(), false).await
    }

    /// Get the server time.
    ///
    /// Decodes into `ServerTime` on success. Useful to check clock skew before
    /// sending signed requests.
    pub async fn get_server_time(&self) -> Result<ApiResponse, ClientError> {
        self.get(public::SERVER_TIME, Params::new(), false).await
    }

    /// Get candlesticks.
    ///
    /// # Errors
    ///
    /// `InvalidTimeFormat` if a range bound cannot be parsed; nothing is sent.
    pub async fn get_klines(&self, query: &KlinesQuery) -> Result<ApiResponse, ClientError> {
        let mut builder = self
            .request()
            .with_symbol(&query.symbol)
            .with_interval(query.interval.as_str());
        if let Some(start) = &query.start_time {
            builder = builder.with_start_time(start.as_str())?;
        }
        if let Some(end) = &query.end_time {
            builder = builder.with_end_time(end.as_str())?;
        }
        if let Some(limit) = query.limit {
            builder = builder.with_limit(limit);
        }
        self.get(public::KLINES, builder.build(), false).await
    }

    /// Get compressed, aggregate trades.
    ///
    /// # Errors
    ///
    /// `InvalidTimeFormat` if a range bound cannot be parsed; nothing is sent.
    pub async fn get_agg_trades(&self, query: &AggTradesQuery) -> Result<ApiResponse, ClientError> {
        let mut builder = self
            .request()
            .with_symbol(&query.symbol)
            .with_from_id(query.from_id);
        if let Some(start) = &query.start_time {
            builder = builder.with_start_time(start.as_str())?;
        }
        if let Some(end) = &query.end_time {
            builder = builder.with_end_time(end.as_str())?;
        }
        if let Some(limit) = query.limit {
            builder = builder.with_limit(limit);
        }
        self.get(public::AGG_TRADES, builder.build(), false).await
    }
}
