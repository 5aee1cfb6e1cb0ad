//! Fluent request parameter builder.

use std::sync::Arc;

use crate::auth::{SystemClock, TimestampProvider};
use crate::error::ClientError;
use crate::request::params::{ParamValue, Params};
use crate::request::time_expr::parse_time_expression;

/// Normalize a symbol: trimmed and uppercased, `None` when empty.
pub(crate) fn normalize_symbol(symbol: &str) -> Option<String> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        None
    } else {
        Some(symbol.to_uppercase())
    }
}

/// Builder for request parameters.
///
/// # Example
///
/// ```rust
/// use binance_futures_client::request::{ParamValue, RequestBuilder};
///
/// let params = RequestBuilder::new()
///     .with_symbol("ethusdt")
///     .with_timestamp()
///     .build();
///
/// assert_eq!(params.get("symbol"), Some(&ParamValue::from("ETHUSDT")));
/// assert!(params.contains_key("timestamp"));
/// ```
pub struct RequestBuilder {
    params: Params,
    clock: Arc<dyn TimestampProvider>,
}

impl RequestBuilder {
    /// Create a builder stamping requests with the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock::new()))
    }

    /// Create a builder with a custom clock.
    pub fn with_clock(clock: Arc<dyn TimestampProvider>) -> Self {
        Self {
            params: Params::new(),
            clock,
        }
    }

    /// Set the `symbol`, uppercased. An empty symbol is left out.
    pub fn with_symbol(mut self, symbol: &str) -> Self {
        if let Some(symbol) = normalize_symbol(symbol) {
            self.params.set("symbol", symbol);
        }
        self
    }

    /// Set `startTime` from a time expression.
    ///
    /// See [`parse_time_expression`] for the accepted forms.
    pub fn with_start_time<'a>(
        self,
        time: impl Into<Option<&'a str>>,
    ) -> Result<Self, ClientError> {
        self.with_time("startTime", time.into())
    }

    /// Set `endTime` from a time expression.
    pub fn with_end_time<'a>(
        self,
        time: impl Into<Option<&'a str>>,
    ) -> Result<Self, ClientError> {
        self.with_time("endTime", time.into())
    }

    fn with_time(mut self, name: &str, time: Option<&str>) -> Result<Self, ClientError> {
        let time = time.ok_or_else(|| ClientError::InvalidTimeFormat(String::new()))?;
        let millis = parse_time_expression(time, self.clock.now_millis())?;
        self.params.set(name, millis);
        Ok(self)
    }

    /// Set the row `limit`.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.params.set("limit", limit);
        self
    }

    /// Set the `fromId` pagination cursor.
    pub fn with_from_id(mut self, from_id: impl Into<ParamValue>) -> Self {
        self.params.set("fromId", from_id);
        self
    }

    /// Set the kline `interval` (e.g. `1m`, `1h`). Not validated locally.
    pub fn with_interval(mut self, interval: impl Into<String>) -> Self {
        self.params.set("interval", interval.into());
        self
    }

    /// Stamp the request with the current time as `timestamp`.
    pub fn with_timestamp(mut self) -> Self {
        self.params.set("timestamp", self.clock.now_millis());
        self
    }

    /// Set an arbitrary parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.set(name, value);
        self
    }

    /// Merge a set of parameters. Later values win.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params.set_many(params);
        self
    }

    /// Build the finalized parameter map.
    pub fn build(self) -> Params {
        self.params.finalize()
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("params", &self.params)
            .finish()
    }
}
