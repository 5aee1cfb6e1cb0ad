//! Error types for the Binance futures client library.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for all client operations.
///
/// A non-2xx answer from the exchange is *not* an error at this level: it is
/// returned as an [`ApiResponse`](crate::rest::ApiResponse) and callers inspect
/// the status themselves.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// A time expression could not be turned into epoch milliseconds
    #[error("Invalid time format: {0:?}")]
    InvalidTimeFormat(String),

    /// Signing error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Parameters could not be form-encoded
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: an API secret is required for signed endpoints")]
    MissingCredentials,
}

/// Error object returned by the exchange in the body of a rejected request.
///
/// Binance answers failures with `{"code": -2011, "msg": "Unknown order sent."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Numeric error code (negative for exchange-defined errors)
    pub code: i64,
    /// Human-readable error message
    pub msg: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.msg)
    }
}

impl ApiError {
    /// Create a new API error from code and message.
    pub fn new(code: i64, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }

    /// Extract an error object from a response body, if it is one.
    pub fn from_body(body: &serde_json::Value) -> Option<Self> {
        let code = body.get("code")?.as_i64()?;
        let msg = body.get("msg")?.as_str()?;
        // Some successful endpoints answer `{"code": 200, "msg": "success"}`.
        if code >= 0 {
            return None;
        }
        Some(Self::new(code, msg))
    }

    /// Check if the request timestamp fell outside the receive window.
    pub fn is_timestamp_outside_window(&self) -> bool {
        self.code == error_codes::INVALID_TIMESTAMP
    }

    /// Check if the signature was rejected.
    pub fn is_invalid_signature(&self) -> bool {
        self.code == error_codes::INVALID_SIGNATURE
    }

    /// Check if the API key was rejected.
    pub fn is_rejected_key(&self) -> bool {
        self.code == error_codes::REJECTED_MBX_KEY
    }

    /// Check if the order to cancel or query does not exist.
    pub fn is_unknown_order(&self) -> bool {
        self.code == error_codes::UNKNOWN_ORDER
    }

    /// Check if the request was throttled.
    pub fn is_rate_limit(&self) -> bool {
        self.code == error_codes::TOO_MANY_REQUESTS
    }
}

/// Known Binance futures error codes for pattern matching.
pub mod error_codes {
    /// General server or network errors
    pub const UNKNOWN: i64 = -1000;
    pub const DISCONNECTED: i64 = -1001;
    pub const UNAUTHORIZED: i64 = -1002;
    pub const TOO_MANY_REQUESTS: i64 = -1003;
    pub const INVALID_TIMESTAMP: i64 = -1021;
    pub const INVALID_SIGNATURE: i64 = -1022;

    /// Request errors
    pub const ILLEGAL_CHARS: i64 = -1100;
    pub const MANDATORY_PARAM_EMPTY_OR_MALFORMED: i64 = -1102;
    pub const BAD_SYMBOL: i64 = -1121;
    pub const INVALID_INTERVAL: i64 = -1120;

    /// Processing errors
    pub const NEW_ORDER_REJECTED: i64 = -2010;
    pub const CANCEL_REJECTED: i64 = -2011;
    pub const UNKNOWN_ORDER: i64 = -2013;
    pub const BAD_API_KEY_FMT: i64 = -2014;
    pub const REJECTED_MBX_KEY: i64 = -2015;
    pub const BALANCE_NOT_SUFFICIENT: i64 = -2019;
}
