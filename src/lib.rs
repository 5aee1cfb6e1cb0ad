//! # Binance Futures Client
//!
//! An async Rust client library for the Binance USD-M futures REST API.
//!
//! ## Features
//!
//! - Signed account, balance, position and order endpoints
//! - HMAC-SHA256 request signing over a canonical form encoding
//! - Fluent request builder with human-readable time ranges
//! - Raw `(status, JSON)` responses, with optional typed views
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use binance_futures_client::rest::FuturesRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FuturesRestClient::new();
//!     let response = client.get_server_time().await?;
//!     println!("{}: {}", response.status, response.body);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod request;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, ClientError};
pub use types::common::{OrderSide, OrderStatus, OrderType, PositionSide, TimeInForce};

/// Result type alias using ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
