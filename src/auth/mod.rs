//! Authentication module for Binance API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Timestamp generation for the exchange's request expiry window
//! - HMAC-SHA256 signature generation for signed requests

mod credentials;
mod signature;
mod timestamp;

pub use credentials::{
    API_KEY_VAR, API_SECRET_VAR, Credentials, CredentialsProvider, EnvCredentials,
    StaticCredentials,
};
pub use signature::{sign_params, sign_query};
pub use timestamp::{FixedClock, SystemClock, TimestampProvider};
