//! Shared types for the Binance futures API.

pub mod common;

pub use common::*;
