//! Futures REST API client.
//!
//! [`FuturesRestClient`] is both the transport (`get`, `post`, `delete`) and
//! the endpoint facade (account, trading and market data methods).

mod account;
mod client;
mod endpoints;
mod market;
mod trading;
mod types;

pub use client::{FuturesRestClient, FuturesRestClientBuilder};
pub use endpoints::*;
pub use types::*;
