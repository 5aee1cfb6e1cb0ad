//! Futures REST API endpoint constants.
//!
//! Paths are relative to the versioned base URL.

/// Base URL for the Binance USD-M futures production API.
pub const FUTURES_BASE_URL: &str = "https://fapi.binance.com/fapi/v1";

/// Base URL for the Binance USD-M futures testnet API.
pub const FUTURES_TESTNET_URL: &str = "https://testnet.binancefuture.com/fapi/v1";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Public endpoints (no signature required).
pub mod public {
    /// Test connectivity.
    pub const PING: &str = "ping";

    /// Get the server time.
    pub const SERVER_TIME: &str = "time";

    /// Get candlesticks.
    pub const KLINES: &str = "klines";

    /// Get compressed, aggregate trades.
    pub const AGG_TRADES: &str = "aggTrades";
}

/// Signed endpoints.
pub mod private {
    /// Get account information.
    pub const ACCOUNT: &str = "account";

    /// Get asset balances.
    pub const BALANCE: &str = "balance";

    /// Get position risk.
    pub const POSITION_RISK: &str = "positionRisk";

    /// Place or cancel an order.
    pub const ORDER: &str = "order";

    /// Validate an order without sending it to the matching engine.
    pub const TEST_ORDER: &str = "order/test";

    /// Get open orders.
    pub const OPEN_ORDERS: &str = "openOrders";

    /// Cancel all open orders on a symbol.
    pub const ALL_OPEN_ORDERS: &str = "allOpenOrders";
}
