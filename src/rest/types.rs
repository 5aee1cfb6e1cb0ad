//! Request and response types for the futures REST API.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ClientError};
use crate::request::{ParamValue, Params, normalize_symbol};
use crate::types::common::*;

/// Raw answer of the exchange: HTTP status and decoded JSON body.
///
/// Non-2xx statuses are not turned into errors. Check [`ApiResponse::is_success`]
/// or [`ApiResponse::api_error`] before interpreting the body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded JSON body (`Null` for an empty body)
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The exchange error object carried by the body, if any.
    pub fn api_error(&self) -> Option<ApiError> {
        ApiError::from_body(&self.body)
    }

    /// Decode the body into a typed view.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(T::deserialize(&self.body)?)
    }

    /// Split into `(status, body)`.
    pub fn into_parts(self) -> (u16, serde_json::Value) {
        (self.status, self.body)
    }
}


// Trading Request Types


/// Request to place (or test) a new order.
///
/// The recognized fields cover the documented order parameters. Anything else
/// goes into [`OrderRequest::extra`]; extra values override recognized fields
/// of the same name. No field combination is validated locally.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    /// The symbol (e.g., "BTCUSDT"), uppercased when sent
    pub symbol: String,
    /// Order side
    pub side: OrderSide,
    /// Order type
    pub order_type: OrderType,
    /// Order quantity
    pub quantity: Option<Decimal>,
    /// Limit price
    pub price: Option<Decimal>,
    /// Time in force
    pub time_in_force: Option<TimeInForce>,
    /// Trigger price for stop and take-profit orders
    pub stop_price: Option<Decimal>,
    /// Reduce-only order
    pub reduce_only: Option<bool>,
    /// Position side (hedge mode)
    pub position_side: Option<PositionSide>,
    /// Client order ID
    pub new_client_order_id: Option<String>,
    /// Close the whole position when triggered
    pub close_position: Option<bool>,
    /// Activation price for trailing stops
    pub activation_price: Option<Decimal>,
    /// Callback rate in percent for trailing stops
    pub callback_rate: Option<Decimal>,
    /// Trigger price source
    pub working_type: Option<WorkingType>,
    /// Price protection for triggered orders
    pub price_protect: Option<bool>,
    /// Response detail level
    pub new_order_resp_type: Option<NewOrderRespType>,
    /// Additional exchange parameters
    pub extra: Params,
}

impl OrderRequest {
    /// Create an order request with only symbol, side and type set.
    pub fn new(symbol: impl Into<String>, side: OrderSide, order_type: OrderType) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type,
            quantity: None,
            price: None,
            time_in_force: None,
            stop_price: None,
            reduce_only: None,
            position_side: None,
            new_client_order_id: None,
            close_position: None,
            activation_price: None,
            callback_rate: None,
            working_type: None,
            price_protect: None,
            new_order_resp_type: None,
            extra: Params::new(),
        }
    }

    /// Create a good-till-canceled limit order request.
    pub fn limit(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self::new(symbol, side, OrderType::Limit)
            .quantity(quantity)
            .price(price)
            .time_in_force(TimeInForce::GTC)
    }

    /// Create a market order request.
    pub fn market(symbol: impl Into<String>, side: OrderSide, quantity: Decimal) -> Self {
        Self::new(symbol, side, OrderType::Market).quantity(quantity)
    }

    /// Create a stop-market order request.
    pub fn stop_market(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: Decimal,
        stop_price: Decimal,
    ) -> Self {
        Self::new(symbol, side, OrderType::StopMarket)
            .quantity(quantity)
            .stop_price(stop_price)
    }

    /// Set the quantity.
    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the limit price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the time in force.
    pub fn time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = Some(time_in_force);
        self
    }

    /// Set the stop price.
    pub fn stop_price(mut self, stop_price: Decimal) -> Self {
        self.stop_price = Some(stop_price);
        self
    }

    /// Set the reduce-only flag.
    pub fn reduce_only(mut self, reduce_only: bool) -> Self {
        self.reduce_only = Some(reduce_only);
        self
    }

    /// Set the position side.
    pub fn position_side(mut self, position_side: PositionSide) -> Self {
        self.position_side = Some(position_side);
        self
    }

    /// Set the client order ID.
    pub fn client_order_id(mut self, id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(id.into());
        self
    }

    /// Set the close-position flag.
    pub fn close_position(mut self, close_position: bool) -> Self {
        self.close_position = Some(close_position);
        self
    }

    /// Set the trailing stop activation price.
    pub fn activation_price(mut self, activation_price: Decimal) -> Self {
        self.activation_price = Some(activation_price);
        self
    }

    /// Set the trailing stop callback rate.
    pub fn callback_rate(mut self, callback_rate: Decimal) -> Self {
        self.callback_rate = Some(callback_rate);
        self
    }

    /// Set the trigger price source.
    pub fn working_type(mut self, working_type: WorkingType) -> Self {
        self.working_type = Some(working_type);
        self
    }

    /// Set price protection.
    pub fn price_protect(mut self, price_protect: bool) -> Self {
        self.price_protect = Some(price_protect);
        self
    }

    /// Set the response detail level.
    pub fn response_type(mut self, resp_type: NewOrderRespType) -> Self {
        self.new_order_resp_type = Some(resp_type);
        self
    }

    /// Set an additional parameter.
    pub fn extra(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.extra.set(name, value);
        self
    }

    /// Flatten into request parameters (without `timestamp`).
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set("symbol", normalize_symbol(&self.symbol))
            .set("side", self.side.to_string())
            .set("type", self.order_type.to_string())
            .set("quantity", self.quantity)
            .set("price", self.price)
            .set("timeInForce", self.time_in_force.map(|t| t.to_string()))
            .set("stopPrice", self.stop_price)
            .set("reduceOnly", self.reduce_only)
            .set("positionSide", self.position_side.map(|p| p.to_string()))
            .set("newClientOrderId", self.new_client_order_id.clone())
            .set("closePosition", self.close_position)
            .set("activationPrice", self.activation_price)
            .set("callbackRate", self.callback_rate)
            .set("workingType", self.working_type.map(|w| w.to_string()))
            .set("priceProtect", self.price_protect)
            .set(
                "newOrderRespType",
                self.new_order_resp_type.map(|r| r.to_string()),
            );
        params.set_many(self.extra.clone());
        params.finalize()
    }
}


// Market Data Request Types


/// Query for candlestick data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KlinesQuery {
    /// The symbol
    pub symbol: String,
    /// Interval code (e.g., "1m", "4h", "1d")
    pub interval: String,
    /// Range start, as a time expression
    pub start_time: Option<String>,
    /// Range end, as a time expression
    pub end_time: Option<String>,
    /// Maximum number of rows
    pub limit: Option<u32>,
}

impl KlinesQuery {
    /// Create a query for the latest candles.
    pub fn new(symbol: impl Into<String>, interval: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            interval: interval.into(),
            start_time: None,
            end_time: None,
            limit: None,
        }
    }

    /// Set the range start.
    pub fn start_time(mut self, time: impl Into<String>) -> Self {
        self.start_time = Some(time.into());
        self
    }

    /// Set the range end.
    pub fn end_time(mut self, time: impl Into<String>) -> Self {
        self.end_time = Some(time.into());
        self
    }

    /// Set the row limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Query for aggregate trades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggTradesQuery {
    /// The symbol
    pub symbol: String,
    /// Aggregate trade ID to start from
    pub from_id: Option<u64>,
    /// Range start, as a time expression
    pub start_time: Option<String>,
    /// Range end, as a time expression
    pub end_time: Option<String>,
    /// Maximum number of rows
    pub limit: Option<u32>,
}

impl AggTradesQuery {
    /// Create a query for the most recent aggregate trades.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            from_id: None,
            start_time: None,
            end_time: None,
            limit: None,
        }
    }

    /// Page from this aggregate trade ID.
    pub fn from_id(mut self, from_id: u64) -> Self {
        self.from_id = Some(from_id);
        self
    }

    /// Set the range start.
    pub fn start_time(mut self, time: impl Into<String>) -> Self {
        self.start_time = Some(time.into());
        self
    }

    /// Set the range end.
    pub fn end_time(mut self, time: impl Into<String>) -> Self {
        self.end_time = Some(time.into());
        self
    }

    /// Set the row limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}


// Response Views


/// Server time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    /// Milliseconds since the UNIX epoch
    pub server_time: u64,
}

/// One entry of the balance endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesBalance {
    /// Account alias
    pub account_alias: Option<String>,
    /// Asset name
    pub asset: String,
    /// Wallet balance
    pub balance: Decimal,
    /// Cross wallet balance
    pub cross_wallet_balance: Option<Decimal>,
    /// Unrealized PnL of crossed positions
    pub cross_un_pnl: Option<Decimal>,
    /// Available balance
    pub available_balance: Option<Decimal>,
    /// Maximum amount for transfer out
    pub max_withdraw_amount: Option<Decimal>,
    /// Whether the asset can be used as margin
    pub margin_available: Option<bool>,
    /// Last update time
    pub update_time: Option<u64>,
}

/// One entry of the position risk endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRisk {
    /// The symbol
    pub symbol: String,
    /// Position amount (negative when short)
    pub position_amt: Decimal,
    /// Average entry price
    pub entry_price: Decimal,
    /// Mark price
    pub mark_price: Decimal,
    /// Unrealized PnL
    pub un_realized_profit: Decimal,
    /// Liquidation price
    pub liquidation_price: Decimal,
    /// Leverage
    pub leverage: Option<Decimal>,
    /// Maximum notional value at the current leverage
    pub max_notional_value: Option<Decimal>,
    /// Margin type ("cross" or "isolated")
    pub margin_type: Option<String>,
    /// Isolated margin
    pub isolated_margin: Option<Decimal>,
    /// Position side
    pub position_side: Option<PositionSide>,
    /// Notional value
    pub notional: Option<Decimal>,
    /// Last update time
    pub update_time: Option<u64>,
}

/// Order state as returned by the order endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    /// Exchange order ID
    pub order_id: u64,
    /// The symbol
    pub symbol: String,
    /// Order status
    pub status: OrderStatus,
    /// Client order ID
    pub client_order_id: String,
    /// Limit price
    pub price: Decimal,
    /// Average fill price
    pub avg_price: Option<Decimal>,
    /// Original quantity
    pub orig_qty: Decimal,
    /// Filled quantity
    pub executed_qty: Decimal,
    /// Filled quote quantity
    pub cum_quote: Option<Decimal>,
    /// Time in force
    pub time_in_force: Option<TimeInForce>,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Reduce-only flag
    pub reduce_only: Option<bool>,
    /// Close-position flag
    pub close_position: Option<bool>,
    /// Order side
    pub side: OrderSide,
    /// Position side
    pub position_side: Option<PositionSide>,
    /// Trigger price
    pub stop_price: Option<Decimal>,
    /// Last update time
    pub update_time: Option<u64>,
}
