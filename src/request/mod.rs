//! Request construction.
//!
//! A request is a flat map of parameters. [`RequestBuilder`] fills one from
//! typed setters and normalizes the inputs: symbols are uppercased, time
//! expressions become epoch milliseconds, and `timestamp` comes from the
//! builder's clock.

mod builder;
mod params;
mod time_expr;

pub use builder::RequestBuilder;
pub(crate) use builder::normalize_symbol;
pub use params::{ParamValue, Params};
pub use time_expr::parse_time_expression;
