//! Request parameter map and its canonical form encoding.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::ClientError;

/// A single request parameter value.
///
/// Every value is rendered as a string on the wire. `Null` marks a parameter
/// that was declared but has no value; it is dropped by [`Params::finalize`]
/// and never encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Absent value
    Null,
    /// String value
    Str(String),
    /// Signed integer value
    Int(i64),
    /// Unsigned integer value
    UInt(u64),
    /// Decimal value (prices, quantities)
    Decimal(Decimal),
    /// Boolean value, sent as `true` / `false`
    Bool(bool),
}

impl ParamValue {
    /// Whether this value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Null => Ok(()),
            ParamValue::Str(s) => write!(f, "{}", s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::UInt(n) => write!(f, "{}", n),
            ParamValue::Decimal(d) => write!(f, "{}", d),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::UInt(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::UInt(u64::from(value))
    }
}

impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        ParamValue::Decimal(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

/// Parameters of a single request.
///
/// Keys are kept sorted, so encoding is deterministic regardless of the order
/// in which parameters were set. The signer and the transport both go through
/// [`Params::to_query_string`], which keeps the signature bound to the exact
/// bytes that are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: BTreeMap<String, ParamValue>,
}

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, overwriting any existing value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Merge parameters key by key. Later values win.
    pub fn set_many<I, K, V>(&mut self, params: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        for (name, value) in params {
            self.set(name, value);
        }
        self
    }

    /// Get a parameter value.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.get(name)
    }

    /// Whether a parameter is present (null or not).
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove a parameter.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.entries.remove(name)
    }

    /// Number of parameters, nulls included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over parameters in encoding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Drop every null-valued entry.
    pub fn finalize(mut self) -> Self {
        self.entries.retain(|_, value| !value.is_null());
        self
    }

    /// Encode as `application/x-www-form-urlencoded`.
    ///
    /// Null entries are skipped.
    pub fn to_query_string(&self) -> Result<String, ClientError> {
        let pairs: Vec<(&str, String)> = self
            .entries
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(name, value)| (name.as_str(), value.to_string()))
            .collect();
        serde_urlencoded::to_string(&pairs).map_err(|e| ClientError::Encoding(e.to_string()))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        params.set_many(iter);
        params
    }
}

impl IntoIterator for Params {
    type Item = (String, ParamValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
