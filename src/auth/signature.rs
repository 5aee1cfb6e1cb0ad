//! HMAC-SHA256 signature generation for Binance API authentication.
//!
//! Binance signed endpoints require a `signature` parameter computed as:
//! ```text
//! hex(HMAC-SHA256(api_secret, url_encoded_parameters))
//! ```
//!
//! The digest covers exactly the encoded parameter string that is sent, and
//! the signature is appended after it as the last parameter.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::ClientError;
use crate::request::Params;

type HmacSha256 = Hmac<Sha256>;

/// Sign an already encoded query string.
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA256 digest.
///
/// # Example
///
/// ```rust
/// use binance_futures_client::auth::sign_query;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let signature = sign_query("symbol=BTCUSDT&timestamp=1687690000000", "api_secret")?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_query(query: &str, secret: &str) -> Result<String, ClientError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| ClientError::Auth(format!("Invalid HMAC key: {e}")))?;
    mac.update(query.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Sign a parameter map with the credentials' secret.
///
/// The map is encoded with [`Params::to_query_string`], the same encoder the
/// transport uses for the request itself.
///
/// # Errors
///
/// `MissingCredentials` if the credentials carry no secret.
pub fn sign_params(params: &Params, credentials: &Credentials) -> Result<String, ClientError> {
    let secret = credentials
        .expose_secret()
        .ok_or(ClientError::MissingCredentials)?;
    sign_query(&params.to_query_string()?, secret)
}
