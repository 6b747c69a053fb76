//! Success-marker gate for action responses.

use serde_json::Value;

use crate::attr_map::truthy;
use crate::error::{Error, Result};

/// Fail with [`Error::Validation`] unless `response` carries a truthy `"ok"`.
pub fn validate_response(response: &Value) -> Result<()> {
    match response.get("ok") {
        Some(ok) if truthy(ok) => Ok(()),
        _ => Err(Error::Validation(response.to_string())),
    }
}

/// Deserialize a raw response body as JSON, then validate it.
///
/// Returns the parsed body so callers can read the rest of the payload.
pub fn load_and_validate(body: impl AsRef<[u8]>) -> Result<Value> {
    let response: Value = serde_json::from_slice(body.as_ref()).map_err(Error::Json)?;
    validate_response(&response)?;
    Ok(response)
}
