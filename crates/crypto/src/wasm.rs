//! WASM bindings for header signing and verification.

use wasm_bindgen::prelude::*;

/// Generate a signature header for a string payload.
///
/// `timestamp` is in seconds; fractional values are floored.
#[wasm_bindgen(js_name = generateHeader)]
pub fn generate_header(payload: &str, secret: &str, timestamp: Option<f64>) -> String {
    crate::generate_header(payload, secret, timestamp.map(|t| t.floor() as i64))
}

/// Verify a signature header.
///
/// Returns `true` or throws with the failure message.
#[wasm_bindgen(js_name = verifyHeader)]
pub fn verify_header(
    payload: &str,
    header: &str,
    secret: &str,
    tolerance: Option<f64>,
) -> Result<bool, JsError> {
    let tolerance = tolerance.map_or(crate::DEFAULT_TOLERANCE, |t| t as i64);
    crate::verify_header_with_tolerance(payload, header, secret, tolerance)?;
    Ok(true)
}

/// Canonicalize a JSON document for signing.
#[wasm_bindgen(js_name = generatePayloadString)]
pub fn generate_payload_string(json: &str) -> Result<String, JsError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(crate::generate_payload_string(&value)?)
}
