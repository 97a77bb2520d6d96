//! Canonical string form of structured payloads.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::Result;

/// Largest magnitude below which every integral `f64` is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serialize `payload` into the string that gets signed.
///
/// Pretty-printed JSON with two-space indentation and every `\r` removed,
/// so signer and verifier agree regardless of platform line endings.
/// Object keys keep their insertion order (struct field order, or document
/// order for parsed `serde_json::Value` maps). Integral floats print
/// without a fraction, so `10.0` signs as `10`.
pub fn generate_payload_string<T: Serialize + ?Sized>(payload: &T) -> Result<String> {
    let mut value = serde_json::to_value(payload)?;
    normalize_numbers(&mut value);

    let json = serde_json::to_string_pretty(&value)?;
    Ok(json.replace('\r', ""))
}

fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(number) if number.is_f64() => {
            let float = number.as_f64().unwrap_or(f64::NAN);
            if float.fract() == 0.0 && float.abs() < MAX_SAFE_INTEGER {
                *number = Number::from(float as i64);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(map) => map.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}
