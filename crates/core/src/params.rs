//! Typed lookups into a `serde_json::Value` parameter object.
//!
//! Missing keys and wrong types fall back to the caller's default; these never fail.

use serde_json::Value;

/// Reads an `f64`, accepting JSON integers as well as floats.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}
