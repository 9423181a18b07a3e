//! Lenient readers for theme overrides given as a JSON object.
//!
//! A missing key or a value of the wrong type falls back to the default, so
//! a partial override like `{"accent_chroma": 0.12}` always yields a usable
//! configuration. [`unknown_keys`] lets the caller report typos.

use serde_json::Value;

/// Reads `params[name]` as `f64`, accepting integers too.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params
        .get(name)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Reads `params[name]` as a non-negative integer.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

/// Keys of a JSON object that are not in `known`, sorted.
///
/// Non-objects have no keys.
pub fn unknown_keys(params: &Value, known: &[&str]) -> Vec<String> {
    params
        .as_object()
        .map(|obj| {
            obj.keys()
                .filter(|k| !known.contains(&k.as_str()))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}
