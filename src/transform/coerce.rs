//! Value coercion. Never fails: anything uninterpretable becomes `None`.

use serde_json::Value;

/// Interpret a JSON number or numeric string as a whole number.
///
/// Floats are accepted only when integral.
#[must_use]
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(integral_f64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral_f64))
        }
        _ => None,
    }
}

/// Interpret a JSON number or numeric string as a finite float
#[must_use]
pub fn coerce_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

/// Non-empty trimmed text. Numbers and booleans are rendered as text.
#[must_use]
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A count of years: a whole number in `0..=i32::MAX`
#[must_use]
pub fn coerce_years(value: &Value) -> Option<u32> {
    coerce_integer(value)
        .filter(|years| (0..=i64::from(i32::MAX)).contains(years))
        .and_then(|years| u32::try_from(years).ok())
}

/// Latitude in degrees, null outside [-90, 90]
#[must_use]
pub fn coerce_latitude(value: &Value) -> Option<f64> {
    coerce_float(value).filter(|lat| (-90.0..=90.0).contains(lat))
}

/// Longitude in degrees, null outside [-180, 180]
#[must_use]
pub fn coerce_longitude(value: &Value) -> Option<f64> {
    coerce_float(value).filter(|lon| (-180.0..=180.0).contains(lon))
}

#[allow(clippy::cast_possible_truncation)]
fn integral_f64(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15).then_some(f as i64)
}
