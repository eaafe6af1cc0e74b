use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::primitives::{parse_price_str, parse_volume_str};

/// Number or numeric string; anything unparseable becomes `0.0`.
pub(super) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_price_str(&s),
        _ => None,
    };
    Ok(parsed.filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// Integer, float (truncated) or integer string; anything else becomes `0`.
pub(super) fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v.trunc() as u64)
        }),
        Value::String(s) => parse_volume_str(&s),
        _ => None,
    };
    Ok(parsed.unwrap_or(0))
}
