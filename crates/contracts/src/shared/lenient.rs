//! Deserializers for fields the backend sends either as strings or numbers.
//!
//! Use with `#[serde(default, deserialize_with = "...")]`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// String, number or null → `String` (null becomes empty).
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Number or numeric string → `Option<u32>`; anything else is `None`.
pub fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Like [`opt_u32`] but falls back to zero.
pub fn u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_u32(deserializer)?.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::string")]
        text: String,
        #[serde(default, deserialize_with = "super::opt_u32")]
        number: Option<u32>,
    }

    #[test]
    fn test_mixed_representations() {
        let p: Probe = serde_json::from_str(r#"{"text": 2024, "number": "7"}"#).unwrap();
        assert_eq!(p.text, "2024");
        assert_eq!(p.number, Some(7));

        let p: Probe = serde_json::from_str(r#"{"text": null, "number": "n/a"}"#).unwrap();
        assert_eq!(p.text, "");
        assert_eq!(p.number, None);

        let p: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(p.text, "");
        assert_eq!(p.number, None);
    }
}
