use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Active/inactive status as the backend sends it.
///
/// The API is not consistent about the representation: posters and clients
/// use `"1"`/`"0"` strings, roles may come back as booleans or integers.
/// Every form is accepted on input; output is always the `"1"`/`"0"` form the
/// multipart endpoints expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActiveFlag(pub bool);

impl ActiveFlag {
    pub const ACTIVE: ActiveFlag = ActiveFlag(true);
    pub const INACTIVE: ActiveFlag = ActiveFlag(false);

    pub fn is_active(self) -> bool {
        self.0
    }

    pub fn toggled(self) -> Self {
        ActiveFlag(!self.0)
    }

    /// Value used in form submissions and query strings.
    pub fn as_form_value(self) -> &'static str {
        if self.0 {
            "1"
        } else {
            "0"
        }
    }

    /// Human readable state name
    pub fn label(self) -> &'static str {
        if self.0 {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// Parse the value of a `<select>` or a loose backend string.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "active" | "yes" => Some(ActiveFlag(true)),
            "0" | "false" | "inactive" | "no" | "" => Some(ActiveFlag(false)),
            _ => None,
        }
    }
}

impl From<bool> for ActiveFlag {
    fn from(value: bool) -> Self {
        ActiveFlag(value)
    }
}

impl Serialize for ActiveFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_form_value())
    }
}

struct ActiveFlagVisitor;

impl<'de> Visitor<'de> for ActiveFlagVisitor {
    type Value = ActiveFlag;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean, 0/1 or a status string")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ActiveFlag(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ActiveFlag(v != 0))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ActiveFlag(v != 0))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        ActiveFlag::parse(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ActiveFlag(false))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ActiveFlag(false))
    }
}

impl<'de> Deserialize<'de> for ActiveFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ActiveFlagVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_backend_representation() {
        let cases = [
            ("\"1\"", true),
            ("\"0\"", false),
            ("true", true),
            ("false", false),
            ("1", true),
            ("0", false),
            ("\"Active\"", true),
            ("null", false),
        ];
        for (raw, expected) in cases {
            let flag: ActiveFlag = serde_json::from_str(raw).unwrap();
            assert_eq!(flag.is_active(), expected, "input {}", raw);
        }
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<ActiveFlag>("\"maybe\"").is_err());
    }

    #[test]
    fn test_serializes_as_form_value() {
        assert_eq!(serde_json::to_string(&ActiveFlag::ACTIVE).unwrap(), "\"1\"");
        assert_eq!(ActiveFlag::INACTIVE.toggled(), ActiveFlag::ACTIVE);
        assert_eq!(ActiveFlag::ACTIVE.label(), "Active");
    }
}
