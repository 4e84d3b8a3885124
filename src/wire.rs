//! The token classes an enum codec reads and writes.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};
use serde_json::{Number, Value};
use smol_str::SmolStr;
use std::fmt;

/// A single token as seen by the codec.
///
/// Enum values are written as either [`WireValue::Null`] or [`WireValue::String`]. The other
/// variants only appear on input, and are always rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireValue {
    Null,
    String(String),
    /// An integer, as written. Kept as text so that no integer is too large to report.
    Integer(SmolStr),
    Other(TokenKind),
}

/// Token kinds other than null, string and integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TokenKind {
    Boolean,
    Float,
    Array,
    Object,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

impl WireValue {
    pub fn string<S: Into<String>>(text: S) -> Self {
        Self::String(text.into())
    }

    pub fn integer<I: Into<i128>>(n: I) -> Self {
        Self::Integer(SmolStr::new(n.into().to_string()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    // Numbers keep their source text, so `-0` and integers beyond 64 bits stay integers.
    fn from_number(n: &Number) -> Self {
        let text = n.to_string();

        if text.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
            Self::Other(TokenKind::Float)
        } else {
            Self::Integer(SmolStr::new(text))
        }
    }
}

impl From<&Value> for WireValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::String(text) => Self::String(text.clone()),
            Value::Number(n) => Self::from_number(n),
            Value::Bool(_) => Self::Other(TokenKind::Boolean),
            Value::Array(_) => Self::Other(TokenKind::Array),
            Value::Object(_) => Self::Other(TokenKind::Object),
        }
    }
}

impl From<Value> for WireValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::String(text),
            other => Self::from(&other),
        }
    }
}

impl Serialize for WireValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::String(text) => serializer.serialize_str(text),
            Self::Integer(_) => Err(ser::Error::custom(
                "cannot write an integer token for an enum value",
            )),
            Self::Other(kind) => Err(ser::Error::custom(format_args!(
                "cannot write a {} token for an enum value",
                kind
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for WireValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `Value` understands serde_json's number representation, which keeps the literal text
        Value::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn from_json_value() {
        assert_eq!(WireValue::from(&json!(null)), WireValue::Null);
        assert_eq!(WireValue::from(&json!("score")), WireValue::string("score"));
        assert_eq!(WireValue::from(&json!(-1)), WireValue::integer(-1));
        assert_eq!(
            WireValue::from(&json!(u64::MAX)),
            WireValue::integer(u64::MAX)
        );
        assert_eq!(
            WireValue::from(&json!(1.5)),
            WireValue::Other(TokenKind::Float)
        );
        assert_eq!(
            WireValue::from(&json!(true)),
            WireValue::Other(TokenKind::Boolean)
        );
        assert_eq!(
            WireValue::from(&json!([1, 2])),
            WireValue::Other(TokenKind::Array)
        );
        assert_eq!(
            WireValue::from(json!({ "a": 1 })),
            WireValue::Other(TokenKind::Object)
        );
    }

    #[test]
    fn deserialize() -> Result {
        assert_eq!(
            serde_json::from_str::<WireValue>("\"reply_broadcast\"")?,
            WireValue::string("reply_broadcast")
        );
        assert_eq!(serde_json::from_str::<WireValue>("null")?, WireValue::Null);
        assert_eq!(serde_json::from_str::<WireValue>("7")?, WireValue::integer(7));
        assert_eq!(
            serde_json::from_str::<WireValue>("-0")?,
            WireValue::Integer("-0".into())
        );
        assert_eq!(
            serde_json::from_str::<WireValue>("18446744073709551616")?,
            WireValue::Integer("18446744073709551616".into())
        );
        assert_eq!(
            serde_json::from_str::<WireValue>("-9223372036854775809")?,
            WireValue::Integer("-9223372036854775809".into())
        );
        assert_eq!(
            serde_json::from_str::<WireValue>("1000000000000000000000000000000000000000000")?,
            WireValue::Integer("1000000000000000000000000000000000000000000".into())
        );
        for float in &["0.5", "-1.0", "1e3", "2E-2"] {
            assert_eq!(
                serde_json::from_str::<WireValue>(float)?,
                WireValue::Other(TokenKind::Float)
            );
        }
        assert_eq!(
            serde_json::from_str::<WireValue>("false")?,
            WireValue::Other(TokenKind::Boolean)
        );
        assert_eq!(
            serde_json::from_str::<WireValue>("[\"a\", {\"b\": [1]}]")?,
            WireValue::Other(TokenKind::Array)
        );
        assert_eq!(
            serde_json::from_str::<WireValue>("{\"a\": [1, 2]}")?,
            WireValue::Other(TokenKind::Object)
        );

        Ok(())
    }

    #[test]
    fn serialize() -> Result {
        assert_eq!(serde_json::to_value(WireValue::Null)?, json!(null));
        assert_eq!(serde_json::to_value(WireValue::string("score"))?, json!("score"));
        assert!(serde_json::to_value(WireValue::Other(TokenKind::Object)).is_err());
        assert!(serde_json::to_value(WireValue::integer(1)).is_err());
        assert!(serde_json::to_string(&WireValue::Integer("-0".into())).is_err());

        Ok(())
    }
}
