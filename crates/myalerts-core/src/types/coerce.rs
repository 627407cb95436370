//! Loose-input integer coercion.
//!
//! Forum callers historically hand IDs over as native integers or as
//! numeric strings pulled straight from request input. Coercion happens
//! once, at the entity boundary, and unrepresentable input is a
//! validation error rather than a silent zero.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::result::AppResult;

/// An integer-like value: a native integer or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntLike {
    /// A native unsigned integer.
    Int(u64),
    /// A decimal string such as `"42"`.
    Text(String),
}

impl IntLike {
    /// Coerce to `u64`.
    ///
    /// Fails with a validation error for non-numeric, negative, or
    /// fractional input.
    pub fn as_u64(&self) -> AppResult<u64> {
        match self {
            Self::Int(n) => Ok(*n),
            Self::Text(s) => parse_u64(s),
        }
    }
}

impl From<u64> for IntLike {
    fn from(n: u64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for IntLike {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

impl From<&str> for IntLike {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for IntLike {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Coerce a JSON value to `u64`.
///
/// Accepts non-negative integer numbers and numeric strings; everything
/// else is a validation error.
pub fn u64_from_value(value: &Value) -> AppResult<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| AppError::validation(format!("expected a non-negative integer, got {n}"))),
        Value::String(s) => parse_u64(s),
        other => Err(AppError::validation(format!(
            "expected an integer-like value, got {other}"
        ))),
    }
}

fn parse_u64(s: &str) -> AppResult<u64> {
    s.trim()
        .parse::<u64>()
        .map_err(|_| AppError::validation(format!("expected an integer, got '{s}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_int_passthrough() {
        assert_eq!(IntLike::from(42u64).as_u64().expect("should coerce"), 42);
    }

    #[test]
    fn test_numeric_string_coerces() {
        assert_eq!(IntLike::from("42").as_u64().expect("should coerce"), 42);
        assert_eq!(IntLike::from(" 7 ").as_u64().expect("should coerce"), 7);
    }

    #[test]
    fn test_non_numeric_string_fails() {
        let err = IntLike::from("abc").as_u64().expect_err("should fail");
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_value_coercion_matrix() {
        assert_eq!(u64_from_value(&json!(9)).expect("should coerce"), 9);
        assert_eq!(u64_from_value(&json!("13")).expect("should coerce"), 13);
        assert!(u64_from_value(&json!(-3)).is_err());
        assert!(u64_from_value(&json!(4.5)).is_err());
        assert!(u64_from_value(&json!(true)).is_err());
        assert!(u64_from_value(&json!(null)).is_err());
    }

    #[test]
    fn test_untagged_deserialize() {
        let from_num: IntLike = serde_json::from_str("42").expect("deserialize");
        let from_str: IntLike = serde_json::from_str("\"42\"").expect("deserialize");
        assert_eq!(from_num.as_u64().expect("coerce"), 42);
        assert_eq!(from_str.as_u64().expect("coerce"), 42);
    }
}
