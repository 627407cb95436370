//! Forum user-record mapping.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use myalerts_core::types::coerce::{self, IntLike};
use myalerts_core::{AppError, AppResult};

/// A forum user row as handed over by the host board.
///
/// The board passes user data around as loosely-typed maps; this newtype
/// keeps that shape while giving the `uid` lookup a typed, fallible path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(pub Map<String, Value>);

impl UserRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// The user ID stored under the `uid` key.
    ///
    /// A record without a `uid` is a caller bug; the error is surfaced,
    /// never defaulted.
    pub fn uid(&self) -> AppResult<u64> {
        let value = self
            .0
            .get("uid")
            .ok_or_else(|| AppError::validation("user record is missing the 'uid' key"))?;
        coerce::u64_from_value(value)
    }

    /// Read an arbitrary entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert an entry, returning the record for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl From<Map<String, Value>> for UserRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A reference to a user: either a bare ID or a full user record.
///
/// Mirrors the two shapes callers hand to alert construction.
#[derive(Debug, Clone, PartialEq)]
pub enum UserRef {
    /// A bare user ID, possibly still in string form.
    Id(IntLike),
    /// A full user record carrying a `uid` entry.
    Record(UserRecord),
}

impl UserRef {
    /// Resolve the reference to the concrete user ID.
    pub fn resolve(&self) -> AppResult<u64> {
        match self {
            Self::Id(id) => id.as_u64(),
            Self::Record(record) => record.uid(),
        }
    }
}

impl From<u64> for UserRef {
    fn from(id: u64) -> Self {
        Self::Id(IntLike::Int(id))
    }
}

impl From<&str> for UserRef {
    fn from(id: &str) -> Self {
        Self::Id(IntLike::from(id))
    }
}

impl From<IntLike> for UserRef {
    fn from(id: IntLike) -> Self {
        Self::Id(id)
    }
}

impl From<UserRecord> for UserRef {
    fn from(record: UserRecord) -> Self {
        Self::Record(record)
    }
}

impl From<Map<String, Value>> for UserRef {
    fn from(map: Map<String, Value>) -> Self {
        Self::Record(UserRecord(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use myalerts_core::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_uid_lookup() {
        let record = UserRecord::new().with("uid", json!(7));
        assert_eq!(record.uid().expect("should resolve"), 7);
    }

    #[test]
    fn test_uid_numeric_string() {
        let record = UserRecord::new().with("uid", json!("42"));
        assert_eq!(record.uid().expect("should coerce"), 42);
    }

    #[test]
    fn test_missing_uid_is_validation_error() {
        let record = UserRecord::new().with("username", json!("sam"));
        let err = record.uid().expect_err("should fail");
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_resolve_id_and_record() {
        assert_eq!(UserRef::from(5u64).resolve().expect("id"), 5);
        let record = UserRecord::new().with("uid", json!(9)).with("username", json!("kay"));
        assert_eq!(UserRef::from(record).resolve().expect("record"), 9);
    }
}
