//! Alert type value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered kind of alert (new reply, quote, private message, ...)
/// as configured on the board.
///
/// Alerts hold a reference to their type for convenience but never own
/// or mutate the catalog of types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertType {
    /// Unique type identifier.
    pub id: u64,
    /// Short code name, e.g. `"rep"` or `"quoted"`.
    pub code: String,
    /// Whether this type is enabled board-wide.
    pub enabled: bool,
    /// Whether individual users may switch this type off.
    pub can_be_user_disabled: bool,
}

impl AlertType {
    /// Create a new enabled alert type.
    pub fn new(id: u64, code: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            enabled: true,
            can_be_user_disabled: true,
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
