//! Storage-row representation of an alert.

use serde::{Deserialize, Serialize};

/// Strftime pattern for the row's `dateline` column.
pub const DATELINE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An alert flattened into the exact shape the storage layer inserts.
///
/// The field names are a wire contract: downstream insert/update code
/// addresses columns by these keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRow {
    /// Recipient user ID.
    pub uid: u64,
    /// Sender user ID, 0 when system-generated.
    pub from_user_id: u64,
    /// Alert type ID.
    pub alert_type_id: u64,
    /// Linked object ID, 0 when the alert has no target object.
    pub object_id: u64,
    /// Creation time, `YYYY-MM-DD HH:MM:SS`.
    pub dateline: String,
    /// Type-specific metadata, JSON-encoded.
    pub extra_details: String,
    /// 1 while unread, 0 once read.
    pub unread: u8,
}
