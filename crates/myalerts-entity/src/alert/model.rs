//! Alert entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use myalerts_core::AppResult;
use myalerts_core::types::coerce::IntLike;

use super::alert_type::AlertType;
use super::row::{AlertRow, DATELINE_FORMAT};
use crate::user::{UserRecord, UserRef};

/// A single alert directed at a user.
///
/// Fields are private so the paired-setter invariants hold:
/// [`set_type`](Alert::set_type) keeps `type_id` in sync with the stored
/// [`AlertType`], and [`set_from_user`](Alert::set_from_user) keeps
/// `from_user_id` in sync with the stored sender record. The independent
/// setters (`set_type_id`, `set_from_user_id`) skip that sync on purpose;
/// callers who mix the two paths own the divergence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// 0 until the persistence layer assigns a row ID.
    id: u64,
    /// The recipient.
    user_id: u64,
    /// The sender, 0 when system-generated.
    from_user_id: u64,
    /// Denormalized sender details, if provided.
    from_user: Option<UserRecord>,
    /// ID of the alert's type.
    type_id: u64,
    /// The alert's type, if the full value object was provided.
    alert_type: Option<AlertType>,
    /// The object the alert concerns (post, thread, ...). `None` is
    /// distinct from 0.
    object_id: Option<u64>,
    /// When the alert was created.
    created_at: DateTime<Utc>,
    /// Whether the recipient has yet to acknowledge the alert.
    unread: bool,
    /// Free-form, type-specific metadata.
    extra_details: Map<String, Value>,
}

/// A reference to an alert type: either a bare type ID or the full value
/// object.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    /// A bare type ID, possibly still in string form.
    Id(IntLike),
    /// The full alert type.
    Type(AlertType),
}

impl From<u64> for TypeRef {
    fn from(id: u64) -> Self {
        Self::Id(IntLike::Int(id))
    }
}

impl From<&str> for TypeRef {
    fn from(id: &str) -> Self {
        Self::Id(IntLike::from(id))
    }
}

impl From<IntLike> for TypeRef {
    fn from(id: IntLike) -> Self {
        Self::Id(id)
    }
}

impl From<AlertType> for TypeRef {
    fn from(alert_type: AlertType) -> Self {
        Self::Type(alert_type)
    }
}

impl Alert {
    /// Create an alert with the construction clock injected.
    ///
    /// `user` may be a bare ID or a user record carrying a `uid` entry;
    /// `alert_type` may be a bare type ID or a full [`AlertType`], in
    /// which case `type_id` is copied from it. An omitted `object_id`
    /// stays unset rather than defaulting to 0.
    pub fn new_at(
        user: impl Into<UserRef>,
        alert_type: impl Into<TypeRef>,
        object_id: Option<IntLike>,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        let mut alert = Self {
            id: 0,
            user_id: user.into().resolve()?,
            from_user_id: 0,
            from_user: None,
            type_id: 0,
            alert_type: None,
            object_id: None,
            created_at,
            unread: true,
            extra_details: Map::new(),
        };
        match alert_type.into() {
            TypeRef::Type(t) => alert.set_type(t),
            TypeRef::Id(id) => alert.type_id = id.as_u64()?,
        }
        if let Some(object_id) = object_id {
            alert.object_id = Some(object_id.as_u64()?);
        }
        Ok(alert)
    }

    /// Create an alert stamped with the current time.
    pub fn new(
        user: impl Into<UserRef>,
        alert_type: impl Into<TypeRef>,
        object_id: Option<IntLike>,
    ) -> AppResult<Self> {
        Self::new_at(user, alert_type, object_id, Utc::now())
    }

    /// Create a fully populated alert in one call.
    ///
    /// Equivalent to [`Alert::new`] followed by
    /// [`set_extra_details`](Alert::set_extra_details).
    pub fn make(
        user: impl Into<UserRef>,
        alert_type: impl Into<TypeRef>,
        object_id: Option<IntLike>,
        extra_details: Map<String, Value>,
    ) -> AppResult<Self> {
        let mut alert = Self::new(user, alert_type, object_id)?;
        alert.set_extra_details(extra_details);
        Ok(alert)
    }

    /// The alert's row ID, 0 if not yet persisted.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Set the row ID. Meant to be called by the persistence layer once
    /// the alert has been inserted.
    pub fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    /// Whether the persistence layer has assigned a row ID yet.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// The recipient's user ID.
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Set the recipient's user ID.
    pub fn set_user_id(&mut self, user_id: u64) {
        self.user_id = user_id;
    }

    /// The sender's user ID, 0 when system-generated.
    pub fn from_user_id(&self) -> u64 {
        self.from_user_id
    }

    /// Set the sender's user ID without touching the stored sender record.
    pub fn set_from_user_id(&mut self, from_user_id: u64) {
        self.from_user_id = from_user_id;
    }

    /// The sender's full record, if one was provided.
    pub fn from_user(&self) -> Option<&UserRecord> {
        self.from_user.as_ref()
    }

    /// Store the sender's record and sync `from_user_id` from its `uid`.
    ///
    /// Fails with a validation error when the record lacks a coercible
    /// `uid`, leaving the alert unchanged.
    pub fn set_from_user(&mut self, from_user: UserRecord) -> AppResult<()> {
        let uid = from_user.uid()?;
        self.from_user = Some(from_user);
        self.from_user_id = uid;
        Ok(())
    }

    /// The alert type's ID.
    pub fn type_id(&self) -> u64 {
        self.type_id
    }

    /// Set the type ID without touching the stored [`AlertType`].
    pub fn set_type_id(&mut self, type_id: u64) {
        self.type_id = type_id;
    }

    /// The full alert type, if one was provided.
    pub fn alert_type(&self) -> Option<&AlertType> {
        self.alert_type.as_ref()
    }

    /// Store the full alert type and sync `type_id` from it.
    pub fn set_type(&mut self, alert_type: AlertType) {
        self.type_id = alert_type.id;
        self.alert_type = Some(alert_type);
    }

    /// The linked object's ID, if the alert concerns one.
    pub fn object_id(&self) -> Option<u64> {
        self.object_id
    }

    /// Set or clear the linked object's ID.
    pub fn set_object_id(&mut self, object_id: Option<u64>) {
        self.object_id = object_id;
    }

    /// When the alert was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Override the creation time.
    pub fn set_created_at(&mut self, created_at: DateTime<Utc>) {
        self.created_at = created_at;
    }

    /// Whether the recipient has yet to acknowledge the alert.
    pub fn unread(&self) -> bool {
        self.unread
    }

    /// Set the unread flag.
    pub fn set_unread(&mut self, unread: bool) {
        self.unread = unread;
    }

    /// The alert's type-specific metadata.
    pub fn extra_details(&self) -> &Map<String, Value> {
        &self.extra_details
    }

    /// Replace the type-specific metadata.
    pub fn set_extra_details(&mut self, extra_details: Map<String, Value>) {
        self.extra_details = extra_details;
    }

    /// Flatten the alert into the row shape the storage layer inserts.
    ///
    /// An unset `object_id` flattens to 0 on the wire; `extra_details`
    /// is JSON-encoded into a string column.
    pub fn to_row(&self) -> AppResult<AlertRow> {
        Ok(AlertRow {
            uid: self.user_id,
            from_user_id: self.from_user_id,
            alert_type_id: self.type_id,
            object_id: self.object_id.unwrap_or(0),
            dateline: self.created_at.format(DATELINE_FORMAT).to_string(),
            extra_details: serde_json::to_string(&self.extra_details)?,
            unread: u8::from(self.unread),
        })
    }
}

impl Default for Alert {
    /// The "null" alert: addressed to user 0 with type 0, useful as a
    /// builder base.
    fn default() -> Self {
        Self {
            id: 0,
            user_id: 0,
            from_user_id: 0,
            from_user: None,
            type_id: 0,
            alert_type: None,
            object_id: None,
            created_at: Utc::now(),
            unread: true,
            extra_details: Map::new(),
        }
    }
}
