//! User-record domain types.

pub mod record;

pub use record::{UserRecord, UserRef};
