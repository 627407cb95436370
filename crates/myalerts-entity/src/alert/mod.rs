//! Alert domain entities.

pub mod alert_type;
pub mod model;
pub mod row;

pub use alert_type::AlertType;
pub use model::{Alert, TypeRef};
pub use row::AlertRow;
