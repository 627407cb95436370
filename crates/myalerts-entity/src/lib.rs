//! # myalerts-entity
//!
//! Domain entity models for MyAlerts. Every struct in this crate
//! represents a forum table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod alert;
pub mod user;
