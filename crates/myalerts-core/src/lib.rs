//! # myalerts-core
//!
//! Core crate for MyAlerts. Contains the unified error system, the
//! `AppResult` alias, and the loose-input coercion types shared by the
//! rest of the workspace.
//!
//! This crate has **no** internal dependencies on other MyAlerts crates.

pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
