//! Core type definitions used across the MyAlerts workspace.

pub mod coerce;

pub use coerce::IntLike;
