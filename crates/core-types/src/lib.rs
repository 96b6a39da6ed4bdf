//! # Depot Core Types
//!
//! The data model shared by every other crate: the three resource kinds, the
//! uniform `Record` shape they are stored as, and the per-resource JSON wire
//! types the HTTP layer speaks.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::ResourceKind;
pub use error::CoreError;
pub use structs::{
    History, NewHistory, NewPlane, NewRecord, NewTrain, Plane, Record, Resource, Train,
};
