//! Diagram models
//!
//! Core data structures held by the entity graph store. All identifiers are opaque
//! strings; wire names (camelCase) are the round-trip contract with the external
//! persistence layer.

pub mod canvas;
pub mod datasource;
pub mod entity;
pub mod enums;
pub mod index;
pub mod relationship;
pub mod snapshot;

pub use canvas::{CanvasState, ZOOM_MAX, ZOOM_MIN};
pub use datasource::{Datasource, View, DEFAULT_VIEW_ID};
pub use entity::{Entity, Field, FieldOrigin, ForeignKeyRef};
pub use enums::*;
pub use index::Index;
pub use relationship::Relationship;
pub use snapshot::DiagramSnapshot;

/// Generate a fresh opaque id
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
