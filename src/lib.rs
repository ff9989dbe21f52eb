//! Diagram state & history engine for the ER designer
//!
//! Provides unified building blocks for diagram-editing frontends:
//! - Entity graph store (datasources, views, entities, relationships, indexes)
//!   with referential integrity on delete/reparent
//! - Single-inheritance field resolution with cycle detection
//! - Tree projection for the navigation hierarchy
//! - Bounded, invertible command history (undo/redo)
//! - Selection and canvas viewport state
//!
//! The engine performs no I/O; persistence and rendering are external
//! collaborators talking to [`DiagramStore`] through `load_diagram` /
//! `export_diagram` and the mutator surface.

pub mod error;
pub mod geometry;
pub mod history;
pub mod inheritance;
pub mod models;
pub mod store;
pub mod tree;

// Re-export commonly used types
pub use error::DiagramError;
pub use history::{Command, HistoryEntry, HistoryLog, OperationType, HISTORY_CAPACITY};
pub use store::{DiagramStore, Selection};
pub use tree::{TreeNode, TreeNodeKind};

// Re-export models
pub use models::{
    CanvasState, Datasource, DiagramSnapshot, Entity, Field, FieldOrigin, ForeignKeyRef, Index,
    Relationship, View, DEFAULT_VIEW_ID, ZOOM_MAX, ZOOM_MIN,
};
pub use models::enums::*;
