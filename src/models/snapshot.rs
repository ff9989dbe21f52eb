//! Wholesale diagram snapshot exchanged with the persistence collaborator

use super::datasource::{Datasource, View};
use super::entity::Entity;
use super::index::Index;
use super::relationship::Relationship;
use serde::{Deserialize, Serialize};

/// Full copy of every persisted collection.
///
/// This is the shape `load_diagram`/`export_diagram` exchange with the external
/// persistence layer; field names must round-trip byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramSnapshot {
    #[serde(default)]
    pub views: Vec<View>,
    #[serde(default)]
    pub datasources: Vec<Datasource>,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub indexes: Vec<Index>,
}
