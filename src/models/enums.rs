//! Enumerations shared by the diagram models

use serde::{Deserialize, Serialize};

/// Broad kind of a datasource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DatasourceType {
    Database,
    Nosql,
    Document,
}

/// Concrete engine behind a datasource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Mysql,
    Oracle,
    Postgresql,
    Sqlserver,
    Redis,
    Json,
    Xml,
}

/// Whether an entity is instantiable or inheritance-only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    /// Inheritance-only; the only kind allowed as a parent
    Abstract,
    /// Concrete entity, shown on the canvas
    Entity,
}

/// Relationship kind. Covers both the current HARD/SOFT/VIRTUAL model and the
/// legacy cardinality values still present in stored diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    Hard,
    Soft,
    Virtual,
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

/// Index access method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexType {
    Btree,
    Hash,
    Fulltext,
}
