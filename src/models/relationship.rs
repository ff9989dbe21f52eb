//! Relationship model

use super::enums::RelationshipType;
use serde::{Deserialize, Serialize};

/// A directed association between two entities, optionally bound to specific fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub datasource_id: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub from_entity_id: String,
    pub to_entity_id: String,
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_field_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_field_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Delete the dependent side when the referenced entity is deleted
    #[serde(default)]
    pub cascade_delete: bool,
    /// Propagate key updates to the dependent side
    #[serde(default)]
    pub cascade_update: bool,
}

impl Relationship {
    pub fn new(
        datasource_id: impl Into<String>,
        id: impl Into<String>,
        from_entity_id: impl Into<String>,
        to_entity_id: impl Into<String>,
        relationship_type: RelationshipType,
    ) -> Self {
        Self {
            datasource_id: datasource_id.into(),
            id: id.into(),
            name: None,
            from_entity_id: from_entity_id.into(),
            to_entity_id: to_entity_id.into(),
            relationship_type,
            from_field_id: None,
            to_field_id: None,
            comment: None,
            cascade_delete: false,
            cascade_update: false,
        }
    }
}
