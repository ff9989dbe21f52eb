//! Index model

use super::entity::Field;
use super::enums::IndexType;
use serde::{Deserialize, Serialize};

/// A named, possibly-unique ordered set of fields on one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    pub datasource_id: String,
    pub id: String,
    pub name: String,
    pub entity_id: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub unique: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub index_type: Option<IndexType>,
}

impl Index {
    pub fn new(
        datasource_id: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        Self {
            datasource_id: datasource_id.into(),
            id: id.into(),
            name: name.into(),
            entity_id: entity_id.into(),
            fields: Vec::new(),
            unique: false,
            comment: None,
            index_type: None,
        }
    }
}
