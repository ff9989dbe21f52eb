//! Entity and field models

use super::enums::EntityType;
use serde::{Deserialize, Serialize};

/// Foreign-key descriptor on a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyRef {
    pub referenced_entity_id: String,
    pub referenced_field_id: String,
}

/// Provenance marker on a resolved (inherited) field copy.
///
/// Set only on derived copies produced by the inheritance resolver, never on the
/// fields an entity stores itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOrigin {
    /// Ancestor entity the field was inherited from
    pub entity_id: String,
    /// Id of the ancestor's own field
    pub field_id: String,
}

/// A column/attribute of an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Owning entity
    pub entity_id: String,
    pub id: String,
    pub name: String,
    /// Free-form type name; the column-type catalog is external reference data
    #[serde(rename = "type")]
    pub field_type: String,
    /// Declaration order within the entity
    #[serde(default)]
    pub serial_no: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub is_primary_key: bool,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default)]
    pub is_auto_increment: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended: Option<FieldOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<ForeignKeyRef>,
}

impl Field {
    pub fn new(
        entity_id: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            id: id.into(),
            name: name.into(),
            field_type: field_type.into(),
            serial_no: 0,
            length: None,
            scale: None,
            default_value: None,
            comment: None,
            is_primary_key: false,
            is_required: false,
            is_unique: false,
            is_auto_increment: false,
            extended: None,
            foreign_key: None,
        }
    }
}

/// A modeled table/record type, possibly abstract (inheritance-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Owning datasource
    pub datasource_id: String,
    /// Single-inheritance parent; must reference an ABSTRACT entity of the same
    /// datasource when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_entity_id: Option<String>,
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub entity_type: EntityType,
    #[serde(default)]
    pub fields: Vec<Field>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

impl Entity {
    pub fn new(
        datasource_id: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
        entity_type: EntityType,
    ) -> Self {
        Self {
            datasource_id: datasource_id.into(),
            parent_entity_id: None,
            id: id.into(),
            name: name.into(),
            comment: None,
            entity_type,
            fields: Vec::new(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            background_color: None,
            border_color: None,
        }
    }
}
