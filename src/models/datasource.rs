//! Datasource and view models

use super::canvas::CanvasState;
use super::enums::{Category, DatasourceType};
use serde::{Deserialize, Serialize};

/// Id of the fallback view that adopts datasources when their view is deleted
pub const DEFAULT_VIEW_ID: &str = "default";

/// A connection/schema boundary grouping a set of entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datasource {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub datasource_type: Option<DatasourceType>,
    /// View this datasource is grouped under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Datasource {
    /// Create a datasource with only the required fields set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            datasource_type: None,
            view_id: None,
            category: None,
            connection_string: None,
            host: None,
            port: None,
            database: None,
            username: None,
            password: None,
        }
    }
}

/// A named grouping of datasources for display/organization purposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub id: String,
    pub name: String,
    /// Member datasource ids
    #[serde(default)]
    pub datasource_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas: Option<CanvasState>,
}

impl View {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            datasource_ids: Vec::new(),
            canvas: None,
        }
    }

    /// The fallback view used by `delete_view` reassignment
    pub fn default_view() -> Self {
        Self::new(DEFAULT_VIEW_ID, DEFAULT_VIEW_ID)
    }
}
