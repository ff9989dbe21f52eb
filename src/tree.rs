//! Tree projection
//!
//! Derives the navigation hierarchy (datasource → entity → child entity) from the
//! flat collections. Recomputed from scratch on every call; sibling order follows
//! the collections' insertion order.

use crate::models::{Datasource, Entity, EntityType};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Kind of a projected tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TreeNodeKind {
    Datasource,
    Entity,
    Relationship,
    Index,
}

/// Derived display node; never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: TreeNodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource_id: Option<String>,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

/// Project the flat store into the datasource/entity hierarchy.
///
/// Two passes over the entities: the first attaches every entity whose parent is
/// unset or unresolvable directly under its datasource, the second attaches the
/// rest under their parent. A single pass cannot place a child before its parent
/// is known to exist.
pub fn project_tree(datasources: &[Datasource], entities: &[Entity]) -> Vec<TreeNode> {
    let known: HashSet<&str> = entities.iter().map(|e| e.id.as_str()).collect();

    let mut datasource_roots: HashMap<&str, Vec<&Entity>> = HashMap::new();
    let mut children_of: HashMap<&str, Vec<&Entity>> = HashMap::new();

    for entity in entities {
        match entity.parent_entity_id.as_deref() {
            Some(parent_id) if known.contains(parent_id) => {}
            _ => {
                if datasources.iter().any(|ds| ds.id == entity.datasource_id) {
                    datasource_roots
                        .entry(entity.datasource_id.as_str())
                        .or_default()
                        .push(entity);
                } else {
                    tracing::warn!(
                        entity_id = %entity.id,
                        datasource_id = %entity.datasource_id,
                        "entity references unknown datasource, dropped from tree"
                    );
                }
            }
        }
    }
    for entity in entities {
        if let Some(parent_id) = entity.parent_entity_id.as_deref() {
            if known.contains(parent_id) {
                children_of.entry(parent_id).or_default().push(entity);
            }
        }
    }

    datasources
        .iter()
        .map(|ds| TreeNode {
            id: ds.id.clone(),
            label: ds.name.clone(),
            kind: TreeNodeKind::Datasource,
            entity_type: None,
            datasource_id: None,
            children: datasource_roots
                .get(ds.id.as_str())
                .into_iter()
                .flatten()
                .map(|entity| entity_node(entity, &children_of))
                .collect(),
        })
        .collect()
}

fn entity_node(entity: &Entity, children_of: &HashMap<&str, Vec<&Entity>>) -> TreeNode {
    TreeNode {
        id: entity.id.clone(),
        label: entity.name.clone(),
        kind: TreeNodeKind::Entity,
        entity_type: Some(entity.entity_type),
        datasource_id: Some(entity.datasource_id.clone()),
        children: children_of
            .get(entity.id.as_str())
            .into_iter()
            .flatten()
            .map(|child| entity_node(child, children_of))
            .collect(),
    }
}
