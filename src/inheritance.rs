//! Single-inheritance field resolution
//!
//! Pure read-side projections over the entity collection; nothing here mutates the
//! store. Every chain walk carries a visited set and raises
//! [`DiagramError::CycleError`] the moment an entity id is revisited.

use crate::error::DiagramError;
use crate::models::{Entity, Field, FieldOrigin};
use std::collections::HashSet;

/// Resolve the effective (displayed) field list of an entity.
///
/// Ancestor fields (outermost first) precede the entity's own fields. Each
/// inherited field is a clone with a derived id (`{childId}_inherited_{fieldId}`),
/// its primary-key flag cleared and its provenance recorded in `extended`. An
/// unresolvable parent id is treated as no parent. Returns `None` when the entity
/// itself does not exist.
pub fn entity_with_inherited_fields(
    entities: &[Entity],
    entity_id: &str,
) -> Result<Option<Entity>, DiagramError> {
    let mut visited = HashSet::new();
    resolve(entities, entity_id, &mut visited)
}

fn resolve(
    entities: &[Entity],
    entity_id: &str,
    visited: &mut HashSet<String>,
) -> Result<Option<Entity>, DiagramError> {
    let Some(entity) = entities.iter().find(|e| e.id == entity_id) else {
        return Ok(None);
    };
    if !visited.insert(entity.id.clone()) {
        return Err(DiagramError::CycleError(entity.id.clone()));
    }
    let Some(parent_id) = entity.parent_entity_id.as_deref() else {
        return Ok(Some(entity.clone()));
    };
    let Some(parent) = resolve(entities, parent_id, visited)? else {
        // dangling parent reference, treat as no parent
        return Ok(Some(entity.clone()));
    };

    let mut fields: Vec<Field> = parent
        .fields
        .iter()
        .map(|field| {
            let mut inherited = field.clone();
            inherited.id = format!("{}_inherited_{}", entity.id, field.id);
            inherited.is_primary_key = false;
            // keep the original ancestor's provenance across multiple levels
            inherited.extended = field.extended.clone().or_else(|| {
                Some(FieldOrigin {
                    entity_id: parent.id.clone(),
                    field_id: field.id.clone(),
                })
            });
            inherited
        })
        .collect();
    fields.extend(entity.fields.iter().cloned());

    let mut resolved = entity.clone();
    resolved.fields = fields;
    Ok(Some(resolved))
}

/// Flat, declaration-ordered list of all ancestor fields above `parent_entity_id`
/// (inclusive), outermost ancestor first.
///
/// Each ancestor's own fields are sorted by serial number before splicing and
/// tagged with the ancestor they derive from. Ids are left untouched; this feeds
/// field-list rendering, not the resolved entity itself.
pub fn all_parent_fields(
    entities: &[Entity],
    parent_entity_id: Option<&str>,
) -> Result<Vec<Field>, DiagramError> {
    let mut result: Vec<Field> = Vec::new();
    let mut visited = HashSet::new();
    let mut current = parent_entity_id.map(str::to_owned);
    while let Some(id) = current {
        let Some(parent) = entities.iter().find(|e| e.id == id) else {
            break;
        };
        if !visited.insert(parent.id.clone()) {
            return Err(DiagramError::CycleError(parent.id.clone()));
        }
        let mut fields: Vec<Field> = parent
            .fields
            .iter()
            .map(|field| {
                let mut tagged = field.clone();
                tagged.extended = Some(FieldOrigin {
                    entity_id: parent.id.clone(),
                    field_id: field.id.clone(),
                });
                tagged
            })
            .collect();
        fields.sort_by_key(|f| f.serial_no);
        // nearer ancestors were gathered first; keep outermost at the front
        result.splice(0..0, fields);
        current = parent.parent_entity_id.clone();
    }
    Ok(result)
}

/// Ids of all (transitive) child entities of `parent_id`
pub fn child_entity_ids(entities: &[Entity], parent_id: &str) -> Result<Vec<String>, DiagramError> {
    let mut visited = HashSet::from([parent_id.to_owned()]);
    let mut out = Vec::new();
    collect_children(entities, parent_id, &mut visited, &mut out)?;
    Ok(out)
}

fn collect_children(
    entities: &[Entity],
    parent_id: &str,
    visited: &mut HashSet<String>,
    out: &mut Vec<String>,
) -> Result<(), DiagramError> {
    let children: Vec<&Entity> = entities
        .iter()
        .filter(|e| e.parent_entity_id.as_deref() == Some(parent_id))
        .collect();
    for child in &children {
        if !visited.insert(child.id.clone()) {
            return Err(DiagramError::CycleError(child.id.clone()));
        }
        out.push(child.id.clone());
    }
    for child in &children {
        collect_children(entities, &child.id, visited, out)?;
    }
    Ok(())
}
