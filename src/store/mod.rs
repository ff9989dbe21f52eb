//! Entity graph store
//!
//! Single source of truth for the diagram: datasources, views, entities,
//! relationships and indexes, plus selection and canvas state. Every mutation
//! validates first, applies, then appends an invertible command to the history
//! log; on failure the store is left exactly as it was.

pub mod selection;

pub use selection::Selection;

use crate::error::DiagramError;
use crate::history::{Command, HistoryEntry, HistoryLog};
use crate::inheritance;
use crate::models::{
    CanvasState, Datasource, DiagramSnapshot, Entity, EntityType, Index, Relationship, View,
    DEFAULT_VIEW_ID, ZOOM_MAX, ZOOM_MIN,
};
use crate::tree::{self, TreeNode};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
enum Direction {
    Undo,
    Redo,
}

/// In-memory diagram state with journaled mutation
#[derive(Debug)]
pub struct DiagramStore {
    views: Vec<View>,
    datasources: Vec<Datasource>,
    entities: Vec<Entity>,
    relationships: Vec<Relationship>,
    indexes: Vec<Index>,
    selection: Selection,
    canvas: CanvasState,
    select_mode: bool,
    history: HistoryLog,
}

impl Default for DiagramStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramStore {
    pub fn new() -> Self {
        Self {
            views: Vec::new(),
            datasources: Vec::new(),
            entities: Vec::new(),
            relationships: Vec::new(),
            indexes: Vec::new(),
            selection: Selection::default(),
            canvas: CanvasState::default(),
            select_mode: true,
            history: HistoryLog::new(),
        }
    }

    // ---- read access -------------------------------------------------------

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn datasources(&self) -> &[Datasource] {
        &self.datasources
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn canvas(&self) -> &CanvasState {
        &self.canvas
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn is_select_mode(&self) -> bool {
        self.select_mode
    }

    pub fn entity_by_id(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn datasource_by_id(&self, id: &str) -> Option<&Datasource> {
        self.datasources.iter().find(|d| d.id == id)
    }

    pub fn view_by_id(&self, id: &str) -> Option<&View> {
        self.views.iter().find(|v| v.id == id)
    }

    /// Concrete entities only; abstract ones never appear on the canvas
    pub fn visible_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(|e| e.entity_type == EntityType::Entity)
    }

    /// Entities of the datasource eligible as inheritance parents. Only ABSTRACT
    /// entities qualify; `exclude_entity_id` drops the entity being edited.
    pub fn available_parent_entities(
        &self,
        datasource_id: &str,
        exclude_entity_id: Option<&str>,
    ) -> Vec<&Entity> {
        self.entities
            .iter()
            .filter(|e| {
                e.datasource_id == datasource_id
                    && Some(e.id.as_str()) != exclude_entity_id
                    && e.entity_type == EntityType::Abstract
            })
            .collect()
    }

    /// Effective field list of an entity, ancestors resolved (see [`inheritance`])
    pub fn entity_with_inherited_fields(
        &self,
        entity_id: &str,
    ) -> Result<Option<Entity>, DiagramError> {
        inheritance::entity_with_inherited_fields(&self.entities, entity_id)
    }

    /// Navigation hierarchy, recomputed from the current collections
    pub fn tree(&self) -> Vec<TreeNode> {
        tree::project_tree(&self.datasources, &self.entities)
    }

    // ---- datasources -------------------------------------------------------

    pub fn add_datasource(&mut self, datasource: Datasource) -> Result<(), DiagramError> {
        require_non_empty(&datasource.id, "datasource id")?;
        require_non_empty(&datasource.name, "datasource name")?;
        if self.datasource_by_id(&datasource.id).is_some() {
            return Err(DiagramError::ValidationError(format!(
                "datasource '{}' already exists",
                datasource.id
            )));
        }
        self.datasources.push(datasource.clone());
        self.record(
            format!("Add datasource '{}'", datasource.name),
            Command::AddDatasource { after: datasource },
        );
        Ok(())
    }

    pub fn update_datasource(&mut self, datasource: Datasource) -> Result<(), DiagramError> {
        require_non_empty(&datasource.name, "datasource name")?;
        let Some(slot) = self.datasources.iter_mut().find(|d| d.id == datasource.id) else {
            return Err(DiagramError::NotFoundError(format!(
                "datasource '{}' does not exist",
                datasource.id
            )));
        };
        let before = slot.clone();
        *slot = datasource.clone();
        self.record(
            format!("Update datasource '{}'", datasource.name),
            Command::UpdateDatasource {
                before,
                after: datasource,
            },
        );
        Ok(())
    }

    /// Delete a datasource and everything it owns. Entity deletion cascades per
    /// entity rules; every constituent step is journaled in execution order.
    pub fn delete_datasource(&mut self, datasource_id: &str) -> Result<(), DiagramError> {
        let pos = self
            .datasources
            .iter()
            .position(|d| d.id == datasource_id)
            .ok_or_else(|| {
                DiagramError::NotFoundError(format!(
                    "datasource '{datasource_id}' does not exist"
                ))
            })?;
        let datasource = self.datasources[pos].clone();

        let owned: Vec<String> = self
            .entities
            .iter()
            .filter(|e| e.datasource_id == datasource_id)
            .map(|e| e.id.clone())
            .collect();
        for entity_id in owned {
            self.delete_entity(&entity_id)?;
        }

        self.datasources.remove(pos);
        if self.selection.datasource_id.as_deref() == Some(datasource_id) {
            self.selection.datasource_id = None;
        }
        self.record(
            format!("Delete datasource '{}'", datasource.name),
            Command::DeleteDatasource {
                before: datasource,
                position: pos,
            },
        );
        Ok(())
    }

    // ---- entities ----------------------------------------------------------

    pub fn add_entity(&mut self, entity: Entity) -> Result<(), DiagramError> {
        require_non_empty(&entity.id, "entity id")?;
        require_non_empty(&entity.name, "entity name")?;
        if self.entity_by_id(&entity.id).is_some() {
            return Err(DiagramError::ValidationError(format!(
                "entity '{}' already exists",
                entity.id
            )));
        }
        if self.datasource_by_id(&entity.datasource_id).is_none() {
            return Err(DiagramError::NotFoundError(format!(
                "datasource '{}' does not exist",
                entity.datasource_id
            )));
        }
        self.validate_parent(&entity)?;
        self.entities.push(entity.clone());
        self.record(
            format!("Add entity '{}'", entity.name),
            Command::AddEntity { after: entity },
        );
        Ok(())
    }

    /// Full replace of the stored record, not a merge
    pub fn update_entity(&mut self, entity: Entity) -> Result<(), DiagramError> {
        require_non_empty(&entity.name, "entity name")?;
        let pos = self
            .entities
            .iter()
            .position(|e| e.id == entity.id)
            .ok_or_else(|| {
                DiagramError::NotFoundError(format!("entity '{}' does not exist", entity.id))
            })?;
        self.validate_parent(&entity)?;
        let before = std::mem::replace(&mut self.entities[pos], entity.clone());
        self.record(
            format!("Update entity '{}'", entity.name),
            Command::UpdateEntity {
                before,
                after: entity,
            },
        );
        Ok(())
    }

    /// Delete an entity. Children are re-parented onto the deleted entity's own
    /// parent (the inheritance chain survives), then relationships touching the
    /// entity and indexes on it are removed. Each step is journaled separately.
    pub fn delete_entity(&mut self, entity_id: &str) -> Result<(), DiagramError> {
        // stays valid throughout: the steps below replace in place or touch
        // other collections
        let entity_pos = self
            .entities
            .iter()
            .position(|e| e.id == entity_id)
            .ok_or_else(|| {
                DiagramError::NotFoundError(format!("entity '{entity_id}' does not exist"))
            })?;
        let entity = self.entities[entity_pos].clone();

        let child_ids: Vec<String> = self
            .entities
            .iter()
            .filter(|e| e.parent_entity_id.as_deref() == Some(entity_id))
            .map(|e| e.id.clone())
            .collect();
        for child_id in child_ids {
            let Some(pos) = self.entities.iter().position(|e| e.id == child_id) else {
                continue;
            };
            let before = self.entities[pos].clone();
            self.entities[pos].parent_entity_id = entity.parent_entity_id.clone();
            let after = self.entities[pos].clone();
            self.record(
                format!("Re-parent entity '{}'", after.name),
                Command::UpdateEntity { before, after },
            );
        }

        while let Some(pos) = self
            .relationships
            .iter()
            .position(|r| r.from_entity_id == entity_id || r.to_entity_id == entity_id)
        {
            let relationship = self.relationships.remove(pos);
            self.record(
                format!("Delete relationship '{}'", relationship.id),
                Command::DeleteRelationship {
                    before: relationship,
                    position: pos,
                },
            );
        }

        while let Some(pos) = self.indexes.iter().position(|i| i.entity_id == entity_id) {
            let index = self.indexes.remove(pos);
            self.record(
                format!("Delete index '{}'", index.name),
                Command::DeleteIndex {
                    before: index,
                    position: pos,
                },
            );
        }

        self.entities.remove(entity_pos);
        if self.selection.entity_id.as_deref() == Some(entity_id) {
            self.selection.entity_id = None;
        }
        self.record(
            format!("Delete entity '{}'", entity.name),
            Command::DeleteEntity {
                before: entity,
                position: entity_pos,
            },
        );
        Ok(())
    }

    /// A parent reference must point at an ABSTRACT entity of the same datasource
    /// and must not close a cycle over the entity being written.
    fn validate_parent(&self, entity: &Entity) -> Result<(), DiagramError> {
        let Some(parent_id) = entity.parent_entity_id.as_deref() else {
            return Ok(());
        };
        let Some(parent) = self.entity_by_id(parent_id) else {
            return Err(DiagramError::ValidationError(format!(
                "parent entity '{parent_id}' does not exist"
            )));
        };
        if parent.datasource_id != entity.datasource_id
            || parent.entity_type != EntityType::Abstract
        {
            return Err(DiagramError::ValidationError(format!(
                "parent entity '{parent_id}' must be an abstract entity of the same datasource"
            )));
        }

        let mut visited: HashSet<&str> = HashSet::from([entity.id.as_str()]);
        let mut current = Some(parent_id);
        while let Some(id) = current {
            if !visited.insert(id) {
                return Err(DiagramError::CycleError(id.to_owned()));
            }
            current = self
                .entity_by_id(id)
                .and_then(|e| e.parent_entity_id.as_deref());
        }
        Ok(())
    }

    // ---- relationships -----------------------------------------------------

    pub fn add_relationship(&mut self, relationship: Relationship) -> Result<(), DiagramError> {
        require_non_empty(&relationship.id, "relationship id")?;
        if self.relationships.iter().any(|r| r.id == relationship.id) {
            return Err(DiagramError::ValidationError(format!(
                "relationship '{}' already exists",
                relationship.id
            )));
        }
        self.validate_endpoints(&relationship)?;
        self.relationships.push(relationship.clone());
        self.record(
            format!("Add relationship '{}'", relationship.id),
            Command::AddRelationship {
                after: relationship,
            },
        );
        Ok(())
    }

    pub fn update_relationship(&mut self, relationship: Relationship) -> Result<(), DiagramError> {
        let pos = self
            .relationships
            .iter()
            .position(|r| r.id == relationship.id)
            .ok_or_else(|| {
                DiagramError::NotFoundError(format!(
                    "relationship '{}' does not exist",
                    relationship.id
                ))
            })?;
        self.validate_endpoints(&relationship)?;
        let before = std::mem::replace(&mut self.relationships[pos], relationship.clone());
        self.record(
            format!("Update relationship '{}'", relationship.id),
            Command::UpdateRelationship {
                before,
                after: relationship,
            },
        );
        Ok(())
    }

    pub fn delete_relationship(&mut self, relationship_id: &str) -> Result<(), DiagramError> {
        let pos = self
            .relationships
            .iter()
            .position(|r| r.id == relationship_id)
            .ok_or_else(|| {
                DiagramError::NotFoundError(format!(
                    "relationship '{relationship_id}' does not exist"
                ))
            })?;
        let relationship = self.relationships.remove(pos);
        if self.selection.relationship_id.as_deref() == Some(relationship_id) {
            self.selection.relationship_id = None;
        }
        self.record(
            format!("Delete relationship '{relationship_id}'"),
            Command::DeleteRelationship {
                before: relationship,
                position: pos,
            },
        );
        Ok(())
    }

    fn validate_endpoints(&self, relationship: &Relationship) -> Result<(), DiagramError> {
        for entity_id in [&relationship.from_entity_id, &relationship.to_entity_id] {
            if self.entity_by_id(entity_id).is_none() {
                return Err(DiagramError::NotFoundError(format!(
                    "entity '{entity_id}' does not exist"
                )));
            }
        }
        Ok(())
    }

    // ---- indexes -----------------------------------------------------------

    pub fn add_index(&mut self, index: Index) -> Result<(), DiagramError> {
        require_non_empty(&index.id, "index id")?;
        require_non_empty(&index.name, "index name")?;
        if self.indexes.iter().any(|i| i.id == index.id) {
            return Err(DiagramError::ValidationError(format!(
                "index '{}' already exists",
                index.id
            )));
        }
        if self.entity_by_id(&index.entity_id).is_none() {
            return Err(DiagramError::NotFoundError(format!(
                "entity '{}' does not exist",
                index.entity_id
            )));
        }
        self.indexes.push(index.clone());
        self.record(
            format!("Add index '{}'", index.name),
            Command::AddIndex { after: index },
        );
        Ok(())
    }

    pub fn update_index(&mut self, index: Index) -> Result<(), DiagramError> {
        require_non_empty(&index.name, "index name")?;
        let pos = self
            .indexes
            .iter()
            .position(|i| i.id == index.id)
            .ok_or_else(|| {
                DiagramError::NotFoundError(format!("index '{}' does not exist", index.id))
            })?;
        if self.entity_by_id(&index.entity_id).is_none() {
            return Err(DiagramError::NotFoundError(format!(
                "entity '{}' does not exist",
                index.entity_id
            )));
        }
        let before = std::mem::replace(&mut self.indexes[pos], index.clone());
        self.record(
            format!("Update index '{}'", index.name),
            Command::UpdateIndex {
                before,
                after: index,
            },
        );
        Ok(())
    }

    pub fn delete_index(&mut self, index_id: &str) -> Result<(), DiagramError> {
        let pos = self
            .indexes
            .iter()
            .position(|i| i.id == index_id)
            .ok_or_else(|| {
                DiagramError::NotFoundError(format!("index '{index_id}' does not exist"))
            })?;
        let index = self.indexes.remove(pos);
        self.record(
            format!("Delete index '{}'", index.name),
            Command::DeleteIndex {
                before: index,
                position: pos,
            },
        );
        Ok(())
    }

    // ---- views -------------------------------------------------------------

    pub fn add_view(&mut self, view: View) -> Result<(), DiagramError> {
        require_non_empty(&view.id, "view id")?;
        require_non_empty(&view.name, "view name")?;
        if self.view_by_id(&view.id).is_some() {
            return Err(DiagramError::ValidationError(format!(
                "view '{}' already exists",
                view.id
            )));
        }
        self.views.push(view.clone());
        self.record(
            format!("Add view '{}'", view.name),
            Command::AddView { after: view },
        );
        Ok(())
    }

    pub fn update_view(&mut self, view: View) -> Result<(), DiagramError> {
        require_non_empty(&view.name, "view name")?;
        let Some(slot) = self.views.iter_mut().find(|v| v.id == view.id) else {
            return Err(DiagramError::NotFoundError(format!(
                "view '{}' does not exist",
                view.id
            )));
        };
        let before = slot.clone();
        *slot = view.clone();
        self.record(
            format!("Update view '{}'", view.name),
            Command::UpdateView {
                before,
                after: view,
            },
        );
        Ok(())
    }

    /// Delete a view; its member datasources are reassigned to the default view,
    /// never deleted.
    pub fn delete_view(&mut self, view_id: &str) -> Result<(), DiagramError> {
        // the only view mutation below is a push, so the position stays valid
        let view_pos = self
            .views
            .iter()
            .position(|v| v.id == view_id)
            .ok_or_else(|| {
                DiagramError::NotFoundError(format!("view '{view_id}' does not exist"))
            })?;
        let view = self.views[view_pos].clone();
        if view.id == DEFAULT_VIEW_ID {
            return Err(DiagramError::ValidationError(
                "the default view cannot be deleted".to_string(),
            ));
        }

        if self.view_by_id(DEFAULT_VIEW_ID).is_none() {
            let default_view = View::default_view();
            self.views.push(default_view.clone());
            self.record(
                "Add default view".to_string(),
                Command::AddView {
                    after: default_view,
                },
            );
        }

        for datasource_id in &view.datasource_ids {
            let Some(slot) = self.datasources.iter_mut().find(|d| &d.id == datasource_id)
            else {
                continue;
            };
            let before = slot.clone();
            slot.view_id = Some(DEFAULT_VIEW_ID.to_string());
            let after = slot.clone();
            self.record(
                format!("Reassign datasource '{}' to default view", after.name),
                Command::UpdateDatasource { before, after },
            );
        }

        if let Some(pos) = self.views.iter().position(|v| v.id == DEFAULT_VIEW_ID) {
            let before = self.views[pos].clone();
            for datasource_id in &view.datasource_ids {
                if !self.views[pos].datasource_ids.contains(datasource_id) {
                    self.views[pos].datasource_ids.push(datasource_id.clone());
                }
            }
            let after = self.views[pos].clone();
            if after != before {
                self.record(
                    "Adopt datasources into default view".to_string(),
                    Command::UpdateView { before, after },
                );
            }
        }

        self.views.remove(view_pos);
        self.record(
            format!("Delete view '{}'", view.name),
            Command::DeleteView {
                before: view,
                position: view_pos,
            },
        );
        Ok(())
    }

    // ---- load/export -------------------------------------------------------

    /// Wholesale replace of every collection; no partial/merge load exists.
    /// Journaled as a single IMPORT_DATA entry so a bulk load is undoable.
    pub fn load_diagram(&mut self, snapshot: DiagramSnapshot) {
        let before = self.snapshot();
        self.apply_snapshot(&snapshot);
        self.selection.clear();
        self.record(
            "Import diagram".to_string(),
            Command::ImportData {
                before: Box::new(before),
                after: Box::new(snapshot),
            },
        );
    }

    /// Copy of every collection for the persistence collaborator to serialize
    pub fn export_diagram(&self) -> DiagramSnapshot {
        self.snapshot()
    }

    /// Drop all entities, relationships and indexes; datasources and views stay.
    pub fn clear_diagram(&mut self) {
        let before = self.snapshot();
        let after = DiagramSnapshot {
            views: self.views.clone(),
            datasources: self.datasources.clone(),
            entities: Vec::new(),
            relationships: Vec::new(),
            indexes: Vec::new(),
        };
        self.apply_snapshot(&after);
        self.selection.clear();
        self.reset_view();
        self.record(
            "Clear diagram".to_string(),
            Command::ImportData {
                before: Box::new(before),
                after: Box::new(after),
            },
        );
    }

    fn snapshot(&self) -> DiagramSnapshot {
        DiagramSnapshot {
            views: self.views.clone(),
            datasources: self.datasources.clone(),
            entities: self.entities.clone(),
            relationships: self.relationships.clone(),
            indexes: self.indexes.clone(),
        }
    }

    fn apply_snapshot(&mut self, snapshot: &DiagramSnapshot) {
        self.views = snapshot.views.clone();
        self.datasources = snapshot.datasources.clone();
        self.entities = snapshot.entities.clone();
        self.relationships = snapshot.relationships.clone();
        self.indexes = snapshot.indexes.clone();
    }

    // ---- history -----------------------------------------------------------

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Invert the most recent applied entry. Returns false when there is nothing
    /// to undo. Selection is cleared as a side effect; it is not journaled.
    pub fn undo(&mut self) -> bool {
        let Some(command) = self.history.step_back() else {
            return false;
        };
        self.apply_command(&command, Direction::Undo);
        self.selection.clear();
        true
    }

    /// Re-apply the entry most recently undone
    pub fn redo(&mut self) -> bool {
        let Some(command) = self.history.step_forward() else {
            return false;
        };
        self.apply_command(&command, Direction::Redo);
        self.selection.clear();
        true
    }

    fn record(&mut self, description: String, command: Command) {
        let entry = HistoryEntry::new(description, command);
        debug!(operation = ?entry.operation, description = %entry.description, "journal");
        self.history.record(entry);
    }

    fn apply_command(&mut self, command: &Command, direction: Direction) {
        use Direction::{Redo, Undo};
        match command {
            Command::AddEntity { after } => match direction {
                Undo => remove_by_id(&mut self.entities, |e| &e.id, &after.id),
                Redo => upsert(&mut self.entities, |e| &e.id, after),
            },
            Command::UpdateEntity { before, after } => {
                let target = match direction {
                    Undo => before,
                    Redo => after,
                };
                upsert(&mut self.entities, |e| &e.id, target);
            }
            Command::DeleteEntity { before, position } => match direction {
                Undo => insert_at(&mut self.entities, *position, before),
                Redo => remove_by_id(&mut self.entities, |e| &e.id, &before.id),
            },
            Command::AddRelationship { after } => match direction {
                Undo => remove_by_id(&mut self.relationships, |r| &r.id, &after.id),
                Redo => upsert(&mut self.relationships, |r| &r.id, after),
            },
            Command::UpdateRelationship { before, after } => {
                let target = match direction {
                    Undo => before,
                    Redo => after,
                };
                upsert(&mut self.relationships, |r| &r.id, target);
            }
            Command::DeleteRelationship { before, position } => match direction {
                Undo => insert_at(&mut self.relationships, *position, before),
                Redo => remove_by_id(&mut self.relationships, |r| &r.id, &before.id),
            },
            Command::AddDatasource { after } => match direction {
                Undo => remove_by_id(&mut self.datasources, |d| &d.id, &after.id),
                Redo => upsert(&mut self.datasources, |d| &d.id, after),
            },
            Command::UpdateDatasource { before, after } => {
                let target = match direction {
                    Undo => before,
                    Redo => after,
                };
                upsert(&mut self.datasources, |d| &d.id, target);
            }
            Command::DeleteDatasource { before, position } => match direction {
                Undo => insert_at(&mut self.datasources, *position, before),
                Redo => remove_by_id(&mut self.datasources, |d| &d.id, &before.id),
            },
            Command::AddView { after } => match direction {
                Undo => remove_by_id(&mut self.views, |v| &v.id, &after.id),
                Redo => upsert(&mut self.views, |v| &v.id, after),
            },
            Command::UpdateView { before, after } => {
                let target = match direction {
                    Undo => before,
                    Redo => after,
                };
                upsert(&mut self.views, |v| &v.id, target);
            }
            Command::DeleteView { before, position } => match direction {
                Undo => insert_at(&mut self.views, *position, before),
                Redo => remove_by_id(&mut self.views, |v| &v.id, &before.id),
            },
            Command::AddIndex { after } => match direction {
                Undo => remove_by_id(&mut self.indexes, |i| &i.id, &after.id),
                Redo => upsert(&mut self.indexes, |i| &i.id, after),
            },
            Command::UpdateIndex { before, after } => {
                let target = match direction {
                    Undo => before,
                    Redo => after,
                };
                upsert(&mut self.indexes, |i| &i.id, target);
            }
            Command::DeleteIndex { before, position } => match direction {
                Undo => insert_at(&mut self.indexes, *position, before),
                Redo => remove_by_id(&mut self.indexes, |i| &i.id, &before.id),
            },
            Command::ImportData { before, after } => {
                let snapshot = match direction {
                    Undo => before,
                    Redo => after,
                };
                self.apply_snapshot(snapshot);
            }
        }
    }

    // ---- selection & canvas ------------------------------------------------

    pub fn select_entity(&mut self, entity_id: impl Into<String>) {
        self.selection.entity_id = Some(entity_id.into());
        self.selection.relationship_id = None;
    }

    pub fn select_relationship(&mut self, relationship_id: impl Into<String>) {
        self.selection.relationship_id = Some(relationship_id.into());
        self.selection.entity_id = None;
    }

    pub fn select_datasource(&mut self, datasource_id: impl Into<String>) {
        self.selection.datasource_id = Some(datasource_id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn set_select_mode(&mut self, select_mode: bool) {
        self.select_mode = select_mode;
    }

    pub fn toggle_select_mode(&mut self) {
        self.select_mode = !self.select_mode;
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.canvas.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.canvas.pan_x = x;
        self.canvas.pan_y = y;
    }

    pub fn set_show_grid(&mut self, show_grid: bool) {
        self.canvas.show_grid = show_grid;
    }

    pub fn reset_view(&mut self) {
        self.canvas.zoom = 1.0;
        self.canvas.pan_x = 0.0;
        self.canvas.pan_y = 0.0;
    }
}

fn require_non_empty(value: &str, what: &str) -> Result<(), DiagramError> {
    if value.trim().is_empty() {
        return Err(DiagramError::ValidationError(format!(
            "{what} must not be empty"
        )));
    }
    Ok(())
}

fn upsert<T: Clone>(items: &mut Vec<T>, id_of: impl Fn(&T) -> &str, record: &T) {
    let id = id_of(record).to_owned();
    if let Some(slot) = items.iter_mut().find(|item| id_of(item) == id) {
        *slot = record.clone();
    } else {
        items.push(record.clone());
    }
}

/// Re-insert a deleted record at its recorded position, clamped to the current
/// length
fn insert_at<T: Clone>(items: &mut Vec<T>, position: usize, record: &T) {
    items.insert(position.min(items.len()), record.clone());
}

fn remove_by_id<T>(items: &mut Vec<T>, id_of: impl Fn(&T) -> &str, id: &str) {
    items.retain(|item| id_of(item) != id);
}
