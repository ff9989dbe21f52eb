//! Command/history log
//!
//! Every store mutation is journaled as an invertible command carrying deep value
//! snapshots of the record(s) it touched. The log is linear and bounded; compound
//! store operations (cascading deletes) journal one entry per constituent step and
//! are therefore undone step by step.

use crate::models::{Datasource, DiagramSnapshot, Entity, Index, Relationship, View};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of retained history entries
pub const HISTORY_CAPACITY: usize = 50;

/// Operation kind of a history entry, in the persisted wire spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    AddEntity,
    UpdateEntity,
    DeleteEntity,
    AddRelationship,
    UpdateRelationship,
    DeleteRelationship,
    AddDatasource,
    UpdateDatasource,
    DeleteDatasource,
    AddView,
    UpdateView,
    DeleteView,
    AddIndex,
    UpdateIndex,
    DeleteIndex,
    ImportData,
}

/// One invertible store mutation with its before/after snapshots.
///
/// Snapshots are owned values cloned at record time, so later mutation of live
/// records cannot retroactively alter history. Delete variants also carry the
/// removal index; collection order is observable (export round-trip, tree
/// sibling order), so undo must put the record back where it was.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddEntity { after: Entity },
    UpdateEntity { before: Entity, after: Entity },
    DeleteEntity { before: Entity, position: usize },
    AddRelationship { after: Relationship },
    UpdateRelationship { before: Relationship, after: Relationship },
    DeleteRelationship { before: Relationship, position: usize },
    AddDatasource { after: Datasource },
    UpdateDatasource { before: Datasource, after: Datasource },
    DeleteDatasource { before: Datasource, position: usize },
    AddView { after: View },
    UpdateView { before: View, after: View },
    DeleteView { before: View, position: usize },
    AddIndex { after: Index },
    UpdateIndex { before: Index, after: Index },
    DeleteIndex { before: Index, position: usize },
    /// Wholesale collection replace (diagram load/clear)
    ImportData {
        before: Box<DiagramSnapshot>,
        after: Box<DiagramSnapshot>,
    },
}

impl Command {
    pub fn operation_type(&self) -> OperationType {
        match self {
            Command::AddEntity { .. } => OperationType::AddEntity,
            Command::UpdateEntity { .. } => OperationType::UpdateEntity,
            Command::DeleteEntity { .. } => OperationType::DeleteEntity,
            Command::AddRelationship { .. } => OperationType::AddRelationship,
            Command::UpdateRelationship { .. } => OperationType::UpdateRelationship,
            Command::DeleteRelationship { .. } => OperationType::DeleteRelationship,
            Command::AddDatasource { .. } => OperationType::AddDatasource,
            Command::UpdateDatasource { .. } => OperationType::UpdateDatasource,
            Command::DeleteDatasource { .. } => OperationType::DeleteDatasource,
            Command::AddView { .. } => OperationType::AddView,
            Command::UpdateView { .. } => OperationType::UpdateView,
            Command::DeleteView { .. } => OperationType::DeleteView,
            Command::AddIndex { .. } => OperationType::AddIndex,
            Command::UpdateIndex { .. } => OperationType::UpdateIndex,
            Command::DeleteIndex { .. } => OperationType::DeleteIndex,
            Command::ImportData { .. } => OperationType::ImportData,
        }
    }
}

/// A journaled store mutation
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub operation: OperationType,
    pub description: String,
    pub operation_time: DateTime<Utc>,
    pub undone: bool,
    pub redone: bool,
    pub command: Command,
}

impl HistoryEntry {
    pub fn new(description: impl Into<String>, command: Command) -> Self {
        Self {
            id: crate::models::new_id(),
            operation: command.operation_type(),
            description: description.into(),
            operation_time: Utc::now(),
            undone: false,
            redone: false,
            command,
        }
    }
}

/// Bounded, linear undo/redo log.
///
/// The cursor counts applied entries: it sits in `0..=entries.len()`, `undo` steps
/// it back over `entries[cursor - 1]`, `redo` forward over `entries[cursor]`.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, discarding any redo tail beyond the cursor. When the log
    /// exceeds [`HISTORY_CAPACITY`] the oldest entry is evicted and the cursor
    /// shifted down, never below zero.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor);
        self.entries.push(entry);
        self.cursor = self.entries.len();
        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.remove(0);
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Step the cursor back and hand out the command to invert. `None` when there
    /// is nothing left to undo.
    pub fn step_back(&mut self) -> Option<Command> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        let entry = &mut self.entries[self.cursor];
        entry.undone = true;
        entry.redone = false;
        Some(entry.command.clone())
    }

    /// Step the cursor forward and hand out the command to re-apply
    pub fn step_forward(&mut self) -> Option<Command> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        let entry = &mut self.entries[self.cursor];
        entry.undone = false;
        entry.redone = true;
        self.cursor += 1;
        Some(entry.command.clone())
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}
