//! Selection state

/// Currently selected records, replace-on-select.
///
/// Not journaled; cleared wholesale whenever history is applied or a diagram is
/// loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub entity_id: Option<String>,
    pub relationship_id: Option<String>,
    pub datasource_id: Option<String>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.entity_id = None;
        self.relationship_id = None;
        self.datasource_id = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entity_id.is_none() && self.relationship_id.is_none() && self.datasource_id.is_none()
    }
}
