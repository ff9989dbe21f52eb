//! Undo/redo history tests

use diagram_core::models::{
    Datasource, DiagramSnapshot, Entity, EntityType, Relationship, RelationshipType,
};
use diagram_core::{DiagramStore, OperationType, HISTORY_CAPACITY};

fn entity(id: &str, name: &str) -> Entity {
    Entity::new("ds1", id, name, EntityType::Entity)
}

fn store_with_datasource() -> DiagramStore {
    let mut store = DiagramStore::new();
    store
        .add_datasource(Datasource::new("ds1", "main database"))
        .unwrap();
    store
}

mod inverse_law_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_undo_and_redo_invert_add() {
        let mut store = store_with_datasource();
        let before = store.export_diagram();

        store.add_entity(entity("e1", "users")).unwrap();
        let after = store.export_diagram();

        assert!(store.undo());
        assert_eq!(store.export_diagram(), before);

        assert!(store.redo());
        assert_eq!(store.export_diagram(), after);
    }

    #[test]
    fn test_undo_and_redo_invert_update() {
        let mut store = store_with_datasource();
        store.add_entity(entity("e1", "users")).unwrap();
        let before = store.export_diagram();

        let mut updated = entity("e1", "accounts");
        updated.x = 99.0;
        store.update_entity(updated).unwrap();
        let after = store.export_diagram();

        assert!(store.undo());
        assert_eq!(store.export_diagram(), before);

        assert!(store.redo());
        assert_eq!(store.export_diagram(), after);
    }

    #[test]
    fn test_undo_and_redo_invert_delete() {
        let mut store = store_with_datasource();
        store.add_entity(entity("e1", "users")).unwrap();
        let before = store.export_diagram();

        store.delete_entity("e1").unwrap();
        let after = store.export_diagram();

        assert!(store.undo());
        assert_eq!(store.export_diagram(), before);

        assert!(store.redo());
        assert_eq!(store.export_diagram(), after);
    }

    #[test]
    fn test_undo_restores_deleted_record_at_its_position() {
        let mut store = store_with_datasource();
        store.add_entity(entity("e1", "one")).unwrap();
        store.add_entity(entity("e2", "two")).unwrap();
        store.add_entity(entity("e3", "three")).unwrap();
        let before = store.export_diagram();

        // deleting a middle element must round-trip, order included
        store.delete_entity("e2").unwrap();
        assert!(store.undo());
        assert_eq!(store.export_diagram(), before);

        let ids: Vec<&str> = store.entities().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn test_undo_restores_deleted_relationship_at_its_position() {
        let mut store = store_with_datasource();
        for id in ["e1", "e2", "e3"] {
            store.add_entity(entity(id, id)).unwrap();
        }
        for (id, from, to) in [("r1", "e1", "e2"), ("r2", "e2", "e3"), ("r3", "e1", "e3")] {
            store
                .add_relationship(Relationship::new("ds1", id, from, to, RelationshipType::Hard))
                .unwrap();
        }
        let before = store.export_diagram();

        store.delete_relationship("r2").unwrap();
        assert!(store.undo());
        assert_eq!(store.export_diagram(), before);
    }

    #[test]
    fn test_snapshots_are_insulated_from_later_mutation() {
        let mut store = store_with_datasource();
        store.add_entity(entity("e1", "users")).unwrap();

        // mutate the live record after it was journaled
        let mut renamed = entity("e1", "renamed");
        renamed.comment = Some("changed".to_string());
        store.update_entity(renamed).unwrap();

        // undoing the update must resurface the original add-time value
        assert!(store.undo());
        let stored = store.entity_by_id("e1").unwrap();
        assert_eq!(stored.name, "users");
        assert_eq!(stored.comment, None);
    }
}

mod log_behavior_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_undo_on_empty_store_is_noop() {
        let mut store = DiagramStore::new();
        assert!(!store.undo());
        assert!(!store.redo());
    }

    #[test]
    fn test_redo_tail_discarded_after_new_mutation() {
        let mut store = store_with_datasource();
        store.add_entity(entity("e1", "one")).unwrap();
        store.undo();
        assert!(store.can_redo());

        store.add_entity(entity("e2", "two")).unwrap();
        assert!(!store.can_redo());
        assert!(store.entity_by_id("e1").is_none());
        assert!(store.entity_by_id("e2").is_some());
    }

    #[test]
    fn test_bounded_log_retains_most_recent_entries() {
        let mut store = store_with_datasource();
        // 1 datasource entry + 60 adds, capacity keeps the newest 50
        for n in 1..=60 {
            store.add_entity(entity(&format!("e{n}"), &format!("entity {n}"))).unwrap();
        }
        assert_eq!(store.history().len(), HISTORY_CAPACITY);

        let mut undone = 0;
        while store.undo() {
            undone += 1;
        }
        assert_eq!(undone, HISTORY_CAPACITY);

        // the oldest 11 journal entries were evicted: the datasource add and the
        // first 10 entity adds survive only as applied state
        assert_eq!(store.entities().len(), 10);
        assert!(store.entity_by_id("e10").is_some());
        assert!(store.entity_by_id("e11").is_none());
        assert!(store.datasource_by_id("ds1").is_some());
    }

    #[test]
    fn test_undo_clears_selection() {
        let mut store = store_with_datasource();
        store.add_entity(entity("e1", "users")).unwrap();
        store.select_entity("e1");
        store.undo();
        assert!(store.selection().is_empty());
    }

    #[test]
    fn test_entries_carry_operation_metadata() {
        let mut store = store_with_datasource();
        store.add_entity(entity("e1", "users")).unwrap();
        store.delete_entity("e1").unwrap();

        let entries = store.history().entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].operation, OperationType::AddDatasource);
        assert_eq!(entries[1].operation, OperationType::AddEntity);
        assert_eq!(entries[2].operation, OperationType::DeleteEntity);
        assert_eq!(entries[2].description, "Delete entity 'users'");
        assert!(!entries[2].undone);

        store.undo();
        assert!(store.history().entries()[2].undone);
    }
}

mod compound_operation_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cascading_delete_is_undone_step_by_step() {
        let mut store = store_with_datasource();
        store
            .add_entity(Entity::new("ds1", "a", "base", EntityType::Abstract))
            .unwrap();
        let mut b = entity("b", "child");
        b.parent_entity_id = Some("a".to_string());
        store.add_entity(b).unwrap();
        store
            .add_relationship(Relationship::new("ds1", "r1", "a", "b", RelationshipType::Hard))
            .unwrap();

        let before = store.export_diagram();

        // journals: re-parent b, delete r1, delete a
        store.delete_entity("a").unwrap();
        assert!(store.entity_by_id("a").is_none());
        assert!(store.relationships().is_empty());
        assert_eq!(store.entity_by_id("b").unwrap().parent_entity_id, None);

        assert!(store.undo());
        assert!(store.entity_by_id("a").is_some());
        assert!(store.relationships().is_empty());

        assert!(store.undo());
        assert_eq!(store.relationships().len(), 1);

        assert!(store.undo());
        assert_eq!(
            store.entity_by_id("b").unwrap().parent_entity_id.as_deref(),
            Some("a")
        );
        assert_eq!(store.export_diagram(), before);
    }
}

mod import_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bulk_load_is_a_single_undoable_entry() {
        let mut store = store_with_datasource();
        store.add_entity(entity("e1", "users")).unwrap();
        let original = store.export_diagram();

        let mut incoming = DiagramSnapshot::default();
        incoming.datasources.push(Datasource::new("ds9", "imported"));
        incoming
            .entities
            .push(Entity::new("ds9", "x1", "imported entity", EntityType::Entity));

        store.load_diagram(incoming.clone());
        assert_eq!(store.export_diagram(), incoming);

        assert!(store.undo());
        assert_eq!(store.export_diagram(), original);

        assert!(store.redo());
        assert_eq!(store.export_diagram(), incoming);
    }
}
