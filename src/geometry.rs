//! Entity box sizing
//!
//! Computes the canvas footprint of an entity from its name and field rows. The
//! renderer never sizes boxes itself; it reads the width/height stored here.

use crate::models::{Entity, Field};

const HEADER_HEIGHT: f64 = 30.0;
const FIELD_ROW_HEIGHT: f64 = 25.0;
const MIN_HEIGHT: f64 = 60.0;
const MIN_WIDTH: f64 = 150.0;

/// Minimum height fitting the header plus one row per field
pub fn calculate_entity_height(entity: &Entity) -> f64 {
    let calculated = HEADER_HEIGHT + entity.fields.len() as f64 * FIELD_ROW_HEIGHT;
    calculated.max(MIN_HEIGHT)
}

/// Minimum width fitting the entity name and the widest field row
pub fn calculate_entity_width(entity: &Entity) -> f64 {
    let name_width = entity.name.chars().count() as f64 * 8.0 + 40.0;
    let max_field_width = entity
        .fields
        .iter()
        .map(field_row_width)
        .fold(0.0, f64::max);
    MIN_WIDTH.max(name_width).max(max_field_width)
}

fn field_row_width(field: &Field) -> f64 {
    let name_width = field.name.chars().count() as f64 * 7.0;
    let type_width = field.field_type.chars().count() as f64 * 6.0;
    let length_width = field
        .length
        .map_or(0.0, |l| l.to_string().len() as f64 * 6.0);
    // scale is only rendered alongside a length
    let scale_width = match (field.length, field.scale) {
        (Some(_), Some(s)) => s.to_string().len() as f64 * 6.0,
        _ => 0.0,
    };
    let icon_width = if field.is_primary_key || field.is_unique {
        25.0
    } else {
        8.0
    };
    icon_width + name_width + type_width + length_width + scale_width + 50.0
}

/// Recompute and store the entity's box size
pub fn update_entity_size(entity: &mut Entity) {
    entity.width = calculate_entity_width(entity);
    entity.height = calculate_entity_height(entity);
}
