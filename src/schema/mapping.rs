//! Field-type translation
//!
//! Turns the field declarations of an index mapping into a [`Schema`].

use super::types::{DType, Schema};
use crate::client::protocol::{FieldMapping, Mappings};
use indexmap::IndexMap;

/// Synthetic document-identifier column present in every index schema.
pub const ID_COLUMN: &str = "_id";

const NUMERIC_TYPES: &[&str] = &[
    "long",
    "integer",
    "short",
    "byte",
    "double",
    "float",
    "half_float",
    "scaled_float",
    "unsigned_long",
];

const DATE_TYPES: &[&str] = &["date", "date_nanos"];

impl DType {
    /// Translates a declared field type. Total: anything unrecognized is
    /// [`DType::Object`].
    pub fn from_field_type(field_type: &str) -> DType {
        if DATE_TYPES.contains(&field_type) {
            DType::DateTime64
        } else if NUMERIC_TYPES.contains(&field_type) {
            DType::Float64
        } else {
            DType::Object
        }
    }
}

fn dtype_for_field(field: &FieldMapping) -> DType {
    field
        .field_type
        .as_deref()
        .map_or(DType::Object, DType::from_field_type)
}

fn insert_fields(schema: &mut Schema, properties: &IndexMap<String, FieldMapping>) {
    for (name, field) in properties {
        // first declaration wins when several doc types declare a field
        if !schema.contains(name) {
            schema.insert(name.clone(), dtype_for_field(field));
        }
    }
}

/// Builds the schema of one index from its mappings.
///
/// With `doc_type` set, only that type of a typed mapping is read; a
/// typeless mapping is read regardless. The `_id` column is always appended.
pub fn schema_from_mappings(index: &str, mappings: &Mappings, doc_type: Option<&str>) -> Schema {
    let mut schema = Schema::new();

    match mappings {
        Mappings::Typeless { properties } => insert_fields(&mut schema, properties),
        Mappings::Typed(types) => match doc_type {
            Some(doc_type) => match types.get(doc_type) {
                Some(mapping) => insert_fields(&mut schema, &mapping.properties),
                None => tracing::warn!(
                    "Index {} declares no mapping for doc type '{}'",
                    index,
                    doc_type
                ),
            },
            None => {
                for mapping in types.values() {
                    insert_fields(&mut schema, &mapping.properties);
                }
            }
        },
    }

    schema.insert(ID_COLUMN, DType::Object);
    schema
}
