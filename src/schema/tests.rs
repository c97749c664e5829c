//! Schema Module Tests
//!
//! ## Test Scopes
//! - **Translation**: Declared field types map onto the three dtypes; `_id` is always present.
//! - **Schema**: Column order follows first insertion.
//! - **Meta**: Ordering by first appearance and float64 precedence on conflicts.

#[cfg(test)]
mod tests {
    use crate::client::protocol::Mappings;
    use crate::schema::{schema_from_mappings, unify, DType, Schema, ID_COLUMN};
    use serde_json::json;

    fn mappings(value: serde_json::Value) -> Mappings {
        serde_json::from_value(value).expect("Invalid mappings fixture")
    }

    // ============================================================
    // FIELD TYPE TRANSLATION
    // ============================================================

    #[test]
    fn test_date_is_timestamp() {
        assert_eq!(DType::from_field_type("date"), DType::DateTime64);
        assert_eq!(DType::from_field_type("date_nanos"), DType::DateTime64);
    }

    #[test]
    fn test_numeric_types_widen_to_float64() {
        for field_type in ["integer", "float", "long", "double", "short", "byte"] {
            assert_eq!(
                DType::from_field_type(field_type),
                DType::Float64,
                "{} should widen to float64",
                field_type
            );
        }
    }

    #[test]
    fn test_other_types_are_object() {
        for field_type in ["keyword", "text", "ip", "boolean", "geo_point", "", "no_such_type"] {
            assert_eq!(DType::from_field_type(field_type), DType::Object);
        }
    }

    #[test]
    fn test_translation_is_idempotent() {
        let first = DType::from_field_type("integer");
        let second = DType::from_field_type("integer");
        assert_eq!(first, second);
    }

    // ============================================================
    // SCHEMA FROM MAPPINGS
    // ============================================================

    #[test]
    fn test_id_column_added_to_empty_mapping() {
        let schema = schema_from_mappings("empty", &Mappings::default(), None);

        assert_eq!(schema.columns(), &[ID_COLUMN.to_string()]);
        assert_eq!(schema.get(ID_COLUMN), Some(DType::Object));
    }

    #[test]
    fn test_typed_mapping_with_doc_type() {
        // ARRANGE
        let typed = mappings(json!({
            "_doc": {
                "properties": {
                    "raised_at": {"type": "date"},
                    "score": {"type": "integer"},
                    "username": {"type": "keyword"}
                }
            },
            "legacy": {
                "properties": {
                    "other": {"type": "long"}
                }
            }
        }));

        // ACT
        let schema = schema_from_mappings("index", &typed, Some("_doc"));

        // ASSERT
        assert_eq!(schema.len(), 4);
        assert_eq!(schema.get("raised_at"), Some(DType::DateTime64));
        assert_eq!(schema.get("score"), Some(DType::Float64));
        assert_eq!(schema.get("username"), Some(DType::Object));
        assert_eq!(schema.get(ID_COLUMN), Some(DType::Object));
        assert!(!schema.contains("other"));
    }

    #[test]
    fn test_typed_mapping_missing_doc_type_keeps_only_id() {
        let typed = mappings(json!({
            "_doc": {"properties": {"score": {"type": "integer"}}}
        }));

        let schema = schema_from_mappings("index", &typed, Some("event"));

        assert_eq!(schema.columns(), &[ID_COLUMN.to_string()]);
    }

    #[test]
    fn test_typed_mapping_without_doc_type_reads_all_types() {
        let typed = mappings(json!({
            "a_type": {"properties": {"shared": {"type": "keyword"}}},
            "b_type": {"properties": {"shared": {"type": "long"}, "extra": {"type": "date"}}}
        }));

        let schema = schema_from_mappings("index", &typed, None);

        // First declaration wins
        assert_eq!(schema.get("shared"), Some(DType::Object));
        assert_eq!(schema.get("extra"), Some(DType::DateTime64));
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn test_columns_follow_mapping_declaration_order() {
        let typeless: Mappings = serde_json::from_str(
            r#"{"properties": {"zeta": {"type": "keyword"}, "alpha": {"type": "long"}, "mid": {"type": "date"}}}"#,
        )
        .expect("Invalid mappings fixture");

        let schema = schema_from_mappings("index", &typeless, None);

        assert_eq!(
            schema.columns(),
            &[
                "zeta".to_string(),
                "alpha".to_string(),
                "mid".to_string(),
                ID_COLUMN.to_string()
            ]
        );
    }

    #[test]
    fn test_typeless_mapping_ignores_doc_type() {
        let typeless = mappings(json!({
            "dynamic": "strict",
            "properties": {
                "dst_port": {"type": "integer"},
                "geo": {"properties": {"lat": {"type": "float"}}}
            }
        }));

        let schema = schema_from_mappings("index", &typeless, Some("_doc"));

        assert_eq!(schema.get("dst_port"), Some(DType::Float64));
        // object fields without a declared type stay opaque
        assert_eq!(schema.get("geo"), Some(DType::Object));
        assert_eq!(schema.get(ID_COLUMN), Some(DType::Object));
    }

    // ============================================================
    // SCHEMA ORDERING
    // ============================================================

    #[test]
    fn test_reinsert_keeps_position() {
        let mut schema: Schema = [("a", DType::Object), ("b", DType::Float64)]
            .into_iter()
            .collect();

        let previous = schema.insert("a", DType::Float64);

        assert_eq!(previous, Some(DType::Object));
        assert_eq!(schema.columns(), &["a".to_string(), "b".to_string()]);
        assert_eq!(schema.get("a"), Some(DType::Float64));
    }

    #[test]
    fn test_schema_serializes_in_column_order() {
        let schema: Schema = [
            ("zeta", DType::Float64),
            ("alpha", DType::DateTime64),
            ("_id", DType::Object),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&schema).unwrap();

        assert_eq!(
            json,
            r#"{"zeta":"float64","alpha":"datetime64[ns]","_id":"object"}"#
        );
    }

    // ============================================================
    // META UNIFICATION
    // ============================================================

    #[test]
    fn test_unify_empty_is_empty() {
        let meta = unify(std::iter::empty::<&Schema>());
        assert!(meta.is_empty());
    }

    #[test]
    fn test_unify_identical_schemas() {
        let schema: Schema = [("col1", DType::Object), ("col2", DType::Float64)]
            .into_iter()
            .collect();

        let meta = unify([&schema, &schema.clone()]);

        assert_eq!(meta, schema);
    }

    #[test]
    fn test_unify_disjoint_orders_by_first_appearance() {
        let first: Schema = [("col1", DType::Object)].into_iter().collect();
        let second: Schema = [("col2", DType::Float64), ("col0", DType::DateTime64)]
            .into_iter()
            .collect();

        let meta = unify([&first, &second]);

        assert_eq!(
            meta.columns(),
            &["col1".to_string(), "col2".to_string(), "col0".to_string()]
        );
        assert_eq!(meta.get("col2"), Some(DType::Float64));
    }

    #[test]
    fn test_float64_wins_over_object_in_either_order() {
        let object: Schema = [("col1", DType::Object)].into_iter().collect();
        let float: Schema = [("col1", DType::Float64)].into_iter().collect();

        assert_eq!(unify([&object, &float]).get("col1"), Some(DType::Float64));
        assert_eq!(unify([&float, &object]).get("col1"), Some(DType::Float64));
    }

    #[test]
    fn test_merge_rules() {
        assert_eq!(DType::Float64.merge(DType::DateTime64), DType::Float64);
        assert_eq!(DType::DateTime64.merge(DType::Object), DType::Object);
        assert_eq!(DType::DateTime64.merge(DType::DateTime64), DType::DateTime64);
    }
}
