//! Meta unification
//!
//! Folds the schemas of several indices into one schema usable as the
//! template of a dataframe whose partitions come from all of them.

use super::types::{DType, Schema};

impl DType {
    /// Resolves the dtype of a column that two indices declare.
    ///
    /// A float64 occurrence always wins, including over object. Other
    /// disagreements fall back to object.
    pub fn merge(self, other: DType) -> DType {
        match (self, other) {
            (a, b) if a == b => a,
            (DType::Float64, _) | (_, DType::Float64) => DType::Float64,
            _ => DType::Object,
        }
    }
}

impl Schema {
    /// Merges `other` into `self`. New columns are appended in `other`'s
    /// order; shared columns take the merged dtype.
    pub fn merge_from(&mut self, other: &Schema) {
        for (column, dtype) in other.iter() {
            let merged = match self.get(column) {
                Some(existing) => existing.merge(dtype),
                None => dtype,
            };
            self.insert(column, merged);
        }
    }
}

/// Unifies schemas in the order given. Columns are ordered by first
/// appearance; an empty input yields an empty schema.
pub fn unify<'a, I>(schemas: I) -> Schema
where
    I: IntoIterator<Item = &'a Schema>,
{
    schemas.into_iter().fold(Schema::new(), |mut meta, schema| {
        meta.merge_from(schema);
        meta
    })
}
