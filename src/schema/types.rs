use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Semantic column type of a dataframe column read from an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DType {
    /// 64-bit floating point. Every numeric field widens to this so that
    /// missing values stay representable.
    #[serde(rename = "float64")]
    Float64,
    /// Generic/opaque object.
    #[serde(rename = "object")]
    Object,
    /// 64-bit nanosecond-resolution timestamp.
    #[serde(rename = "datetime64[ns]")]
    DateTime64,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::Float64 => write!(f, "float64"),
            DType::Object => write!(f, "object"),
            DType::DateTime64 => write!(f, "datetime64[ns]"),
        }
    }
}

/// Ordered column -> dtype mapping.
///
/// Used both as the per-index mapping and as the unified meta. Columns keep
/// the position of their first insertion; re-inserting a column only
/// replaces its dtype.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
    dtypes: HashMap<String, DType>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dtype of `column`, appending it if unseen.
    /// Returns the previous dtype.
    pub fn insert(&mut self, column: impl Into<String>, dtype: DType) -> Option<DType> {
        let column = column.into();
        let previous = self.dtypes.insert(column.clone(), dtype);
        if previous.is_none() {
            self.columns.push(column);
        }
        previous
    }

    pub fn get(&self, column: &str) -> Option<DType> {
        self.dtypes.get(column).copied()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.dtypes.contains_key(column)
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// `(column, dtype)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, DType)> + '_ {
        self.columns
            .iter()
            .filter_map(|column| self.get(column).map(|dtype| (column.as_str(), dtype)))
    }
}

impl<K: Into<String>> FromIterator<(K, DType)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, DType)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (column, dtype) in iter {
            schema.insert(column, dtype);
        }
        schema
    }
}

/// Serializes as a JSON object whose keys follow column order.
impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (column, dtype) in self.iter() {
            map.serialize_entry(column, &dtype)?;
        }
        map.end()
    }
}
