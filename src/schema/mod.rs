//! Column Schema Module
//!
//! Models the column types a dataframe engine sees when it reads index
//! contents.
//!
//! ## Core Concepts
//! - **DType**: One of float64, object or datetime64[ns].
//! - **Schema**: Ordered column -> dtype map, used per index and for the meta.
//! - **Translation**: Declared field types collapse onto the three dtypes; every
//!   index also carries the synthetic `_id` column.
//! - **Meta**: Schemas of heterogeneous indices fold into one, ordered by first
//!   appearance, with float64 winning type conflicts.

pub mod mapping;
pub mod meta;
pub mod types;

pub use mapping::{schema_from_mappings, ID_COLUMN};
pub use meta::unify;
pub use types::{DType, Schema};

#[cfg(test)]
mod tests;
