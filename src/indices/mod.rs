//! Index Discovery Module
//!
//! Builds the in-memory model a partitioned reader plans against: which
//! indices exist, which node holds the primary copy of each of their
//! shards, and what columns they expose.
//!
//! ## Workflow
//! 1. **Query**: `IndexRegistry` asks a `SearchClient` for mappings, the shard
//!    routing table and per-shard document counts.
//! 2. **Translate**: Each index mapping becomes a column schema.
//! 3. **Resolve**: Each shard number is bound to the node hosting its primary
//!    copy; nodes are created lazily through the `NodeRegistry`.
//! 4. **Merge**: `calculate_meta` folds every registered schema into one.
//!
//! ## Submodules
//! - **`types`**: `Shard` and `Index`.
//! - **`resolver`**: Primary selection and the document-count tie-break.
//! - **`registry`**: `IndexRegistry`, the discovery entry point.

pub mod registry;
pub mod resolver;
pub mod types;

pub use registry::IndexRegistry;
pub use types::{Index, Shard};
