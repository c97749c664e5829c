//! Partitioned Read Planning for Search-Engine Clusters
//!
//! This library models the parts of a search-engine cluster a parallel
//! dataframe engine needs to read index contents as independent partitions:
//! which node hosts the primary copy of every shard, and which columns (with
//! which types) the indices expose as one logical dataset.
//!
//! ## Modules
//! - **`client`**: The `SearchClient` boundary and typed cluster responses
//!   (mappings, shard routing, shard document counts). No network code lives here.
//! - **`nodes`**: `Node` identities and the session-scoped `NodeRegistry` that
//!   creates them on first reference.
//! - **`indices`**: `Shard`, `Index` and the `IndexRegistry` that resolves each
//!   shard to the node holding its primary copy.
//! - **`schema`**: Column dtypes, field-type translation and the meta merge
//!   across heterogeneous indices.
//! - **`config`** / **`error`**: Discovery options and error types.
//!
//! ## Usage
//! ```ignore
//! use elastic_partitions::IndexRegistry;
//!
//! let mut registry = IndexRegistry::new();
//! registry.get_indices_from_elasticsearch(&client, "logs-*")?;
//! let meta = registry.calculate_meta();
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod indices;
pub mod nodes;
pub mod schema;

pub use client::SearchClient;
pub use config::DiscoveryConfig;
pub use error::{DiscoveryError, DiscoveryResult};
pub use indices::{Index, IndexRegistry, Shard};
pub use nodes::{Node, NodeId, NodeRegistry};
pub use schema::{DType, Schema};
