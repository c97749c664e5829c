//! Cluster Node Module
//!
//! Identity records for the hosts of a search-engine cluster and the
//! session-scoped registry that deduplicates them.
//!
//! ## Core Concepts
//! - **Node**: Cluster-assigned id plus publish address; immutable.
//! - **Lazy registration**: `NodeRegistry::get_node_by_id` builds a `Node` from
//!   search-shards node metadata the first time an id is referenced.
//! - **Ownership**: The registry holds the only strong reference. Shards keep a
//!   weak one, so a node lives exactly as long as its registry.

pub mod registry;
pub mod types;

pub use registry::NodeRegistry;
pub use types::{Node, NodeId};
