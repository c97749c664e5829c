//! Discovery error types
//!
//! Every fault found while resolving shards carries the index, shard number
//! and node id involved, so the caller can retry or report it.

use thiserror::Error;

/// Errors raised while discovering indices and resolving their shards.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Node id absent from the node-metadata table of a search-shards response
    #[error("node not found in cluster node table: {node_id}")]
    NodeNotFound { node_id: String },

    /// A shard's primary copy is routed to a node the cluster did not describe
    #[error("shard {shard} of index {index} is routed to unknown node {node_id}")]
    UnresolvedNode {
        index: String,
        shard: u32,
        node_id: String,
    },

    /// No routing record claims the primary copy of a shard
    #[error("shard {shard} of index {index} has no assigned primary copy")]
    MissingPrimary { index: String, shard: u32 },

    /// A cat-shards row carries a value that is not a non-negative integer
    #[error("malformed cat shards record for index {index}: {field}={value:?}")]
    MalformedShardRecord {
        index: String,
        field: &'static str,
        value: String,
    },

    /// The search-engine client failed
    #[error("{operation} request failed: {source}")]
    Client {
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl DiscoveryError {
    pub fn node_not_found(node_id: impl Into<String>) -> Self {
        Self::NodeNotFound {
            node_id: node_id.into(),
        }
    }

    pub fn missing_primary(index: impl Into<String>, shard: u32) -> Self {
        Self::MissingPrimary {
            index: index.into(),
            shard,
        }
    }

    pub fn client(operation: &'static str, source: anyhow::Error) -> Self {
        Self::Client { operation, source }
    }

    /// Attaches shard context to a bare `NodeNotFound`.
    pub fn in_shard(self, index: &str, shard: u32) -> Self {
        match self {
            Self::NodeNotFound { node_id } => Self::UnresolvedNode {
                index: index.to_string(),
                shard,
                node_id,
            },
            other => other,
        }
    }

    /// Whether the fault comes from cluster state in flux or a failed
    /// request, both of which may clear up on a later discovery pass.
    pub fn is_retriable(&self) -> bool {
        !matches!(self, Self::MalformedShardRecord { .. })
    }
}

/// Result type for discovery operations
pub type DiscoveryResult<T> = std::result::Result<T, DiscoveryError>;
