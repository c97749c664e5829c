//! Node Registry
//!
//! Identity-keyed store of the nodes seen during a discovery session. Nodes
//! are created the first time a shard references them and never removed, so
//! every shard routed to the same node id shares one `Node`.

use super::types::{Node, NodeId};
use crate::client::protocol::NodeMetadata;
use crate::error::{DiscoveryError, DiscoveryResult};

use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;

/// Holds the only strong reference to each discovered [`Node`].
pub struct NodeRegistry {
    nodes: DashMap<NodeId, Arc<Node>>,
}

impl NodeRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            nodes: DashMap::new(),
        }
    }

    /// Returns the registered node for `node_id`, building it from
    /// `cluster_nodes` on first sight.
    ///
    /// # Errors
    /// `NodeNotFound` if the id is neither registered nor described in
    /// `cluster_nodes`. Nothing is registered in that case.
    pub fn get_node_by_id(
        &self,
        node_id: &str,
        cluster_nodes: &HashMap<String, NodeMetadata>,
    ) -> DiscoveryResult<Arc<Node>> {
        if let Some(node) = self.get(node_id) {
            return Ok(node);
        }

        let metadata = cluster_nodes
            .get(node_id)
            .ok_or_else(|| DiscoveryError::node_not_found(node_id))?;

        Ok(self.register(Node::from_metadata(node_id, metadata)))
    }

    /// Registers `node` unless its id is already known. Returns the node now
    /// held under that id.
    pub fn register(&self, node: Node) -> Arc<Node> {
        self.nodes
            .entry(node.node_id.clone())
            .or_insert_with(|| {
                tracing::debug!("Registered node {}", node);
                Arc::new(node)
            })
            .value()
            .clone()
    }

    /// Looks up an already registered node.
    pub fn get(&self, node_id: &str) -> Option<Arc<Node>> {
        self.nodes
            .get(&NodeId::from(node_id))
            .map(|entry| entry.value().clone())
    }

    /// Returns the ids of all registered nodes, sorted.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.iter().map(|entry| entry.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
