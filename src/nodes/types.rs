use crate::client::protocol::NodeMetadata;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Cluster-assigned node identifier, stable for the node's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A host participating in the cluster.
///
/// Immutable once built; the [`NodeRegistry`](super::registry::NodeRegistry)
/// hands out shared references and owns the only strong copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub node_id: NodeId,
    /// `host:port` as published by the cluster.
    pub publish_address: String,
    /// Human-readable node name, used to match cat-shards rows.
    #[serde(default)]
    pub name: Option<String>,
}

// Accepts `ip:port`, `hostname/ip:port`, `inet[/ip:port]` and `[v6]:port`.
fn address_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:inet\[)?(?:[^/\[\]]*/)?(?:\[([^\]]+)\]|([^:/\[\]]+)):(\d+)\]?$")
            .expect("publish address pattern compiles")
    })
}

impl Node {
    pub fn new(node_id: impl Into<String>, publish_address: impl Into<String>) -> Self {
        Self {
            node_id: NodeId(node_id.into()),
            publish_address: publish_address.into(),
            name: None,
        }
    }

    pub fn from_metadata(node_id: &str, metadata: &NodeMetadata) -> Self {
        Self {
            node_id: NodeId::from(node_id),
            publish_address: metadata.transport_address.clone(),
            name: metadata.name.clone(),
        }
    }

    fn address_parts(&self) -> Option<(&str, u16)> {
        let captures = address_pattern().captures(self.publish_address.trim())?;
        let host = captures.get(1).or_else(|| captures.get(2))?.as_str();
        let port = captures.get(3)?.as_str().parse().ok()?;
        Some((host, port))
    }

    /// Host part of the publish address, `None` if it cannot be parsed.
    pub fn host(&self) -> Option<&str> {
        self.address_parts().map(|(host, _)| host)
    }

    pub fn port(&self) -> Option<u16> {
        self.address_parts().map(|(_, port)| port)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.node_id, self.publish_address)
    }
}
