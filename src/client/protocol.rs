//! Search-Engine Response Protocol
//!
//! Typed views of the three cluster API responses consumed during discovery.
//! Every structure ignores keys it does not name, so responses from newer
//! cluster versions deserialize without changes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// --- Mapping API ---

/// Response of the get-mapping API, keyed by concrete index name in
/// response order.
pub type MappingResponse = IndexMap<String, IndexMappings>;

/// The `mappings` section of one index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexMappings {
    #[serde(default)]
    pub mappings: Mappings,
}

/// Index mappings are either typeless (7.x and later) or keyed by doc type.
///
/// The typeless variant requires `properties`, so a typed mapping never
/// deserializes as a typeless one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Mappings {
    Typeless {
        properties: IndexMap<String, FieldMapping>,
    },
    Typed(IndexMap<String, TypeMapping>),
}

impl Default for Mappings {
    fn default() -> Self {
        Self::Typed(IndexMap::new())
    }
}

/// Field declarations of a single doc type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeMapping {
    #[serde(default)]
    pub properties: IndexMap<String, FieldMapping>,
}

/// A single field declaration.
///
/// Object fields declare `properties` instead of a `type`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldMapping {
    #[serde(rename = "type", default)]
    pub field_type: Option<String>,
}

// --- Search-Shards API ---

/// Response of the search-shards API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchShardsResponse {
    /// Node metadata keyed by node id.
    #[serde(default)]
    pub nodes: HashMap<String, NodeMetadata>,
    /// One group per shard; each group lists every copy of that shard.
    #[serde(default)]
    pub shards: Vec<Vec<ShardRouting>>,
}

/// What the cluster reports about a node in a search-shards response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeMetadata {
    #[serde(default)]
    pub name: Option<String>,
    pub transport_address: String,
}

/// One copy (primary or replica) of a shard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShardRouting {
    pub state: String,
    pub primary: bool,
    /// `None` while the copy is unassigned.
    pub node: Option<String>,
    pub shard: u32,
    pub index: String,
    #[serde(default)]
    pub relocating_node: Option<String>,
}

impl ShardRouting {
    pub fn is_started(&self) -> bool {
        self.state == "STARTED"
    }
}

// --- Cat-Shards API ---

/// Copy kind column of the cat-shards API.
pub const PRIREP_PRIMARY: &str = "p";

/// One row of the cat-shards API. Numbers arrive as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatShardRecord {
    pub index: String,
    pub shard: String,
    pub prirep: String,
    #[serde(default)]
    pub docs: Option<String>,
    /// Node name (not id) hosting the copy.
    #[serde(default)]
    pub node: Option<String>,
}

impl CatShardRecord {
    pub fn is_primary(&self) -> bool {
        self.prirep == PRIREP_PRIMARY
    }
}
