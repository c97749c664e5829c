use crate::nodes::{Node, NodeId};
use crate::schema::Schema;
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

/// One shard of an index, bound to the node hosting its primary copy.
///
/// The shard does not keep its node alive: `node()` resolves the weak
/// reference and returns `None` once the owning registry is gone.
#[derive(Debug, Clone)]
pub struct Shard {
    pub shard_id: u32,
    pub node_id: NodeId,
    node: Weak<Node>,
    /// Primary document count observed during discovery, if reported.
    pub doc_count: Option<u64>,
}

impl Shard {
    pub fn new(shard_id: u32, node: &Arc<Node>) -> Self {
        Self {
            shard_id,
            node_id: node.node_id.clone(),
            node: Arc::downgrade(node),
            doc_count: None,
        }
    }

    pub fn with_doc_count(mut self, doc_count: Option<u64>) -> Self {
        self.doc_count = doc_count;
        self
    }

    /// The node hosting the primary copy.
    pub fn node(&self) -> Option<Arc<Node>> {
        self.node.upgrade()
    }
}

/// A named index: its shards keyed by shard number plus its column schema.
#[derive(Debug, Clone)]
pub struct Index {
    pub name: String,
    pub mapping: Schema,
    shards: BTreeMap<u32, Shard>,
}

impl Index {
    pub fn new(name: impl Into<String>, mapping: Schema) -> Self {
        Self {
            name: name.into(),
            mapping,
            shards: BTreeMap::new(),
        }
    }

    /// Adds a shard, replacing any shard with the same number.
    pub fn add_shard(&mut self, shard: Shard) -> Option<Shard> {
        self.shards.insert(shard.shard_id, shard)
    }

    pub fn get_shard_by_id(&self, shard_id: u32) -> Option<&Shard> {
        self.shards.get(&shard_id)
    }

    /// Shards in shard-number order.
    pub fn shards(&self) -> impl Iterator<Item = &Shard> + '_ {
        self.shards.values()
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }
}
