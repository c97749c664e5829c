//! Shard-to-node resolution
//!
//! Picks, for every shard number of an index, the routing record of its
//! primary copy and binds a [`Shard`] to the node holding it.
//!
//! Routing records and document counts come from two separate requests, so
//! they can describe slightly different moments of cluster state. When more
//! than one record claims to be primary for a shard, the cat-shards document
//! counts decide: the copy reporting more documents wins.

use super::types::Shard;
use crate::client::protocol::{CatShardRecord, NodeMetadata, ShardRouting};
use crate::error::{DiscoveryError, DiscoveryResult};
use crate::nodes::NodeRegistry;

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

/// Routing records of one index grouped by shard number.
pub type ShardGroups<'a> = BTreeMap<u32, Vec<&'a ShardRouting>>;

/// Groups a search-shards routing table by index, then shard number.
///
/// Records are regrouped by their own `(index, shard)` fields rather than
/// trusting the response's group boundaries.
pub fn group_routing(shards: &[Vec<ShardRouting>]) -> HashMap<&str, ShardGroups<'_>> {
    let mut by_index: HashMap<&str, ShardGroups<'_>> = HashMap::new();
    for record in shards.iter().flatten() {
        by_index
            .entry(record.index.as_str())
            .or_default()
            .entry(record.shard)
            .or_default()
            .push(record);
    }
    by_index
}

#[derive(Debug, Clone)]
struct PrimaryDocs {
    docs: Option<u64>,
    node_name: Option<String>,
}

/// Primary-copy document counts from a cat-shards response.
#[derive(Debug, Default)]
pub struct DocCounts {
    primaries: HashMap<(String, u32), Vec<PrimaryDocs>>,
}

fn parse_number<T: std::str::FromStr>(
    record: &CatShardRecord,
    field: &'static str,
    value: &str,
) -> DiscoveryResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| DiscoveryError::MalformedShardRecord {
            index: record.index.clone(),
            field,
            value: value.to_string(),
        })
}

impl DocCounts {
    /// Collects primary rows; replica rows are ignored.
    pub fn from_records(records: &[CatShardRecord]) -> DiscoveryResult<Self> {
        let mut primaries: HashMap<(String, u32), Vec<PrimaryDocs>> = HashMap::new();

        for record in records.iter().filter(|record| record.is_primary()) {
            let shard: u32 = parse_number(record, "shard", &record.shard)?;
            let docs = match record.docs.as_deref() {
                Some(docs) => Some(parse_number::<u64>(record, "docs", docs)?),
                None => None,
            };

            primaries
                .entry((record.index.clone(), shard))
                .or_default()
                .push(PrimaryDocs {
                    docs,
                    node_name: record.node.clone(),
                });
        }

        Ok(Self { primaries })
    }

    fn entries(&self, index: &str, shard: u32) -> &[PrimaryDocs] {
        self.primaries
            .get(&(index.to_string(), shard))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Highest primary document count reported for the shard. An absent
    /// count sorts below any number.
    pub fn best(&self, index: &str, shard: u32) -> Option<u64> {
        self.entries(index, shard)
            .iter()
            .map(|entry| entry.docs)
            .max()
            .flatten()
    }

    /// Highest primary document count reported for the shard on the node
    /// with the given name.
    pub fn best_on_node(&self, index: &str, shard: u32, node_name: &str) -> Option<u64> {
        self.entries(index, shard)
            .iter()
            .filter(|entry| entry.node_name.as_deref() == Some(node_name))
            .map(|entry| entry.docs)
            .max()
            .flatten()
    }
}

/// A routing record claiming to be primary, with the node id it names.
type PrimaryClaim<'a> = (&'a ShardRouting, &'a str);

/// Inputs shared by every index resolved in one discovery pass.
pub struct ResolutionContext<'a> {
    pub cluster_nodes: &'a HashMap<String, NodeMetadata>,
    pub doc_counts: &'a DocCounts,
    pub nodes: &'a NodeRegistry,
}

impl ResolutionContext<'_> {
    fn node_name(&self, node_id: &str) -> Option<String> {
        match self.cluster_nodes.get(node_id) {
            Some(metadata) => metadata.name.clone(),
            None => self.nodes.get(node_id).and_then(|node| node.name.clone()),
        }
    }

    /// Chooses among several primary claims for one shard: highest document
    /// count on the claiming node, then a started copy, then routing order.
    /// Returns the winning claim and its document count.
    fn break_tie<'r>(
        &self,
        index: &str,
        shard: u32,
        claims: &[PrimaryClaim<'r>],
    ) -> Option<(PrimaryClaim<'r>, Option<u64>)> {
        let (docs, _, _, claim) = claims
            .iter()
            .enumerate()
            .map(|(position, claim)| {
                let (record, node_id) = *claim;
                let docs = self
                    .node_name(node_id)
                    .and_then(|name| self.doc_counts.best_on_node(index, shard, &name));
                (docs, record.is_started(), Reverse(position), *claim)
            })
            .max_by_key(|(docs, started, position, _)| (*docs, *started, *position))?;

        Some((claim, docs.or_else(|| self.doc_counts.best(index, shard))))
    }

    /// Builds one shard per shard number of `index`, each bound to the node
    /// holding its primary copy.
    ///
    /// # Errors
    /// - `MissingPrimary` if a shard number has no assigned primary record.
    /// - `UnresolvedNode` if a primary is routed to a node id the cluster
    ///   did not describe.
    pub fn resolve_index(
        &self,
        index: &str,
        groups: &ShardGroups<'_>,
    ) -> DiscoveryResult<Vec<Shard>> {
        let mut shards = Vec::with_capacity(groups.len());

        for (&shard_id, records) in groups {
            let claims: Vec<PrimaryClaim<'_>> = records
                .iter()
                .copied()
                .filter(|record| record.primary)
                .filter_map(|record| record.node.as_deref().map(|node_id| (record, node_id)))
                .collect();

            let ((_, node_id), doc_count) = match claims.as_slice() {
                [] => return Err(DiscoveryError::missing_primary(index, shard_id)),
                [single] => (*single, self.doc_counts.best(index, shard_id)),
                several => {
                    tracing::warn!(
                        "Index {} shard {} has {} primary records, choosing by document count",
                        index,
                        shard_id,
                        several.len()
                    );
                    self.break_tie(index, shard_id, several)
                        .ok_or_else(|| DiscoveryError::missing_primary(index, shard_id))?
                }
            };

            let node = self
                .nodes
                .get_node_by_id(node_id, self.cluster_nodes)
                .map_err(|err| err.in_shard(index, shard_id))?;

            shards.push(Shard::new(shard_id, &node).with_doc_count(doc_count));
        }

        Ok(shards)
    }
}
