//! Index Registry
//!
//! Assembles [`Index`] objects from the cluster's mapping, routing and
//! shard-count responses, and folds their schemas into one meta.
//!
//! Registration order matters: the meta orders columns by first appearance
//! across indices in the order they were registered.

use super::resolver::{group_routing, DocCounts, ResolutionContext};
use super::types::Index;
use crate::client::SearchClient;
use crate::config::DiscoveryConfig;
use crate::error::{DiscoveryError, DiscoveryResult};
use crate::nodes::NodeRegistry;
use crate::schema::{schema_from_mappings, unify, Schema};

use std::collections::HashMap;

/// Indices discovered during one session plus the nodes hosting them.
pub struct IndexRegistry {
    indices: Vec<Index>,
    positions: HashMap<String, usize>,
    nodes: NodeRegistry,
    config: DiscoveryConfig,
}

impl IndexRegistry {
    /// Creates an empty registry with the default config.
    pub fn new() -> Self {
        Self::with_config(DiscoveryConfig::default())
    }

    pub fn with_config(config: DiscoveryConfig) -> Self {
        Self {
            indices: Vec::new(),
            positions: HashMap::new(),
            nodes: NodeRegistry::new(),
            config,
        }
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    pub fn node_registry(&self) -> &NodeRegistry {
        &self.nodes
    }

    /// Registers an index. An index with the same name is replaced in place
    /// and returned; a new name is appended.
    pub fn insert(&mut self, index: Index) -> Option<Index> {
        match self.positions.get(&index.name) {
            Some(&position) => Some(std::mem::replace(&mut self.indices[position], index)),
            None => {
                self.positions.insert(index.name.clone(), self.indices.len());
                self.indices.push(index);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Index> {
        self.positions
            .get(name)
            .and_then(|&position| self.indices.get(position))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Registered indices in registration order.
    pub fn indices(&self) -> impl Iterator<Item = &Index> + '_ {
        self.indices.iter()
    }

    pub fn index_names(&self) -> Vec<&str> {
        self.indices.iter().map(|index| index.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Discovers every index matching `index_pattern` and merges it into
    /// the registry.
    ///
    /// Indices found in one call are registered in the order the mapping
    /// response lists them. The call is all-or-nothing: if any index fails
    /// to resolve, none of the indices from this call are registered.
    ///
    /// # Returns
    /// The names of the indices discovered by this call.
    ///
    /// # Errors
    /// - `Client` if one of the three cluster queries fails.
    /// - `MalformedShardRecord` for unparseable cat-shards rows.
    /// - `MissingPrimary` / `UnresolvedNode` from shard resolution.
    pub fn get_indices_from_elasticsearch<C>(
        &mut self,
        client: &C,
        index_pattern: &str,
    ) -> DiscoveryResult<Vec<String>>
    where
        C: SearchClient + ?Sized,
    {
        let mappings = client
            .get_mapping(index_pattern)
            .map_err(|err| DiscoveryError::client("get_mapping", err))?;
        let routing = client
            .search_shards(index_pattern)
            .map_err(|err| DiscoveryError::client("search_shards", err))?;
        let cat_records = client
            .cat_shards(index_pattern)
            .map_err(|err| DiscoveryError::client("cat_shards", err))?;

        let doc_counts = DocCounts::from_records(&cat_records)?;
        let routing_by_index = group_routing(&routing.shards);
        let context = ResolutionContext {
            cluster_nodes: &routing.nodes,
            doc_counts: &doc_counts,
            nodes: &self.nodes,
        };

        let mut discovered = Vec::with_capacity(mappings.len());
        for (name, index_mappings) in &mappings {
            let schema = schema_from_mappings(
                name,
                &index_mappings.mappings,
                self.config.doc_type.as_deref(),
            );
            let mut index = Index::new(name.clone(), schema);

            match routing_by_index.get(name.as_str()) {
                Some(groups) => {
                    for shard in context.resolve_index(name, groups)? {
                        index.add_shard(shard);
                    }
                }
                None => tracing::warn!("Index {} has no shard routing (closed index?)", name),
            }

            tracing::debug!(
                "Assembled index {} with {} shards and {} columns",
                index.name,
                index.shard_count(),
                index.mapping.len()
            );
            discovered.push(index);
        }

        for name in routing_by_index.keys() {
            if !mappings.contains_key(*name) {
                tracing::warn!("Index {} has shard routing but no mapping, skipping", name);
            }
        }

        let names: Vec<String> = discovered.iter().map(|index| index.name.clone()).collect();
        for index in discovered {
            self.insert(index);
        }

        tracing::info!(
            "Discovered {} indices for pattern '{}' ({} registered, {} nodes)",
            names.len(),
            index_pattern,
            self.indices.len(),
            self.nodes.len()
        );

        Ok(names)
    }

    /// Computes the meta: one schema across every registered index, columns
    /// ordered by first appearance in registration order.
    pub fn calculate_meta(&self) -> Schema {
        unify(self.indices.iter().map(|index| &index.mapping))
    }
}

impl Default for IndexRegistry {
    fn default() -> Self {
        Self::new()
    }
}
