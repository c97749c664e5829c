//! Search-Engine Client Boundary
//!
//! Discovery reads cluster state through the [`SearchClient`] trait and never
//! talks to the network itself. Implementations wrap whatever transport the
//! caller uses and return the typed responses from [`protocol`].
//!
//! ## Submodules
//! - **`protocol`**: Serde structures for the get-mapping, search-shards and
//!   cat-shards responses.

pub mod protocol;

use anyhow::Result;
use protocol::{CatShardRecord, MappingResponse, SearchShardsResponse};

/// The three cluster queries discovery depends on.
///
/// Each call receives the index pattern given to discovery and is expected to
/// block until the response is available.
pub trait SearchClient {
    /// Field mappings of every index matching the pattern.
    fn get_mapping(&self, index_pattern: &str) -> Result<MappingResponse>;

    /// Routing table (which node holds each shard copy) plus node metadata.
    fn search_shards(&self, index_pattern: &str) -> Result<SearchShardsResponse>;

    /// Per-copy document counts.
    fn cat_shards(&self, index_pattern: &str) -> Result<Vec<CatShardRecord>>;
}

impl<C: SearchClient + ?Sized> SearchClient for &C {
    fn get_mapping(&self, index_pattern: &str) -> Result<MappingResponse> {
        (**self).get_mapping(index_pattern)
    }

    fn search_shards(&self, index_pattern: &str) -> Result<SearchShardsResponse> {
        (**self).search_shards(index_pattern)
    }

    fn cat_shards(&self, index_pattern: &str) -> Result<Vec<CatShardRecord>> {
        (**self).cat_shards(index_pattern)
    }
}
