//! Discovery configuration

use serde::{Deserialize, Serialize};

/// Options for a discovery session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Mapping type to read from typed (pre-7.x) mappings.
    ///
    /// `None` reads typeless mappings directly and, for typed mappings,
    /// every declared type in declaration order.
    #[serde(default)]
    pub doc_type: Option<String>,
}

impl DiscoveryConfig {
    pub fn with_doc_type(doc_type: impl Into<String>) -> Self {
        Self {
            doc_type: Some(doc_type.into()),
        }
    }
}
