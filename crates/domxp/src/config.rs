//! Factory configuration

use domxp_html::ParseOptions;
use serde::{Deserialize, Serialize};

/// Options every document and query context built by a factory share
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Default namespace handling of the query contexts it builds
    pub register_context_namespaces: bool,

    /// Compiled expressions kept per query context (0 disables the cache)
    pub expression_cache_size: usize,

    /// HTML parser options
    pub parse: ParseOptions,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            register_context_namespaces: true,
            expression_cache_size: 64,
            parse: ParseOptions::default(),
        }
    }
}
