//! Parser configuration

use serde::{Deserialize, Serialize};

/// HTML parser options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Accept the recovered tree when the markup has errors. When false,
    /// any recorded parse error rejects the document.
    pub recover: bool,

    /// Parse `<noscript>` content as raw text, as a scripting browser would
    pub scripting_enabled: bool,

    /// Treat the input as the `srcdoc` of an iframe
    pub iframe_srcdoc: bool,

    /// Skip text nodes that contain only whitespace
    pub drop_whitespace_text: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            recover: true,
            scripting_enabled: true,
            iframe_srcdoc: false,
            drop_whitespace_text: false,
        }
    }
}
