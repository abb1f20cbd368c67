//! domxp XPath layer
//!
//! Binds an XPath 1.0 evaluator to a parsed [`Document`] and normalizes
//! what comes back: empty node-sets become `None`, malformed expressions
//! stay errors.

mod cache;
mod context;
mod evaluator;
mod literal;
mod node;
mod prefix;
mod sequence;

pub use cache::{CacheStats, ExpressionCache};
pub use context::{QueryContext, Scope};
pub use domxp_html::Document;
pub use evaluator::{SxdEvaluator, XPathEvaluator, XPathValue};
pub use literal::string_literal;
pub use node::{as_element, describe, text_content};
pub use sequence::NodeSequence;

/// Node handle produced by queries
pub type Node<'d> = sxd_xpath::nodeset::Node<'d>;

/// Element handle produced by the `first_*` accessors
pub type Element<'d> = sxd_document::dom::Element<'d>;

/// Query error
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("empty XPath expression")]
    EmptyExpression,

    #[error("invalid XPath expression '{expression}'")]
    InvalidExpression {
        expression: String,
        #[source]
        source: sxd_xpath::ParserError,
    },

    #[error("failed to evaluate XPath expression '{expression}'")]
    Evaluation {
        expression: String,
        #[source]
        source: sxd_xpath::ExecutionError,
    },

    #[error("namespace prefix '{prefix}' is not bound in XPath expression '{expression}'")]
    UnboundPrefix { expression: String, prefix: String },

    #[error("XPath expression '{expression}' produced a {kind}, not a node-set")]
    NotANodeset {
        expression: String,
        kind: &'static str,
    },
}
