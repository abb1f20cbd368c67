//! domxp
//!
//! Load an HTML string, then look elements up by id, class, tag or raw
//! XPath. Parsing is html5ever's and evaluation is sxd-xpath's; this crate
//! builds the expressions and normalizes the results.
//!
//! # Example
//! ```rust
//! use domxp::{DomFactory, Scope};
//!
//! let parser = DomFactory::new()
//!     .create_query_facade_from_html(r#"<div id="x" class="a b"></div>"#)?;
//! let div = parser.get_first_element_by_id("x", Scope::document())?.unwrap();
//! assert!(parser.has_class("a", div));
//! assert!(parser.get_elements_by_tag("span", Scope::document())?.is_none());
//! # Ok::<(), domxp::Error>(())
//! ```

mod config;
mod error;
mod facade;
mod factory;

pub use config::FactoryConfig;
pub use error::{Error, Result};
pub use facade::HtmlDomParser;
pub use factory::DomFactory;

pub use domxp_html::{Document, Html5everParser, HtmlParser, ParseError, ParseOptions};
pub use domxp_xpath::{
    Element, Node, NodeSequence, QueryContext, QueryError, Scope, SxdEvaluator, XPathEvaluator,
    XPathValue, describe, text_content,
};

// Re-export sub-crates for advanced usage
pub use domxp_html as html;
pub use domxp_xpath as xpath;
