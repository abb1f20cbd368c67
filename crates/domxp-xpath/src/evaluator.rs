//! XPath evaluation backed by sxd-xpath

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use sxd_xpath::{Context, Factory, Value, XPath};

use crate::prefix::used_prefixes;
use crate::{ExpressionCache, Node, QueryError};

/// Default number of compiled expressions kept per evaluator
pub(crate) const DEFAULT_CACHE_SIZE: usize = 64;

/// Result of evaluating an XPath expression
#[derive(Debug, Clone, PartialEq)]
pub enum XPathValue<'d> {
    /// Matched nodes in document order (possibly empty)
    Nodes(Vec<Node<'d>>),
    Boolean(bool),
    Number(f64),
    String(String),
}

impl XPathValue<'_> {
    /// XPath type name of the value
    pub fn kind(&self) -> &'static str {
        match self {
            XPathValue::Nodes(_) => "node-set",
            XPathValue::Boolean(_) => "boolean",
            XPathValue::Number(_) => "number",
            XPathValue::String(_) => "string",
        }
    }
}

impl fmt::Display for XPathValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XPathValue::Nodes(nodes) => write!(f, "node-set({})", nodes.len()),
            XPathValue::Boolean(b) => write!(f, "{b}"),
            XPathValue::Number(n) => write!(f, "{n}"),
            XPathValue::String(s) => f.write_str(s),
        }
    }
}

/// Evaluates XPath expressions against a document tree
pub trait XPathEvaluator {
    /// Evaluate `expression` with `context` as the context node. When
    /// `register_context_namespaces` is set, the namespace prefixes in
    /// scope on the context node are usable inside the expression.
    fn evaluate<'d>(
        &self,
        expression: &str,
        context: Node<'d>,
        register_context_namespaces: bool,
    ) -> Result<XPathValue<'d>, QueryError>;
}

/// sxd-xpath evaluator with a compiled-expression cache
pub struct SxdEvaluator {
    factory: Factory,
    cache: RefCell<ExpressionCache<Rc<XPath>>>,
}

impl SxdEvaluator {
    pub fn new() -> Self {
        Self::with_cache_size(DEFAULT_CACHE_SIZE)
    }

    /// Create an evaluator keeping at most `max_entries` compiled
    /// expressions
    pub fn with_cache_size(max_entries: usize) -> Self {
        Self {
            factory: Factory::new(),
            cache: RefCell::new(ExpressionCache::new(max_entries)),
        }
    }

    pub fn cache_stats(&self) -> crate::CacheStats {
        self.cache.borrow().stats()
    }

    fn compile(&self, expression: &str) -> Result<Rc<XPath>, QueryError> {
        let cached = self.cache.borrow_mut().get(expression);
        if let Some(xpath) = cached {
            tracing::trace!("XPath cache hit: {}", expression);
            return Ok(xpath);
        }

        let xpath = self
            .factory
            .build(expression)
            .map_err(|source| QueryError::InvalidExpression {
                expression: expression.to_string(),
                source,
            })?
            .ok_or(QueryError::EmptyExpression)?;

        let xpath = Rc::new(xpath);
        self.cache
            .borrow_mut()
            .insert(expression.to_string(), Rc::clone(&xpath));
        Ok(xpath)
    }
}

impl Default for SxdEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SxdEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SxdEvaluator")
            .field("cache", &self.cache_stats())
            .finish_non_exhaustive()
    }
}

impl XPathEvaluator for SxdEvaluator {
    fn evaluate<'d>(
        &self,
        expression: &str,
        context: Node<'d>,
        register_context_namespaces: bool,
    ) -> Result<XPathValue<'d>, QueryError> {
        let xpath = self.compile(expression)?;

        let mut xpath_context = Context::new();
        let mut bound = Vec::new();
        if register_context_namespaces {
            if let Node::Element(element) = context {
                for ns in element.namespaces_in_scope() {
                    xpath_context.set_namespace(ns.prefix(), ns.uri());
                    bound.push(ns.prefix().to_string());
                }
            }
        }

        if let Some(prefix) = used_prefixes(expression)
            .into_iter()
            .find(|prefix| !bound.iter().any(|name| name == prefix))
        {
            return Err(QueryError::UnboundPrefix {
                expression: expression.to_string(),
                prefix: prefix.to_string(),
            });
        }

        let value = xpath
            .evaluate(&xpath_context, context)
            .map_err(|source| QueryError::Evaluation {
                expression: expression.to_string(),
                source,
            })?;

        Ok(match value {
            Value::Nodeset(nodes) => XPathValue::Nodes(nodes.document_order()),
            Value::Boolean(b) => XPathValue::Boolean(b),
            Value::Number(n) => XPathValue::Number(n),
            Value::String(s) => XPathValue::String(s),
        })
    }
}
