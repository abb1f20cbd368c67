//! Query context - an evaluator bound to one document

use std::fmt;
use std::rc::Rc;

use domxp_html::Document;

use crate::evaluator::DEFAULT_CACHE_SIZE;
use crate::{Node, NodeSequence, QueryError, SxdEvaluator, XPathEvaluator, XPathValue};

/// Where a query runs and how namespaces are handled
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scope<'d> {
    context: Option<Node<'d>>,
    register_context_namespaces: Option<bool>,
}

impl<'d> Scope<'d> {
    /// Whole document, default namespace handling
    pub fn document() -> Self {
        Self::default()
    }

    /// Restrict relative expressions to the subtree of `node`
    pub fn within(node: impl Into<Node<'d>>) -> Self {
        Self {
            context: Some(node.into()),
            register_context_namespaces: None,
        }
    }

    /// Override the context's namespace-registration default
    pub fn register_namespaces(mut self, register: bool) -> Self {
        self.register_context_namespaces = Some(register);
        self
    }

    pub fn context_node(&self) -> Option<Node<'d>> {
        self.context
    }

    pub fn namespace_registration(&self) -> Option<bool> {
        self.register_context_namespaces
    }

    /// Fill in a missing context node with `root`
    pub fn or_context(self, root: Node<'d>) -> Self {
        Self {
            context: Some(self.context.unwrap_or(root)),
            ..self
        }
    }
}

/// XPath evaluator bound to a single document
///
/// The document is shared: the context keeps it alive, and every node it
/// returns borrows from the context.
pub struct QueryContext<E = SxdEvaluator> {
    document: Rc<Document>,
    register_context_namespaces: bool,
    evaluator: E,
}

impl QueryContext<SxdEvaluator> {
    /// Bind the default sxd-xpath evaluator to `document`
    pub fn new(document: impl Into<Rc<Document>>, register_context_namespaces: bool) -> Self {
        Self::with_evaluator(
            document,
            register_context_namespaces,
            SxdEvaluator::with_cache_size(DEFAULT_CACHE_SIZE),
        )
    }
}

impl<E: XPathEvaluator> QueryContext<E> {
    pub fn with_evaluator(
        document: impl Into<Rc<Document>>,
        register_context_namespaces: bool,
        evaluator: E,
    ) -> Self {
        Self {
            document: document.into(),
            register_context_namespaces,
            evaluator,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Another handle on the bound document
    pub fn shared_document(&self) -> Rc<Document> {
        Rc::clone(&self.document)
    }

    /// Default for scopes that do not say otherwise
    pub fn registers_context_namespaces(&self) -> bool {
        self.register_context_namespaces
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Document root as a query node
    pub fn root(&self) -> Node<'_> {
        Node::Root(self.document.root())
    }

    /// Evaluate any XPath expression. A scope without a context node runs
    /// against the document root.
    pub fn evaluate<'a>(
        &'a self,
        expression: &str,
        scope: Scope<'a>,
    ) -> Result<XPathValue<'a>, QueryError> {
        let context = scope.context.unwrap_or_else(|| self.root());
        let register = scope
            .register_context_namespaces
            .unwrap_or(self.register_context_namespaces);

        tracing::trace!("Evaluating XPath: {} (register namespaces: {})", expression, register);
        self.evaluator.evaluate(expression, context, register)
    }

    /// Evaluate a node-set expression; no matches is `None`
    pub fn query<'a>(
        &'a self,
        expression: &str,
        scope: Scope<'a>,
    ) -> Result<Option<NodeSequence<'a>>, QueryError> {
        match self.evaluate(expression, scope)? {
            XPathValue::Nodes(nodes) => {
                tracing::debug!("XPath {} matched {} nodes", expression, nodes.len());
                Ok(NodeSequence::from_nodes(nodes))
            }
            other => Err(QueryError::NotANodeset {
                expression: expression.to_string(),
                kind: other.kind(),
            }),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for QueryContext<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryContext")
            .field("document", &self.document)
            .field("register_context_namespaces", &self.register_context_namespaces)
            .field("evaluator", &self.evaluator)
            .finish()
    }
}
