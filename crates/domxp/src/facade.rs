//! HtmlDomParser - semantic lookups over a query context
//!
//! Every lookup is a single XPath expression. Relative expressions always
//! get an explicit context node: the scope's, or the document root.

use domxp_html::Document;
use domxp_xpath::{
    Element, NodeSequence, QueryContext, Scope, SxdEvaluator, XPathEvaluator, string_literal,
};

use crate::Result;

/// Lookups by id, class, tag and raw XPath
#[derive(Debug)]
pub struct HtmlDomParser<E = SxdEvaluator> {
    context: QueryContext<E>,
}

impl<E: XPathEvaluator> HtmlDomParser<E> {
    pub fn new(context: QueryContext<E>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &QueryContext<E> {
        &self.context
    }

    pub fn document(&self) -> &Document {
        self.context.document()
    }

    pub fn into_context(self) -> QueryContext<E> {
        self.context
    }

    /// First element whose `id` attribute equals `id`
    pub fn get_first_element_by_id<'a>(
        &'a self,
        id: &str,
        scope: Scope<'a>,
    ) -> Result<Option<Element<'a>>> {
        let expression = format!(".//*[@id={}]", string_literal(id));
        Ok(self.query(&expression, scope)?.and_then(|nodes| nodes.first_element()))
    }

    /// Elements carrying `class_name` as one of their class tokens
    pub fn get_elements_by_class<'a>(
        &'a self,
        class_name: &str,
        scope: Scope<'a>,
    ) -> Result<Option<NodeSequence<'a>>> {
        // A blank name would match every element without a class
        if class_name.trim().is_empty() {
            return Ok(None);
        }
        let expression = format!(
            ".//*[contains(concat(' ', normalize-space(@class), ' '), {})]",
            string_literal(&format!(" {class_name} "))
        );
        self.query(&expression, scope)
    }

    pub fn get_first_element_by_class<'a>(
        &'a self,
        class_name: &str,
        scope: Scope<'a>,
    ) -> Result<Option<Element<'a>>> {
        Ok(self
            .get_elements_by_class(class_name, scope)?
            .and_then(|nodes| nodes.first_element()))
    }

    /// Descendant elements named `tag`
    pub fn get_elements_by_tag<'a>(
        &'a self,
        tag: &str,
        scope: Scope<'a>,
    ) -> Result<Option<NodeSequence<'a>>> {
        self.query(&format!(".//{tag}"), scope)
    }

    /// First element among the tag matches; non-element matches such as
    /// `text()` are skipped
    pub fn get_first_element_by_tag<'a>(
        &'a self,
        tag: &str,
        scope: Scope<'a>,
    ) -> Result<Option<Element<'a>>> {
        Ok(self
            .get_elements_by_tag(tag, scope)?
            .and_then(|nodes| nodes.first_element()))
    }

    /// Run a node-set expression. No matches is `None`; a malformed
    /// expression is an error.
    pub fn query<'a>(
        &'a self,
        expression: &str,
        scope: Scope<'a>,
    ) -> Result<Option<NodeSequence<'a>>> {
        let scope = scope.or_context(self.context.root());
        Ok(self.context.query(expression, scope)?)
    }

    /// Whether `class_name` is one of the element's class tokens. Tokens
    /// are split on ASCII whitespace, the same rule `normalize-space`
    /// applies in [`get_elements_by_class`](Self::get_elements_by_class).
    pub fn has_class(&self, class_name: &str, element: Element<'_>) -> bool {
        element
            .attribute_value("class")
            .unwrap_or_default()
            .split_ascii_whitespace()
            .any(|token| token == class_name)
    }
}
