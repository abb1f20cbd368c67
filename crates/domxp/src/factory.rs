//! DomFactory - documents, query contexts and facades from HTML text

use std::rc::Rc;

use domxp_html::{Document, Html5everParser, HtmlParser};
use domxp_xpath::{QueryContext, SxdEvaluator};

use crate::{Error, FactoryConfig, HtmlDomParser, Result};

/// Builds documents, query contexts and facades from raw HTML
#[derive(Debug, Clone)]
pub struct DomFactory<P = Html5everParser> {
    parser: P,
    config: FactoryConfig,
}

impl DomFactory<Html5everParser> {
    /// Factory with default configuration
    pub fn new() -> Self {
        Self::with_config(FactoryConfig::default())
    }

    pub fn with_config(config: FactoryConfig) -> Self {
        let parser = Html5everParser::with_options(config.parse.clone());
        Self { parser, config }
    }
}

impl Default for DomFactory<Html5everParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: HtmlParser> DomFactory<P> {
    /// Factory over a custom parser. `config.parse` is not applied; the
    /// parser brings its own options.
    pub fn with_parser(parser: P, config: FactoryConfig) -> Self {
        Self { parser, config }
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Parse `html` into a Document. Recoverable markup errors are
    /// discarded; only the parser's illegal-argument case (empty input)
    /// fails, as [`Error::InvalidHtmlProvided`].
    pub fn create_document(&self, html: &str) -> Result<Document> {
        self.parser
            .parse(html)
            .map_err(|source| Error::from_parse("document", html, source))
    }

    /// Bind a query context to an existing document
    pub fn create_query_context(
        &self,
        document: impl Into<Rc<Document>>,
        register_context_namespaces: bool,
    ) -> QueryContext {
        QueryContext::with_evaluator(
            document,
            register_context_namespaces,
            SxdEvaluator::with_cache_size(self.config.expression_cache_size),
        )
    }

    /// Parse `html` and bind a query context to the result
    pub fn create_query_context_from_html(
        &self,
        html: &str,
        register_context_namespaces: bool,
    ) -> Result<QueryContext> {
        let document = self.create_document(html).map_err(|err| match err {
            Error::InvalidHtmlProvided { html, source, .. } => {
                Error::invalid_html("query context", &html, source)
            }
            other => other,
        })?;
        Ok(self.create_query_context(document, register_context_namespaces))
    }

    /// Parse `html` and wrap it in a ready-to-use facade
    pub fn create_query_facade_from_html(&self, html: &str) -> Result<HtmlDomParser> {
        let document = self.create_document(html)?;
        let context = self.create_query_context(document, self.config.register_context_namespaces);
        tracing::debug!("Created query facade over {} bytes of HTML", html.len());
        Ok(HtmlDomParser::new(context))
    }
}
