//! HTML5 parser implementation
//!
//! Runs html5ever into its RcDom and copies the result into an
//! sxd-document package. Recovery is html5ever's; errors it reports are
//! counted and discarded unless strict parsing was requested.

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{Attribute, ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use sxd_document::{Package, QName, dom};

use crate::{Document, ParseError, ParseOptions};

const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";

/// Turns HTML text into a queryable Document
pub trait HtmlParser {
    /// Parse `html`. Empty input is the one argument every implementation
    /// must reject with [`ParseError::EmptyInput`].
    fn parse(&self, html: &str) -> Result<Document, ParseError>;
}

/// html5ever-backed parser
#[derive(Debug, Clone, Default)]
pub struct Html5everParser {
    options: ParseOptions,
}

impl Html5everParser {
    /// Create a parser with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with explicit options
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    fn parse_opts(&self) -> ParseOpts {
        ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: self.options.scripting_enabled,
                iframe_srcdoc: self.options.iframe_srcdoc,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

impl HtmlParser for Html5everParser {
    fn parse(&self, html: &str) -> Result<Document, ParseError> {
        if html.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        tracing::debug!("Parsing HTML document ({} bytes)", html.len());

        let dom = parse_document(RcDom::default(), self.parse_opts()).one(html);

        let errors = dom.errors.borrow();
        if !errors.is_empty() {
            if !self.options.recover {
                return Err(ParseError::Malformed {
                    count: errors.len(),
                    first: errors[0].to_string(),
                });
            }
            tracing::debug!("Discarded {} recoverable parse errors", errors.len());
        }

        let package = Package::new();
        {
            let target = package.as_document();
            let root = target.root();
            let converter = Converter {
                document: target,
                drop_whitespace_text: self.options.drop_whitespace_text,
            };
            converter.convert_children(&dom.document, Parent::Root(root));
        }

        Ok(Document::new(package, errors.len()))
    }
}

/// Where converted nodes get appended
#[derive(Clone, Copy)]
enum Parent<'d> {
    Root(dom::Root<'d>),
    Element(dom::Element<'d>),
}

/// Copies an RcDom subtree into an sxd-document
struct Converter<'d> {
    document: dom::Document<'d>,
    drop_whitespace_text: bool,
}

impl<'d> Converter<'d> {
    fn convert_children(&self, handle: &Handle, parent: Parent<'d>) {
        for child in handle.children.borrow().iter() {
            self.convert_node(child, parent);
        }
    }

    fn convert_node(&self, handle: &Handle, parent: Parent<'d>) {
        match &handle.data {
            NodeData::Document => self.convert_children(handle, parent),
            // The XPath data model has no doctype node
            NodeData::Doctype { .. } => {}
            NodeData::Text { contents } => {
                let contents = contents.borrow();
                let text: &str = &contents;
                if self.drop_whitespace_text && text.trim().is_empty() {
                    return;
                }
                // Text can only hang off elements
                if let Parent::Element(element) = parent {
                    element.append_child(self.document.create_text(text));
                }
            }
            NodeData::Comment { contents } => {
                let comment = self.document.create_comment(contents);
                match parent {
                    Parent::Root(root) => root.append_child(comment),
                    Parent::Element(element) => element.append_child(comment),
                }
            }
            NodeData::ProcessingInstruction { target, contents } => {
                let value: &str = contents;
                let pi = self.document.create_processing_instruction(target, Some(value));
                match parent {
                    Parent::Root(root) => root.append_child(pi),
                    Parent::Element(element) => element.append_child(pi),
                }
            }
            NodeData::Element { name, attrs, .. } => {
                // Elements stay in no namespace so `//div` matches the way
                // HTML authors expect.
                let local: &str = &name.local;
                let element = self.document.create_element(local);
                for attr in attrs.borrow().iter() {
                    copy_attribute(element, attr);
                }

                match parent {
                    Parent::Root(root) => root.append_child(element),
                    Parent::Element(parent) => parent.append_child(element),
                }

                self.convert_children(handle, Parent::Element(element));
            }
        }
    }
}

fn copy_attribute(element: dom::Element<'_>, attr: &Attribute) {
    let local: &str = &attr.name.local;
    let ns: &str = &attr.name.ns;
    let value: &str = &attr.value;

    if ns.is_empty() {
        if local != "xmlns" {
            element.set_attribute_value(local, value);
        }
        return;
    }

    // Namespace declarations are not attributes in the XPath data model
    if ns == XMLNS_NAMESPACE {
        return;
    }

    // Foreign attributes (xlink:href, xml:lang) keep their namespace; the
    // prefix is registered so it shows up among the element's in-scope
    // namespaces.
    if let Some(prefix) = &attr.name.prefix {
        let prefix: &str = prefix;
        if prefix != "xml" {
            element.register_prefix(prefix, ns);
        }
    }
    element.set_attribute_value(QName::with_namespace_uri(Some(ns), local), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sxd_document::dom::ChildOfElement;

    fn element_children<'d>(element: dom::Element<'d>) -> Vec<dom::Element<'d>> {
        element
            .children()
            .into_iter()
            .filter_map(|child| match child {
                ChildOfElement::Element(e) => Some(e),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
        let doc = Html5everParser::new().parse(html).unwrap();

        let root = doc.document_element().expect("html element");
        assert_eq!(root.name().local_part(), "html");
        let names: Vec<_> = element_children(root)
            .iter()
            .map(|e| e.name().local_part().to_string())
            .collect();
        assert_eq!(names, vec!["head", "body"]);
    }

    #[test]
    fn test_parse_fragment() {
        // Fragments get wrapped in html/head/body by html5ever
        let doc = Html5everParser::new().parse("<div><span>Text</span></div>").unwrap();
        let body = doc.body().expect("body");
        let divs = element_children(body);
        assert_eq!(divs.len(), 1);
        assert_eq!(divs[0].name().local_part(), "div");
    }

    #[test]
    fn test_attributes_copied() {
        let doc = Html5everParser::new()
            .parse(r#"<p id="intro" class="lead  big" data-x="1">Hi</p>"#)
            .unwrap();
        let p = element_children(doc.body().unwrap())[0];
        assert_eq!(p.attribute_value("id"), Some("intro"));
        assert_eq!(p.attribute_value("class"), Some("lead  big"));
        assert_eq!(p.attribute_value("data-x"), Some("1"));
    }

    #[test]
    fn test_whitespace_text_kept_by_default() {
        let html = "<div> <span>a</span> </div>";

        let doc = Html5everParser::new().parse(html).unwrap();
        let div = element_children(doc.body().unwrap())[0];
        assert_eq!(div.children().len(), 3);

        let parser = Html5everParser::with_options(ParseOptions {
            drop_whitespace_text: true,
            ..Default::default()
        });
        let doc = parser.parse(html).unwrap();
        let div = element_children(doc.body().unwrap())[0];
        assert_eq!(div.children().len(), 1);
    }

    #[test]
    fn test_strict_mode_rejects_errors() {
        let parser = Html5everParser::with_options(ParseOptions {
            recover: false,
            ..Default::default()
        });
        // Missing doctype is a parse error
        let err = parser.parse("<p>unclosed").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn test_recovered_errors_are_counted() {
        let doc = Html5everParser::new().parse("<p>unclosed <b>bold").unwrap();
        assert!(doc.parse_error_count() > 0);

        let doc = Html5everParser::new()
            .parse("<!DOCTYPE html><html><head></head><body></body></html>")
            .unwrap();
        assert_eq!(doc.parse_error_count(), 0);
    }
}
