//! Document - parsed HTML held as an sxd-document package

use std::fmt;

use sxd_document::Package;
use sxd_document::dom::{self, ChildOfElement, ChildOfRoot};

/// Parsed HTML document
///
/// Owns the tree; every node handle handed out borrows from it, so no
/// query result can outlive the document it came from.
pub struct Document {
    package: Package,
    /// Recoverable errors the parser worked around
    parse_errors: usize,
}

impl Document {
    pub(crate) fn new(package: Package, parse_errors: usize) -> Self {
        Self { package, parse_errors }
    }

    /// Borrow the underlying sxd-document tree
    pub fn dom(&self) -> dom::Document<'_> {
        self.package.as_document()
    }

    /// Document root node (parent of the `<html>` element)
    pub fn root(&self) -> dom::Root<'_> {
        self.dom().root()
    }

    /// The `<html>` element
    pub fn document_element(&self) -> Option<dom::Element<'_>> {
        self.root().children().into_iter().find_map(|child| match child {
            ChildOfRoot::Element(element) => Some(element),
            _ => None,
        })
    }

    /// The `<body>` element, if the tree builder produced one
    pub fn body(&self) -> Option<dom::Element<'_>> {
        let html = self.document_element()?;
        html.children().into_iter().find_map(|child| match child {
            ChildOfElement::Element(element) if element.name().local_part() == "body" => {
                Some(element)
            }
            _ => None,
        })
    }

    /// Number of recoverable parse errors discarded while loading
    pub fn parse_error_count(&self) -> usize {
        self.parse_errors
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("parse_errors", &self.parse_errors)
            .finish_non_exhaustive()
    }
}
