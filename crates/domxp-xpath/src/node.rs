//! Node helpers

use sxd_document::dom::{ChildOfElement, ChildOfRoot};

use crate::{Element, Node};

/// The element behind `node`, if it is one
pub fn as_element(node: Node<'_>) -> Option<Element<'_>> {
    match node {
        Node::Element(element) => Some(element),
        _ => None,
    }
}

/// XPath string-value of a node: concatenated descendant text for
/// elements and the root, the value itself for everything else.
pub fn text_content(node: Node<'_>) -> String {
    match node {
        Node::Root(root) => {
            let mut out = String::new();
            for child in root.children() {
                if let ChildOfRoot::Element(element) = child {
                    collect_text(element, &mut out);
                }
            }
            out
        }
        Node::Element(element) => {
            let mut out = String::new();
            collect_text(element, &mut out);
            out
        }
        Node::Attribute(attr) => attr.value().to_string(),
        Node::Text(text) => text.text().to_string(),
        Node::Comment(comment) => comment.text().to_string(),
        Node::ProcessingInstruction(pi) => pi.value().unwrap_or_default().to_string(),
        _ => String::new(),
    }
}

fn collect_text(element: Element<'_>, out: &mut String) {
    for child in element.children() {
        match child {
            ChildOfElement::Text(text) => out.push_str(text.text()),
            ChildOfElement::Element(child) => collect_text(child, out),
            _ => {}
        }
    }
}

/// Short label for a node: `tag#id.class1.class2` for elements
pub fn describe(node: Node<'_>) -> String {
    match node {
        Node::Root(_) => "#document".to_string(),
        Node::Element(element) => {
            let mut label = element.name().local_part().to_string();
            if let Some(id) = element.attribute_value("id") {
                label.push('#');
                label.push_str(id);
            }
            if let Some(class) = element.attribute_value("class") {
                for token in class.split_ascii_whitespace() {
                    label.push('.');
                    label.push_str(token);
                }
            }
            label
        }
        Node::Attribute(attr) => format!("@{}", attr.name().local_part()),
        Node::Text(_) => "#text".to_string(),
        Node::Comment(_) => "#comment".to_string(),
        Node::ProcessingInstruction(pi) => format!("?{}", pi.target()),
        _ => "#namespace".to_string(),
    }
}
