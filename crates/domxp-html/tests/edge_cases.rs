//! Edge case tests for domxp-html

use domxp_html::{Html5everParser, HtmlParser, ParseError, parse};
use sxd_document::dom::ChildOfElement;

fn body_element_names(html: &str) -> Vec<String> {
    let doc = parse(html).expect("parse");
    let body = doc.body().expect("body");
    body.children()
        .into_iter()
        .filter_map(|child| match child {
            ChildOfElement::Element(e) => Some(e.name().local_part().to_string()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_empty_string_rejected() {
    let result = Html5everParser::new().parse("");
    assert!(matches!(result, Err(ParseError::EmptyInput)));
}

#[test]
fn test_whitespace_only_still_parses() {
    let doc = parse("   ").expect("whitespace is not empty input");
    assert!(doc.document_element().is_some());
    assert!(doc.body().is_some());
}

#[test]
fn test_text_only() {
    let doc = parse("Hello World").unwrap();
    let body = doc.body().unwrap();
    assert_eq!(body.children().len(), 1);
}

#[test]
fn test_malformed_html_recovers() {
    let html = r#"
        <div>
            <p>Unclosed paragraph
            <span>Unclosed span
        </div>
        <p>Another paragraph without closing
    "#;
    assert_eq!(body_element_names(html), vec!["div", "p"]);
}

#[test]
fn test_misnested_tags() {
    // Adoption agency reparents the <b>
    let names = body_element_names("<p><b>bold</p>after</b>");
    assert_eq!(names[0], "p");
}

#[test]
fn test_uppercase_tags_are_lowercased() {
    assert_eq!(body_element_names("<DIV><SPAN>x</SPAN></DIV>"), vec!["div"]);
}

#[test]
fn test_comments_preserved() {
    let doc = parse("<div><!-- note --></div>").unwrap();
    let body = doc.body().unwrap();
    let div = match body.children()[0] {
        ChildOfElement::Element(e) => e,
        _ => panic!("expected div"),
    };
    assert!(matches!(div.children()[0], ChildOfElement::Comment(_)));
}

#[test]
fn test_non_html_text() {
    let doc = parse("{\"json\": true}").unwrap();
    assert!(doc.body().is_some());
}
