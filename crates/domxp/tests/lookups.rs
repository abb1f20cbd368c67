//! Lookup behavior over realistic documents

use domxp::{DomFactory, Error, HtmlDomParser, Node, QueryError, Scope, text_content};

const PAGE: &str = r#"
<html>
    <head><title>Catalog</title></head>
    <body>
        <div id="nav" class="menu top">
            <a href="/" class="link active">Home</a>
            <a href="/about" class="link">About</a>
        </div>
        <div id="content" class="main">
            <section id="first" class="card">
                <h2>First</h2>
                <p class="note">One</p>
            </section>
            <section id="second" class="card featured">
                <h2>Second</h2>
                <p class="note">Two</p>
                <p class="note-extra">Three</p>
            </section>
        </div>
        <p class="footer note">Footer</p>
    </body>
</html>
"#;

fn page() -> HtmlDomParser {
    DomFactory::new().create_query_facade_from_html(PAGE).unwrap()
}

#[test]
fn test_scenario_single_div() {
    let parser = DomFactory::new()
        .create_query_facade_from_html(r#"<div id="x" class="a b"></div>"#)
        .unwrap();

    let div = parser.get_first_element_by_id("x", Scope::document()).unwrap().unwrap();
    assert_eq!(div.name().local_part(), "div");
    assert!(parser.has_class("a", div));
    assert!(parser.has_class("b", div));
    assert!(!parser.has_class("c", div));
    assert!(parser.get_elements_by_tag("span", Scope::document()).unwrap().is_none());

    let divs = parser.query("//div", Scope::document()).unwrap().unwrap();
    assert_eq!(divs.len(), 1);
    assert_eq!(divs.first_element(), Some(div));
}

#[test]
fn test_class_token_exactness() {
    let parser = DomFactory::new()
        .create_query_facade_from_html(r#"<div class="foo foobar"></div>"#)
        .unwrap();
    assert!(parser.get_elements_by_class("foo", Scope::document()).unwrap().is_some());
    assert!(parser.get_elements_by_class("foobar", Scope::document()).unwrap().is_some());
    assert!(parser.get_elements_by_class("bar", Scope::document()).unwrap().is_none());
    assert!(parser.get_elements_by_class("oo", Scope::document()).unwrap().is_none());
}

#[test]
fn test_class_with_irregular_whitespace() {
    let parser = DomFactory::new()
        .create_query_facade_from_html("<div id=d class=\"  alpha\tbeta\n gamma \"></div>")
        .unwrap();
    let div = parser.get_first_element_by_id("d", Scope::document()).unwrap().unwrap();

    for class in ["alpha", "beta", "gamma"] {
        let found = parser
            .get_first_element_by_class(class, Scope::document())
            .unwrap();
        assert_eq!(found, Some(div), "xpath lookup of {class}");
        assert!(parser.has_class(class, div), "has_class of {class}");
    }
}

#[test]
fn test_absence_law() {
    let parser = page();
    assert!(
        parser
            .get_elements_by_tag("nonexistent-tag", Scope::document())
            .unwrap()
            .is_none()
    );
    assert!(parser.get_elements_by_class("missing", Scope::document()).unwrap().is_none());
    assert!(parser.get_first_element_by_id("missing", Scope::document()).unwrap().is_none());
    assert!(parser.query("//table", Scope::document()).unwrap().is_none());
}

#[test]
fn test_first_matches_full_sequence() {
    let parser = page();
    for class in ["card", "note", "link", "featured", "absent"] {
        let all = parser.get_elements_by_class(class, Scope::document()).unwrap();
        let first = parser.get_first_element_by_class(class, Scope::document()).unwrap();
        match all {
            Some(nodes) => assert_eq!(first, nodes.first_element()),
            None => assert!(first.is_none()),
        }
    }
}

#[test]
fn test_document_order() {
    let parser = page();
    let notes = parser.get_elements_by_class("note", Scope::document()).unwrap().unwrap();
    let notes: Vec<_> = notes.iter().map(|n| text_content(n).trim().to_string()).collect();
    assert_eq!(notes, vec!["One", "Two", "Footer"]);
}

#[test]
fn test_idempotent_lookups() {
    let parser = page();
    let a = parser.get_elements_by_tag("section", Scope::document()).unwrap();
    let b = parser.get_elements_by_tag("section", Scope::document()).unwrap();
    assert_eq!(a, b);

    let a = parser.get_first_element_by_id("second", Scope::document()).unwrap();
    let b = parser.get_first_element_by_id("second", Scope::document()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_context_scoping() {
    let parser = page();
    let second = parser
        .get_first_element_by_id("second", Scope::document())
        .unwrap()
        .unwrap();

    let paragraphs = parser
        .get_elements_by_tag("p", Scope::within(second))
        .unwrap()
        .unwrap();
    assert_eq!(paragraphs.len(), 2);

    let notes = parser
        .get_elements_by_class("note", Scope::within(second))
        .unwrap()
        .unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(text_content(notes.first()).trim(), "Two");

    // Ids outside the subtree are not found
    assert!(
        parser
            .get_first_element_by_id("first", Scope::within(second))
            .unwrap()
            .is_none()
    );
    // The context node itself is not its own descendant
    assert!(
        parser
            .get_elements_by_tag("section", Scope::within(second))
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_tag_lookup_defaults_to_document_root() {
    let parser = page();
    let sections = parser.get_elements_by_tag("section", Scope::document()).unwrap().unwrap();
    assert_eq!(sections.len(), 2);

    let html = parser.get_elements_by_tag("html", Scope::document()).unwrap().unwrap();
    assert_eq!(html.len(), 1);
}

#[test]
fn test_quotes_in_values_are_literal() {
    let parser = DomFactory::new()
        .create_query_facade_from_html(r#"<p id="it's">a</p><p id='say "hi"'>b</p><p id="x' or '1'='1">c</p>"#)
        .unwrap();

    let p = parser.get_first_element_by_id("it's", Scope::document()).unwrap().unwrap();
    assert_eq!(text_content(Node::Element(p)), "a");

    let p = parser
        .get_first_element_by_id(r#"say "hi""#, Scope::document())
        .unwrap()
        .unwrap();
    assert_eq!(text_content(Node::Element(p)), "b");

    // No injection: matches only the element whose id is the literal text
    let p = parser
        .get_first_element_by_id("x' or '1'='1", Scope::document())
        .unwrap()
        .unwrap();
    assert_eq!(text_content(Node::Element(p)), "c");
    assert!(
        parser
            .get_first_element_by_id("' or '1'='1", Scope::document())
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_malformed_expression_is_an_error() {
    let parser = page();
    let err = parser.query("//div[", Scope::document()).unwrap_err();
    assert!(matches!(err, Error::Query(QueryError::InvalidExpression { .. })));

    let err = parser.query("count(//div)", Scope::document()).unwrap_err();
    assert!(matches!(err, Error::Query(QueryError::NotANodeset { .. })));
}

#[test]
fn test_query_returns_non_element_nodes() {
    let parser = page();
    let hrefs = parser.query("//a/@href", Scope::document()).unwrap().unwrap();
    assert_eq!(hrefs.len(), 2);
    assert!(hrefs.first_element().is_none());
    assert_eq!(text_content(hrefs.first()), "/");
}

#[test]
fn test_malformed_html_is_queryable() {
    let parser = DomFactory::new()
        .create_query_facade_from_html("<ul><li>one<li>two<li class=x>three</ul><p>tail")
        .unwrap();
    let items = parser.get_elements_by_tag("li", Scope::document()).unwrap().unwrap();
    assert_eq!(items.len(), 3);
    assert!(parser.get_first_element_by_class("x", Scope::document()).unwrap().is_some());
}

#[test]
fn test_unbound_prefix_is_an_error() {
    let parser = page();

    let err = parser.query("//x:p", Scope::document()).unwrap_err();
    assert!(matches!(err, Error::Query(QueryError::UnboundPrefix { .. })));

    let err = parser.get_elements_by_tag("svg:rect", Scope::document()).unwrap_err();
    assert!(matches!(err, Error::Query(QueryError::UnboundPrefix { .. })));

    let nav = parser.get_first_element_by_id("nav", Scope::document()).unwrap().unwrap();
    let err = parser
        .query("@xlink:href", Scope::within(nav).register_namespaces(false))
        .unwrap_err();
    assert!(matches!(err, Error::Query(QueryError::UnboundPrefix { .. })));
}

#[test]
fn test_first_element_skips_leading_text() {
    let parser = page();
    let first = parser.get_first_element_by_id("first", Scope::document()).unwrap().unwrap();

    let all = parser.get_elements_by_tag("node()", Scope::within(first)).unwrap().unwrap();
    assert!(!matches!(all.first(), Node::Element(_)));

    let heading = parser
        .get_first_element_by_tag("node()", Scope::within(first))
        .unwrap()
        .unwrap();
    assert_eq!(heading.name().local_part(), "h2");
    assert_eq!(Some(heading), all.elements().next());

    let text = parser.get_elements_by_tag("text()", Scope::within(first)).unwrap();
    assert!(text.is_some());
    assert!(parser.get_first_element_by_tag("text()", Scope::within(first)).unwrap().is_none());
}
