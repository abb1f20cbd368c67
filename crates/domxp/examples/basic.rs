//! Example: Basic usage of domxp

use domxp::{DomFactory, Scope, describe, text_content};

const HTML: &str = r#"
<div id="content">
    <article class="post featured"><h2>First</h2></article>
    <article class="post"><h2>Second</h2></article>
</div>
"#;

fn main() -> Result<(), domxp::Error> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let parser = DomFactory::new().create_query_facade_from_html(HTML)?;

    if let Some(posts) = parser.get_elements_by_class("post", Scope::document())? {
        for post in posts.iter() {
            println!("{}: {}", describe(post), text_content(post).trim());
        }
    }

    let content = parser
        .get_first_element_by_id("content", Scope::document())?
        .expect("content div");
    let headings = parser.get_elements_by_tag("h2", Scope::within(content))?;
    println!("{} headings", headings.map_or(0, |h| h.len()));

    Ok(())
}
