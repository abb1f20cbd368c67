//! Command execution

use std::io::Write;

use anyhow::Context;
use domxp::{DomFactory, FactoryConfig, Node, NodeSequence, Scope, XPathValue, describe, text_content};

use crate::Command;

/// Whether the lookup found anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    NotFound,
}

/// Parse `html` and run `command` against it, writing matches to `out`
pub fn run(
    command: &Command,
    html: &str,
    config: FactoryConfig,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let parser = DomFactory::with_config(config)
        .create_query_facade_from_html(html)
        .context("failed to load HTML")?;
    let scope = Scope::document();

    let outcome = match command {
        Command::Id { id } => {
            let element = parser.get_first_element_by_id(id, scope)?;
            print_nodes(out, element.map(Node::Element))?
        }
        Command::Class { name } => {
            print_sequence(out, parser.get_elements_by_class(name, scope)?)?
        }
        Command::Tag { name } => print_sequence(out, parser.get_elements_by_tag(name, scope)?)?,
        Command::Query { expression } => print_sequence(out, parser.query(expression, scope)?)?,
        Command::Eval { expression } => {
            match parser.context().evaluate(expression, scope)? {
                XPathValue::Nodes(nodes) => print_nodes(out, nodes)?,
                value => {
                    writeln!(out, "{value}")?;
                    Outcome::Found
                }
            }
        }
        Command::HasClass { id, name } => {
            match parser.get_first_element_by_id(id, scope)? {
                Some(element) => {
                    let has = parser.has_class(name, element);
                    writeln!(out, "{has}")?;
                    if has { Outcome::Found } else { Outcome::NotFound }
                }
                None => {
                    tracing::debug!("No element with id '{}'", id);
                    Outcome::NotFound
                }
            }
        }
    };

    Ok(outcome)
}

fn print_sequence(out: &mut impl Write, nodes: Option<NodeSequence<'_>>) -> anyhow::Result<Outcome> {
    print_nodes(out, nodes.into_iter().flatten())
}

fn print_nodes<'d>(
    out: &mut impl Write,
    nodes: impl IntoIterator<Item = Node<'d>>,
) -> anyhow::Result<Outcome> {
    let mut outcome = Outcome::NotFound;
    for node in nodes {
        let text = text_content(node);
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            writeln!(out, "{}", describe(node))?;
        } else {
            writeln!(out, "{}\t{}", describe(node), text)?;
        }
        outcome = Outcome::Found;
    }
    Ok(outcome)
}
