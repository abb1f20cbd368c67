//! Non-empty query results

use crate::{Element, Node};

/// Nodes matched by a query, in document order.
///
/// Never empty: a query with no matches yields `None` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSequence<'d> {
    nodes: Vec<Node<'d>>,
}

impl<'d> NodeSequence<'d> {
    /// Wrap query output; `None` when there is nothing to wrap
    pub fn from_nodes(nodes: Vec<Node<'d>>) -> Option<Self> {
        if nodes.is_empty() {
            None
        } else {
            Some(Self { nodes })
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true for a constructed sequence
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node in document order
    pub fn first(&self) -> Node<'d> {
        self.nodes[0]
    }

    /// First element in document order, skipping text, attribute and
    /// other non-element nodes
    pub fn first_element(&self) -> Option<Element<'d>> {
        self.elements().next()
    }

    pub fn get(&self, index: usize) -> Option<Node<'d>> {
        self.nodes.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Node<'d>> + '_ {
        self.nodes.iter().copied()
    }

    /// Element nodes only, skipping text/attribute matches
    pub fn elements(&self) -> impl Iterator<Item = Element<'d>> + '_ {
        self.iter().filter_map(crate::as_element)
    }

    pub fn as_slice(&self) -> &[Node<'d>] {
        &self.nodes
    }

    pub fn into_vec(self) -> Vec<Node<'d>> {
        self.nodes
    }
}

impl<'d> IntoIterator for NodeSequence<'d> {
    type Item = Node<'d>;
    type IntoIter = std::vec::IntoIter<Node<'d>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, 'd> IntoIterator for &'a NodeSequence<'d> {
    type Item = &'a Node<'d>;
    type IntoIter = std::slice::Iter<'a, Node<'d>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
