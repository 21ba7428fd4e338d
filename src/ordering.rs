//! Probability-ordered node list.
//!
//! Huffman construction is not unique once weights tie: which of two
//! equal-weight nodes gets merged first changes the tree shape (though never
//! the average code length). The list here keeps nodes in decreasing weight
//! and lets the caller pick where a freshly merged node lands among its peers.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::tree::Node;

/// Where a merged node goes among nodes of equal weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// As early as possible: before every peer of equal weight.
    #[default]
    High,
    /// As late as possible: after every peer of equal weight.
    Low,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::High => f.write_str("high"),
            Placement::Low => f.write_str("low"),
        }
    }
}

impl FromStr for Placement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Placement::High),
            "low" => Ok(Placement::Low),
            _ => Err(Error::UnknownPlacement(s.to_string())),
        }
    }
}

/// Sort nodes by weight descending, then label ascending.
pub fn sort_descending(mut nodes: Vec<Node>) -> Vec<Node> {
    nodes.sort_by(|a, b| {
        b.weight()
            .cmp(&a.weight())
            .then_with(|| a.label().cmp(b.label()))
    });
    nodes
}

/// Nodes in decreasing weight; the lowest-weight node is last.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderedNodeList {
    nodes: Vec<Node>,
}

impl OrderedNodeList {
    /// Build a sorted list from unordered nodes.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self {
            nodes: sort_descending(nodes),
        }
    }

    /// Insert `node` keeping weights non-increasing.
    ///
    /// `High` puts it before the first node with weight <= its own, `Low`
    /// after the last node with equal weight. Label order among peers is not
    /// restored.
    pub fn insert(&mut self, node: Node, placement: Placement) {
        let weight = node.weight();
        let idx = match placement {
            Placement::High => self.nodes.partition_point(|n| n.weight() > weight),
            Placement::Low => self.nodes.partition_point(|n| n.weight() >= weight),
        };
        self.nodes.insert(idx, node);
    }

    /// Remove and return the lowest-weight (last) node.
    pub fn pop_lowest(&mut self) -> Option<Node> {
        self.nodes.pop()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no nodes remain.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate from highest to lowest weight.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// True if weights never increase front to back.
    pub fn is_descending(&self) -> bool {
        self.nodes.windows(2).all(|w| w[0].weight() >= w[1].weight())
    }
}
