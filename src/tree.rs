//! Huffman tree construction by repeated merge-and-reorder.
//!
//! The builder follows the textbook "reduction" procedure: list the symbols in
//! decreasing probability, combine the two lowest into one node, reinsert it,
//! and repeat until a single node is left. Every reduction is recorded in a
//! [`Trace`] so the process can be shown step by step.

use tracing::{debug, instrument, trace};

use crate::frequency::FrequencyTable;
use crate::ordering::{OrderedNodeList, Placement};

/// Huffman tree node.
///
/// A leaf has no children and a single-symbol label. An internal node owns
/// exactly two children; its label is `left.label + right.label` and its
/// weight is their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    label: String,
    weight: u32,
    children: Option<(Box<Node>, Box<Node>)>,
}

impl Node {
    /// Leaf for a single symbol.
    pub fn leaf(symbol: char, weight: u32) -> Self {
        Self {
            label: symbol.to_string(),
            weight,
            children: None,
        }
    }

    /// Internal node combining `left` and `right`.
    pub fn merge(left: Node, right: Node) -> Self {
        let mut label = String::with_capacity(left.label.len() + right.label.len());
        label.push_str(&left.label);
        label.push_str(&right.label);
        Self {
            label,
            weight: left.weight + right.weight,
            children: Some((Box::new(left), Box::new(right))),
        }
    }

    /// Concatenated symbols under this node.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Occurrence count of the subtree.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// True for a leaf.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The symbol of a leaf.
    pub fn symbol(&self) -> Option<char> {
        if self.is_leaf() {
            self.label.chars().next()
        } else {
            None
        }
    }

    /// Left child of an internal node.
    pub fn left(&self) -> Option<&Node> {
        self.children.as_ref().map(|(l, _)| l.as_ref())
    }

    /// Right child of an internal node.
    pub fn right(&self) -> Option<&Node> {
        self.children.as_ref().map(|(_, r)| r.as_ref())
    }

    fn entry(&self) -> Entry {
        Entry {
            label: self.label.clone(),
            weight: self.weight,
        }
    }
}

/// A `label:weight` pair captured in the trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Node label.
    pub label: String,
    /// Node weight.
    pub weight: u32,
}

/// One recorded step of the reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The leaves sorted in decreasing probability.
    Initial(Vec<Entry>),
    /// Two lowest nodes combined, then the list after reinsertion.
    Merge {
        /// Second-lowest node, becomes the left child.
        left: Entry,
        /// Lowest node, becomes the right child.
        right: Entry,
        /// The combined node.
        merged: Entry,
        /// List contents after the combined node was reinserted.
        reordered: Vec<Entry>,
    },
}

/// Record of every reduction step, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    total: u32,
    steps: Vec<Step>,
}

impl Trace {
    /// Steps in the order they happened. The first is always `Step::Initial`.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of merges performed.
    pub fn merge_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, Step::Merge { .. }))
            .count()
    }

    /// Render as human-readable lines, numbering steps from 1.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.steps.len() * 4);
        for (i, step) in self.steps.iter().enumerate() {
            let n = i + 1;
            match step {
                Step::Initial(list) => {
                    out.push(format!("STEP {n}: List symbols in DECREASING probability:"));
                    out.push(format!("  {}", self.snapshot(list)));
                }
                Step::Merge {
                    left,
                    right,
                    merged,
                    reordered,
                } => {
                    out.push(format!(
                        "STEP {n}: Combine TWO LOWEST -> ({}:{}) + ({}:{}) = ({}:{})",
                        left.label, left.weight, right.label, right.weight, merged.label, merged.weight
                    ));
                    out.push("  Reorder (DECREASING):".to_string());
                    out.push(format!("  {}", self.snapshot(reordered)));
                }
            }
            out.push(String::new());
        }
        out
    }

    fn snapshot(&self, list: &[Entry]) -> String {
        let total = f64::from(self.total.max(1));
        list.iter()
            .map(|e| format!("{}:{}({:.3})", e.label, e.weight, f64::from(e.weight) / total))
            .collect::<Vec<_>>()
            .join("  |  ")
    }
}

fn entries(list: &OrderedNodeList) -> Vec<Entry> {
    list.iter().map(Node::entry).collect()
}

/// Build the Huffman tree for `freq`, placing merged nodes per `placement`.
///
/// Returns the root and the trace of the reduction. With a single distinct
/// symbol the root is that symbol's leaf and the trace holds only the
/// initial list. An empty table yields an empty root of weight 0.
#[instrument(level = "debug", skip(freq), fields(symbols = freq.len(), total = freq.total()))]
pub fn build_tree(freq: &FrequencyTable, placement: Placement) -> (Node, Trace) {
    let leaves = freq.iter().map(|(s, w)| Node::leaf(s, w)).collect();
    let mut list = OrderedNodeList::from_nodes(leaves);

    let mut steps = vec![Step::Initial(entries(&list))];

    while list.len() > 1 {
        let (Some(right), Some(left)) = (list.pop_lowest(), list.pop_lowest()) else {
            break;
        };
        let (left_entry, right_entry) = (left.entry(), right.entry());
        let merged = Node::merge(left, right);
        let merged_entry = merged.entry();
        debug!(
            left = %left_entry.label,
            right = %right_entry.label,
            weight = merged_entry.weight,
            "combine two lowest"
        );

        list.insert(merged, placement);
        trace!(remaining = list.len(), "reinserted");

        steps.push(Step::Merge {
            left: left_entry,
            right: right_entry,
            merged: merged_entry,
            reordered: entries(&list),
        });
    }

    let root = list.pop_lowest().unwrap_or_else(|| Node {
        label: String::new(),
        weight: 0,
        children: None,
    });

    let trace = Trace {
        total: freq.total(),
        steps,
    };
    (root, trace)
}
