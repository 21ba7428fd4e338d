//! Codeword assignment by tree traversal.

use std::collections::BTreeMap;

use crate::tree::Node;

/// Symbol to codeword map. Codewords are strings of `'0'` and `'1'`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// Assign codewords: `'0'` for a left edge, `'1'` for a right edge.
    ///
    /// A tree that is a single leaf gets the codeword `"0"` so no symbol is
    /// left with an empty code.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = BTreeMap::new();
        // Explicit stack, right pushed first so left subtrees are visited first.
        let mut stack = vec![(root, String::new())];

        while let Some((node, prefix)) = stack.pop() {
            match (node.left(), node.right()) {
                (Some(left), Some(right)) => {
                    let mut right_prefix = prefix.clone();
                    right_prefix.push('1');
                    stack.push((right, right_prefix));

                    let mut left_prefix = prefix;
                    left_prefix.push('0');
                    stack.push((left, left_prefix));
                }
                _ => {
                    if let Some(symbol) = node.symbol() {
                        let code = if prefix.is_empty() {
                            "0".to_string()
                        } else {
                            prefix
                        };
                        codes.insert(symbol, code);
                    }
                }
            }
        }

        Self { codes }
    }

    /// Codeword for `symbol`.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of symbols with a codeword.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no codewords were assigned.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, codeword)` in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c.as_str()))
    }

    /// True if no codeword is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut words: Vec<&str> = self.codes.values().map(String::as_str).collect();
        // After sorting, a prefix sorts immediately before some word it prefixes.
        words.sort_unstable();
        words.windows(2).all(|w| !w[1].starts_with(w[0]))
    }
}
