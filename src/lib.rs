//! # Huffman Coding Verifier
//!
//! *Huffman prefix codes with the reduction shown step by step.*
//!
//! ## Intuition First
//!
//! Write the symbols of a message on cards, one card per symbol, with its count.
//! Keep the cards sorted from most to least frequent. Take the two least
//! frequent cards, staple them together into one card carrying the sum, and put
//! it back in its sorted place. Repeat until a single card is left. Unstapling
//! that card again, left = `0` and right = `1`, spells out each symbol's codeword.
//! Rare symbols were stapled early and sit deep, so they get long codewords;
//! frequent ones get short codewords.
//!
//! ## The Problem
//!
//! Once two cards carry the same count, the procedure does not say which goes
//! first. Different choices give different trees, and different codewords,
//! with the same average length. This crate makes that choice explicit
//! ([`Placement`]) and records every reduction so a hand-worked solution can be
//! checked line by line.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down splitting, not always optimal
//! 1952  Huffman     Bottom-up merging: optimal prefix codes
//! ```
//!
//! ## Mathematical Formulation
//!
//! For symbol probabilities $p_i$ and codeword lengths $\ell_i$:
//!
//! ```text
//! H = Σ p_i · log2(1 / p_i)       entropy
//! L = Σ p_i · ℓ_i                 average length
//! η = H / L                       efficiency
//! ```
//!
//! Huffman codes satisfy $H \le L < H + 1$.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n^2)$ for $n$ distinct symbols (ordered-vector insertion per
//!   merge), plus $O(N)$ to count $N$ input symbols.
//! - **Space**: $O(n)$ nodes; the trace holds $O(n^2)$ entries.
//!
//! ## Failure Modes
//!
//! 1. **Empty input**: there is nothing to code ([`Error::EmptyInput`]).
//! 2. **Too few vowels**: a name must supply two vowels to derive the text
//!    ([`Error::InsufficientVowels`]).
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`frequency`]: symbol counting.
//! - [`ordering`]: the decreasing-weight node list with tie placement.
//! - [`tree`]: merge-and-reorder construction plus its [`tree::Trace`].
//! - [`codes`]: codeword assignment.
//! - [`metrics`]: entropy, average length, efficiency.
//! - [`input`]: deriving the text from a name.
//! - [`report`]: plain-text rendering of the results.
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Shannon, C. E. (1948). "A Mathematical Theory of Communication."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codes;
pub mod error;
pub mod frequency;
pub mod input;
pub mod metrics;
pub mod ordering;
pub mod report;
pub mod tree;

use tracing::{debug, instrument};

pub use codes::CodeTable;
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use input::{derive_text, BASE_TEXT};
pub use metrics::Metrics;
pub use ordering::{OrderedNodeList, Placement};
pub use report::NameReport;
pub use tree::{Node, Trace};

/// Everything computed for one input text.
#[derive(Debug, Clone)]
pub struct HuffmanAnalysis {
    /// Root of the code tree.
    pub root: Node,
    /// Reduction steps.
    pub trace: Trace,
    /// Symbol counts.
    pub frequencies: FrequencyTable,
    /// Assigned codewords.
    pub codes: CodeTable,
    /// Entropy, average length and efficiency.
    pub metrics: Metrics,
}

/// Build the Huffman code for `text`.
///
/// # Errors
/// Returns `Error::EmptyInput` if `text` is empty.
#[instrument(level = "debug")]
pub fn compute_huffman(text: &str, placement: Placement) -> Result<HuffmanAnalysis> {
    let frequencies = FrequencyTable::count(text)?;
    let (root, trace) = tree::build_tree(&frequencies, placement);
    let codes = CodeTable::from_tree(&root);
    let metrics = Metrics::compute(&frequencies, &codes);
    debug!(
        entropy = metrics.entropy,
        average_length = metrics.average_length,
        efficiency = metrics.efficiency,
        "code built"
    );

    Ok(HuffmanAnalysis {
        root,
        trace,
        frequencies,
        codes,
        metrics,
    })
}

/// Derive the text from `name` and build its code.
///
/// # Errors
/// Propagates `Error::EmptyName` and `Error::InsufficientVowels` from
/// [`input::derive`]; the code is never built in that case.
pub fn analyze_name(name: &str, placement: Placement) -> Result<NameReport> {
    let input = input::derive(name)?;
    let analysis = compute_huffman(&input.text, placement)?;
    Ok(NameReport {
        input,
        placement,
        analysis,
    })
}
