//! Entropy, average code length and coding efficiency.
//!
//! With $p_i = f_i / N$:
//!
//! ```text
//! H = Σ p_i · log2(1 / p_i)        (bits/symbol)
//! L = Σ p_i · len(code_i)          (bits/symbol)
//! η = H / L · 100                  (percent, 0 when L = 0)
//! ```
//!
//! For a Huffman code $H \le L < H + 1$.

use crate::codes::CodeTable;
use crate::frequency::FrequencyTable;

/// Information-theoretic summary of a code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Shannon entropy H in bits/symbol.
    pub entropy: f64,
    /// Weighted average codeword length L in bits/symbol.
    pub average_length: f64,
    /// H / L as a percentage.
    pub efficiency: f64,
}

impl Metrics {
    /// Compute metrics for `codes` over the distribution in `freq`.
    ///
    /// A symbol without a codeword contributes zero length.
    pub fn compute(freq: &FrequencyTable, codes: &CodeTable) -> Self {
        let total = f64::from(freq.total());
        let mut entropy = 0.0;
        let mut average_length = 0.0;

        if total > 0.0 {
            for (symbol, count) in freq.iter() {
                let p = f64::from(count) / total;
                if p > 0.0 {
                    entropy += p * (1.0 / p).log2();
                }
                let len = codes.get(symbol).map_or(0, str::len);
                average_length += p * len as f64;
            }
        }

        let efficiency = if average_length > 0.0 {
            entropy / average_length * 100.0
        } else {
            0.0
        };

        Self {
            entropy,
            average_length,
            efficiency,
        }
    }
}
