//! Plain-text report: summary, encoding table and reduction steps.

use std::fmt;

use crate::input::{DerivedInput, BASE_TEXT};
use crate::ordering::Placement;
use crate::HuffmanAnalysis;

/// One row of the encoding table.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingRow {
    /// The symbol.
    pub symbol: char,
    /// Occurrence count.
    pub frequency: u32,
    /// Relative frequency.
    pub probability: f64,
    /// Assigned codeword.
    pub codeword: String,
    /// Codeword length in bits.
    pub bit_length: usize,
}

/// Rows ordered by decreasing probability, then by symbol.
pub fn encoding_table(analysis: &HuffmanAnalysis) -> Vec<EncodingRow> {
    let freq = &analysis.frequencies;
    let mut rows: Vec<EncodingRow> = freq
        .iter()
        .map(|(symbol, frequency)| {
            let codeword = analysis.codes.get(symbol).unwrap_or_default().to_string();
            EncodingRow {
                symbol,
                frequency,
                probability: freq.probability(symbol),
                bit_length: codeword.len(),
                codeword,
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.symbol.cmp(&b.symbol))
    });
    rows
}

/// Everything shown for one name: the derived input and its analysis.
#[derive(Debug, Clone)]
pub struct NameReport {
    /// Name, vowels and derived text.
    pub input: DerivedInput,
    /// Placement used for merged nodes.
    pub placement: Placement,
    /// The computed code.
    pub analysis: HuffmanAnalysis,
}

impl NameReport {
    /// Summary block, one `key: value` per line.
    pub fn summary(&self) -> String {
        let m = &self.analysis.metrics;
        let vowels = self
            .input
            .vowels
            .iter()
            .map(|v| format!("'{v}'"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Original Text: {BASE_TEXT}\n\
             Name Input: {}\n\
             Extracted Vowels: [{vowels}]\n\
             Final String to Encode: {}\n\
             Total Symbols (N): {}\n\
             Entropy H(S): {:.4} bits/symbol\n\
             Average Length L: {:.4} bits/symbol\n\
             Efficiency η = H/L: {:.2} %",
            self.input.name,
            self.input.text,
            self.analysis.frequencies.total(),
            m.entropy,
            m.average_length,
            m.efficiency,
        )
    }
}

impl fmt::Display for NameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        writeln!(f, "Placement: {}", self.placement)?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<10} {:>9} {:>11}  {:<16} {:>10}",
            "Character", "Frequency", "Probability", "Codeword", "Bit Length"
        )?;
        for row in encoding_table(&self.analysis) {
            writeln!(
                f,
                "{:<10} {:>9} {:>11.4}  {:<16} {:>10}",
                row.symbol, row.frequency, row.probability, row.codeword, row.bit_length
            )?;
        }
        writeln!(f)?;

        for line in self.analysis.trace.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analyze_name, compute_huffman};

    #[test]
    fn test_rows_sorted_by_probability_then_symbol() {
        let analysis = compute_huffman("AERIOUSEA", Placement::High).unwrap();
        let rows = encoding_table(&analysis);
        let order: String = rows.iter().map(|r| r.symbol).collect();
        assert_eq!(order, "AEIORSU");
        assert_eq!(rows[0].frequency, 2);
        assert!((rows[0].probability - 2.0 / 9.0).abs() < 1e-12);
        for row in &rows {
            assert_eq!(row.bit_length, row.codeword.len());
        }
    }

    #[test]
    fn test_summary() {
        let report = analyze_name("Henry David Kee", Placement::High).unwrap();
        let summary = report.summary();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], "Original Text: AERIOUS");
        assert_eq!(lines[1], "Name Input: Henry David Kee");
        assert_eq!(lines[2], "Extracted Vowels: ['E', 'A']");
        assert_eq!(lines[3], "Final String to Encode: AERIOUSEA");
        assert_eq!(lines[4], "Total Symbols (N): 9");
        assert!(lines[5].starts_with("Entropy H(S): "));
        assert!(lines[7].ends_with(" %"));
    }

    #[test]
    fn test_display_includes_table_and_steps() {
        let report = analyze_name("Tan Mao Wei", Placement::Low).unwrap();
        let text = report.to_string();
        assert!(text.contains("Placement: low"));
        assert!(text.contains("Character"));
        assert!(text.contains("STEP 1: List symbols in DECREASING probability:"));
    }
}
