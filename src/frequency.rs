//! Symbol frequency counting.

use crate::error::{Error, Result};

/// Occurrence counts per symbol, kept in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(char, u32)>,
    total: u32,
}

impl FrequencyTable {
    /// Count every `char` of `text`.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `text` is empty.
    pub fn count(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut entries: Vec<(char, u32)> = Vec::new();
        let mut total = 0;
        for ch in text.chars() {
            // Alphabets here are tiny, a linear scan beats hashing.
            match entries.iter_mut().find(|(s, _)| *s == ch) {
                Some((_, count)) => *count += 1,
                None => entries.push((ch, 1)),
            }
            total += 1;
        }

        Ok(Self { entries, total })
    }

    /// Total number of symbols counted (N).
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a table built by [`FrequencyTable::count`].
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for `symbol`, if present.
    pub fn get(&self, symbol: char) -> Option<u32> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|&(_, count)| count)
    }

    /// Relative frequency of `symbol` (0 if absent).
    pub fn probability(&self, symbol: char) -> f64 {
        self.get(symbol)
            .map_or(0.0, |count| f64::from(count) / f64::from(self.total))
    }

    /// Iterate `(symbol, count)` in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_keeps_first_appearance_order() {
        let table = FrequencyTable::count("BANANA").unwrap();
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![('B', 1), ('A', 3), ('N', 2)]);
        assert_eq!(table.total(), 6);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(FrequencyTable::count(""), Err(Error::EmptyInput));
    }

    #[test]
    fn test_probability() {
        let table = FrequencyTable::count("AAAB").unwrap();
        assert!((table.probability('A') - 0.75).abs() < 1e-12);
        assert_eq!(table.probability('Z'), 0.0);
        assert_eq!(table.get('B'), Some(1));
    }

    #[test]
    fn test_counts_unicode_scalars() {
        let table = FrequencyTable::count("ηηa").unwrap();
        assert_eq!(table.get('η'), Some(2));
        assert_eq!(table.total(), 3);
    }
}
