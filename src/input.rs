//! Text derivation from a person's name.
//!
//! The text to encode is a fixed base string followed by the first two vowels
//! of the name, upper-cased.

use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// Base string every derived text starts with.
pub const BASE_TEXT: &str = "AERIOUS";

/// A name and the text derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedInput {
    /// The trimmed name.
    pub name: String,
    /// The first two vowels, upper-cased.
    pub vowels: [char; 2],
    /// `BASE_TEXT` followed by the two vowels.
    pub text: String,
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'A' | 'E' | 'I' | 'O' | 'U' | 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Up to two vowels from `name`, in order of appearance, upper-cased.
pub fn first_two_vowels(name: &str) -> Vec<char> {
    name.chars()
        .filter(|&ch| is_vowel(ch))
        .map(|ch| ch.to_ascii_uppercase())
        .take(2)
        .collect()
}

/// Derive the full input from `name`.
///
/// # Errors
/// `Error::EmptyName` for a blank name, `Error::InsufficientVowels` when
/// fewer than two vowels are present.
#[instrument(level = "debug")]
pub fn derive(name: &str) -> Result<DerivedInput> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyName);
    }

    let found = first_two_vowels(name);
    let vowels = match found[..] {
        [a, b] => [a, b],
        _ => {
            return Err(Error::InsufficientVowels {
                name: name.to_string(),
                found: found.len(),
            })
        }
    };

    let mut text = String::with_capacity(BASE_TEXT.len() + 2);
    text.push_str(BASE_TEXT);
    text.extend(vowels);
    debug!(%text, "derived text");

    Ok(DerivedInput {
        name: name.to_string(),
        vowels,
        text,
    })
}

/// Derive only the text to encode from `name`.
///
/// # Errors
/// See [`derive`].
pub fn derive_text(name: &str) -> Result<String> {
    derive(name).map(|d| d.text)
}
