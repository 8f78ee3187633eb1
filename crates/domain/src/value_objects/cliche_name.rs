//! Normalized cliche names
//!
//! A cliche's name is its storage key, so every path that turns a human
//! name into a key goes through [`symbolize_name`]. [`humanize_name`] is the
//! display direction and is never fed back into lookups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used between words of a normalized name.
const WORD_SEPARATOR: char = '_';

/// Converts a human name into its canonical key form.
///
/// The text is lowercased and every run of whitespace (including leading and
/// trailing runs) becomes a single underscore.
///
/// # Examples
///
/// ```
/// use risus_domain::value_objects::symbolize_name;
///
/// assert_eq!(symbolize_name("Sword Fighting"), "sword_fighting");
/// assert_eq!(symbolize_name("sword  \tfighting"), "sword_fighting");
/// assert_eq!(symbolize_name("sword_fighting"), "sword_fighting");
/// ```
pub fn symbolize_name(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                key.push(WORD_SEPARATOR);
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
            key.extend(c.to_lowercase());
        }
    }

    key
}

/// Converts a key into a display name: each underscore-separated word is
/// capitalized and the words are joined with spaces. Trailing underscores
/// are dropped, leading ones become leading spaces.
///
/// # Examples
///
/// ```
/// use risus_domain::value_objects::humanize_name;
///
/// assert_eq!(humanize_name("mighty_thews"), "Mighty Thews");
/// assert_eq!(humanize_name("sorcery"), "Sorcery");
/// ```
pub fn humanize_name(key: &str) -> String {
    let words: Vec<&str> = key.split(WORD_SEPARATOR).collect();
    let end = words
        .iter()
        .rposition(|word| !word.is_empty())
        .map_or(0, |last| last + 1);

    words[..end]
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// A normalized cliche name, valid by construction.
///
/// Two names that differ only in case or whitespace produce equal keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ClicheName(String);

impl ClicheName {
    /// Normalizes `name` into a key.
    pub fn new(name: &str) -> Self {
        Self(symbolize_name(name))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the display form of this key.
    pub fn humanize(&self) -> String {
        humanize_name(&self.0)
    }
}

impl fmt::Display for ClicheName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClicheName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ClicheName {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl From<ClicheName> for String {
    fn from(name: ClicheName) -> String {
        name.0
    }
}

impl AsRef<str> for ClicheName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
