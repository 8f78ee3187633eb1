//! Character aggregate - a Risus character sheet
//!
//! A character is a name, a description and a set of cliches keyed by their
//! normalized names.
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: cliches are only reachable through methods, so every
//!   stored cliche's name matches its key
//! - **Owned parts**: the aggregate owns its cliches outright, no sharing
//! - **Sorted storage**: a `BTreeMap` keeps display and pack order stable
//!
//! # Wire format
//!
//! ```text
//! name;desc;cliche|cliche|...      e.g. Conan;Barbarian;mighty_thews:4:1:d6
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::codec::{CLICHE_SEPARATOR, RECORD_SEPARATOR};
use crate::entities::Cliche;
use crate::error::RisusError;
use crate::value_objects::{ClicheName, FunkyDie};

/// A Risus character
///
/// # Invariants
///
/// - Every stored cliche's `name` equals its key (enforced by private storage)
/// - Cliche keys are unique; adding a cliche with an existing key replaces it
///
/// # Example
///
/// ```
/// use risus_domain::aggregates::Character;
///
/// let packed = Character::new("Conan", "Barbarian")
///     .add_named_cliche("Mighty Thews", 4, true, None)
///     .pack();
/// assert_eq!(packed, "Conan;Barbarian;mighty_thews:4:1:d6");
///
/// let decoded = Character::unpack(&packed).unwrap();
/// assert_eq!(decoded.name(), "Conan");
/// assert!(decoded.has_cliche("mighty thews"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CharacterRecord", into = "CharacterRecord")]
pub struct Character {
    name: String,
    desc: String,
    cliches: BTreeMap<ClicheName, Cliche>,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a character with no cliches. `desc` may be empty.
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            cliches: BTreeMap::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the character's display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the character's description.
    #[inline]
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Iterates over the cliches in key order.
    pub fn cliches(&self) -> impl Iterator<Item = &Cliche> {
        self.cliches.values()
    }

    /// Returns the number of cliches.
    #[inline]
    pub fn cliche_count(&self) -> usize {
        self.cliches.len()
    }

    /// Looks up a cliche by human or normalized name.
    pub fn cliche(&self, name: &str) -> Option<&Cliche> {
        self.cliches.get(&ClicheName::new(name))
    }

    /// Returns true if a cliche with this (normalized) name exists.
    pub fn has_cliche(&self, name: &str) -> bool {
        self.cliches.contains_key(&ClicheName::new(name))
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the character's description.
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Add a cliche, consuming and returning the character.
    pub fn with_cliche(mut self, cliche: Cliche) -> Self {
        self.add_cliche(cliche);
        self
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Build a cliche from its parts and add it.
    ///
    /// Replaces any cliche whose name normalizes to the same key.
    pub fn add_named_cliche(
        &mut self,
        name: &str,
        value: i32,
        is_double: bool,
        funky: Option<FunkyDie>,
    ) -> &mut Self {
        self.add_cliche(Cliche::new(name, value, is_double, funky))
    }

    /// Add an existing cliche, replacing any cliche with the same key.
    pub fn add_cliche(&mut self, cliche: Cliche) -> &mut Self {
        let key = cliche.name().clone();
        if let Some(previous) = self.cliches.insert(key, cliche) {
            tracing::trace!(cliche = %previous.name(), "Replaced existing cliche");
        }
        self
    }

    /// Update the rating and die of a cliche, if present.
    ///
    /// Unknown names are ignored. Omitting the die resets it to d6.
    pub fn update_cliche(&mut self, name: &str, value: i32, funky: Option<FunkyDie>) -> &mut Self {
        if let Some(cliche) = self.cliches.get_mut(&ClicheName::new(name)) {
            cliche.update(value, funky);
        }
        self
    }

    /// Remove a cliche by name, returning it if it was present.
    pub fn remove_cliche(&mut self, name: &str) -> Option<Cliche> {
        self.cliches.remove(&ClicheName::new(name))
    }

    // =========================================================================
    // Codec
    // =========================================================================

    /// Encode as `name;desc;cliches`, with cliches sorted by key.
    pub fn pack(&self) -> String {
        let cliches = self
            .cliches
            .values()
            .map(Cliche::pack)
            .collect::<Vec<_>>()
            .join(CLICHE_SEPARATOR);

        format!(
            "{name}{sep}{desc}{sep}{cliches}",
            name = self.name,
            desc = self.desc,
            sep = RECORD_SEPARATOR,
        )
    }

    /// Decode a packed character.
    ///
    /// Empty cliche segments are skipped and duplicate keys resolve to the
    /// last one read. Fields after the third are ignored.
    ///
    /// # Errors
    ///
    /// - `RisusError::MalformedCharacterRecord` if the record has fewer than
    ///   two fields
    /// - `RisusError::MalformedClicheRecord` from the first bad cliche; no
    ///   partial character is returned
    pub fn unpack(text: &str) -> Result<Self, RisusError> {
        let fields: Vec<&str> = text.split(RECORD_SEPARATOR).collect();
        let [name, desc, rest @ ..] = fields.as_slice() else {
            return Err(RisusError::malformed_character(text));
        };

        let mut character = Self::new(*name, *desc);

        if let Some(cliches) = rest.first() {
            for segment in cliches.split(CLICHE_SEPARATOR).filter(|s| !s.is_empty()) {
                character.add_cliche(Cliche::from_packed(segment)?);
            }
        }
        if rest.len() > 1 {
            tracing::warn!(
                character = %character.name,
                extra = rest.len() - 1,
                "Ignoring trailing character fields"
            );
        }

        tracing::debug!(
            character = %character.name,
            cliches = character.cliche_count(),
            "Unpacked character"
        );
        Ok(character)
    }
}

impl FromStr for Character {
    type Err = RisusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::unpack(s)
    }
}

/// Sheet display: name, then description and cliches on their own lines.
///
/// ```text
/// Conan
/// Barbarian
/// Cliches: Mighty Thews[4], Sorcery(2d8)
/// ```
impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.desc.is_empty() {
            write!(f, "\n{}", self.desc)?;
        }
        if !self.cliches.is_empty() {
            let cliches = self
                .cliches
                .values()
                .map(ToString::to_string)
                .collect::<Vec<_>>();
            write!(f, "\nCliches: {}", cliches.join(", "))?;
        }
        Ok(())
    }
}

// =============================================================================
// Serde
// =============================================================================

/// Serialized shape of a character. Cliches travel as a list and are re-keyed
/// on the way in.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CharacterRecord {
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    cliches: Vec<Cliche>,
}

impl From<CharacterRecord> for Character {
    fn from(record: CharacterRecord) -> Self {
        record
            .cliches
            .into_iter()
            .fold(Character::new(record.name, record.desc), Character::with_cliche)
    }
}

impl From<Character> for CharacterRecord {
    fn from(character: Character) -> Self {
        Self {
            name: character.name,
            desc: character.desc,
            cliches: character.cliches.into_values().collect(),
        }
    }
}
