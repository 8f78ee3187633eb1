//! Funky dice - the die type a cliche rolls
//!
//! Risus rolls d6 by default. A "funky" cliche swaps in a bigger die. Tags
//! read off the wire are kept verbatim even when they are not a known die.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RisusError;

/// Die type used when rolling a cliche
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FunkyDie {
    #[default]
    D6,
    D8,
    D10,
    D12,
    D20,
    D30,
    /// A tag outside the standard set, preserved as read
    Other(String),
}

impl FunkyDie {
    /// The standard dice, smallest first.
    pub const STANDARD: [FunkyDie; 6] = [
        FunkyDie::D6,
        FunkyDie::D8,
        FunkyDie::D10,
        FunkyDie::D12,
        FunkyDie::D20,
        FunkyDie::D30,
    ];

    /// Maps a tag to a die without validating it.
    ///
    /// Known tags become their variant and an empty tag means the default
    /// d6; anything else becomes [`FunkyDie::Other`].
    ///
    /// # Examples
    ///
    /// ```
    /// use risus_domain::value_objects::FunkyDie;
    ///
    /// assert_eq!(FunkyDie::from_tag("d8"), FunkyDie::D8);
    /// assert_eq!(FunkyDie::from_tag(""), FunkyDie::D6);
    /// assert_eq!(FunkyDie::from_tag("d7"), FunkyDie::Other("d7".into()));
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "" | "d6" => Self::D6,
            "d8" => Self::D8,
            "d10" => Self::D10,
            "d12" => Self::D12,
            "d20" => Self::D20,
            "d30" => Self::D30,
            other => Self::Other(other.to_string()),
        }
    }

    /// Re-reads an `Other` tag, so `Other("")` and `Other("d8")` become the
    /// dice they name. Known variants are returned unchanged.
    pub fn normalized(self) -> Self {
        match self {
            Self::Other(tag) => Self::from_tag(&tag),
            known => known,
        }
    }

    /// Text form used on the wire and in display strings.
    pub fn tag(&self) -> &str {
        match self {
            Self::D6 => "d6",
            Self::D8 => "d8",
            Self::D10 => "d10",
            Self::D12 => "d12",
            Self::D20 => "d20",
            Self::D30 => "d30",
            Self::Other(tag) => tag.as_str(),
        }
    }

    /// Number of faces, or `None` for an unrecognized tag.
    pub fn sides(&self) -> Option<u8> {
        match self {
            Self::D6 => Some(6),
            Self::D8 => Some(8),
            Self::D10 => Some(10),
            Self::D12 => Some(12),
            Self::D20 => Some(20),
            Self::D30 => Some(30),
            Self::Other(_) => None,
        }
    }

    /// True for anything other than the default d6.
    pub fn is_funky(&self) -> bool {
        *self != Self::D6
    }

    /// True for the six standard dice.
    pub fn is_standard(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for FunkyDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Strict parse: only the standard dice are accepted.
impl FromStr for FunkyDie {
    type Err = RisusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_tag(s) {
            Self::Other(tag) => Err(RisusError::unknown_funky_die(tag)),
            die => Ok(die),
        }
    }
}

impl From<String> for FunkyDie {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<FunkyDie> for String {
    fn from(die: FunkyDie) -> String {
        match die {
            FunkyDie::Other(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}
