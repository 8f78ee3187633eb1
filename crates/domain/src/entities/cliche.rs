//! Cliche entity - a Risus character's named trait
//!
//! A cliche is rated in dice ("Barbarian (4)"), may be marked as doubling
//! (it can be double-pumped) and may roll a funky die instead of a d6.
//!
//! # Wire format
//!
//! ```text
//! name:value:double_flag:funky_tag      e.g. mighty_thews:4:1:d6
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::codec::{self, FIELD_SEPARATOR};
use crate::error::RisusError;
use crate::value_objects::{ClicheName, FunkyDie};

/// Positional fields of a decoded cliche sub-record.
///
/// `value` is still raw text here; it becomes an integer when the fields are
/// turned into a [`Cliche`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClicheFields {
    pub name: String,
    pub value: String,
    pub is_double: bool,
    pub funky: FunkyDie,
}

/// A named trait of a Risus character
///
/// # Invariants
///
/// - `name` is always normalized (enforced by `ClicheName`)
/// - `funky` defaults to d6 whenever a die is not given
///
/// # Example
///
/// ```
/// use risus_domain::entities::Cliche;
/// use risus_domain::value_objects::FunkyDie;
///
/// let cliche = Cliche::new("Mighty Thews", 4, true, None);
/// assert_eq!(cliche.name().as_str(), "mighty_thews");
/// assert_eq!(cliche.funky(), &FunkyDie::D6);
/// assert_eq!(cliche.pack(), "mighty_thews:4:1:d6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliche {
    name: ClicheName,
    value: i32,
    is_double: bool,
    #[serde(default)]
    funky: FunkyDie,
}

impl Cliche {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a cliche. `name` is normalized; a missing die means d6.
    pub fn new(name: &str, value: i32, is_double: bool, funky: Option<FunkyDie>) -> Self {
        Self {
            name: ClicheName::new(name),
            value,
            is_double,
            funky: funky.map(FunkyDie::normalized).unwrap_or_default(),
        }
    }

    /// Decode a sub-record and build a cliche from it.
    pub fn from_packed(text: &str) -> Result<Self, RisusError> {
        Self::unpack(text).map(Self::from)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the normalized name.
    #[inline]
    pub fn name(&self) -> &ClicheName {
        &self.name
    }

    /// Returns the dice rating.
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns true if this cliche can be double-pumped.
    #[inline]
    pub fn is_double(&self) -> bool {
        self.is_double
    }

    /// Returns the die type rolled for this cliche.
    #[inline]
    pub fn funky(&self) -> &FunkyDie {
        &self.funky
    }

    /// Returns true if this cliche rolls something other than d6.
    #[inline]
    pub fn is_funky(&self) -> bool {
        self.funky.is_funky()
    }

    /// Rating and die together, e.g. `4d6`.
    pub fn dice_string(&self) -> String {
        format!("{}{}", self.value, self.funky)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Replace the rating and die. Omitting the die resets it to d6.
    ///
    /// The name and doubling flag never change after construction.
    pub fn update(&mut self, value: i32, funky: Option<FunkyDie>) {
        self.value = value;
        self.funky = funky.map(FunkyDie::normalized).unwrap_or_default();
    }

    // =========================================================================
    // Codec
    // =========================================================================

    /// Encode as `name:value:double_flag:funky_tag`.
    pub fn pack(&self) -> String {
        format!(
            "{name}{sep}{value}{sep}{double}{sep}{funky}",
            name = self.name,
            value = self.value,
            double = codec::flag_to_wire(self.is_double),
            funky = self.funky,
            sep = FIELD_SEPARATOR,
        )
    }

    /// Split a sub-record into its positional fields.
    ///
    /// The decoder is lenient: an unparsable doubling flag reads as false and
    /// unknown die tags are kept. It only fails when a field is missing.
    ///
    /// # Errors
    ///
    /// Returns `RisusError::MalformedClicheRecord` if fewer than four fields
    /// are present or the die tag is empty.
    pub fn unpack(text: &str) -> Result<ClicheFields, RisusError> {
        let mut fields = text.split(FIELD_SEPARATOR);

        let (Some(name), Some(value), Some(is_double), Some(funky)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(RisusError::malformed_cliche(text));
        };
        if funky.is_empty() {
            return Err(RisusError::malformed_cliche(text));
        }

        let extra = fields.count();
        if extra > 0 {
            tracing::warn!(record = text, extra, "Ignoring trailing cliche fields");
        }

        let funky = FunkyDie::from_tag(funky);
        if !funky.is_standard() {
            tracing::warn!(record = text, tag = funky.tag(), "Unknown funky die tag");
        }

        Ok(ClicheFields {
            name: name.to_string(),
            value: value.to_string(),
            is_double: codec::flag_from_wire(is_double),
            funky,
        })
    }
}

impl From<ClicheFields> for Cliche {
    fn from(fields: ClicheFields) -> Self {
        Self::new(
            &fields.name,
            codec::leading_i32(&fields.value),
            fields.is_double,
            Some(fields.funky),
        )
    }
}

impl FromStr for Cliche {
    type Err = RisusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_packed(s)
    }
}

/// Sheet display: `Mighty Thews[4]` when doubling, `Sorcery(3d8)` when funky.
impl fmt::Display for Cliche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.humanize();
        let value = if self.is_funky() {
            self.dice_string()
        } else {
            self.value.to_string()
        };

        if self.is_double {
            write!(f, "{}[{}]", name, value)
        } else {
            write!(f, "{}({})", name, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn new_normalizes_name() {
            let cliche = Cliche::new("Old  Sea Dog", 3, false, None);
            assert_eq!(cliche.name().as_str(), "old_sea_dog");
        }

        #[test]
        fn default_die_is_not_funky() {
            let cliche = Cliche::new("Barbarian", 4, false, None);
            assert_eq!(cliche.funky(), &FunkyDie::D6);
            assert!(!cliche.is_funky());
        }

        #[test]
        fn any_other_die_is_funky() {
            let cliche = Cliche::new("Sorcery", 3, false, Some(FunkyDie::D8));
            assert!(cliche.is_funky());

            let odd = Cliche::new("Sorcery", 3, false, Some(FunkyDie::from_tag("d7")));
            assert!(odd.is_funky());
        }

        #[test]
        fn zero_and_negative_values_are_kept() {
            assert_eq!(Cliche::new("Cowardice", 0, false, None).value(), 0);
            assert_eq!(Cliche::new("Cursed", -2, false, None).value(), -2);
        }
    }

    mod update {
        use super::*;

        #[test]
        fn replaces_value_and_die() {
            let mut cliche = Cliche::new("Sorcery", 3, true, Some(FunkyDie::D8));
            cliche.update(5, Some(FunkyDie::D12));
            assert_eq!(cliche.value(), 5);
            assert_eq!(cliche.funky(), &FunkyDie::D12);
            assert!(cliche.is_double());
            assert_eq!(cliche.name().as_str(), "sorcery");
        }

        #[test]
        fn omitted_die_resets_to_d6() {
            let mut cliche = Cliche::new("Sorcery", 3, false, Some(FunkyDie::D20));
            cliche.update(2, None);
            assert_eq!(cliche.funky(), &FunkyDie::D6);
        }
    }

    mod pack {
        use super::*;

        #[test]
        fn emits_four_fields() {
            let cliche = Cliche::new("Mighty Thews", 4, true, None);
            assert_eq!(cliche.pack(), "mighty_thews:4:1:d6");
        }

        #[test]
        fn emits_zero_flag_and_funky_tag() {
            let cliche = Cliche::new("Sorcery", 3, false, Some(FunkyDie::D10));
            assert_eq!(cliche.pack(), "sorcery:3:0:d10");
        }

        #[test]
        fn emits_unknown_tag_verbatim() {
            let cliche = Cliche::new("Luck", 1, false, Some(FunkyDie::from_tag("d3")));
            assert_eq!(cliche.pack(), "luck:1:0:d3");
        }
    }

    mod unpack {
        use super::*;

        #[test]
        fn returns_positional_fields() {
            let fields = Cliche::unpack("mighty_thews:4:1:d6").unwrap();
            assert_eq!(
                fields,
                ClicheFields {
                    name: "mighty_thews".to_string(),
                    value: "4".to_string(),
                    is_double: true,
                    funky: FunkyDie::D6,
                }
            );
        }

        #[test]
        fn no_separators_is_malformed() {
            assert_eq!(
                Cliche::unpack("badfield"),
                Err(RisusError::MalformedClicheRecord("badfield".to_string()))
            );
        }

        #[test]
        fn missing_fields_are_malformed() {
            assert!(matches!(
                Cliche::unpack("sorcery:3:0"),
                Err(RisusError::MalformedClicheRecord(_))
            ));
            assert!(matches!(
                Cliche::unpack("sorcery:3:0:"),
                Err(RisusError::MalformedClicheRecord(_))
            ));
        }

        #[test]
        fn trailing_fields_are_ignored() {
            let fields = Cliche::unpack("sorcery:3:0:d8:extra").unwrap();
            assert_eq!(fields.funky, FunkyDie::D8);
        }

        #[test]
        fn double_flag_uses_leading_integer() {
            assert!(!Cliche::unpack("a:1:0:d6").unwrap().is_double);
            assert!(Cliche::unpack("a:1:2:d6").unwrap().is_double);
            assert!(!Cliche::unpack("a:1:true:d6").unwrap().is_double);
            assert!(!Cliche::unpack("a:1::d6").unwrap().is_double);
        }

        #[test]
        fn unknown_tag_is_accepted() {
            let fields = Cliche::unpack("luck:1:0:d100").unwrap();
            assert_eq!(fields.funky, FunkyDie::Other("d100".to_string()));
        }

        #[test]
        fn value_stays_raw() {
            let fields = Cliche::unpack("luck:lots:0:d6").unwrap();
            assert_eq!(fields.value, "lots");
        }
    }

    mod from_packed {
        use super::*;

        #[test]
        fn round_trips() {
            let original = Cliche::new("Master Of Disguise", 2, true, Some(FunkyDie::D20));
            let decoded = Cliche::from_packed(&original.pack()).unwrap();
            assert_eq!(decoded, original);
        }

        #[test]
        fn empty_tag_round_trips_as_d6() {
            let original = Cliche::new("Luck", 1, false, Some(FunkyDie::from_tag("")));
            assert_eq!(original.pack(), "luck:1:0:d6");
            assert_eq!(Cliche::from_packed(&original.pack()).unwrap(), original);
        }

        #[test]
        fn directly_built_other_tags_are_normalized() {
            let blank = Cliche::new("Luck", 1, false, Some(FunkyDie::Other(String::new())));
            assert_eq!(blank.funky(), &FunkyDie::D6);
            assert_eq!(Cliche::from_packed(&blank.pack()).unwrap(), blank);

            let mut named = Cliche::new("Sorcery", 2, false, None);
            named.update(3, Some(FunkyDie::Other("d8".to_string())));
            assert_eq!(named.funky(), &FunkyDie::D8);
        }

        #[test]
        fn renormalizes_name() {
            let cliche: Cliche = "Mighty Thews:4:1:d6".parse().unwrap();
            assert_eq!(cliche.name().as_str(), "mighty_thews");
        }

        #[test]
        fn converts_value_by_leading_integer() {
            assert_eq!(Cliche::from_packed("a:3dice:0:d6").unwrap().value(), 3);
            assert_eq!(Cliche::from_packed("a:none:0:d6").unwrap().value(), 0);
        }
    }

    mod display {
        use super::*;

        #[test]
        fn plain_cliche_uses_parentheses() {
            let cliche = Cliche::new("barbarian", 4, false, None);
            assert_eq!(cliche.to_string(), "Barbarian(4)");
        }

        #[test]
        fn doubling_cliche_uses_brackets() {
            let cliche = Cliche::new("mighty thews", 4, true, None);
            assert_eq!(cliche.to_string(), "Mighty Thews[4]");
        }

        #[test]
        fn funky_cliche_shows_die() {
            let cliche = Cliche::new("sorcery", 3, false, Some(FunkyDie::D8));
            assert_eq!(cliche.to_string(), "Sorcery(3d8)");
            assert_eq!(cliche.dice_string(), "3d8");
        }

        #[test]
        fn dice_string_includes_default_die() {
            assert_eq!(Cliche::new("barbarian", 4, false, None).dice_string(), "4d6");
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn serialize_deserialize_roundtrip() {
            let cliche = Cliche::new("Sorcery", 3, true, Some(FunkyDie::D12));
            let json = serde_json::to_string(&cliche).unwrap();
            assert_eq!(
                json,
                r#"{"name":"sorcery","value":3,"isDouble":true,"funky":"d12"}"#
            );
            let decoded: Cliche = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, cliche);
        }

        #[test]
        fn empty_funky_round_trips_through_pack() {
            let json = r#"{"name":"Luck","value":1,"isDouble":false,"funky":""}"#;
            let cliche: Cliche = serde_json::from_str(json).unwrap();
            assert_eq!(cliche.funky(), &FunkyDie::D6);
            assert_eq!(Cliche::from_packed(&cliche.pack()).unwrap(), cliche);
        }

        #[test]
        fn missing_funky_defaults_to_d6() {
            let json = r#"{"name":"Old Sea Dog","value":2,"isDouble":false}"#;
            let cliche: Cliche = serde_json::from_str(json).unwrap();
            assert_eq!(cliche.name().as_str(), "old_sea_dog");
            assert_eq!(cliche.funky(), &FunkyDie::D6);
        }
    }
}
