//! Cardholder name validation.
//!
//! A name may contain letters, spaces, apostrophes and slashes, which
//! covers inputs like `O'Brien` or `Jane/Appleseed`.
//!
//! # Example
//!
//! ```
//! use card_form::name::{validate_name, NameRule};
//!
//! assert!(validate_name("Jane Appleseed", NameRule::Letters).is_ok());
//! assert!(validate_name("O'Brien", NameRule::Letters).is_ok());
//! assert!(validate_name("R2D2", NameRule::Letters).is_err());
//! ```

use crate::{Field, FieldError};
use std::fmt;
use std::str::FromStr;

/// Which characters the name validator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NameRule {
    /// Alphabetic characters (any script), space, apostrophe and slash.
    #[default]
    Letters,
    /// Rejects only code points below `A` (65) other than space, apostrophe
    /// and slash; everything from 65 upwards passes, including `[`, `_`,
    /// `{` and `~`.
    Legacy,
}

impl NameRule {
    /// Returns true if `c` may appear in a name under this rule.
    #[inline]
    pub fn accepts(self, c: char) -> bool {
        if is_name_punctuation(c) {
            return true;
        }
        match self {
            Self::Letters => c.is_alphabetic(),
            Self::Legacy => (c as u32) >= u32::from(b'A'),
        }
    }

    /// Returns the rule name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Letters => "letters",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for NameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "letters" => Ok(Self::Letters),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown name rule '{}' (expected letters or legacy)", other)),
        }
    }
}

/// Space, apostrophe or slash.
#[inline]
const fn is_name_punctuation(c: char) -> bool {
    matches!(c, ' ' | '\'' | '/')
}

/// Validates a cardholder name.
///
/// Fails with [`FieldError::Blank`] for an empty name and with
/// [`FieldError::Format`] naming the first character the rule rejects.
///
/// # Example
///
/// ```
/// use card_form::name::{validate_name, NameRule};
/// use card_form::{ErrorKind, Field, FieldError};
///
/// assert_eq!(validate_name("", NameRule::Letters), Err(FieldError::Blank(Field::Name)));
///
/// let err = validate_name("Jane_Appleseed", NameRule::Letters).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Format);
///
/// // The legacy rule lets '_' through
/// assert!(validate_name("Jane_Appleseed", NameRule::Legacy).is_ok());
/// ```
pub fn validate_name(input: &str, rule: NameRule) -> Result<(), FieldError> {
    if input.is_empty() {
        return Err(FieldError::Blank(Field::Name));
    }

    match input.chars().enumerate().find(|&(_, c)| !rule.accepts(c)) {
        Some((position, character)) => Err(FieldError::invalid_character(
            Field::Name,
            character,
            position,
        )),
        None => Ok(()),
    }
}

/// Checks if a string is a valid cardholder name under `rule`.
#[inline]
pub fn is_valid_name(input: &str, rule: NameRule) -> bool {
    validate_name(input, rule).is_ok()
}
