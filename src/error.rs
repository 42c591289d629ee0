//! Field validation errors.
//!
//! A failing field has exactly one error: either it was left blank or its
//! content has the wrong format. `Display` renders the message shown next to
//! the input; [`FieldError::detail`] explains the failure for logs and tools.

use crate::Field;
use std::fmt;

/// The two kinds of field failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// The field is empty.
    Blank,
    /// The field is non-empty but fails its character-class or shape check.
    Format,
}

/// Why a non-empty field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatReason {
    /// A character outside the field's accepted set.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Its position in the input, counted in characters (0-indexed).
        position: usize,
    },
    /// The input does not have the `MM/YY` shape.
    Shape,
    /// The expiry month lies before the current month.
    Expired {
        /// The two-digit month as entered.
        month: u8,
        /// The two-digit year as entered.
        year: u8,
    },
}

/// A failed field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field was left empty.
    Blank(Field),

    /// The field has content that fails its format check.
    Format {
        /// The field that failed.
        field: Field,
        /// What was wrong with it.
        reason: FormatReason,
    },
}

impl FieldError {
    /// Creates an invalid-character error.
    pub(crate) const fn invalid_character(field: Field, character: char, position: usize) -> Self {
        Self::Format {
            field,
            reason: FormatReason::InvalidCharacter {
                character,
                position,
            },
        }
    }

    /// Returns the field the error belongs to.
    pub const fn field(&self) -> Field {
        match self {
            Self::Blank(field) => *field,
            Self::Format { field, .. } => *field,
        }
    }

    /// Returns whether the field was blank or badly formatted.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Blank(_) => ErrorKind::Blank,
            Self::Format { .. } => ErrorKind::Format,
        }
    }

    /// Returns the user-facing message shown next to the input.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Blank(field) => field.blank_message(),
            Self::Format { field, .. } => field.format_message(),
        }
    }

    /// Returns a developer-oriented description of the failure.
    ///
    /// Includes the offending character or the expired month, so it should
    /// not be shown where the user-facing message is expected.
    pub fn detail(&self) -> String {
        match self {
            Self::Blank(field) => format!("{} is empty", field),
            Self::Format { field, reason } => match reason {
                FormatReason::InvalidCharacter {
                    character,
                    position,
                } => format!(
                    "{}: invalid character '{}' at position {}",
                    field,
                    character.escape_default(),
                    position
                ),
                FormatReason::Shape => format!("{}: expected MM/YY", field),
                FormatReason::Expired { month, year } => {
                    format!("{}: {:02}/{:02} is in the past", field, month, year)
                }
            },
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}
