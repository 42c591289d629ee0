//! Card number validation.
//!
//! The card number must consist of ASCII digits only. Separators are not
//! accepted, and neither the length nor a Luhn checksum is checked.
//!
//! # Example
//!
//! ```
//! use card_form::number::validate_card_number;
//!
//! assert!(validate_card_number("1234567890123456").is_ok());
//! assert!(validate_card_number("1234 5678 9012 3456").is_err());
//! ```

use crate::{Field, FieldError};

/// Returns the first character that is not an ASCII digit, with its position.
#[inline]
pub(crate) fn first_non_digit(input: &str) -> Option<(usize, char)> {
    input.chars().enumerate().find(|&(_, c)| !c.is_ascii_digit())
}

/// Returns true if every character is an ASCII digit (`0`-`9`).
///
/// The empty string counts as digit-only.
///
/// # Example
///
/// ```
/// use card_form::number::is_digits;
///
/// assert!(is_digits("0123"));
/// assert!(is_digits(""));
/// assert!(!is_digits("12a"));
/// assert!(!is_digits("١٢٣")); // non-ASCII digits
/// ```
#[inline]
pub fn is_digits(input: &str) -> bool {
    first_non_digit(input).is_none()
}

/// Checks a digit-only field, producing the blank or format error for `field`.
pub(crate) fn validate_digit_field(input: &str, field: Field) -> Result<(), FieldError> {
    if input.is_empty() {
        return Err(FieldError::Blank(field));
    }

    match first_non_digit(input) {
        Some((position, character)) => Err(FieldError::invalid_character(field, character, position)),
        None => Ok(()),
    }
}

/// Validates a card number.
///
/// # Example
///
/// ```
/// use card_form::number::validate_card_number;
/// use card_form::{Field, FieldError};
///
/// assert_eq!(validate_card_number(""), Err(FieldError::Blank(Field::CardNumber)));
/// assert_eq!(
///     validate_card_number("4111-1111").unwrap_err().to_string(),
///     "Wrong format, numbers only."
/// );
/// ```
pub fn validate_card_number(input: &str) -> Result<(), FieldError> {
    validate_digit_field(input, Field::CardNumber)
}

/// Checks if a string is a valid card number.
#[inline]
pub fn is_valid_card_number(input: &str) -> bool {
    validate_card_number(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatReason;

    #[test]
    fn test_digits_only() {
        assert!(validate_card_number("1234567890123456").is_ok());
        assert!(validate_card_number("0").is_ok());
        // No length check
        assert!(validate_card_number("1234567890123456789012345").is_ok());
    }

    #[test]
    fn test_no_checksum() {
        // Fails Luhn, still accepted
        assert!(is_valid_card_number("4111111111111112"));
    }

    #[test]
    fn test_blank() {
        assert_eq!(
            validate_card_number(""),
            Err(FieldError::Blank(Field::CardNumber))
        );
    }

    #[test]
    fn test_separators_rejected() {
        let err = validate_card_number("1234 5678").unwrap_err();
        assert_eq!(
            err,
            FieldError::Format {
                field: Field::CardNumber,
                reason: FormatReason::InvalidCharacter {
                    character: ' ',
                    position: 4
                }
            }
        );
        assert!(!is_valid_card_number("1234-5678"));
    }

    #[test]
    fn test_letters_rejected() {
        assert!(!is_valid_card_number("123a"));
        assert!(!is_valid_card_number("x"));
        assert!(!is_valid_card_number("+1234"));
    }

    #[test]
    fn test_first_non_digit() {
        assert_eq!(first_non_digit("12a4b"), Some((2, 'a')));
        assert_eq!(first_non_digit("1234"), None);
        assert_eq!(first_non_digit(""), None);
    }
}
