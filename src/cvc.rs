//! CVC validation.
//!
//! The CVC must be digits only. Its length is not checked here; the form
//! caps the input at three characters instead.
//!
//! # Example
//!
//! ```
//! use card_form::cvc::validate_cvc;
//!
//! assert!(validate_cvc("123").is_ok());
//! assert!(validate_cvc("12a").is_err());
//! ```

use crate::number::validate_digit_field;
use crate::{Field, FieldError};

/// Validates a CVC.
pub fn validate_cvc(input: &str) -> Result<(), FieldError> {
    validate_digit_field(input, Field::Cvc)
}

/// Checks if a string is a valid CVC.
#[inline]
pub fn is_valid_cvc(input: &str) -> bool {
    validate_cvc(input).is_ok()
}
