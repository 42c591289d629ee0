//! # card_form
//!
//! Credit card entry form: field validators, a form state machine and a view
//! model for a live card preview.
//!
//! ## Features
//!
//! - Cardholder name, card number, `MM/YY` expiry and CVC validators
//! - Blank/format error per field, with the messages shown next to each input
//! - Explicit form state machine (`Editing` / `Confirmed`)
//! - View model for the card preview, the form and the thank-you panel
//! - Interfaces: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use card_form::{Event, Field, FormState, Phase, YearMonth};
//!
//! let today = YearMonth::new(2025, 3).unwrap();
//! let mut form = FormState::new();
//!
//! form.apply(Event::input(Field::Name, "Jane Appleseed"), today);
//! form.apply(Event::input(Field::CardNumber, "1234567890123456"), today);
//! form.apply(Event::input(Field::Expiry, "03/25"), today);
//! form.apply(Event::input(Field::Cvc, "123"), today);
//!
//! assert_eq!(form.apply(Event::Submit, today), Phase::Confirmed);
//!
//! // "Continue" returns to the form, keeping the values
//! assert_eq!(form.apply(Event::Reset, today), Phase::Editing);
//! assert_eq!(form.value(Field::Name), "Jane Appleseed");
//! ```
//!
//! ## Field Validators
//!
//! ```rust
//! use card_form::{cvc, expiry, name, number, ErrorKind, YearMonth};
//! use card_form::name::NameRule;
//!
//! assert!(name::validate_name("O'Brien", NameRule::Letters).is_ok());
//! assert!(number::validate_card_number("4111111111111111").is_ok());
//! assert!(cvc::validate_cvc("123").is_ok());
//!
//! let err = number::validate_card_number("4111 1111").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Format);
//! assert_eq!(err.to_string(), "Wrong format, numbers only.");
//!
//! // Expiry dates are checked against an explicit current month
//! let today = YearMonth::new(2025, 3).unwrap();
//! assert!(expiry::validate_expiry("02/25", today).is_err());
//! assert!(expiry::validate_expiry("03/25", today).is_ok());
//! ```
//!
//! ## Validation Rules
//!
//! | Field | Blank | Format |
//! |-------|-------|--------|
//! | Name | empty | letters, space, `'` and `/` only |
//! | Card number | empty | ASCII digits only (no length or Luhn check) |
//! | Expiry | empty | `MM/YY`, not before the current month |
//! | CVC | empty | ASCII digits only |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for the view model, `Deserialize` for `FormConfig` |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly bindings |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod cvc;
pub mod error;
pub mod expiry;
pub mod field;
pub mod form;
pub mod name;
pub mod number;
pub mod view;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use config::FormConfig;
pub use error::{ErrorKind, FieldError};
pub use expiry::YearMonth;
pub use field::Field;
pub use form::{Event, FieldState, FormState, Phase};
pub use name::NameRule;
pub use view::{render, ViewModel};

/// Validates `value` as `field` on its own.
///
/// `today` is only used for the expiry date. The name is checked with the
/// default [`NameRule`].
///
/// # Example
///
/// ```
/// use card_form::{validate_field, Field, YearMonth};
///
/// let today = YearMonth::new(2025, 3).unwrap();
/// assert!(validate_field(Field::Cvc, "123", today).is_ok());
/// assert!(validate_field(Field::Expiry, "1/25", today).is_err());
/// ```
pub fn validate_field(field: Field, value: &str, today: YearMonth) -> Result<(), FieldError> {
    validate_field_with_rule(field, value, today, NameRule::default())
}

/// Validates `value` as `field`, checking names with `rule`.
pub fn validate_field_with_rule(
    field: Field,
    value: &str,
    today: YearMonth,
    rule: NameRule,
) -> Result<(), FieldError> {
    match field {
        Field::Name => name::validate_name(value, rule),
        Field::CardNumber => number::validate_card_number(value),
        Field::Expiry => expiry::validate_expiry(value, today).map(|_| ()),
        Field::Cvc => cvc::validate_cvc(value),
    }
}
