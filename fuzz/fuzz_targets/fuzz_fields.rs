//! Fuzz target for the name, card number and CVC validators.
//!
//! Tests that validation never panics and agrees with the digit predicate.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_form::{cvc, name, number, ErrorKind, NameRule};

fuzz_target!(|data: &str| {
    // These should never panic
    let letters = name::validate_name(data, NameRule::Letters);
    let legacy = name::validate_name(data, NameRule::Legacy);
    let card = number::validate_card_number(data);
    let code = cvc::validate_cvc(data);

    // The letters rule is never looser than the legacy rule
    if letters.is_ok() {
        assert!(legacy.is_ok(), "legacy rule rejected a name the letters rule accepted");
    }

    // Digit fields agree with each other and with the predicate
    assert_eq!(card.is_ok(), code.is_ok());
    assert_eq!(card.is_ok(), !data.is_empty() && number::is_digits(data));

    if let Err(err) = card {
        let expected = if data.is_empty() { ErrorKind::Blank } else { ErrorKind::Format };
        assert_eq!(err.kind(), expected);
        let _ = err.detail();
    }
});
