//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use card_form::view::render;
use card_form::{
    cvc, expiry, name, number, validate_field, ErrorKind, Event, Field, FieldError, FormState,
    NameRule, Phase, YearMonth,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a non-empty ASCII digit string.
fn digit_string() -> impl Strategy<Value = String> {
    "[0-9]{1,24}"
}

/// Generates a string with at least one non-digit character.
fn string_with_non_digit() -> impl Strategy<Value = String> {
    (
        "[0-9]{0,8}",
        any::<char>().prop_filter("non-digit", |c| !c.is_ascii_digit()),
        "[0-9]{0,8}",
    )
        .prop_map(|(head, c, tail)| format!("{}{}{}", head, c, tail))
}

/// Generates a valid current month.
fn year_month() -> impl Strategy<Value = YearMonth> {
    (2000u16..2099, 1u8..=12).prop_map(|(y, m)| YearMonth::new(y, m).unwrap())
}

fn field() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::Name),
        Just(Field::CardNumber),
        Just(Field::Expiry),
        Just(Field::Cvc),
    ]
}

// =============================================================================
// DIGIT FIELD PROPERTIES
// =============================================================================

proptest! {
    /// Property: Digit-only input is accepted by the card number and CVC validators.
    #[test]
    fn digit_only_accepted(input in digit_string()) {
        prop_assert!(number::validate_card_number(&input).is_ok());
        prop_assert!(cvc::validate_cvc(&input).is_ok());
    }

    /// Property: Any non-digit character is a format error.
    #[test]
    fn non_digit_rejected(input in string_with_non_digit()) {
        let err = number::validate_card_number(&input).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Format);

        let err = cvc::validate_cvc(&input).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Format);
    }

    /// Property: Validation never panics on arbitrary input.
    #[test]
    fn validators_never_panic(input in ".*", today in year_month()) {
        let _ = name::validate_name(&input, NameRule::Letters);
        let _ = name::validate_name(&input, NameRule::Legacy);
        let _ = number::validate_card_number(&input);
        let _ = expiry::validate_expiry(&input, today);
        let _ = cvc::validate_cvc(&input);
    }
}

// =============================================================================
// ERROR PROPERTIES
// =============================================================================

proptest! {
    /// Property: Empty input is a blank error; non-empty input never is.
    #[test]
    fn blank_iff_empty(field in field(), input in ".*", today in year_month()) {
        match validate_field(field, &input, today) {
            Err(FieldError::Blank(f)) => {
                prop_assert!(input.is_empty());
                prop_assert_eq!(f, field);
            }
            Err(err) => {
                prop_assert!(!input.is_empty());
                prop_assert_eq!(err.field(), field);
            }
            Ok(()) => prop_assert!(!input.is_empty()),
        }
    }

    /// Property: Validating the same input twice gives the same result and message.
    #[test]
    fn validation_is_idempotent(field in field(), input in ".{0,24}", today in year_month()) {
        let first = validate_field(field, &input, today);
        let second = validate_field(field, &input, today);
        prop_assert_eq!(
            first.as_ref().map_err(ToString::to_string),
            second.as_ref().map_err(ToString::to_string)
        );
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// NAME PROPERTIES
// =============================================================================

proptest! {
    /// Property: ASCII letters, spaces, apostrophes and slashes are accepted by both rules.
    #[test]
    fn plain_names_accepted(input in "[A-Za-z '/]{1,40}") {
        prop_assert!(name::is_valid_name(&input, NameRule::Letters));
        prop_assert!(name::is_valid_name(&input, NameRule::Legacy));
    }

    /// Property: The letters rule never accepts what the legacy rule rejects.
    #[test]
    fn letters_rule_is_stricter(input in ".{1,24}") {
        if name::is_valid_name(&input, NameRule::Letters) {
            prop_assert!(name::is_valid_name(&input, NameRule::Legacy));
        }
    }

    /// Property: Any digit makes a name invalid.
    #[test]
    fn digits_in_names_rejected(head in "[A-Za-z ]{0,10}", d in "[0-9]", tail in "[A-Za-z ]{0,10}") {
        let input = format!("{}{}{}", head, d, tail);
        prop_assert!(!name::is_valid_name(&input, NameRule::Letters));
        prop_assert!(!name::is_valid_name(&input, NameRule::Legacy));
    }
}

// =============================================================================
// EXPIRY PROPERTIES
// =============================================================================

proptest! {
    /// Property: An MM/YY date is accepted iff (YY, MM) is not before (today's YY, today's month).
    #[test]
    fn expiry_matches_month_ordering(month in 0u8..100, year in 0u8..100, today in year_month()) {
        let input = format!("{:02}/{:02}", month, year);
        let accepted = expiry::is_valid_expiry(&input, today);
        let expected = (year, month) >= (today.short_year(), today.month());
        prop_assert_eq!(accepted, expected, "{} vs {}", input, today);
    }

    /// Property: The current month always passes.
    #[test]
    fn current_month_accepted(today in year_month()) {
        prop_assert!(expiry::is_valid_expiry(&today.format_short(), today));
    }

    /// Property: Anything other than exactly five characters is a format error.
    #[test]
    fn wrong_length_rejected(input in "[0-9/]{6,12}", today in year_month()) {
        let err = expiry::validate_expiry(&input, today).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Format);
    }
}

// =============================================================================
// FORM PROPERTIES
// =============================================================================

proptest! {
    /// Property: Reset after confirmation keeps every value.
    #[test]
    fn reset_keeps_values(
        holder in "[A-Za-z ]{1,20}",
        card in "[0-9]{1,19}",
        cvc_code in "[0-9]{1,3}",
        today in year_month(),
    ) {
        let mut form = FormState::new();
        form.apply(Event::input(Field::Name, holder.as_str()), today);
        form.apply(Event::input(Field::CardNumber, card.as_str()), today);
        form.apply(Event::input(Field::Expiry, today.format_short()), today);
        form.apply(Event::input(Field::Cvc, cvc_code.as_str()), today);

        prop_assert_eq!(form.apply(Event::Submit, today), Phase::Confirmed);
        prop_assert_eq!(form.apply(Event::Reset, today), Phase::Editing);

        prop_assert_eq!(form.value(Field::Name), holder.as_str());
        prop_assert_eq!(form.value(Field::CardNumber), card.as_str());
        prop_assert_eq!(form.value(Field::Expiry), today.format_short());
        prop_assert_eq!(form.value(Field::Cvc), cvc_code.as_str());
    }

    /// Property: After submit, a field has an error iff its validator fails.
    #[test]
    fn submit_records_validator_results(
        values in proptest::collection::vec(".{0,8}", 4),
        today in year_month(),
    ) {
        let mut form = FormState::new();
        for (field, value) in Field::ALL.into_iter().zip(&values) {
            form.apply(Event::input(field, value.as_str()), today);
        }
        let confirmed = form.submit(today);

        for field in Field::ALL {
            let expected = validate_field(field, form.value(field), today).err();
            prop_assert_eq!(form.error(field), expected.as_ref());
        }
        prop_assert_eq!(confirmed, form.errors().is_empty());
    }

    /// Property: The preview shows each value, or the placeholder when empty.
    #[test]
    fn preview_mirrors_values(card in "[0-9 ]{0,19}", cvc_code in "[0-9]{0,3}") {
        let mut form = FormState::new();
        form.set_value(Field::CardNumber, &card);
        form.set_value(Field::Cvc, &cvc_code);

        let preview = render(&form).preview;
        if card.is_empty() {
            prop_assert_eq!(preview.number.as_str(), Field::CardNumber.preview_placeholder());
        } else {
            prop_assert_eq!(preview.number, card);
        }
        if cvc_code.is_empty() {
            prop_assert_eq!(preview.cvc.as_str(), Field::Cvc.preview_placeholder());
        } else {
            prop_assert_eq!(preview.cvc, cvc_code);
        }
    }
}
