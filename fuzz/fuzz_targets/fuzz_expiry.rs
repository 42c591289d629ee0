//! Fuzz target for expiry date validation.
//!
//! Tests that expiry validation never panics on arbitrary input or months.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_form::expiry::{self, YearMonth};

fuzz_target!(|input: (&str, u16, u8)| {
    let (data, year, month) = input;

    // These should never panic
    let _ = YearMonth::parse(data);

    let Some(today) = YearMonth::new(year, month) else {
        return;
    };

    if let Ok(exp) = expiry::validate_expiry(data, today) {
        // Accepted dates round-trip through Display
        assert_eq!(exp.to_string(), data);
        assert!((exp.year(), exp.month()) >= (today.short_year(), today.month()));
    }
});
