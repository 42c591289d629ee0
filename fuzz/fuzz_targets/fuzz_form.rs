//! Fuzz target for the form state machine.
//!
//! Replays arbitrary event sequences and checks the state invariants.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use card_form::view::{render, Screen};
use card_form::{Event, Field, FormState, Phase, YearMonth};

#[derive(Debug, Arbitrary)]
enum Action {
    Input(u8, String),
    Submit,
    Reset,
}

fuzz_target!(|actions: Vec<Action>| {
    let today = YearMonth::new(2025, 3).unwrap();
    let mut form = FormState::new();

    for action in actions {
        let before = form.clone();
        let event = match action {
            Action::Input(i, value) => Event::input(Field::ALL[usize::from(i) % 4], value),
            Action::Submit => Event::Submit,
            Action::Reset => Event::Reset,
        };
        let is_reset = event == Event::Reset;
        let phase = form.apply(event, today);

        // Confirmed only with no errors
        if phase == Phase::Confirmed {
            assert!(form.errors().is_empty());
        }
        // Reset never changes values
        if is_reset {
            for field in Field::ALL {
                assert_eq!(form.value(field), before.value(field));
            }
        }
        // Input caps hold
        assert!(form.value(Field::Cvc).chars().count() <= 3);
        assert!(form.value(Field::CardNumber).chars().count() <= 19);

        // The view matches the phase
        match render(&form).screen {
            Screen::Form(_) => assert_eq!(phase, Phase::Editing),
            Screen::Confirmation(_) => assert_eq!(phase, Phase::Confirmed),
        }
    }
});
