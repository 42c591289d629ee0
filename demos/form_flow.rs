//! Walks the card form through a failed submit, a correction, the
//! confirmation panel and "Continue".
//!
//! Run with: `cargo run --example form_flow`

use card_form::view::{render, Screen};
use card_form::{Event, Field, FormState, YearMonth};

fn show(form: &FormState) {
    let view = render(form);
    println!(
        "  card: [{}] [{}] [{}] cvc [{}]",
        view.preview.number, view.preview.name, view.preview.expiry, view.preview.cvc
    );
    match view.screen {
        Screen::Form(form_view) => {
            for field in form_view.fields {
                if let Some(error) = field.error {
                    println!("  {:<18} {}", field.label, error);
                }
            }
        }
        Screen::Confirmation(panel) => {
            println!("  {} {}", panel.heading, panel.message);
        }
    }
    println!();
}

fn main() {
    println!("=== Card Form Flow ===\n");

    let today = YearMonth::now();
    let mut form = FormState::new();

    println!("--- Empty form ---");
    show(&form);

    println!("--- Submitting with mistakes ---");
    form.apply(Event::input(Field::Name, "Jane Appleseed"), today);
    form.apply(Event::input(Field::CardNumber, "1234 5678 9123 0000"), today);
    form.apply(Event::input(Field::Expiry, "01/20"), today);
    form.apply(Event::Submit, today);
    show(&form);

    println!("--- Correcting and resubmitting ---");
    form.apply(Event::input(Field::CardNumber, "1234567891230000"), today);
    form.apply(Event::input(Field::Expiry, today.format_short()), today);
    form.apply(Event::input(Field::Cvc, "123"), today);
    let phase = form.apply(Event::Submit, today);
    println!("  phase: {:?}", phase);
    show(&form);

    println!("--- Continue ---");
    let phase = form.apply(Event::Reset, today);
    println!("  phase: {:?}, name still {:?}", phase, form.value(Field::Name));
}
