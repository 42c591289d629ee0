//! View model for the card form.
//!
//! [`render`] turns a [`FormState`] into everything a front end needs to
//! draw: the card preview, and either the input form or the thank-you
//! panel. It is recomputed after every event; nothing here feeds back into
//! validation.
//!
//! # Example
//!
//! ```
//! use card_form::view::{render, Screen};
//! use card_form::{Field, FormState};
//!
//! let mut form = FormState::new();
//! form.set_value(Field::Name, "Jane Appleseed");
//!
//! let view = render(&form);
//! assert_eq!(view.preview.name, "JANE APPLESEED");
//! assert_eq!(view.preview.number, "0000 0000 0000 0000");
//! assert!(matches!(view.screen, Screen::Form(_)));
//! ```

use crate::{Field, FormState, Phase};

/// Label of the submit button.
pub const SUBMIT_LABEL: &str = "Confirm";

/// Heading of the thank-you panel.
pub const CONFIRMATION_HEADING: &str = "Thank you!";

/// Body text of the thank-you panel.
pub const CONFIRMATION_MESSAGE: &str = "We've added your card details";

/// Label of the thank-you panel's button, which returns to the form.
pub const CONTINUE_LABEL: &str = "Continue";

/// The card mock-up, mirroring the field values as they are typed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardPreview {
    /// Card number, front of the card.
    pub number: String,
    /// Cardholder name in upper case, front of the card.
    pub name: String,
    /// Expiry date, front of the card.
    pub expiry: String,
    /// CVC, back of the card.
    pub cvc: String,
}

impl CardPreview {
    /// Builds the preview from the current field values.
    ///
    /// Empty fields show their placeholder mock-up instead.
    pub fn from_state(state: &FormState) -> Self {
        let shown = |field: Field| match state.value(field) {
            "" => field.preview_placeholder().to_string(),
            value => value.to_string(),
        };

        Self {
            number: shown(Field::CardNumber),
            name: shown(Field::Name).to_uppercase(),
            expiry: shown(Field::Expiry),
            cvc: shown(Field::Cvc),
        }
    }

    /// Returns the preview text for `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::CardNumber => &self.number,
            Field::Expiry => &self.expiry,
            Field::Cvc => &self.cvc,
        }
    }

    /// Returns true if the text shown for `field` is its placeholder mock-up.
    ///
    /// A typed value identical to the mock-up (e.g. CVC `000`) also counts.
    pub fn is_placeholder(&self, field: Field) -> bool {
        self.get(field) == field.preview_placeholder()
    }
}

/// One labeled input of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldView {
    /// Which field this is.
    pub field: Field,
    /// Input label.
    pub label: &'static str,
    /// Input element id.
    pub input_id: &'static str,
    /// Placeholder hint.
    pub placeholder: &'static str,
    /// Current value.
    pub value: String,
    /// Input cap, if any.
    pub max_length: Option<usize>,
    /// Always true: every field must be filled in.
    pub required: bool,
    /// Message shown next to the input when the last validation failed.
    pub error: Option<&'static str>,
}

/// The input form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FormView {
    /// Inputs in display order.
    pub fields: Vec<FieldView>,
    /// Submit button label.
    pub submit_label: &'static str,
}

impl FormView {
    /// Returns the view of `field`.
    pub fn field(&self, field: Field) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }
}

/// The thank-you panel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConfirmationView {
    /// Panel heading.
    pub heading: &'static str,
    /// Panel body text.
    pub message: &'static str,
    /// Label of the button that returns to the form.
    pub action_label: &'static str,
}

impl Default for ConfirmationView {
    fn default() -> Self {
        Self {
            heading: CONFIRMATION_HEADING,
            message: CONFIRMATION_MESSAGE,
            action_label: CONTINUE_LABEL,
        }
    }
}

/// What is shown next to the card preview.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Screen {
    /// The input form (editing).
    Form(FormView),
    /// The thank-you panel (confirmed).
    Confirmation(ConfirmationView),
}

/// Everything on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ViewModel {
    /// The card preview, always visible.
    pub preview: CardPreview,
    /// The form or the thank-you panel.
    pub screen: Screen,
}

/// Builds the view model for the current state.
pub fn render(state: &FormState) -> ViewModel {
    let screen = match state.phase() {
        Phase::Editing => Screen::Form(form_view(state)),
        Phase::Confirmed => Screen::Confirmation(ConfirmationView::default()),
    };

    ViewModel {
        preview: CardPreview::from_state(state),
        screen,
    }
}

fn form_view(state: &FormState) -> FormView {
    let fields = Field::ALL
        .iter()
        .map(|&field| FieldView {
            field,
            label: field.label(),
            input_id: field.input_id(),
            placeholder: field.placeholder(),
            value: state.value(field).to_string(),
            max_length: state.config().max_len(field),
            required: true,
            error: state.error(field).map(|err| err.message()),
        })
        .collect();

    FormView {
        fields,
        submit_label: SUBMIT_LABEL,
    }
}
