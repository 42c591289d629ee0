//! The form state machine.
//!
//! [`FormState`] owns the four field values, their errors and the current
//! [`Phase`]. Every change goes through [`FormState::apply`]:
//!
//! ```text
//!            Submit (all fields pass)
//!  Editing ---------------------------> Confirmed
//!     ^                                     |
//!     +------------- Reset ("Continue") ----+
//! ```
//!
//! A failed submit stays in `Editing` and records an error on every failing
//! field. Reset keeps the entered values.
//!
//! # Example
//!
//! ```
//! use card_form::{Event, Field, FormState, Phase, YearMonth};
//!
//! let today = YearMonth::new(2025, 3).unwrap();
//! let mut form = FormState::new();
//!
//! form.apply(Event::input(Field::Name, "Jane Appleseed"), today);
//! form.apply(Event::input(Field::CardNumber, "1234567890123456"), today);
//! form.apply(Event::input(Field::Expiry, "03/25"), today);
//! form.apply(Event::input(Field::Cvc, "12x"), today);
//!
//! assert_eq!(form.apply(Event::Submit, today), Phase::Editing);
//! assert_eq!(form.error(Field::Cvc).unwrap().to_string(), "Wrong format, numbers only.");
//!
//! form.apply(Event::input(Field::Cvc, "123"), today);
//! assert_eq!(form.apply(Event::Submit, today), Phase::Confirmed);
//! ```

use crate::expiry::YearMonth;
use crate::{validate_field_with_rule, Field, FieldError, FormConfig};
use tracing::{debug, info};

/// Which screen the form is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Phase {
    /// The form is shown and accepts input.
    #[default]
    Editing,
    /// All fields passed; the thank-you panel is shown.
    Confirmed,
}

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A field's value changed.
    Input {
        /// The edited field.
        field: Field,
        /// Its new value.
        value: String,
    },
    /// The "Confirm" button was pressed.
    Submit,
    /// The "Continue" button on the thank-you panel was pressed.
    Reset,
}

impl Event {
    /// Shorthand for [`Event::Input`].
    pub fn input(field: Field, value: impl Into<String>) -> Self {
        Self::Input {
            field,
            value: value.into(),
        }
    }
}

/// The value of one field and the result of its last validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    error: Option<FieldError>,
}

impl FieldState {
    /// Returns the current value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the error from the last validation, if it failed.
    #[inline]
    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }
}

/// The whole form: four fields, their errors and the current phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    config: FormConfig,
    fields: [FieldState; 4],
    phase: Phase,
}

impl FormState {
    /// Creates an empty form with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty form with the given configuration.
    pub fn with_config(config: FormConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Returns the current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true if the thank-you panel is shown.
    #[inline]
    pub fn is_confirmed(&self) -> bool {
        self.phase == Phase::Confirmed
    }

    /// Returns the state of `field`.
    #[inline]
    pub fn field(&self, field: Field) -> &FieldState {
        &self.fields[field.index()]
    }

    /// Returns the current value of `field`.
    #[inline]
    pub fn value(&self, field: Field) -> &str {
        self.field(field).value()
    }

    /// Returns the error of `field` from its last validation.
    #[inline]
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.field(field).error()
    }

    /// Returns every current error, in display order.
    pub fn errors(&self) -> Vec<&FieldError> {
        self.fields.iter().filter_map(FieldState::error).collect()
    }

    /// Applies one event and returns the resulting phase.
    ///
    /// `today` is only consulted when the event validates the expiry date.
    pub fn apply(&mut self, event: Event, today: YearMonth) -> Phase {
        match (self.phase, event) {
            (Phase::Editing, Event::Input { field, value }) => {
                self.set_value(field, &value);
            }
            (Phase::Editing, Event::Submit) => {
                self.submit(today);
            }
            (Phase::Confirmed, Event::Reset) => {
                info!("form returned to editing");
                self.phase = Phase::Editing;
            }
            (phase, event) => {
                debug!(?phase, event = event_name(&event), "event ignored");
            }
        }
        self.phase
    }

    /// Replaces the value of `field`, applying its input cap.
    ///
    /// Does not re-validate: the field's previous error stays until the next
    /// validation.
    pub fn set_value(&mut self, field: Field, value: &str) {
        self.fields[field.index()].value = self.config.cap(field, value);
    }

    /// Validates one field and records the result.
    pub fn validate_field(&mut self, field: Field, today: YearMonth) -> Result<(), FieldError> {
        let state = &mut self.fields[field.index()];
        let result = validate_field_with_rule(field, &state.value, today, self.config.name_rule);

        if let Err(err) = &result {
            debug!(%field, kind = ?err.kind(), "field failed validation");
        }
        state.error = result.as_ref().err().cloned();
        result
    }

    /// Validates every field; confirms the form if all of them pass.
    ///
    /// Each field is validated independently, so every failing field gets
    /// its own error. Returns true if the form was confirmed.
    pub fn submit(&mut self, today: YearMonth) -> bool {
        let mut all_valid = true;
        for field in Field::ALL {
            all_valid &= self.validate_field(field, today).is_ok();
        }

        if all_valid {
            info!("form confirmed");
            self.phase = Phase::Confirmed;
        } else {
            debug!(failed = self.errors().len(), "form submission rejected");
        }
        all_valid
    }
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Input { .. } => "input",
        Event::Submit => "submit",
        Event::Reset => "reset",
    }
}
