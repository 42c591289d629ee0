//! WebAssembly bindings for the card form.
//!
//! This module exposes the form state machine and view model to JavaScript,
//! so a web page only has to forward input events and redraw from the view.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { CardForm } from 'card_form';
//!
//! await init();
//!
//! const form = new CardForm();
//! nameInput.addEventListener('input', (e) => {
//!     form.set_field('name', e.target.value);
//!     redraw(JSON.parse(form.view_json()));
//! });
//!
//! formElement.addEventListener('submit', (e) => {
//!     e.preventDefault();
//!     form.submit();
//!     redraw(JSON.parse(form.view_json()));
//! });
//!
//! continueButton.addEventListener('click', () => {
//!     form.reset();
//!     redraw(JSON.parse(form.view_json()));
//! });
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{Event, Field, FormState, NameRule, YearMonth};

/// Reads the current month from the JavaScript `Date` object.
fn js_today() -> YearMonth {
    let now = js_sys::Date::new_0();
    let year = now.get_full_year().clamp(0, u32::from(u16::MAX)) as u16;
    // getMonth() is 0-based
    YearMonth::clamped(year, now.get_month().min(11) as u8 + 1)
}

fn parse_field(id: &str) -> Result<Field, JsValue> {
    id.parse::<Field>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_rule(rule: &str) -> Result<NameRule, JsValue> {
    rule.parse::<NameRule>().map_err(|e| JsValue::from_str(&e))
}

/// The card form, owned by the page.
#[wasm_bindgen]
pub struct CardForm {
    state: FormState,
}

impl Default for CardForm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CardForm {
    /// Creates an empty form.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CardForm {
        CardForm {
            state: FormState::new(),
        }
    }

    /// Creates an empty form with a name rule (`letters` or `legacy`).
    pub fn with_name_rule(rule: &str) -> Result<CardForm, JsValue> {
        let config = crate::FormConfig::new().with_name_rule(parse_rule(rule)?);
        Ok(CardForm {
            state: FormState::with_config(config),
        })
    }

    /// Sets a field value. Accepts input ids (`name`, `number`, `date`,
    /// `pin`) and field names (`card_number`, `expiry`, `cvc`).
    pub fn set_field(&mut self, id: &str, value: &str) -> Result<(), JsValue> {
        let field = parse_field(id)?;
        self.state.apply(Event::input(field, value), js_today());
        Ok(())
    }

    /// Validates every field; returns true if the form was confirmed.
    pub fn submit(&mut self) -> bool {
        self.state.apply(Event::Submit, js_today());
        self.state.is_confirmed()
    }

    /// Returns from the thank-you panel to the form.
    pub fn reset(&mut self) {
        self.state.apply(Event::Reset, js_today());
    }

    /// Whether the thank-you panel is shown.
    #[wasm_bindgen(getter)]
    pub fn confirmed(&self) -> bool {
        self.state.is_confirmed()
    }

    /// Returns the current value of a field.
    pub fn value(&self, id: &str) -> Result<String, JsValue> {
        Ok(self.state.value(parse_field(id)?).to_string())
    }

    /// Returns the error message of a field, if its last validation failed.
    pub fn error(&self, id: &str) -> Result<Option<String>, JsValue> {
        let field = parse_field(id)?;
        Ok(self.state.error(field).map(|e| e.to_string()))
    }

    /// Returns the view model as JSON.
    pub fn view_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&crate::render(&self.state))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Validates a cardholder name; returns the error message, if any.
#[wasm_bindgen]
pub fn validate_name(name: &str) -> Option<String> {
    crate::name::validate_name(name, NameRule::default())
        .err()
        .map(|e| e.to_string())
}

/// Validates a card number; returns the error message, if any.
#[wasm_bindgen]
pub fn validate_card_number(card_number: &str) -> Option<String> {
    crate::number::validate_card_number(card_number)
        .err()
        .map(|e| e.to_string())
}

/// Validates an `MM/YY` expiry date against the current month; returns the
/// error message, if any.
#[wasm_bindgen]
pub fn validate_expiry(date: &str) -> Option<String> {
    crate::expiry::validate_expiry(date, js_today())
        .err()
        .map(|e| e.to_string())
}

/// Validates a CVC; returns the error message, if any.
#[wasm_bindgen]
pub fn validate_cvc(cvc: &str) -> Option<String> {
    crate::cvc::validate_cvc(cvc).err().map(|e| e.to_string())
}
