//! The four fields of the card form.
//!
//! Each [`Field`] carries its presentation metadata (label, input id,
//! placeholder, preview mock-up) so that the view model and the front ends
//! describe the form the same way.

use std::fmt;
use std::str::FromStr;

/// One of the four user-entered values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// Cardholder name.
    Name,
    /// Card number.
    CardNumber,
    /// Expiry date (`MM/YY`).
    Expiry,
    /// Card verification code.
    Cvc,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [Field::Name, Field::CardNumber, Field::Expiry, Field::Cvc];

    /// Returns the input label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Cardholder Name",
            Self::CardNumber => "Card Number",
            Self::Expiry => "Exp. Date (MM/YY)",
            Self::Cvc => "CVC",
        }
    }

    /// Returns the short input id used by the web form (`name`, `number`, `date`, `pin`).
    pub const fn input_id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CardNumber => "number",
            Self::Expiry => "date",
            Self::Cvc => "pin",
        }
    }

    /// Returns the input placeholder hint.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "e.g. Jane Appleseed",
            Self::CardNumber => "e.g. 1234 5678 9012 3456",
            Self::Expiry => "MM/YY",
            Self::Cvc => "e.g. 123",
        }
    }

    /// Returns the text the card preview shows while the field is empty.
    pub const fn preview_placeholder(self) -> &'static str {
        match self {
            Self::Name => "JANE APPLESEED",
            Self::CardNumber => "0000 0000 0000 0000",
            Self::Expiry => "00/00",
            Self::Cvc => "000",
        }
    }

    /// Returns the snake_case name of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CardNumber => "card_number",
            Self::Expiry => "expiry",
            Self::Cvc => "cvc",
        }
    }

    /// Returns the message shown when the field is left empty.
    pub const fn blank_message(self) -> &'static str {
        match self {
            Self::Name => "Name can't be blank.",
            Self::CardNumber => "Card number can't be blank.",
            Self::Expiry => "Date can't be blank.",
            Self::Cvc => "CVC can't be blank.",
        }
    }

    /// Returns the message shown when the field has the wrong format.
    pub const fn format_message(self) -> &'static str {
        match self {
            Self::Name => "Wrong format.",
            Self::CardNumber | Self::Cvc => "Wrong format, numbers only.",
            Self::Expiry => "Invalid date.",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::CardNumber => 1,
            Self::Expiry => 2,
            Self::Cvc => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown field '{}' (expected name, number, date or cvc)",
            self.0.escape_default()
        )
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts the snake_case names as well as the web form input ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "cardholder_name" | "cardholder" => Ok(Self::Name),
            "number" | "card_number" | "cardnumber" => Ok(Self::CardNumber),
            "date" | "expiry" | "expiry_date" | "exp" => Ok(Self::Expiry),
            "cvc" | "pin" | "cvv" => Ok(Self::Cvc),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}
