//! Form configuration.

use crate::name::NameRule;
use crate::Field;

/// Default input cap for the card number (room for grouping spaces).
pub const CARD_NUMBER_MAX_LEN: usize = 19;

/// Default input cap for the CVC.
pub const CVC_MAX_LEN: usize = 3;

/// Settings for a [`FormState`](crate::FormState).
///
/// The length caps behave like a browser `maxLength`: they count UTF-16 code
/// units, and input beyond the cap is dropped when the value is set. A
/// character that would straddle the cap is dropped whole. They are not
/// validation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormConfig {
    /// Accepted characters for the cardholder name.
    pub name_rule: NameRule,
    /// Input cap for the card number, in UTF-16 code units.
    pub card_number_max_len: usize,
    /// Input cap for the CVC, in UTF-16 code units.
    pub cvc_max_len: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name_rule: NameRule::default(),
            card_number_max_len: CARD_NUMBER_MAX_LEN,
            cvc_max_len: CVC_MAX_LEN,
        }
    }
}

impl FormConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name rule.
    pub fn with_name_rule(mut self, rule: NameRule) -> Self {
        self.name_rule = rule;
        self
    }

    /// Sets the card number input cap.
    pub fn with_card_number_max_len(mut self, max_len: usize) -> Self {
        self.card_number_max_len = max_len;
        self
    }

    /// Sets the CVC input cap.
    pub fn with_cvc_max_len(mut self, max_len: usize) -> Self {
        self.cvc_max_len = max_len;
        self
    }

    /// Returns the input cap for `field`, if it has one.
    pub fn max_len(&self, field: Field) -> Option<usize> {
        match field {
            Field::CardNumber => Some(self.card_number_max_len),
            Field::Cvc => Some(self.cvc_max_len),
            Field::Name | Field::Expiry => None,
        }
    }

    /// Truncates `value` to the input cap of `field`.
    pub(crate) fn cap(&self, field: Field, value: &str) -> String {
        match self.max_len(field) {
            Some(max) => {
                let mut units = 0;
                value
                    .chars()
                    .take_while(|c| {
                        units += c.len_utf16();
                        units <= max
                    })
                    .collect()
            }
            None => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FormConfig::default();
        assert_eq!(config.name_rule, NameRule::Letters);
        assert_eq!(config.max_len(Field::CardNumber), Some(19));
        assert_eq!(config.max_len(Field::Cvc), Some(3));
        assert_eq!(config.max_len(Field::Name), None);
        assert_eq!(config.max_len(Field::Expiry), None);
    }

    #[test]
    fn test_builder() {
        let config = FormConfig::new()
            .with_name_rule(NameRule::Legacy)
            .with_card_number_max_len(16)
            .with_cvc_max_len(4);
        assert_eq!(config.name_rule, NameRule::Legacy);
        assert_eq!(config.max_len(Field::CardNumber), Some(16));
        assert_eq!(config.max_len(Field::Cvc), Some(4));
    }

    #[test]
    fn test_cap() {
        let config = FormConfig::default();
        assert_eq!(config.cap(Field::Cvc, "12345"), "123");
        assert_eq!(config.cap(Field::Cvc, "1"), "1");
        assert_eq!(
            config.cap(Field::CardNumber, "12345678901234567890123"),
            "1234567890123456789"
        );
        // Counted in UTF-16 code units, not bytes
        assert_eq!(config.cap(Field::Cvc, "ééééé"), "ééé");
        let long_name = "a".repeat(100);
        assert_eq!(config.cap(Field::Name, "😀😀😀"), "😀😀😀");
        assert_eq!(config.cap(Field::Name, &long_name), long_name);
    }

    #[test]
    fn test_cap_counts_utf16_units() {
        let config = FormConfig::default();
        // Each emoji is a surrogate pair
        assert_eq!(config.cap(Field::Cvc, "😀😀😀"), "😀");
        assert_eq!(config.cap(Field::Cvc, "1😀2"), "1😀");
        // A pair that would straddle the cap is dropped whole
        assert_eq!(config.cap(Field::Cvc, "12😀"), "12");
        assert_eq!(
            config.cap(Field::CardNumber, &"😀".repeat(10)),
            "😀".repeat(9)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_config() {
        let config: FormConfig = serde_json::from_str(r#"{"name_rule":"legacy"}"#).unwrap();
        assert_eq!(config.name_rule, NameRule::Legacy);
        assert_eq!(config.card_number_max_len, 19);
        assert_eq!(config.cvc_max_len, 3);

        let config: FormConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FormConfig::default());

        assert!(serde_json::from_str::<FormConfig>(r#"{"name_rule":"ascii"}"#).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_config() {
        let json = serde_json::to_value(FormConfig::new().with_cvc_max_len(4)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name_rule": "letters",
                "card_number_max_len": 19,
                "cvc_max_len": 4,
            })
        );
    }
}
