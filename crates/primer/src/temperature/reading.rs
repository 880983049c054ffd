use serde::{Deserialize, Serialize};

use super::convert::{Scale, try_convert};
use super::verdict::BoilingVerdict;

/// The text most recently typed into one of the temperature fields, tagged
/// with the scale of that field.
///
/// Only this pair is stored. The value shown in the other field is derived
/// from it every time it is asked for.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TemperatureReading {
    text: String,
    scale: Scale,
}

impl TemperatureReading {
    /// Creates a reading from raw field text. No validation is done; any text
    /// is accepted and parsed lazily when a derived value is requested.
    pub fn new(text: impl Into<String>, scale: Scale) -> Self {
        Self {
            text: text.into(),
            scale,
        }
    }

    /// Replaces both the text and its scale.
    pub fn set_value(&mut self, text: impl Into<String>, scale: Scale) {
        *self = Self::new(text, scale);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The scale of the field that was edited last.
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// The value to show in the field for `scale`.
    ///
    /// The edited field gets its raw text back untouched, the other one gets
    /// the converted value, or an empty string if the text is not a number.
    ///
    /// # Example
    /// ```
    /// use primer::temperature::{Scale, TemperatureReading};
    ///
    /// let reading = TemperatureReading::new("100", Scale::Celsius);
    /// assert_eq!(reading.display_for(Scale::Celsius), "100");
    /// assert_eq!(reading.display_for(Scale::Fahrenheit), "212");
    /// ```
    pub fn display_for(&self, scale: Scale) -> String {
        match self.scale.converter_to(scale) {
            Some(convert) => try_convert(&self.text, convert),
            None => self.text.clone(),
        }
    }

    pub fn celsius(&self) -> String {
        self.display_for(Scale::Celsius)
    }

    pub fn fahrenheit(&self) -> String {
        self.display_for(Scale::Fahrenheit)
    }

    /// The boiling verdict for the Celsius value currently displayed.
    pub fn verdict(&self) -> Option<BoilingVerdict> {
        BoilingVerdict::from_display(&self.celsius())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_reading() {
        let reading = TemperatureReading::default();
        assert_eq!(reading.scale(), Scale::Celsius);
        assert_eq!(reading.celsius(), "");
        assert_eq!(reading.fahrenheit(), "");
        assert_eq!(reading.verdict(), None);
    }

    #[test]
    fn test_celsius_edit_at_boiling_point() {
        let reading = TemperatureReading::new("100", Scale::Celsius);
        assert_eq!(reading.fahrenheit(), "212");

        let verdict = reading.verdict().unwrap();
        assert!(verdict.boils());
        assert_eq!(verdict.to_string(), "Water boils at 100");
    }

    #[test]
    fn test_celsius_edit_just_below_boiling() {
        let reading = TemperatureReading::new("99.999", Scale::Celsius);
        assert_eq!(reading.fahrenheit(), "211.998");

        let verdict = reading.verdict().unwrap();
        assert!(!verdict.boils());
        assert_eq!(verdict.to_string(), "Water does not boil at 99.999");
    }

    #[test]
    fn test_fahrenheit_edit_drives_verdict() {
        let reading = TemperatureReading::new("212", Scale::Fahrenheit);
        assert_eq!(reading.celsius(), "100");
        assert!(reading.verdict().unwrap().boils());

        let reading = TemperatureReading::new("98.6", Scale::Fahrenheit);
        assert_eq!(reading.celsius(), "37");
        assert!(!reading.verdict().unwrap().boils());
    }

    #[test]
    fn test_invalid_text_is_kept_verbatim() {
        for scale in Scale::ALL {
            let reading = TemperatureReading::new("abc", scale);
            assert_eq!(reading.display_for(scale), "abc");
            assert_eq!(reading.display_for(scale.other()), "");
            assert_eq!(reading.verdict(), None);
        }
    }

    #[test]
    fn test_partial_input_is_kept_verbatim() {
        let reading = TemperatureReading::new("12.", Scale::Celsius);
        assert_eq!(reading.celsius(), "12.");
        assert_eq!(reading.fahrenheit(), "53.6");
    }

    #[test]
    fn test_switching_scale_drops_stale_value() {
        let mut reading = TemperatureReading::new("100", Scale::Celsius);
        assert_eq!(reading.fahrenheit(), "212");

        reading.set_value("", Scale::Fahrenheit);
        assert_eq!(reading.fahrenheit(), "");
        assert_eq!(reading.celsius(), "");

        reading.set_value("32", Scale::Fahrenheit);
        assert_eq!(reading.celsius(), "0");

        reading.set_value("x", Scale::Celsius);
        assert_eq!(reading.celsius(), "x");
        assert_eq!(reading.fahrenheit(), "");
    }

    #[test]
    fn test_serde() {
        let reading = TemperatureReading::new("21.5", Scale::Fahrenheit);
        let serialized = serde_json::to_string(&reading).unwrap();
        assert_eq!(serialized, r#"{"text":"21.5","scale":"fahrenheit"}"#);
    }
}
