//! Scale conversion, lenient number parsing and display formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places kept in converted values.
pub const ROUNDING_DECIMALS: i32 = 3;

/// Converts one temperature scale into another.
pub type Converter = fn(f64) -> f64;

/// One of the two supported linear temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Scale {
    pub const ALL: [Scale; 2] = [Scale::Celsius, Scale::Fahrenheit];

    /// Human readable name, used in input labels.
    pub fn name(&self) -> &'static str {
        match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
        }
    }

    /// Short tag, used for element ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::Celsius => "c",
            Scale::Fahrenheit => "f",
        }
    }

    pub fn other(&self) -> Scale {
        match self {
            Scale::Celsius => Scale::Fahrenheit,
            Scale::Fahrenheit => Scale::Celsius,
        }
    }

    /// Returns the function converting values in `self` into `target`,
    /// or `None` when no conversion is needed.
    ///
    /// # Example
    /// ```
    /// use primer::temperature::Scale;
    ///
    /// let convert = Scale::Celsius.converter_to(Scale::Fahrenheit).unwrap();
    /// assert_eq!(convert(100.0), 212.0);
    /// assert!(Scale::Celsius.converter_to(Scale::Celsius).is_none());
    /// ```
    pub fn converter_to(&self, target: Scale) -> Option<Converter> {
        match (self, target) {
            (Scale::Celsius, Scale::Fahrenheit) => Some(to_fahrenheit),
            (Scale::Fahrenheit, Scale::Celsius) => Some(to_celsius),
            _ => None,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * (5.0 / 9.0)
}

/// Parses the leading number of `text`, ignoring anything after it.
///
/// Leading whitespace is skipped and the longest prefix forming a decimal
/// number (optionally signed, with fraction and exponent, or `Infinity`) is
/// used, so partially typed input such as `"12."` or `"1e"` still yields a
/// value. Returns `None` when no such prefix exists.
///
/// # Example
/// ```
/// use primer::temperature::parse_number;
///
/// assert_eq!(parse_number(" 12.5abc"), Some(12.5));
/// assert_eq!(parse_number("-.5"), Some(-0.5));
/// assert_eq!(parse_number("abc"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Rounds to [`ROUNDING_DECIMALS`] places, half away from zero.
pub fn round_to_precision(value: f64) -> f64 {
    let factor = 10f64.powi(ROUNDING_DECIMALS);
    (value * factor).round() / factor
}

/// Renders a number the way the converter displays it.
///
/// Integral values have no decimal point, other values use the shortest
/// representation that round-trips. Negative zero renders as `0`, and very
/// large or very small magnitudes use exponent notation.
///
/// # Example
/// ```
/// use primer::temperature::format_number;
///
/// assert_eq!(format_number(212.0), "212");
/// assert_eq!(format_number(98.6), "98.6");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let repr = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return repr.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let repr = format!("{value:e}");
        return match repr.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => repr,
        };
    }

    value.to_string()
}

/// Parses `text`, converts it, and formats the rounded result.
///
/// Unparseable text yields an empty string rather than an error so a field
/// being typed into never breaks the view.
///
/// # Example
/// ```
/// use primer::temperature::{to_fahrenheit, try_convert};
///
/// assert_eq!(try_convert("100", to_fahrenheit), "212");
/// assert_eq!(try_convert("37", to_fahrenheit), "98.6");
/// assert_eq!(try_convert("abc", to_fahrenheit), "");
/// ```
pub fn try_convert(text: &str, convert: impl Fn(f64) -> f64) -> String {
    let Some(input) = parse_number(text) else {
        return String::new();
    };

    format_number(round_to_precision(convert(input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_points() {
        assert_eq!(to_fahrenheit(0.0), 32.0);
        assert_eq!(to_fahrenheit(100.0), 212.0);
        assert_eq!(to_celsius(212.0), 100.0);
        assert_eq!(to_celsius(32.0), 0.0);
        assert_eq!(to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn test_round_trip() {
        for celsius in [-273.15, -40.0, -0.5, 0.0, 21.7, 37.0, 99.999, 100.0, 1234.5678] {
            let back = to_celsius(to_fahrenheit(celsius));
            assert!(
                (back - celsius).abs() < 1e-9,
                "{celsius} came back as {back}"
            );
        }
    }

    #[test]
    fn test_try_convert_empty_and_garbage() {
        assert_eq!(try_convert("", to_fahrenheit), "");
        assert_eq!(try_convert("", to_celsius), "");
        assert_eq!(try_convert("abc", to_fahrenheit), "");
        assert_eq!(try_convert("-", to_celsius), "");
        assert_eq!(try_convert(".", to_celsius), "");
        assert_eq!(try_convert("   ", to_celsius), "");
    }

    #[test]
    fn test_try_convert_formatting() {
        assert_eq!(try_convert("100", to_fahrenheit), "212");
        assert_eq!(try_convert("37", to_fahrenheit), "98.6");
        assert_eq!(try_convert("212", to_celsius), "100");
        assert_eq!(try_convert("100", to_celsius), "37.778");
        assert_eq!(try_convert("0", to_celsius), "-17.778");
    }

    #[test]
    fn test_try_convert_negative_zero() {
        // (31.9999 - 32) * 5/9 rounds to -0
        assert_eq!(try_convert("31.9999", to_celsius), "0");
    }

    #[test]
    fn test_try_convert_partial_input() {
        assert_eq!(try_convert("10.", to_fahrenheit), "50");
        assert_eq!(try_convert("1e", to_fahrenheit), "33.8");
        assert_eq!(try_convert("5abc", to_fahrenheit), "41");
        assert_eq!(try_convert("Infinity", to_fahrenheit), "Infinity");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(round_to_precision(0.0625), 0.063);
        assert_eq!(round_to_precision(-0.0625), -0.063);
        assert_eq!(round_to_precision(1.23449), 1.234);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("+7"), Some(7.0));
        assert_eq!(parse_number("  -3.25"), Some(-3.25));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("1E-2x"), Some(0.01));
        assert_eq!(parse_number("2e+"), Some(2.0));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("0x10"), Some(0.0));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("e5"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-17.778), "-17.778");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1.5e21), "1.5e+21");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_scale() {
        assert_eq!(Scale::default(), Scale::Celsius);
        assert_eq!(Scale::Celsius.other(), Scale::Fahrenheit);
        assert_eq!(Scale::Fahrenheit.other(), Scale::Celsius);
        assert_eq!(Scale::Fahrenheit.to_string(), "Fahrenheit");
        assert!(Scale::Fahrenheit.converter_to(Scale::Fahrenheit).is_none());
    }

    #[test]
    fn test_scale_serde() {
        let serialized = serde_json::to_string(&Scale::Fahrenheit).unwrap();
        assert_eq!(serialized, "\"fahrenheit\"");

        let deserialized: Scale = serde_json::from_str("\"celsius\"").unwrap();
        assert_eq!(deserialized, Scale::Celsius);
    }
}
