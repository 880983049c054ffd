use std::fmt;

use super::convert::{format_number, parse_number};

/// Water boils at or above this temperature.
pub const BOILING_POINT_CELSIUS: f64 = 100.0;

/// Whether water boils at a given Celsius temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoilingVerdict {
    celsius: f64,
    boils: bool,
}

impl BoilingVerdict {
    /// Returns `None` for NaN, since there is nothing to judge.
    ///
    /// # Example
    /// ```
    /// use primer::temperature::BoilingVerdict;
    ///
    /// assert!(BoilingVerdict::from_celsius(100.0).unwrap().boils());
    /// assert!(!BoilingVerdict::from_celsius(99.9).unwrap().boils());
    /// assert!(BoilingVerdict::from_celsius(f64::NAN).is_none());
    /// ```
    pub fn from_celsius(celsius: f64) -> Option<Self> {
        if celsius.is_nan() {
            return None;
        }

        Some(Self {
            celsius,
            boils: celsius >= BOILING_POINT_CELSIUS,
        })
    }

    /// Judges the text shown in the Celsius field.
    pub fn from_display(celsius: &str) -> Option<Self> {
        parse_number(celsius).and_then(Self::from_celsius)
    }

    pub fn celsius(&self) -> f64 {
        self.celsius
    }

    pub fn boils(&self) -> bool {
        self.boils
    }
}

impl fmt::Display for BoilingVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let celsius = format_number(self.celsius);
        if self.boils {
            write!(f, "Water boils at {celsius}")
        } else {
            write!(f, "Water does not boil at {celsius}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_inclusive() {
        assert!(BoilingVerdict::from_celsius(100.0).unwrap().boils());
        assert!(BoilingVerdict::from_celsius(100.0001).unwrap().boils());
        assert!(!BoilingVerdict::from_celsius(99.999).unwrap().boils());
        assert!(!BoilingVerdict::from_celsius(-40.0).unwrap().boils());
    }

    #[test]
    fn test_not_applicable() {
        assert_eq!(BoilingVerdict::from_display(""), None);
        assert_eq!(BoilingVerdict::from_display("hot"), None);
    }

    #[test]
    fn test_from_display_uses_leading_number() {
        let verdict = BoilingVerdict::from_display("150 degrees").unwrap();
        assert_eq!(verdict.celsius(), 150.0);
        assert!(verdict.boils());
    }

    #[test]
    fn test_messages() {
        let verdict = BoilingVerdict::from_celsius(120.5).unwrap();
        assert_eq!(verdict.to_string(), "Water boils at 120.5");

        let verdict = BoilingVerdict::from_display("-0").unwrap();
        assert_eq!(verdict.to_string(), "Water does not boil at 0");

        let verdict = BoilingVerdict::from_display("Infinity").unwrap();
        assert_eq!(verdict.to_string(), "Water boils at Infinity");
    }
}
