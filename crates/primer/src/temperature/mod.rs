//! The synchronized Celsius/Fahrenheit converter.
//!
//! A [`TemperatureReading`] holds the text the user last typed and the scale
//! it was typed in. Both input fields and the [`BoilingVerdict`] are derived
//! from it on every render, so the non-edited field can never go stale.

pub mod convert;
pub mod reading;
pub mod verdict;

pub use convert::*;
pub use reading::*;
pub use verdict::*;
