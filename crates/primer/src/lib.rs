//! The shared library for Primer, a small Yew single-page application showing
//! common UI patterns around a synchronized Celsius/Fahrenheit converter.
//!
//! Everything here is platform independent: the frontend crate renders these
//! types, and the native test suite exercises them directly.

pub mod clock;
pub mod errors;
pub mod jokes;
pub mod log;
pub mod temperature;
pub mod theme;

pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing::{debug, error, info, trace, warn};
