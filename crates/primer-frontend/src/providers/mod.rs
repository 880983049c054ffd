//! Context providers for shared application state.

pub mod theme;

pub use theme::*;
