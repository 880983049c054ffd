//! Custom hooks for lifecycle side effects.

pub mod use_autofocus;
pub mod use_interval;

pub use use_autofocus::*;
pub use use_interval::*;
