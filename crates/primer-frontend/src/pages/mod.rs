//! Page components for different routes in the application.

pub mod calculator;
pub mod form;
pub mod home;
pub mod jokes;

pub use calculator::*;
pub use form::*;
pub use home::*;
pub use jokes::*;
