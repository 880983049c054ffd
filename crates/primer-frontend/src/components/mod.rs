//! Reusable UI components for the Primer frontend.

pub mod boiling_verdict;
pub mod clock;
pub mod error_boundary;
pub mod login;
pub mod nav_bar;
pub mod page;
pub mod temperature_input;

pub use boiling_verdict::*;
pub use clock::*;
pub use error_boundary::*;
pub use login::*;
pub use nav_bar::*;
pub use page::*;
pub use temperature_input::*;
