//! State behind the home page: login prompt and the greeting clock.

use std::fmt;

/// How often the clock re-renders, in milliseconds.
pub const TICK_MILLIS: u32 = 1_000;

pub const LOGGED_OUT_MESSAGE: &str = "You are not Logged In. Try to click the button below!!";

/// Who the greeting is addressed to, and what it says about itself.
pub const ENTITY_NAME: &str = "Yew";
pub const ENTITY_INTRO: &str = "I am a Rust framework for building web user interfaces";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Greeting {
    #[default]
    Hello,
    Goodbye,
}

impl Greeting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Greeting::Hello => "Hello",
            Greeting::Goodbye => "Goodbye",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Greeting::Hello => Greeting::Goodbye,
            Greeting::Goodbye => Greeting::Hello,
        }
    }

    /// The full heading, e.g. `Hello Yew!!`.
    pub fn heading(&self, name: &str) -> String {
        format!("{} {name}!!", self.as_str())
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two clock buttons, as a keyboard focus target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockFocus {
    #[default]
    ClickMe,
    LogOut,
}

impl ClockFocus {
    pub fn toggled(&self) -> Self {
        match self {
            ClockFocus::ClickMe => ClockFocus::LogOut,
            ClockFocus::LogOut => ClockFocus::ClickMe,
        }
    }

    /// The button to focus after `key` is pressed on `self`, if the key
    /// moves focus.
    ///
    /// # Example
    /// ```
    /// use primer::clock::ClockFocus;
    ///
    /// assert_eq!(ClockFocus::ClickMe.after_key("ArrowRight"), Some(ClockFocus::LogOut));
    /// assert_eq!(ClockFocus::ClickMe.after_key("Enter"), None);
    /// ```
    pub fn after_key(&self, key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "ArrowRight" => Some(self.toggled()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_toggles() {
        let greeting = Greeting::default();
        assert_eq!(greeting.heading(ENTITY_NAME), "Hello Yew!!");
        assert_eq!(greeting.toggled().heading(ENTITY_NAME), "Goodbye Yew!!");
        assert_eq!(greeting.toggled().toggled(), Greeting::Hello);
    }

    #[test]
    fn test_focus_moves_on_arrows_only() {
        let focus = ClockFocus::default();
        assert_eq!(focus, ClockFocus::ClickMe);
        assert_eq!(focus.after_key("ArrowLeft"), Some(ClockFocus::LogOut));
        assert_eq!(
            ClockFocus::LogOut.after_key("ArrowRight"),
            Some(ClockFocus::ClickMe)
        );
        assert_eq!(focus.after_key("ArrowUp"), None);
        assert_eq!(focus.after_key("Tab"), None);
    }

    #[test]
    fn test_arrow_after_tab_moves_away_from_pressed_button() {
        // Focus reached "Log Out" through Tab; the arrow is pressed there.
        let pressed_on = ClockFocus::LogOut;
        assert_eq!(pressed_on.after_key("ArrowLeft"), Some(ClockFocus::ClickMe));
        assert_eq!(pressed_on.after_key("ArrowRight"), Some(ClockFocus::ClickMe));
        assert_ne!(pressed_on.after_key("ArrowLeft"), Some(pressed_on));
    }
}
