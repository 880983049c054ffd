//! Shared error types and utilities for the primer project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures raised while rendering or mounting a component.
///
/// These are reported to the nearest error boundary, which swaps its
/// subtree for a fallback view.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UiError {
    #[error("Element `{0}` is not mounted")]
    NotMounted(&'static str),
    #[error("Failed to focus `{element}`: {reason}")]
    Focus {
        element: &'static str,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_error_messages() {
        assert_eq!(
            UiError::NotMounted("celsius-input").to_string(),
            "Element `celsius-input` is not mounted"
        );

        let err = UiError::Focus {
            element: "login-button",
            reason: "detached".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to focus `login-button`: detached");
    }
}
