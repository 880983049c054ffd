use web_sys::HtmlElement;
use yew::prelude::*;

use primer::errors::UiError;

use crate::components::use_error_reporter;

/// Moves keyboard focus to the element behind `node_ref`.
pub fn focus_node(node_ref: &NodeRef, element: &'static str) -> Result<(), UiError> {
    let node = node_ref
        .cast::<HtmlElement>()
        .ok_or(UiError::NotMounted(element))?;

    node.focus().map_err(|err| UiError::Focus {
        element,
        reason: format!("{err:?}"),
    })
}

/// Focuses `node_ref` once, right after the first render, when `enabled`.
/// Failures are reported to the enclosing error boundary.
#[hook]
pub fn use_autofocus(node_ref: &NodeRef, element: &'static str, enabled: bool) {
    let report = use_error_reporter();
    let node_ref = node_ref.clone();

    use_effect_with((), move |_| {
        if enabled {
            if let Err(err) = focus_node(&node_ref, element) {
                report.emit(err);
            }
        }
    });
}
