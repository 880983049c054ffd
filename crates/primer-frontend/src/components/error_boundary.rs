use yew::prelude::*;

use primer::errors::UiError;
use primer::log::error;

pub const FALLBACK_MESSAGE: &str = "Something has gone wrong!";

/// Lets descendants hand a failure to the nearest [`ErrorBoundary`].
#[derive(Clone, PartialEq)]
pub struct ErrorBoundaryContext {
    pub report: Callback<UiError>,
}

#[derive(Properties, PartialEq)]
pub struct ErrorBoundaryProps {
    pub children: Children,
}

/// Renders its children until one of them reports a [`UiError`], then
/// replaces the whole subtree with a static fallback. Sibling boundaries keep
/// rendering normally.
#[function_component(ErrorBoundary)]
pub fn error_boundary(props: &ErrorBoundaryProps) -> Html {
    let failure = use_state(|| None::<UiError>);

    // Keyed on the setter, which is stable across renders.
    let report = use_callback(failure.setter(), |err: UiError, set_failure| {
        error!("Caught rendering failure: {err}");
        set_failure.set(Some(err));
    });

    if failure.is_some() {
        return html! {
            <h1 class="text-2xl font-bold text-red-600">{ FALLBACK_MESSAGE }</h1>
        };
    }

    html! {
        <ContextProvider<ErrorBoundaryContext> context={ErrorBoundaryContext { report }}>
            {props.children.clone()}
        </ContextProvider<ErrorBoundaryContext>>
    }
}

/// The report callback of the nearest boundary. Outside of any boundary the
/// error is only logged.
#[hook]
pub fn use_error_reporter() -> Callback<UiError> {
    use_context::<ErrorBoundaryContext>()
        .map(|ctx| ctx.report)
        .unwrap_or_else(|| Callback::from(|err: UiError| error!("Unhandled UI error: {err}")))
}
