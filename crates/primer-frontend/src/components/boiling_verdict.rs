use yew::prelude::*;

use primer::temperature::BoilingVerdict as Verdict;

use crate::providers::use_theme;

#[derive(Properties, PartialEq)]
pub struct BoilingVerdictProps {
    /// `None` when the Celsius field holds no number; nothing is rendered.
    pub verdict: Option<Verdict>,
}

#[function_component(BoilingVerdict)]
pub fn boiling_verdict(props: &BoilingVerdictProps) -> Html {
    let theme = use_theme();

    match &props.verdict {
        Some(verdict) => html! {
            <p class="mt-4 text-lg" style={theme.palette.text_style()}>{ verdict.to_string() }</p>
        },
        None => html! {},
    }
}
