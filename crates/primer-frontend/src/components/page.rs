use yew::prelude::*;

use crate::providers::use_theme;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// A themed panel that every routed page is rendered into.
#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let theme = use_theme();

    html! {
        <div class="page m-4 p-8 rounded-lg" style={theme.palette.surface_style()}>
            {
                if let Some(title) = &props.title {
                    html! {
                        <h1 class="header text-3xl font-bold mb-6" style={theme.palette.text_style()}>
                            { title.to_string() }
                        </h1>
                    }
                } else {
                    html! {}
                }
            }
            {props.children.clone()}
        </div>
    }
}
