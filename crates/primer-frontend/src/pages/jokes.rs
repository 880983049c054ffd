use yew::prelude::*;

use primer::jokes::{JOKES_SHOWN, random_jokes};

use crate::components::Page;
use crate::providers::use_theme;

#[function_component(JokesPage)]
pub fn jokes_page() -> Html {
    let theme = use_theme();
    // Drawn once per mount.
    let jokes = use_memo((), |_| random_jokes(JOKES_SHOWN, js_sys::Math::random));

    html! {
        <Page title="Dev Jokes">
            <ul class="divide-y divide-gray-200 rounded border border-gray-200 bg-white">
                {
                    jokes.iter().map(|joke| html! {
                        <li key={joke.key} class="px-4 py-3 text-gray-900">{ joke.text }</li>
                    }).collect::<Html>()
                }
            </ul>
            <p class="mt-4 text-sm opacity-70" style={theme.palette.text_style()}>
                { "Reload the page for a fresh batch." }
            </p>
        </Page>
    }
}
