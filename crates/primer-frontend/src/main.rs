mod components;
mod hooks;
mod pages;
mod providers;
mod routes;

use yew::prelude::*;
use yew::suspense::Suspense;
use yew_router::prelude::*;

use components::NavBar;
use providers::ThemeProvider;
use routes::{Route, switch};

#[function_component(App)]
fn app() -> Html {
    let fallback = html! { <div class="p-8">{ "Loading ...." }</div> };

    html! {
        <BrowserRouter>
            <ThemeProvider>
                <NavBar />
                <Suspense {fallback}>
                    <Switch<Route> render={switch} />
                </Suspense>
            </ThemeProvider>
        </BrowserRouter>
    }
}

fn main() {
    primer::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
