use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{CalculatorPage, FormPage, HomePage, JokesPage};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/calculator")]
    Calculator,
    #[at("/jokes")]
    Jokes,
    #[at("/form")]
    Form,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Calculator => html! { <CalculatorPage /> },
        Route::Jokes => html! { <JokesPage /> },
        Route::Form => html! { <FormPage /> },
        Route::NotFound => html! { <div class="p-8">{ "404 Not Found" }</div> },
    }
}
