use yew::prelude::*;
use yew_router::prelude::*;

use crate::providers::use_theme;
use crate::routes::Route;

const LINK_CLASSES: &str = "text-gray-300 hover:text-white px-3 py-2 rounded-md text-sm font-medium";

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let theme = use_theme();

    let on_toggle = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: Event| toggle.emit(()))
    };

    html! {
        <nav class="flex items-center justify-between bg-gray-800 px-4 py-3">
            <div class="flex space-x-2">
                <Link<Route> classes={LINK_CLASSES} to={Route::Home}>{ "Home" }</Link<Route>>
                <Link<Route> classes={LINK_CLASSES} to={Route::Calculator}>{ "Calculator" }</Link<Route>>
                <Link<Route> classes={LINK_CLASSES} to={Route::Jokes}>{ "Jokes" }</Link<Route>>
                <Link<Route> classes={LINK_CLASSES} to={Route::Form}>{ "Form" }</Link<Route>>
            </div>

            <label class="flex items-center space-x-2 text-gray-300 text-sm cursor-pointer">
                <input
                    type="checkbox"
                    id="theme-switch"
                    checked={theme.mode.is_dark()}
                    onchange={on_toggle}
                />
                <span>{ "Theme" }</span>
            </label>
        </nav>
    }
}
