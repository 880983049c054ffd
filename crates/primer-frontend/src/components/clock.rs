use yew::prelude::*;

use primer::clock::{ClockFocus, ENTITY_INTRO, ENTITY_NAME, Greeting, TICK_MILLIS};
use primer::log::debug;

use crate::components::{Page, use_error_reporter};
use crate::hooks::{focus_node, use_autofocus, use_interval};
use crate::providers::use_theme;

fn local_time() -> String {
    js_sys::Date::new_0().to_locale_time_string("en-US").into()
}

#[derive(Properties, PartialEq)]
pub struct ClockProps {
    pub on_logout: Callback<()>,
}

#[function_component(Clock)]
pub fn clock(props: &ClockProps) -> Html {
    let theme = use_theme();
    let report = use_error_reporter();

    let greeting = use_state(Greeting::default);
    let now = use_state(local_time);

    let click_ref = use_node_ref();
    let logout_ref = use_node_ref();
    use_autofocus(&click_ref, "click-button", true);

    {
        let now = now.clone();
        use_interval(TICK_MILLIS, Callback::from(move |_| now.set(local_time())));
    }

    let on_click = {
        let greeting = greeting.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Greeting toggled");
            greeting.set(greeting.toggled());
        })
    };

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    // Focus moves relative to the button that received the key press.
    let on_key_down = |from: ClockFocus| {
        let report = report.clone();
        let click_ref = click_ref.clone();
        let logout_ref = logout_ref.clone();
        Callback::from(move |e: KeyboardEvent| {
            let Some(next) = from.after_key(&e.key()) else {
                return;
            };

            let result = match next {
                ClockFocus::ClickMe => focus_node(&click_ref, "click-button"),
                ClockFocus::LogOut => focus_node(&logout_ref, "logout-button"),
            };
            if let Err(err) = result {
                report.emit(err);
            }
        })
    };

    html! {
        <Page>
            <h1 class="header text-3xl font-bold mb-4" style={theme.palette.text_style()}>
                { greeting.heading(ENTITY_NAME) }
            </h1>
            <h2 class="date text-xl mb-4" style={theme.palette.text_style()}>
                { format!("It is {}", *now) }
            </h2>
            <p class="para mb-6" style={theme.palette.text_style()}>{ ENTITY_INTRO }</p>

            <button
                ref={click_ref.clone()}
                class="bg-blue-600 text-white text-lg px-6 py-3 rounded hover:bg-blue-700 cursor-pointer"
                onclick={on_click}
                onkeydown={on_key_down(ClockFocus::ClickMe)}
            >
                { "Click Me" }
            </button>
            <button
                ref={logout_ref.clone()}
                class="ml-4 bg-gray-600 text-white text-lg px-6 py-3 rounded hover:bg-gray-700 cursor-pointer"
                onclick={on_logout}
                onkeydown={on_key_down(ClockFocus::LogOut)}
            >
                { "Log Out" }
            </button>
        </Page>
    }
}
