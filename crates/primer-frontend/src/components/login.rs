use yew::prelude::*;

use primer::clock::LOGGED_OUT_MESSAGE;

use crate::components::Page;
use crate::hooks::use_autofocus;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_login: Callback<()>,
}

#[function_component(Login)]
pub fn login(props: &LoginProps) -> Html {
    let button_ref = use_node_ref();
    use_autofocus(&button_ref, "login-button", true);

    let on_click = {
        let on_login = props.on_login.clone();
        Callback::from(move |_: MouseEvent| on_login.emit(()))
    };

    html! {
        <Page title={LOGGED_OUT_MESSAGE}>
            <button
                ref={button_ref}
                class="bg-blue-600 text-white text-lg px-6 py-3 rounded hover:bg-blue-700 cursor-pointer"
                onclick={on_click}
            >
                { "Log In" }
            </button>
        </Page>
    }
}
