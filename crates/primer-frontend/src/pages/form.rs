use web_sys::HtmlInputElement;
use yew::prelude::*;

use primer::log::{error, info};

use crate::components::Page;
use crate::hooks::use_autofocus;
use crate::providers::use_theme;

#[function_component(FormPage)]
pub fn form_page() -> Html {
    let theme = use_theme();
    let name = use_state(String::new);
    let input_ref = use_node_ref();
    use_autofocus(&input_ref, "name-input", true);

    let on_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_submit = {
        let name = name.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Name submitted: {}", *name);

            if let Some(window) = web_sys::window() {
                if let Err(err) = window.alert_with_message(&name) {
                    error!("Failed to show alert: {err:?}");
                }
            }
        })
    };

    html! {
        <Page>
            <form onsubmit={on_submit}>
                <fieldset>
                    <legend class="header text-4xl font-bold mb-6" style={theme.palette.text_style()}>
                        { "Name Form" }
                    </legend>

                    <label class="font-medium" style={theme.palette.text_style()}>
                        { "Name:" }
                        <input
                            ref={input_ref}
                            type="text"
                            class="ml-2 px-3 py-2 border border-gray-300 rounded text-gray-900"
                            value={(*name).clone()}
                            oninput={on_input}
                        />
                    </label>
                    <input
                        type="submit"
                        value="Submit"
                        class="ml-3 bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 cursor-pointer"
                    />
                </fieldset>
            </form>
        </Page>
    }
}
