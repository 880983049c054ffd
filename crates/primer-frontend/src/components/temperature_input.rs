use web_sys::HtmlInputElement;
use yew::prelude::*;

use primer::temperature::Scale;

use crate::hooks::use_autofocus;
use crate::providers::use_theme;

#[derive(Properties, PartialEq)]
pub struct TemperatureInputProps {
    pub scale: Scale,
    /// Either the raw text the user typed or the value derived from the
    /// other field.
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(false)]
    pub autofocus: bool,
}

#[function_component(TemperatureInput)]
pub fn temperature_input(props: &TemperatureInputProps) -> Html {
    let theme = use_theme();
    let input_ref = use_node_ref();
    let id = format!("temperature-{}", props.scale.as_str());

    use_autofocus(&input_ref, "temperature-input", props.autofocus);

    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    html! {
        <div class="form-group mb-4">
            <label for={id.clone()} class="block mb-1 font-medium" style={theme.palette.text_style()}>
                { format!("Enter temperature in {}", props.scale.name()) }
            </label>
            <input
                ref={input_ref}
                id={id}
                class="form-control w-full px-3 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Temperature in specified scale"
                value={props.value.clone()}
                oninput={on_input}
            />
        </div>
    }
}
