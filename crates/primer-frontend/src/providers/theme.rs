use gloo_storage::{LocalStorage, Storage};
use web_sys::window;
use yew::prelude::*;

use primer::log::info;
use primer::theme::{Palette, THEME_STORAGE_KEY, ThemeMode};

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    pub mode: ThemeMode,
    pub palette: Palette,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn initial_mode() -> ThemeMode {
    LocalStorage::get::<ThemeMode>(THEME_STORAGE_KEY).unwrap_or_else(|_| {
        if prefers_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    })
}

fn apply_class(mode: ThemeMode) {
    if let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = html.class_list();
        if mode.is_dark() {
            class_list.add_1("dark").ok();
        } else {
            class_list.remove_1("dark").ok();
        }
    }
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let mode = use_state(initial_mode);

    let toggle = {
        let mode = mode.clone();
        Callback::from(move |_| {
            let new_mode = mode.toggled();
            info!("Switching to {new_mode} theme");

            LocalStorage::set(THEME_STORAGE_KEY, new_mode).ok();
            mode.set(new_mode);
        })
    };

    use_effect_with(*mode, |mode| apply_class(*mode));

    let context = ThemeContext {
        mode: *mode,
        palette: mode.palette(),
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}
