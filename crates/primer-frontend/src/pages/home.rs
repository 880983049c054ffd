use yew::prelude::*;

use primer::log::info;

use crate::components::{Clock, Login};

/// Shows the login prompt, or the clock once logged in.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let logged_in = use_state(|| false);

    let on_login = {
        let logged_in = logged_in.clone();
        Callback::from(move |_: ()| {
            info!("Logged in");
            logged_in.set(true);
        })
    };

    let on_logout = {
        let logged_in = logged_in.clone();
        Callback::from(move |_: ()| {
            info!("Logged out");
            logged_in.set(false);
        })
    };

    if *logged_in {
        html! { <Clock {on_logout} /> }
    } else {
        html! { <Login {on_login} /> }
    }
}
