use yew::prelude::*;

use primer::log::debug;
use primer::temperature::{Scale, TemperatureReading};

use crate::components::{BoilingVerdict, ErrorBoundary, Page, TemperatureInput};

#[function_component(CalculatorPage)]
pub fn calculator_page() -> Html {
    let reading = use_state(TemperatureReading::default);

    let on_edit = |scale: Scale| {
        let reading = reading.clone();
        Callback::from(move |text: String| {
            debug!(%scale, %text, "Temperature edited");
            reading.set(TemperatureReading::new(text, scale));
        })
    };

    let on_submit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <Page title="Boiling Temperature">
            <form onsubmit={on_submit}>
                {
                    Scale::ALL.iter().map(|&scale| {
                        html! {
                            <ErrorBoundary key={scale.as_str()}>
                                <TemperatureInput
                                    {scale}
                                    value={reading.display_for(scale)}
                                    on_change={on_edit(scale)}
                                    autofocus={scale == Scale::Celsius}
                                />
                            </ErrorBoundary>
                        }
                    }).collect::<Html>()
                }

                <BoilingVerdict verdict={reading.verdict()} />
            </form>
        </Page>
    }
}
