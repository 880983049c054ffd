use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Emits `on_tick` every `millis` milliseconds while the component is
/// mounted. The interval is cancelled on unmount.
#[hook]
pub fn use_interval(millis: u32, on_tick: Callback<()>) {
    use_effect_with(millis, move |millis| {
        let interval = Interval::new(*millis, move || on_tick.emit(()));
        move || drop(interval)
    });
}
