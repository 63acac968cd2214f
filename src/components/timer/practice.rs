//! Count-up practice stopwatch.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::config::TICK_INTERVAL_MS;
use crate::utils::format_hms;

stylance::import_crate_style!(css, "src/components/timer/practice.module.css");

#[component]
pub fn Practice() -> impl IntoView {
    let seconds = RwSignal::new(0u32);
    let paused = RwSignal::new(false);

    // The interval exists exactly while the stopwatch is unpaused, so
    // ticks can never overlap.
    let interval: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(None);
    Effect::new(move |_| {
        let running = !paused.get();
        interval.set_value(None);
        if running {
            interval.set_value(Some(Interval::new(TICK_INTERVAL_MS, move || {
                seconds.update(|s| *s = s.saturating_add(1));
            })));
        }
    });
    on_cleanup(move || interval.set_value(None));

    view! {
        <div class=css::practice>
            <h2 class=css::clock>{move || format_hms(seconds.get())}</h2>
            <button on:click=move |_| paused.update(|p| *p = !*p)>
                {move || if paused.get() { "Resume" } else { "Pause" }}
            </button>
        </div>
    }
}
