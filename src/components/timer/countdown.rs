//! Countdown timer widget.
//!
//! The state machine lives in [`core::timer`](crate::core::timer); this
//! component wires it to a one-second interval, the chime, and the
//! input row. The interval is torn down and recreated whenever the
//! running state flips, never on individual ticks.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::config::{CHIME_URL, CHIME_VOLUME, TICK_INTERVAL_MS};
use crate::core::timer::{CountdownTimer, TimerStatus};
use crate::utils::{Chime, format_hms};

stylance::import_crate_style!(css, "src/components/timer/countdown.module.css");

#[component]
pub fn Countdown() -> impl IntoView {
    let timer = RwSignal::new(CountdownTimer::new());

    let hours = RwSignal::new("0".to_string());
    let minutes = RwSignal::new("0".to_string());
    let seconds = RwSignal::new("0".to_string());
    let rest = RwSignal::new("0".to_string());

    // One audio handle for the component lifetime; dropped (and paused)
    // when the component unmounts.
    let chime: StoredValue<Chime, LocalStorage> =
        StoredValue::new_local(Chime::new(CHIME_URL, CHIME_VOLUME));

    // Recreate the tick interval only when the running state flips.
    let running = Memo::new(move |_| timer.with(|t| t.is_running()));
    let interval: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(None);
    Effect::new(move |_| {
        let active = running.get();
        interval.set_value(None);
        if active {
            interval.set_value(Some(Interval::new(TICK_INTERVAL_MS, move || {
                let outcome = timer.try_update(|t| t.tick()).unwrap_or_default();
                if outcome.chime {
                    chime.with_value(Chime::play);
                }
            })));
        }
    });
    on_cleanup(move || interval.set_value(None));

    let set_time = move |_| {
        timer.update(|t| t.set_time(&hours.get(), &minutes.get(), &seconds.get()));
    };

    let start_label = move || {
        if timer.with(|t| t.is_running()) {
            "Pause"
        } else {
            "Start"
        }
    };

    let start_disabled =
        move || timer.with(|t| t.status() == TimerStatus::Idle && t.initial() == 0);

    view! {
        <div class=css::countdown>
            <div class=css::clock>
                {move || format_hms(timer.with(|t| t.remaining()))}
                <Show when=move || timer.with(|t| t.is_resting())>
                    <span class=css::rest_badge>"Rest"</span>
                </Show>
            </div>

            <div class=css::input_row>
                <label>
                    "H"
                    <input
                        type="number"
                        min="0"
                        prop:value=hours
                        on:input=move |ev| hours.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "M"
                    <input
                        type="number"
                        min="0"
                        prop:value=minutes
                        on:input=move |ev| minutes.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "S"
                    <input
                        type="number"
                        min="0"
                        prop:value=seconds
                        on:input=move |ev| seconds.set(event_target_value(&ev))
                    />
                </label>
                <button class=css::set_button on:click=set_time>"Set"</button>
            </div>

            <div class=css::input_row>
                <label class=css::check_label>
                    <input
                        type="checkbox"
                        prop:checked=move || timer.with(|t| t.auto_restart())
                        on:change=move |ev| {
                            timer.update(|t| t.set_auto_restart(event_target_checked(&ev)));
                        }
                    />
                    "Auto-restart"
                </label>
                <label>
                    "Rest (s)"
                    <input
                        type="number"
                        min="0"
                        prop:value=rest
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            let parsed = value.trim().parse::<i64>().ok().map_or(0, |n| n.max(0));
                            timer.update(|t| t.set_rest_duration(parsed as u32));
                            rest.set(value);
                        }
                    />
                </label>
            </div>

            <div class=css::button_row>
                <button on:click=move |_| timer.update(|t| t.start_pause()) disabled=start_disabled>
                    {start_label}
                </button>
                <button on:click=move |_| timer.update(|t| t.reset())>"Reset"</button>
                <button on:click=move |_| timer.update(|t| t.clear())>"Clear"</button>
            </div>
        </div>
    }
}
