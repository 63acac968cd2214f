//! Lightbox overlay: full-screen image with zoom, pan and stepping.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons;
use crate::core::catalog::ImageRef;
use crate::models::{LightboxState, ViewTransform};

stylance::import_crate_style!(css, "src/components/gallery/lightbox.module.css");

#[component]
pub fn Lightbox(
    sequence: Memo<Vec<ImageRef>>,
    lightbox: RwSignal<LightboxState>,
    transform: RwSignal<ViewTransform>,
    on_close: Callback<()>,
) -> impl IntoView {
    // Last pointer position while a drag is in progress.
    let drag_from = RwSignal::new(None::<(f64, f64)>);

    let current = Memo::new(move |_| {
        let index = lightbox.get().index()?;
        sequence.get().get(index).cloned()
    });

    let step = move |forward: bool| {
        let len = sequence.get_untracked().len();
        lightbox.update(|state| {
            *state = if forward { state.next(len) } else { state.prev(len) };
        });
        // A new image gets a fresh transform.
        transform.set(ViewTransform::default());
        drag_from.set(None);
    };

    let on_wheel = move |event: ev::WheelEvent| {
        event.prevent_default();
        transform.update(|t| *t = t.wheel(event.delta_y()));
    };

    let on_pointer_down = move |event: ev::PointerEvent| {
        if transform.get_untracked().can_pan() {
            event.prevent_default();
            drag_from.set(Some((event.client_x() as f64, event.client_y() as f64)));
        }
    };

    let on_pointer_move = move |event: ev::PointerEvent| {
        if let Some((from_x, from_y)) = drag_from.get_untracked() {
            let (x, y) = (event.client_x() as f64, event.client_y() as f64);
            transform.update(|t| *t = t.pan_by(x - from_x, y - from_y));
            drag_from.set(Some((x, y)));
        }
    };

    let end_drag = move |_: ev::PointerEvent| drag_from.set(None);

    let on_double_click = move |event: ev::MouseEvent| {
        event.stop_propagation();
        transform.update(|t| *t = t.toggle_double_click());
        drag_from.set(None);
    };

    view! {
        <div
            class=css::lightbox
            role="dialog"
            aria-modal="true"
            on:click=move |_| on_close.run(())
            on:wheel=on_wheel
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=end_drag
            on:pointerleave=end_drag
        >
            <button
                class=css::close_button
                aria-label="Close"
                on:click=move |event| {
                    event.stop_propagation();
                    on_close.run(());
                }
            >
                <Icon icon=icons::CLOSE />
            </button>
            <button
                class=format!("{} {}", css::nav_button, css::nav_left)
                aria-label="Previous"
                on:click=move |event| {
                    event.stop_propagation();
                    step(false);
                }
            >
                <Icon icon=icons::CHEVRON_LEFT />
            </button>
            <button
                class=format!("{} {}", css::nav_button, css::nav_right)
                aria-label="Next"
                on:click=move |event| {
                    event.stop_propagation();
                    step(true);
                }
            >
                <Icon icon=icons::CHEVRON_RIGHT />
            </button>
            {move || {
                current
                    .get()
                    .map(|image| {
                        view! {
                            <img
                                class=css::lightbox_img
                                class=(css::grabbable, move || transform.get().can_pan())
                                src=image.url
                                alt=image.file
                                style=move || transform.get().css()
                                on:click=move |event| event.stop_propagation()
                                on:dblclick=on_double_click
                                draggable="false"
                            />
                        }
                    })
            }}
        </div>
    }
}
