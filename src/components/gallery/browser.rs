//! Gallery root: owns selection state and global key handling.

use leptos::ev;
use leptos::prelude::*;

use super::detail::Detail;
use super::landing::Landing;
use super::lightbox::Lightbox;
use crate::app::AppContext;
use crate::core::catalog::ImageRef;
use crate::models::{CategoryFilter, LightboxState, TypeFilter, ViewTransform};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/gallery/browser.module.css");

/// The gallery browser.
///
/// State reset rules (stale transforms must never leak across images):
/// - selecting a model resets the category filter, closes the lightbox
///   and resets the view transform;
/// - changing the category filter resets the view transform;
/// - closing the lightbox (any path) resets the view transform and
///   releases the scroll lock.
#[component]
pub fn Gallery() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext provided at the root");

    let type_filter = RwSignal::new(TypeFilter::All);
    let selected = RwSignal::new(None::<(String, String)>);
    let category_filter = RwSignal::new(CategoryFilter::All);
    let lightbox = RwSignal::new(LightboxState::Closed);
    let transform = RwSignal::new(ViewTransform::default());

    // The ordered image list eligible for lightbox navigation, cloned
    // out of the frozen catalog for rendering.
    let sequence = Memo::new(move |_| -> Vec<ImageRef> {
        let Some((type_key, model)) = selected.get() else {
            return Vec::new();
        };
        let filter = category_filter.get();
        ctx.catalog.with_value(|catalog| {
            catalog
                .model(&type_key, &model)
                .map(|entry| entry.sequence(&filter).into_iter().cloned().collect())
                .unwrap_or_default()
        })
    });

    let close_lightbox = move || {
        lightbox.set(LightboxState::Closed);
        transform.set(ViewTransform::default());
    };

    let open_lightbox = move |index: usize| {
        transform.set(ViewTransform::default());
        lightbox.set(LightboxState::Open(index));
    };

    let select_model = move |(type_key, model): (String, String)| {
        category_filter.set(CategoryFilter::All);
        close_lightbox();
        selected.set(Some((type_key, model)));
    };

    let back_to_landing = move || {
        close_lightbox();
        category_filter.set(CategoryFilter::All);
        selected.set(None);
    };

    let set_category = move |filter: CategoryFilter| {
        transform.set(ViewTransform::default());
        category_filter.set(filter);
    };

    // Scroll lock pairs with the lightbox being open; the previous
    // overflow value is restored on every close path, including
    // unmount.
    let saved_overflow: StoredValue<Option<String>> = StoredValue::new(None);
    let release_scroll = move || {
        let previous = saved_overflow.with_value(Clone::clone);
        saved_overflow.set_value(None);
        if let Some(previous) = previous {
            dom::restore_body_scroll(&previous);
        }
    };
    Effect::new(move |_| {
        if lightbox.get().is_open() {
            if saved_overflow.with_value(Option::is_none) {
                saved_overflow.set_value(dom::lock_body_scroll());
            }
        } else {
            release_scroll();
        }
    });
    on_cleanup(release_scroll);

    // Escape closes the lightbox first, then the detail view; arrows
    // and zoom keys apply only while the lightbox is open.
    let key_handle = window_event_listener(ev::keydown, move |event| {
        let open = lightbox.get_untracked().is_open();
        match event.key().as_str() {
            "Escape" => {
                if open {
                    close_lightbox();
                } else if selected.get_untracked().is_some() {
                    back_to_landing();
                }
            }
            "ArrowRight" if open => {
                let len = sequence.get_untracked().len();
                lightbox.update(|state| *state = state.next(len));
                transform.set(ViewTransform::default());
            }
            "ArrowLeft" if open => {
                let len = sequence.get_untracked().len();
                lightbox.update(|state| *state = state.prev(len));
                transform.set(ViewTransform::default());
            }
            "+" | "=" if open => transform.update(|t| *t = t.zoom_in()),
            "-" if open => transform.update(|t| *t = t.zoom_out()),
            "f" if open => transform.update(|t| *t = t.fit()),
            _ => {}
        }
    });
    on_cleanup(move || key_handle.remove());

    view! {
        <div class=css::gallery>
            {move || match selected.get() {
                None => view! {
                    <Landing
                        type_filter=type_filter
                        on_select=Callback::new(select_model)
                    />
                }
                    .into_any(),
                Some((type_key, model)) => view! {
                    <Detail
                        type_key=type_key
                        model=model
                        category_filter=category_filter
                        sequence=sequence
                        on_back=Callback::new(move |_| back_to_landing())
                        on_filter=Callback::new(set_category)
                        on_open=Callback::new(open_lightbox)
                    />
                }
                    .into_any(),
            }}
            <Show when=move || lightbox.get().is_open()>
                <Lightbox
                    sequence=sequence
                    lightbox=lightbox
                    transform=transform
                    on_close=Callback::new(move |_| close_lightbox())
                />
            </Show>
        </div>
    }
}
