//! Detail view: category filter pills and the thumbnail grid for one
//! model.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons;
use crate::core::catalog::{ImageRef, display_name};
use crate::models::CategoryFilter;

stylance::import_crate_style!(css, "src/components/gallery/detail.module.css");

#[component]
pub fn Detail(
    type_key: String,
    model: String,
    category_filter: RwSignal<CategoryFilter>,
    sequence: Memo<Vec<ImageRef>>,
    on_back: Callback<()>,
    on_filter: Callback<CategoryFilter>,
    on_open: Callback<usize>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext provided at the root");

    // Category keys and per-bucket counts are fixed for the lifetime of
    // this view; only the active filter changes.
    let (category_counts, total) = ctx.catalog.with_value(|catalog| {
        catalog
            .model(&type_key, &model)
            .map(|entry| {
                let counts: Vec<(String, usize)> = entry
                    .category_keys()
                    .iter()
                    .map(|key| {
                        let count = entry.bucket(key).map_or(0, |b| b.len());
                        (key.clone(), count)
                    })
                    .collect();
                (counts, entry.total_images())
            })
            .unwrap_or_default()
    });

    let pill_class = move |filter: CategoryFilter| {
        move || {
            if category_filter.get() == filter {
                format!("{} {}", css::pill, css::pill_active)
            } else {
                css::pill.to_string()
            }
        }
    };

    view! {
        <div class=css::back_row>
            <button class=css::back_button on:click=move |_| on_back.run(())>
                <Icon icon=icons::BACK />
                " Back"
            </button>
            <h2 class=css::gallery_title>{model.clone()}</h2>
        </div>

        <div class=css::category_pills>
            <button
                class=pill_class(CategoryFilter::All)
                on:click=move |_| on_filter.run(CategoryFilter::All)
            >
                {format!("All ({total})")}
            </button>
            {category_counts
                .into_iter()
                .map(|(key, count)| {
                    let label = format!("{} ({count})", display_name(&key));
                    let filter = CategoryFilter::One(key);
                    let set_to = filter.clone();
                    view! {
                        <button
                            class=pill_class(filter)
                            on:click=move |_| on_filter.run(set_to.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>

        <div class=css::thumb_grid>
            <For
                each={move || sequence.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(_, image)| image.url.clone()
                children=move |(index, image)| {
                    view! {
                        <button
                            class=css::thumb_card
                            title="Open"
                            on:click=move |_| on_open.run(index)
                        >
                            <div class=css::thumb_wrap>
                                <img src=image.url.clone() alt=image.file.clone() loading="lazy" />
                            </div>
                            <div class=css::thumb_name>{image.file.clone()}</div>
                        </button>
                    }
                }
            />
        </div>
    }
}
