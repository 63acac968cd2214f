//! Landing view: one card per model, filtered by type.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::catalog::display_name;
use crate::models::TypeFilter;

stylance::import_crate_style!(css, "src/components/gallery/landing.module.css");

#[component]
pub fn Landing(
    type_filter: RwSignal<TypeFilter>,
    on_select: Callback<(String, String)>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext provided at the root");

    let type_names =
        ctx.catalog.with_value(|catalog| catalog.type_names().to_vec());

    let cards = Memo::new(move |_| {
        let filter = type_filter.get();
        ctx.catalog.with_value(|catalog| catalog.cards(&filter))
    });

    let pill_class = move |filter: TypeFilter| {
        move || {
            if type_filter.get() == filter {
                format!("{} {}", css::pill, css::pill_active)
            } else {
                css::pill.to_string()
            }
        }
    };

    view! {
        <div class=css::type_pills>
            <button class=pill_class(TypeFilter::All) on:click=move |_| type_filter.set(TypeFilter::All)>
                "All"
            </button>
            {type_names
                .into_iter()
                .map(|type_key| {
                    let label = display_name(&type_key);
                    let filter = TypeFilter::One(type_key);
                    let set_to = filter.clone();
                    view! {
                        <button
                            class=pill_class(filter)
                            on:click=move |_| type_filter.set(set_to.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>

        <div class=css::model_grid>
            <For
                each=move || cards.get()
                key=|card| card.clone()
                children=move |(type_key, model)| {
                    let card_url = ctx.catalog.with_value(|catalog| {
                        catalog
                            .model(&type_key, &model)
                            .and_then(|entry| entry.card_image())
                            .map(|image| image.url.clone())
                    });
                    let label = model.clone();
                    let title = format!("Open {model}");
                    view! {
                        <button
                            class=css::model_card
                            title=title
                            on:click=move |_| on_select.run((type_key.clone(), model.clone()))
                        >
                            <div class=css::thumb_wrap>
                                {card_url.map(|url| view! { <img src=url alt=label.clone() /> })}
                            </div>
                            <div class=css::model_name>{label.clone()}</div>
                        </button>
                    }
                }
            />
        </div>
    }
}
