//! Site header: logo, title, tagline, theme toggle.

use leptos::prelude::*;

use crate::components::ThemeToggle;
use crate::config::{APP_HINT, APP_NAME, APP_TAGLINE, LOGO_URL};

stylance::import_crate_style!(css, "src/components/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class=css::site_header>
            <img class=css::logo src=LOGO_URL alt="Watts logo" />
            <div class=css::titles>
                <h1>{APP_NAME}</h1>
                <p>{APP_TAGLINE}</p>
                <p>{APP_HINT}</p>
            </div>
            <ThemeToggle />
        </header>
    }
}
