//! Persisted light/dark theme toggle.
//!
//! The stored choice wins; without one the system color-scheme
//! preference applies, and system changes keep applying until the user
//! toggles explicitly. Only explicit toggles are persisted.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::components::icons;
use crate::config::{DARK_SCHEME_QUERY, THEME_STORAGE_KEY};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/theme.module.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let prefers_dark = use_media_query(DARK_SCHEME_QUERY);

    let stored = dom::storage_get(THEME_STORAGE_KEY).and_then(|v| Theme::from_str(&v));
    let theme = RwSignal::new(
        stored.unwrap_or_else(|| Theme::from_system(prefers_dark.get_untracked())),
    );

    // Apply the active theme to <html data-theme="...">.
    Effect::new(move |_| {
        dom::apply_document_theme(theme.get().as_str());
    });

    // Follow system changes only while no explicit choice is stored.
    Effect::new(move |_| {
        let system = Theme::from_system(prefers_dark.get());
        if dom::storage_get(THEME_STORAGE_KEY).is_none() {
            theme.set(system);
        }
    });

    let toggle = move |_| {
        let next = theme.get().flipped();
        theme.set(next);
        dom::storage_set(THEME_STORAGE_KEY, next.as_str());
    };

    view! {
        <button
            type="button"
            class=css::theme_toggle
            on:click=toggle
            aria-label="Toggle theme"
            title=move || {
                format!("Switch to {} mode", theme.get().flipped().as_str())
            }
        >
            {move || match theme.get() {
                Theme::Dark => view! { <Icon icon=icons::SUN /> },
                Theme::Light => view! { <Icon icon=icons::MOON /> },
            }}
        </button>
    }
}
