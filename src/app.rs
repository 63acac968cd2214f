//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and
//! application-level setup following Leptos conventions.

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::{Countdown, Gallery, Header, Practice};
use crate::config::REFERENCE_FILES;
use crate::core::Catalog;

stylance::import_crate_style!(css, "src/app.module.css");

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any
/// child component with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The reference-image catalog, built once from the build-time
    /// manifest and frozen afterwards.
    pub catalog: StoredValue<Catalog>,
}

impl AppContext {
    /// Builds the catalog from the generated manifest.
    pub fn new() -> Self {
        let catalog = Catalog::from_paths(REFERENCE_FILES.iter().copied());
        log!(
            "catalog ready: {} reference images across {} types",
            REFERENCE_FILES.len(),
            catalog.type_names().len()
        );
        Self {
            catalog: StoredValue::new(catalog),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class=css::error_screen>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            }
        }>
            <Header />
            <main>
                <Practice />
                <Countdown />
                <section class=css::models_section>
                    <h1>"Models"</h1>
                    <Gallery />
                </section>
            </main>
        </ErrorBoundary>
    }
}
