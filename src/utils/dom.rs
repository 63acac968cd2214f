//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling. All accessors return `Option` and degrade silently when
//! the API is unavailable.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Read a localStorage value.
pub fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Write a localStorage value; a full or unavailable store is ignored.
pub fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Set the `data-theme` attribute on the document element.
pub fn apply_document_theme(theme: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(root) = document.document_element()
    {
        let _ = root.set_attribute("data-theme", theme);
    }
}

/// Hide body overflow and return the previous inline value so the
/// caller can restore it. Acquire/release must be paired: every call
/// site that locks also restores on all of its close paths.
pub fn lock_body_scroll() -> Option<String> {
    let body = window()?.document()?.body()?;
    let style = body.style();
    let previous = style.get_property_value("overflow").unwrap_or_default();
    let _ = style.set_property("overflow", "hidden");
    Some(previous)
}

/// Restore the body overflow value saved by [`lock_body_scroll`].
pub fn restore_body_scroll(previous: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(body) = document.body()
    {
        let _ = body.style().set_property("overflow", previous);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body_overflow() -> String {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|b| b.style().get_property_value("overflow").unwrap_or_default())
            .expect("test runs in a browser with a body")
    }

    fn set_body_overflow(value: &str) {
        let body = window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .expect("test runs in a browser with a body");
        body.style()
            .set_property("overflow", value)
            .expect("overflow is settable");
    }

    #[wasm_bindgen_test]
    fn scroll_lock_round_trips_a_non_empty_overflow() {
        set_body_overflow("scroll");

        let previous = lock_body_scroll().expect("body available");
        assert_eq!(previous, "scroll");
        assert_eq!(body_overflow(), "hidden");

        restore_body_scroll(&previous);
        assert_eq!(body_overflow(), "scroll");

        set_body_overflow("");
    }

    #[wasm_bindgen_test]
    fn scroll_lock_round_trips_an_unset_overflow() {
        set_body_overflow("");

        let previous = lock_body_scroll().expect("body available");
        assert_eq!(previous, "");
        assert_eq!(body_overflow(), "hidden");

        restore_body_scroll(&previous);
        assert_eq!(body_overflow(), "");
    }
}
