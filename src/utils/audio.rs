//! Chime playback.
//!
//! One persistent `<audio>` element per owning component: created on
//! mount, paused when dropped. Playback failures (autoplay policy,
//! missing asset) are swallowed — the timer keeps working without
//! sound.

use leptos::logging::warn;
use web_sys::HtmlAudioElement;

/// A reusable audio cue backed by a single `HtmlAudioElement`.
pub struct Chime {
    element: Option<HtmlAudioElement>,
}

impl Chime {
    /// Create the audio element eagerly so the asset preloads.
    pub fn new(url: &str, volume: f64) -> Self {
        let element = HtmlAudioElement::new_with_src(url)
            .inspect(|audio| {
                audio.set_preload("auto");
                audio.set_volume(volume);
            })
            .ok();
        if element.is_none() {
            warn!("chime unavailable: failed to create audio element for {url}");
        }
        Self { element }
    }

    /// Rewind to the start and play, ignoring rejection.
    pub fn play(&self) {
        if let Some(audio) = &self.element {
            audio.set_current_time(0.0);
            let _ = audio.play();
        }
    }
}

impl Drop for Chime {
    fn drop(&mut self) {
        if let Some(audio) = &self.element {
            let _ = audio.pause();
        }
    }
}
