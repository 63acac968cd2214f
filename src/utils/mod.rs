//! Utility modules for DOM access, audio playback, and formatting.
//!
//! Browser APIs are only touched from here and from the components;
//! everything returns `Option` so a missing window (e.g. during tests)
//! degrades silently instead of panicking.

pub mod audio;
pub mod dom;
pub mod format;

pub use audio::Chime;
pub use format::format_hms;
