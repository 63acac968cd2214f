//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The reference-image manifest is generated at build time by `build.rs`.

// =============================================================================
// Reference Manifest (generated at build time)
// =============================================================================

include!(concat!(env!("OUT_DIR"), "/reference_manifest.rs"));

// =============================================================================
// Application Metadata
// =============================================================================

/// Site title displayed in the header.
pub const APP_NAME: &str = "Watts Reference Archive";

/// Tagline displayed under the title.
pub const APP_TAGLINE: &str = "Photo Reference for Drawing and Painting.";

/// Usage hint displayed under the tagline.
pub const APP_HINT: &str = "Select a model, set the timer and go!";

// =============================================================================
// Catalog Configuration
// =============================================================================

/// Folder name that anchors the (type, model, category) segments in a
/// reference path. Segments before the anchor are ignored.
pub const REFERENCE_ANCHOR: &str = "references";

/// Grouping key used when a path is missing its type or category segment.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Display name used when a path is missing its model segment.
pub const UNKNOWN_MODEL: &str = "Unknown Model";

/// Category key whose first image becomes a model's cover. The bucket
/// itself never appears in the navigable category list.
pub const THUMBNAIL_CATEGORY: &str = "thumbnail";

// =============================================================================
// Lightbox Zoom Configuration
// =============================================================================

pub mod zoom {
    /// Minimum zoom scale (fit).
    pub const MIN_SCALE: f64 = 1.0;
    /// Maximum zoom scale.
    pub const MAX_SCALE: f64 = 5.0;
    /// Multiplicative step applied by the `+`/`-` keyboard shortcuts.
    pub const KEY_STEP: f64 = 1.2;
    /// Scale toggled to by double-click when currently at fit.
    pub const DOUBLE_CLICK_SCALE: f64 = 2.0;
    /// Exponent multiplier for wheel deltas, so wheel zoom feels smooth
    /// rather than linear.
    pub const WHEEL_SENSITIVITY: f64 = 0.0015;
}

// =============================================================================
// Timer Configuration
// =============================================================================

/// Countdown/stopwatch tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u32 = 1_000;

/// URL of the chime played on each countdown zero-crossing.
pub const CHIME_URL: &str = "/assets/guitar-chime.mp3";

/// Chime playback volume.
pub const CHIME_VOLUME: f64 = 0.9;

// =============================================================================
// Theme Configuration
// =============================================================================

/// localStorage key for the persisted theme choice ("light" | "dark").
pub const THEME_STORAGE_KEY: &str = "theme";

/// Media query consulted when no explicit theme choice is stored.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// =============================================================================
// UI Configuration
// =============================================================================

/// Logo image displayed in the site header.
pub const LOGO_URL: &str = "/assets/watts-logo.png";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
