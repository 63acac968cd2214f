//! Leptos components.
//!
//! - [`header`] - site header with logo and theme toggle
//! - [`gallery`] - model browser (landing, detail, lightbox)
//! - [`timer`] - practice stopwatch and countdown timer
//! - [`theme`] - persisted light/dark toggle
//! - [`icons`] - semantic icon constants

pub mod gallery;
pub mod header;
pub mod icons;
pub mod theme;
pub mod timer;

pub use gallery::Gallery;
pub use header::Header;
pub use theme::ThemeToggle;
pub use timer::{Countdown, Practice};
