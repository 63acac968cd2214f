//! Pure application logic, independent of the UI runtime.
//!
//! Nothing in this module touches `web_sys` or Leptos, so it is fully
//! unit-testable on the host:
//! - [`catalog`] - reference-image index built from the asset manifest
//! - [`timer`] - countdown state machine

pub mod catalog;
pub mod timer;

pub use catalog::{Catalog, CategoryBucket, ImageRef, ModelEntry, TypeIndex};
pub use timer::{CountdownTimer, TimerPhase, TimerStatus};
