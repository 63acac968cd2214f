//! Model browser: landing grid, model detail, and the lightbox overlay.
//!
//! Navigation is three nested view states. [`browser::Gallery`] owns
//! every piece of selection state and the view transform, so all reset
//! rules live in one place.

mod browser;
mod detail;
mod landing;
mod lightbox;

pub use browser::Gallery;
