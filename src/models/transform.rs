//! Lightbox view transform.
//!
//! A single immutable value describing how the current image is drawn:
//! zoom scale plus a translation offset in screen pixels. Every gesture
//! replaces the whole value, which makes the "reset on image change"
//! rule trivial — the owner just stores [`ViewTransform::default`].

use crate::config::zoom::{DOUBLE_CLICK_SCALE, KEY_STEP, MAX_SCALE, MIN_SCALE, WHEEL_SENSITIVITY};

/// Zoom scale and pan offset for the lightbox image.
///
/// The scale is always within `[MIN_SCALE, MAX_SCALE]`; constructors
/// clamp after every operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: MIN_SCALE,
            x: 0.0,
            y: 0.0,
        }
    }
}

impl ViewTransform {
    /// Whether drag panning is available (only while zoomed in).
    pub fn can_pan(&self) -> bool {
        self.scale > MIN_SCALE
    }

    /// Apply a wheel gesture. The exponential mapping keeps equal wheel
    /// movements feeling like equal zoom steps at any scale.
    pub fn wheel(self, delta_y: f64) -> Self {
        self.with_scale(self.scale * (-delta_y * WHEEL_SENSITIVITY).exp())
    }

    /// Keyboard zoom in (`+`).
    pub fn zoom_in(self) -> Self {
        self.with_scale(self.scale * KEY_STEP)
    }

    /// Keyboard zoom out (`-`).
    pub fn zoom_out(self) -> Self {
        self.with_scale(self.scale / KEY_STEP)
    }

    /// Accumulate a drag delta into the pan offset.
    pub fn pan_by(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Double-click: back to fit when zoomed, otherwise to the preset
    /// zoomed-in scale.
    pub fn toggle_double_click(self) -> Self {
        if self.scale > MIN_SCALE {
            Self::default()
        } else {
            Self {
                scale: DOUBLE_CLICK_SCALE,
                x: 0.0,
                y: 0.0,
            }
        }
    }

    /// `f` key: fit the image (identity transform).
    pub fn fit(self) -> Self {
        Self::default()
    }

    /// CSS transform for the image element.
    pub fn css(&self) -> String {
        format!(
            "transform: translate({}px, {}px) scale({});",
            self.x, self.y, self.scale
        )
    }

    fn with_scale(self, scale: f64) -> Self {
        Self {
            scale: scale.clamp(MIN_SCALE, MAX_SCALE),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_clamped_under_any_operation_sequence() {
        let mut t = ViewTransform::default();
        for i in 0..200 {
            t = match i % 4 {
                0 => t.wheel(-500.0),
                1 => t.zoom_in(),
                2 => t.wheel(800.0),
                _ => t.zoom_out(),
            };
            assert!((MIN_SCALE..=MAX_SCALE).contains(&t.scale));
        }
    }

    #[test]
    fn wheel_up_zooms_in_and_wheel_down_zooms_out() {
        let t = ViewTransform::default().wheel(-100.0);
        assert!(t.scale > MIN_SCALE);
        let back = t.wheel(100.0);
        assert!(back.scale < t.scale);
    }

    #[test]
    fn pan_accumulates_deltas() {
        let t = ViewTransform::default()
            .zoom_in()
            .pan_by(10.0, -4.0)
            .pan_by(-2.0, 6.0);
        assert_eq!((t.x, t.y), (8.0, 2.0));
    }

    #[test]
    fn can_pan_only_when_zoomed_in() {
        assert!(!ViewTransform::default().can_pan());
        assert!(ViewTransform::default().zoom_in().can_pan());
    }

    #[test]
    fn double_click_toggles_between_fit_and_preset() {
        let zoomed = ViewTransform::default().toggle_double_click();
        assert_eq!(zoomed.scale, DOUBLE_CLICK_SCALE);

        let dragged = zoomed.pan_by(30.0, 40.0);
        let reset = dragged.toggle_double_click();
        assert_eq!(reset, ViewTransform::default());
    }

    #[test]
    fn fit_restores_identity() {
        let t = ViewTransform::default().zoom_in().pan_by(5.0, 5.0).fit();
        assert_eq!(t, ViewTransform::default());
        assert_eq!((t.x, t.y), (0.0, 0.0));
    }
}
