use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::core::primitives::non_negative;

/// Insets between the viewport edges and the drawable rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

impl Padding {
    #[must_use]
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Copy with negative or non-finite sides replaced by zero.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            top: non_negative(self.top),
            bottom: non_negative(self.bottom),
            left: non_negative(self.left),
            right: non_negative(self.right),
        }
    }
}

/// Axis-aligned rectangle in top-down pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Per-redraw geometry derived from bounds and padding.
///
/// Axis lengths are clamped to zero when the padding does not fit, so every
/// downstream consumer can rely on `x_axis_length >= 0` and `y_axis_length >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub viewport: Viewport,
    pub padding: Padding,
    pub x_axis_length: f64,
    pub y_axis_length: f64,
}

impl PlotLayout {
    #[must_use]
    pub fn compute(viewport: Viewport, padding: Padding) -> Self {
        let padding = padding.sanitized();
        let x_axis_length = non_negative(viewport.width_px() - padding.left - padding.right);
        let y_axis_length = non_negative(viewport.height_px() - padding.top - padding.bottom);
        Self {
            viewport,
            padding,
            x_axis_length,
            y_axis_length,
        }
    }

    #[must_use]
    pub fn drawable_rect(&self) -> PlotRect {
        PlotRect {
            x: self.padding.left,
            y: self.padding.top,
            width: self.x_axis_length,
            height: self.y_axis_length,
        }
    }

    #[must_use]
    pub fn full_rect(&self) -> PlotRect {
        PlotRect {
            x: 0.0,
            y: 0.0,
            width: self.viewport.width_px(),
            height: self.viewport.height_px(),
        }
    }

    /// True when both axes have a positive length and geometry can be projected.
    #[must_use]
    pub fn has_plot_area(&self) -> bool {
        self.x_axis_length > 0.0 && self.y_axis_length > 0.0
    }

    #[must_use]
    pub fn vertical_midpoint(&self) -> f64 {
        self.padding.top + self.y_axis_length / 2.0
    }

    /// Top-center anchor for a category label under the point at `x`.
    #[must_use]
    pub fn category_label_anchor(&self, x: f64) -> (f64, f64) {
        (x, self.drawable_rect().bottom())
    }

    /// Bottom-center anchor for the x-axis title, flush with the viewport bottom.
    #[must_use]
    pub fn x_title_anchor(&self) -> (f64, f64) {
        (self.drawable_rect().center_x(), self.viewport.height_px())
    }

    /// Top-left anchor for the y-axis title.
    #[must_use]
    pub fn y_title_anchor(&self) -> (f64, f64) {
        let rect = self.drawable_rect();
        (rect.x, rect.y)
    }

    /// Top-right anchor for the `y_max` scale label.
    #[must_use]
    pub fn upper_scale_anchor(&self) -> (f64, f64) {
        let rect = self.drawable_rect();
        (rect.right(), rect.y)
    }

    /// Bottom-right anchor for the `y_min` scale label.
    #[must_use]
    pub fn lower_scale_anchor(&self) -> (f64, f64) {
        let rect = self.drawable_rect();
        (rect.right(), rect.bottom())
    }
}
