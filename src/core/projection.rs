use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, PlotLayout, ValueRange};

/// Projected sample position in top-down pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Maps samples into equal-width horizontal slots and a linear, inverted
/// vertical scale inside the drawable rectangle.
///
/// Sample `i` of `n` is centered in its slot:
/// `x = left + (x_axis_length / n) * i + (x_axis_length / n) / 2`.
/// Larger values map to smaller `y`. A degenerate value range, non-finite
/// values and values whose projection overflows all resolve to the vertical
/// midpoint of the drawable rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotProjector {
    x_axis_length: f64,
    y_axis_length: f64,
    left: f64,
    top: f64,
    range: ValueRange,
}

impl SlotProjector {
    #[must_use]
    pub fn new(
        x_axis_length: f64,
        y_axis_length: f64,
        left: f64,
        top: f64,
        range: ValueRange,
    ) -> Self {
        Self {
            x_axis_length,
            y_axis_length,
            left,
            top,
            range,
        }
    }

    #[must_use]
    pub fn from_layout(layout: &PlotLayout, range: ValueRange) -> Self {
        Self::new(
            layout.x_axis_length,
            layout.y_axis_length,
            layout.padding.left,
            layout.padding.top,
            range,
        )
    }

    #[must_use]
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Width of one horizontal slot for `count` samples; zero when `count == 0`.
    #[must_use]
    pub fn slot_width(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        self.x_axis_length / count as f64
    }

    /// Vertical pixel for `value`. Anything that cannot be placed finitely,
    /// including finite values far enough out of range to overflow, lands on
    /// the vertical midpoint.
    #[must_use]
    pub fn value_to_y(&self, value: f64) -> f64 {
        let midpoint = self.top + self.y_axis_length / 2.0;
        if self.range.is_degenerate() || !value.is_finite() {
            return midpoint;
        }
        let normalized = (value - self.range.min) / self.range.span();
        let y = self.top + (self.y_axis_length - normalized * self.y_axis_length);
        if y.is_finite() { y } else { midpoint }
    }

    /// Projects samples in order; the output has the same length as the input.
    #[must_use]
    pub fn project(&self, points: &[DataPoint]) -> Vec<PixelPoint> {
        if points.is_empty() {
            return Vec::new();
        }

        let x_increment = self.slot_width(points.len());
        let x_offset = x_increment / 2.0;
        points
            .iter()
            .enumerate()
            .map(|(i, point)| PixelPoint {
                x: self.left + x_increment * i as f64 + x_offset,
                y: self.value_to_y(point.value),
            })
            .collect()
    }
}

/// Projects `points` against `layout` and `range`.
///
/// Deterministic and side-effect free, so rendering and tests consume the
/// exact same geometry.
#[must_use]
pub fn project_points(
    points: &[DataPoint],
    layout: &PlotLayout,
    range: ValueRange,
) -> Vec<PixelPoint> {
    SlotProjector::from_layout(layout, range).project(points)
}

/// Positions in a series of `len` samples that carry a category label.
pub fn category_label_indices(len: usize, stride: usize) -> impl Iterator<Item = usize> {
    (0..len).step_by(stride.max(1))
}

#[cfg(test)]
mod tests {
    use super::{SlotProjector, category_label_indices};
    use crate::core::{DataPoint, ValueRange};

    #[test]
    fn label_indices_follow_stride() {
        let indices: Vec<usize> = category_label_indices(10, 4).collect();
        assert_eq!(indices, vec![0, 4, 8]);
    }

    #[test]
    fn zero_stride_labels_every_point() {
        assert_eq!(category_label_indices(3, 0).count(), 3);
    }

    #[test]
    fn non_finite_value_pins_to_midline() {
        let projector = SlotProjector::new(100.0, 80.0, 0.0, 10.0, ValueRange::new(0.0, 1.0));
        let projected = projector.project(&[DataPoint::new(0, f64::NAN)]);
        assert_eq!(projected[0].y, 50.0);
    }
}
