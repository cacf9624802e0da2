use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::core::primitives::non_negative;
use crate::render::Color;

/// Per-series drawing style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub stroke_color: Color,
    pub stroke_width: f64,
    /// Marker radius; zero suppresses markers while keeping the line.
    pub point_radius: f64,
    /// Logical width spanned by the series' own x axis.
    pub horizontal_extent: f64,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::rgb(0.0, 0.0, 0.0),
            stroke_width: 1.0,
            point_radius: 2.0,
            horizontal_extent: 100.0,
        }
    }
}

impl SeriesStyle {
    /// Copy with negative or non-finite widths replaced by zero.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            stroke_width: non_negative(self.stroke_width),
            point_radius: non_negative(self.point_radius),
            ..self
        }
    }
}

/// Data-space line segment between two adjacent samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Ordered samples plus their style. Insertion order is drawing order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSeries {
    pub points: Vec<DataPoint>,
    pub style: SeriesStyle,
}

impl LineSeries {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self {
            points,
            style: SeriesStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.style.stroke_color = color;
        self.style.stroke_width = width;
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.style.point_radius = radius;
        self
    }

    #[must_use]
    pub fn with_horizontal_extent(mut self, extent: f64) -> Self {
        self.style.horizontal_extent = extent;
        self
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Connecting segments in the series' own data space.
    ///
    /// Sample `i` sits at `x = horizontal_extent / len * i`, `y = value`.
    /// Returns `None` when fewer than two samples exist.
    #[must_use]
    pub fn logical_polyline(&self) -> Option<Vec<LineSegment>> {
        if self.points.len() < 2 {
            return None;
        }

        let x_increment = self.style.horizontal_extent / self.points.len() as f64;
        let segments = self
            .points
            .windows(2)
            .enumerate()
            .map(|(i, pair)| LineSegment {
                x1: x_increment * i as f64,
                y1: pair[0].value,
                x2: x_increment * (i + 1) as f64,
                y2: pair[1].value,
            })
            .collect();
        Some(segments)
    }
}
