//! Placeholder data for design-time previews.
//!
//! Not used by the engine itself; hosts opt in when they need something to
//! draw before real data arrives.

use crate::core::{DataPoint, LineSeries, ValueRange};
use crate::render::Color;

use super::{Chart, ChartConfig};

/// Two-point white line (values 0 and 50) without markers.
#[must_use]
pub fn preview_series() -> LineSeries {
    LineSeries::new(vec![DataPoint::new(0, 0.0), DataPoint::new(1, 50.0)])
        .with_stroke(Color::WHITE, 2.0)
        .with_point_radius(0.0)
}

/// Default-styled chart over `0..100` holding `preview_series`.
#[must_use]
pub fn preview_chart() -> Chart {
    Chart::new(ChartConfig::new(ValueRange::new(0.0, 100.0), 50.0)).with_series(preview_series())
}
