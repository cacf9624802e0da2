use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;

/// Host-supplied bounds of the drawing area, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// One `(category, value)` sample.
///
/// `category` is opaque to projection: points are laid out by their position
/// in the series, and the category only feeds the label lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub category: usize,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(category: usize, value: f64) -> Self {
        Self { category, value }
    }

    pub fn from_decimal(category: usize, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            category,
            value: decimal_to_f64(value, "value")?,
        })
    }
}

/// Closed numeric interval used for the chart axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// True when the interval cannot be used as a divisor.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        let span = self.span();
        !span.is_finite() || span == 0.0
    }
}
