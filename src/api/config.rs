use serde::{Deserialize, Serialize};

use crate::core::primitives::non_negative;
use crate::core::{Padding, ValueRange};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

const DEFAULT_LABEL_FONT_SIZE_PX: f64 = 17.0;
const DEFAULT_SCALE_FONT_SIZE_PX: f64 = 11.0;
const DEFAULT_CATEGORY_LABEL_STRIDE: usize = 4;

/// Styling and range configuration for one chart.
///
/// The value is read-only during a render pass. It is serializable so hosts
/// can persist chart setup without inventing their own format.
/// `y_mid_reference` has no default and must be present in JSON input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_range")]
    pub x_range: ValueRange,
    #[serde(default = "default_range")]
    pub y_range: ValueRange,
    pub y_mid_reference: f64,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default = "default_axis_width")]
    pub axis_width: f64,
    #[serde(default = "default_top_color")]
    pub top_color: Color,
    #[serde(default = "default_bottom_color")]
    pub bottom_color: Color,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default)]
    pub x_axis_title: String,
    #[serde(default)]
    pub y_axis_title: String,
    #[serde(default = "default_label_font_size_px")]
    pub category_font_size_px: f64,
    #[serde(default = "default_label_font_size_px")]
    pub title_font_size_px: f64,
    #[serde(default = "default_scale_font_size_px")]
    pub scale_font_size_px: f64,
    /// Every n-th point (by position) gets a category label.
    #[serde(default = "default_category_label_stride")]
    pub category_label_stride: usize,
}

impl ChartConfig {
    #[must_use]
    pub fn new(y_range: ValueRange, y_mid_reference: f64) -> Self {
        Self {
            x_range: default_range(),
            y_range,
            y_mid_reference,
            padding: Padding::default(),
            axis_width: default_axis_width(),
            top_color: default_top_color(),
            bottom_color: default_bottom_color(),
            axis_color: default_axis_color(),
            label_color: default_label_color(),
            x_axis_title: String::new(),
            y_axis_title: String::new(),
            category_font_size_px: default_label_font_size_px(),
            title_font_size_px: default_label_font_size_px(),
            scale_font_size_px: default_scale_font_size_px(),
            category_label_stride: default_category_label_stride(),
        }
    }

    #[must_use]
    pub fn with_x_range(mut self, x_range: ValueRange) -> Self {
        self.x_range = x_range;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_axis_width(mut self, axis_width: f64) -> Self {
        self.axis_width = axis_width;
        self
    }

    #[must_use]
    pub fn with_background(mut self, top_color: Color, bottom_color: Color) -> Self {
        self.top_color = top_color;
        self.bottom_color = bottom_color;
        self
    }

    #[must_use]
    pub fn with_axis_color(mut self, axis_color: Color) -> Self {
        self.axis_color = axis_color;
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, label_color: Color) -> Self {
        self.label_color = label_color;
        self
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.x_axis_title = x_title.into();
        self.y_axis_title = y_title.into();
        self
    }

    #[must_use]
    pub fn with_category_label_stride(mut self, stride: usize) -> Self {
        self.category_label_stride = stride;
        self
    }

    /// Copy that is safe to lay out: negative or non-finite sizes are clamped
    /// and unusable font sizes fall back to defaults.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            padding: self.padding.sanitized(),
            axis_width: non_negative(self.axis_width),
            category_font_size_px: font_size_or(
                self.category_font_size_px,
                DEFAULT_LABEL_FONT_SIZE_PX,
            ),
            title_font_size_px: font_size_or(self.title_font_size_px, DEFAULT_LABEL_FONT_SIZE_PX),
            scale_font_size_px: font_size_or(self.scale_font_size_px, DEFAULT_SCALE_FONT_SIZE_PX),
            category_label_stride: self.category_label_stride.max(1),
            ..self.clone()
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }
}

fn font_size_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

fn default_range() -> ValueRange {
    ValueRange::new(0.0, 100.0)
}

fn default_axis_width() -> f64 {
    1.0
}

fn default_top_color() -> Color {
    Color::rgb(0.0, 0.0, 1.0)
}

fn default_bottom_color() -> Color {
    Color::rgb(0.0, 0.0, 1.0)
}

fn default_axis_color() -> Color {
    Color::rgb(0.0, 1.0, 0.0)
}

fn default_label_color() -> Color {
    Color::WHITE
}

fn default_label_font_size_px() -> f64 {
    DEFAULT_LABEL_FONT_SIZE_PX
}

fn default_scale_font_size_px() -> f64 {
    DEFAULT_SCALE_FONT_SIZE_PX
}

fn default_category_label_stride() -> usize {
    DEFAULT_CATEGORY_LABEL_STRIDE
}
