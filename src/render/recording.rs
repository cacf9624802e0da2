use crate::error::{ChartError, ChartResult};
use crate::render::{Color, GradientPrimitive, StrokeParams, Surface, TextExtent, TextOrigin};

/// One call received by a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Scale { sx: f64, sy: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Stroke(StrokeParams),
    Fill(Color),
    FillLinearGradient(GradientPrimitive),
    DrawText {
        text: String,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
    },
}

/// Headless surface that records every call for inspection.
///
/// Text is measured with fixed per-glyph metrics
/// (`width = 0.6 * size * chars`, `ascent = 0.8 * size`, `descent = 0.2 * size`)
/// so layouts are reproducible without a font stack.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    text_origin: TextOrigin,
    calls: Vec<SurfaceCall>,
    depth: usize,
    fail_strokes: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(TextOrigin::TopDown)
    }
}

impl RecordingSurface {
    #[must_use]
    pub fn new(text_origin: TextOrigin) -> Self {
        Self {
            text_origin,
            calls: Vec::new(),
            depth: 0,
            fail_strokes: false,
        }
    }

    /// Makes every `stroke` call fail, for exercising error paths.
    #[must_use]
    pub fn with_failing_strokes(mut self) -> Self {
        self.fail_strokes = true;
        self
    }

    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Current save/restore nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn clear(&mut self) {
        self.calls.clear();
        self.depth = 0;
    }

    pub fn text_draws(&self) -> impl Iterator<Item = (&str, f64, f64)> {
        self.calls.iter().filter_map(|call| match call {
            SurfaceCall::DrawText { text, x, y, .. } => Some((text.as_str(), *x, *y)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn text_origin(&self) -> TextOrigin {
        self.text_origin
    }

    fn save(&mut self) -> ChartResult<()> {
        self.depth += 1;
        self.calls.push(SurfaceCall::Save);
        Ok(())
    }

    fn restore(&mut self) -> ChartResult<()> {
        if self.depth == 0 {
            return Err(ChartError::InvalidData(
                "restore without matching save".to_owned(),
            ));
        }
        self.depth -= 1;
        self.calls.push(SurfaceCall::Restore);
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.calls.push(SurfaceCall::Translate { dx, dy });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.calls.push(SurfaceCall::Scale { sx, sy });
    }

    fn begin_path(&mut self) {
        self.calls.push(SurfaceCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(SurfaceCall::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(SurfaceCall::LineTo { x, y });
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.calls.push(SurfaceCall::Arc {
            cx,
            cy,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke(&mut self, stroke: &StrokeParams) -> ChartResult<()> {
        if self.fail_strokes {
            return Err(ChartError::InvalidData("stroke rejected".to_owned()));
        }
        self.calls.push(SurfaceCall::Stroke(*stroke));
        Ok(())
    }

    fn fill(&mut self, color: Color) -> ChartResult<()> {
        self.calls.push(SurfaceCall::Fill(color));
        Ok(())
    }

    fn fill_linear_gradient(&mut self, gradient: &GradientPrimitive) -> ChartResult<()> {
        self.calls.push(SurfaceCall::FillLinearGradient(gradient.clone()));
        Ok(())
    }

    fn measure_text(&mut self, text: &str, font_size_px: f64) -> ChartResult<TextExtent> {
        Ok(TextExtent {
            width: 0.6 * font_size_px * text.chars().count() as f64,
            ascent: 0.8 * font_size_px,
            descent: 0.2 * font_size_px,
        })
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
    ) -> ChartResult<()> {
        self.calls.push(SurfaceCall::DrawText {
            text: text.to_owned(),
            x,
            y,
            font_size_px,
            color,
        });
        Ok(())
    }
}
