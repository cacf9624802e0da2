use std::io::Write;

use cairo::{Antialias, Context, Format, ImageSurface, LinearGradient};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, GradientPrimitive, LineStrokeStyle, RenderFrame, Renderer, StrokeParams, Surface,
    SurfaceRenderStats, TextExtent, TextOrigin, draw_frame,
};

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// `Surface` view over a borrowed Cairo context, with Pango text.
pub struct CairoSurface<'a> {
    context: &'a Context,
}

impl<'a> CairoSurface<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self { context }
    }

    fn text_layout(&self, text: &str, font_size_px: f64) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(self.context);
        let font_description = FontDescription::from_string(&format!("Sans {font_size_px}px"));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);
        layout
    }
}

impl Surface for CairoSurface<'_> {
    fn text_origin(&self) -> TextOrigin {
        TextOrigin::TopDown
    }

    fn save(&mut self) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))
    }

    fn restore(&mut self) -> ChartResult<()> {
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.context.translate(dx, dy);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.context.scale(sx, sy);
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.context.arc(cx, cy, radius, start_angle, end_angle);
    }

    fn stroke(&mut self, stroke: &StrokeParams) -> ChartResult<()> {
        apply_color(self.context, stroke.color);
        self.context.set_line_width(stroke.width);
        match stroke.style {
            LineStrokeStyle::Solid => self.context.set_dash(&[], 0.0),
            LineStrokeStyle::Dashed(dash) => self.context.set_dash(&dash.lengths(), dash.phase),
        }
        self.context.set_antialias(if stroke.antialias {
            Antialias::Default
        } else {
            Antialias::None
        });
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }

    fn fill(&mut self, color: Color) -> ChartResult<()> {
        apply_color(self.context, color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill path", err))
    }

    fn fill_linear_gradient(&mut self, gradient: &GradientPrimitive) -> ChartResult<()> {
        let pattern = LinearGradient::new(
            gradient.start.0,
            gradient.start.1,
            gradient.end.0,
            gradient.end.1,
        );
        for stop in &gradient.stops {
            pattern.add_color_stop_rgba(
                stop.offset,
                stop.color.red,
                stop.color.green,
                stop.color.blue,
                stop.color.alpha,
            );
        }
        self.context
            .set_source(&pattern)
            .map_err(|err| map_backend_error("failed to set gradient source", err))?;
        let rect = gradient.rect;
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill gradient", err))
    }

    fn measure_text(&mut self, text: &str, font_size_px: f64) -> ChartResult<TextExtent> {
        let layout = self.text_layout(text, font_size_px);
        let (width, height) = layout.pixel_size();
        let ascent = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        Ok(TextExtent {
            width: f64::from(width),
            ascent,
            descent: (f64::from(height) - ascent).max(0.0),
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
        let layout = self.text_layout(text, font_size_px);
        let ascent = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        apply_color(self.context, color);
        self.context.move_to(x, y - ascent);
        pangocairo::functions::show_layout(self.context, &layout);
        Ok(())
    }
}

/// Offscreen Cairo renderer backed by an ARGB32 image surface.
///
/// Frames can also be drawn in place on an external context through
/// `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: SurfaceRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidViewport {
                width: width.max(0).unsigned_abs(),
                height: height.max(0).unsigned_abs(),
            });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgba(0.0, 0.0, 0.0, 0.0),
            last_stats: SurfaceRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> SurfaceRenderStats {
        self.last_stats
    }

    pub fn write_png<W: Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut surface = CairoSurface::new(context);
        self.last_stats = draw_frame(&mut surface, frame)?;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        let mut surface = CairoSurface::new(context);
        self.last_stats = draw_frame(&mut surface, frame)?;
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
