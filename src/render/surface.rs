use std::f64::consts::TAU;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ChartResult;
use crate::render::{
    Color, GradientPrimitive, LinePrimitive, LineStrokeStyle, MarkerPrimitive,
    PolylinePrimitive, Primitive, RenderFrame, Renderer, TextHAlign, TextPrimitive, TextVAnchor,
};

/// Native vertical direction of a surface's text coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextOrigin {
    /// Text y grows downwards, like chart geometry.
    TopDown,
    /// Text y grows upwards; text draws need a flipped transform.
    BottomUp,
}

/// Measured size of a single text line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
}

/// Stroke state applied to the current path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeParams {
    pub color: Color,
    pub width: f64,
    pub style: LineStrokeStyle,
    pub antialias: bool,
}

/// Immediate-mode 2-D drawing capability.
///
/// Path methods build the current path; `stroke`, `fill` and
/// `fill_linear_gradient` consume it. `draw_text` places the left end of the
/// text baseline at `(x, y)` in the current user space.
pub trait Surface {
    fn text_origin(&self) -> TextOrigin;

    fn save(&mut self) -> ChartResult<()>;
    fn restore(&mut self) -> ChartResult<()>;
    fn translate(&mut self, dx: f64, dy: f64);
    fn scale(&mut self, sx: f64, sy: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64);

    fn stroke(&mut self, stroke: &StrokeParams) -> ChartResult<()>;
    fn fill(&mut self, color: Color) -> ChartResult<()>;
    fn fill_linear_gradient(&mut self, gradient: &GradientPrimitive) -> ChartResult<()>;

    fn measure_text(&mut self, text: &str, font_size_px: f64) -> ChartResult<TextExtent>;
    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
    ) -> ChartResult<()>;
}

/// Saves surface state on creation and restores it on drop.
///
/// Restoring happens on every exit path, including early returns through `?`,
/// so transforms and stroke state never leak into the next primitive.
pub struct SurfaceStateGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> SurfaceStateGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> ChartResult<Self> {
        surface.save()?;
        Ok(Self { surface })
    }
}

impl<S: Surface + ?Sized> Deref for SurfaceStateGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SurfaceStateGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SurfaceStateGuard<'_, S> {
    fn drop(&mut self) {
        if let Err(err) = self.surface.restore() {
            warn!(error = %err, "failed to restore surface state");
        }
    }
}

/// Maps a top-down y coordinate into bottom-up text space of height `height`.
#[must_use]
pub fn flip_text_y(y: f64, height: f64) -> f64 {
    height - y
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceRenderStats {
    pub gradients_drawn: usize,
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub markers_drawn: usize,
    pub texts_drawn: usize,
}

/// Replays `frame` onto `surface` in order, one scoped state per primitive.
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    frame: &RenderFrame,
) -> ChartResult<SurfaceRenderStats> {
    frame.validate()?;

    let surface_height = frame.viewport.height_px();
    let mut stats = SurfaceRenderStats::default();
    for entry in &frame.primitives {
        match &entry.primitive {
            Primitive::Gradient(gradient) => {
                let mut scope = SurfaceStateGuard::new(&mut *surface)?;
                scope.fill_linear_gradient(gradient)?;
                stats.gradients_drawn += 1;
            }
            Primitive::Line(line) => {
                draw_line(surface, line)?;
                stats.lines_drawn += 1;
            }
            Primitive::Polyline(polyline) => {
                draw_polyline(surface, polyline)?;
                stats.polylines_drawn += 1;
            }
            Primitive::Marker(marker) => {
                draw_marker(surface, marker)?;
                stats.markers_drawn += 1;
            }
            Primitive::Text(text) => {
                draw_text(surface, text, surface_height)?;
                stats.texts_drawn += 1;
            }
        }
    }
    Ok(stats)
}

fn draw_line<S: Surface + ?Sized>(surface: &mut S, line: &LinePrimitive) -> ChartResult<()> {
    let mut scope = SurfaceStateGuard::new(surface)?;
    scope.begin_path();
    scope.move_to(line.x1, line.y1);
    scope.line_to(line.x2, line.y2);
    scope.stroke(&StrokeParams {
        color: line.color,
        width: line.stroke_width,
        style: line.style,
        antialias: line.antialias,
    })
}

fn draw_polyline<S: Surface + ?Sized>(
    surface: &mut S,
    polyline: &PolylinePrimitive,
) -> ChartResult<()> {
    let Some((first, rest)) = polyline.points.split_first() else {
        return Ok(());
    };

    let mut scope = SurfaceStateGuard::new(surface)?;
    scope.begin_path();
    scope.move_to(first.x, first.y);
    for point in rest {
        scope.line_to(point.x, point.y);
    }
    scope.stroke(&StrokeParams {
        color: polyline.color,
        width: polyline.stroke_width,
        style: LineStrokeStyle::Solid,
        antialias: polyline.antialias,
    })
}

fn draw_marker<S: Surface + ?Sized>(surface: &mut S, marker: &MarkerPrimitive) -> ChartResult<()> {
    let mut scope = SurfaceStateGuard::new(surface)?;
    scope.begin_path();
    scope.arc(marker.cx, marker.cy, marker.radius, 0.0, TAU);
    scope.fill(marker.fill_color)?;
    scope.begin_path();
    scope.arc(marker.cx, marker.cy, marker.radius, 0.0, TAU);
    scope.stroke(&StrokeParams {
        color: marker.stroke_color,
        width: 1.0,
        style: LineStrokeStyle::Solid,
        antialias: true,
    })
}

fn draw_text<S: Surface + ?Sized>(
    surface: &mut S,
    text: &TextPrimitive,
    surface_height: f64,
) -> ChartResult<()> {
    let extent = surface.measure_text(&text.text, text.font_size_px)?;
    let left = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - extent.width / 2.0,
        TextHAlign::Right => text.x - extent.width,
    };
    let baseline = match text.v_anchor {
        TextVAnchor::Top => text.y + extent.ascent,
        TextVAnchor::Bottom => text.y - extent.descent,
    };

    let mut scope = SurfaceStateGuard::new(surface)?;
    match scope.text_origin() {
        TextOrigin::TopDown => {
            scope.draw_text(&text.text, left, baseline, text.font_size_px, text.color)
        }
        TextOrigin::BottomUp => {
            scope.translate(0.0, surface_height);
            scope.scale(1.0, -1.0);
            scope.draw_text(
                &text.text,
                left,
                flip_text_y(baseline, surface_height),
                text.font_size_px,
                text.color,
            )
        }
    }
}

/// `Renderer` that owns a `Surface` and replays every frame onto it.
#[derive(Debug)]
pub struct SurfaceRenderer<S: Surface> {
    surface: S,
    last_stats: SurfaceRenderStats,
}

impl<S: Surface> SurfaceRenderer<S> {
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            last_stats: SurfaceRenderStats::default(),
        }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> SurfaceRenderStats {
        self.last_stats
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: Surface> Renderer for SurfaceRenderer<S> {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.last_stats = draw_frame(&mut self.surface, frame)?;
        Ok(())
    }
}
