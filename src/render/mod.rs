mod frame;
mod null_renderer;
mod primitives;
mod recording;
mod surface;

pub use frame::{
    CanvasLayerKind, LayeredPrimitive, RENDER_FRAME_JSON_SCHEMA_V1, RenderFrame,
    RenderFrameJsonContractV1,
};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, DashPattern, GradientPrimitive, GradientStop, LinePrimitive, LineStrokeStyle,
    MarkerPrimitive, PolylinePrimitive, Primitive, TextHAlign, TextPrimitive, TextVAnchor,
};
pub use recording::{RecordingSurface, SurfaceCall};
pub use surface::{
    StrokeParams, Surface, SurfaceRenderStats, SurfaceRenderer, SurfaceStateGuard, TextExtent,
    TextOrigin, draw_frame, flip_text_y,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from projection and layout.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderer, CairoSurface};
