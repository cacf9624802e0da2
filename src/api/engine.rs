use tracing::debug;

use crate::core::{LineSeries, PixelPoint, PlotLayout, Viewport};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::{CategoryLabels, Chart, ChartConfig, MonthAbbreviations};

/// Host-facing chart handle.
///
/// Holds the current bounds, chart model, category label lookup and a
/// renderer. Nothing derived is cached: every `render` call rebuilds the
/// frame from the current state.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    chart: Chart,
    labels: Box<dyn CategoryLabels>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with month-abbreviation category labels.
    #[must_use]
    pub fn new(renderer: R, viewport: Viewport, config: ChartConfig) -> Self {
        Self {
            renderer,
            viewport,
            chart: Chart::new(config),
            labels: Box::new(MonthAbbreviations),
        }
    }

    #[must_use]
    pub fn with_category_labels(mut self, labels: impl CategoryLabels + 'static) -> Self {
        self.labels = Box::new(labels);
        self
    }

    pub fn set_category_labels(&mut self, labels: impl CategoryLabels + 'static) {
        self.labels = Box::new(labels);
    }

    /// Called by the host when its bounds change.
    pub fn resize(&mut self, viewport: Viewport) {
        debug!(
            width = viewport.width,
            height = viewport.height,
            "resize chart viewport"
        );
        self.viewport = viewport;
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.chart.config
    }

    pub fn set_config(&mut self, config: ChartConfig) {
        self.chart.config = config;
    }

    pub fn set_series(&mut self, series: Vec<LineSeries>) {
        debug!(count = series.len(), "set series");
        self.chart.series = series;
    }

    pub fn push_series(&mut self, series: LineSeries) {
        self.chart.series.push(series);
    }

    #[must_use]
    pub fn series(&self) -> &[LineSeries] {
        &self.chart.series
    }

    #[must_use]
    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    #[must_use]
    pub fn layout(&self) -> PlotLayout {
        self.chart.layout(self.viewport)
    }

    #[must_use]
    pub fn project_series(&self) -> Vec<Vec<PixelPoint>> {
        self.chart.project_series(self.viewport)
    }

    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        self.chart
            .build_render_frame(self.viewport, self.labels.as_ref())
    }

    /// Runs one full redraw pass on the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(feature = "cairo-backend")]
impl ChartEngine<crate::render::CairoRenderer> {
    /// Draws the current chart onto an external Cairo context.
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()> {
        use crate::render::CairoContextRenderer;

        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }
}
