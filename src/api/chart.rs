use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    LineSeries, PixelPoint, PlotLayout, SlotProjector, Viewport, category_label_indices,
};
use crate::error::ChartResult;
use crate::render::{
    CanvasLayerKind, DashPattern, GradientPrimitive, LinePrimitive, LineStrokeStyle,
    MarkerPrimitive, PolylinePrimitive, Primitive, RenderFrame, TextHAlign, TextPrimitive,
    TextVAnchor,
};

use super::{CategoryLabels, ChartConfig};

/// Root chart model: configuration plus the ordered series list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub config: ChartConfig,
    pub series: Vec<LineSeries>,
}

impl Chart {
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: LineSeries) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn layout(&self, viewport: Viewport) -> PlotLayout {
        PlotLayout::compute(viewport, self.config.padding)
    }

    /// Pixel positions for every series, in series order.
    #[must_use]
    pub fn project_series(&self, viewport: Viewport) -> Vec<Vec<PixelPoint>> {
        let layout = self.layout(viewport);
        let projector = SlotProjector::from_layout(&layout, self.config.y_range);
        self.series
            .iter()
            .map(|series| projector.project(&series.points))
            .collect()
    }

    /// Builds the full primitive sequence for one redraw.
    ///
    /// Order: background gradient, axes and dashed mid-reference line, then per
    /// series markers, polyline and category labels, then axis titles and
    /// scale labels. Axes, markers and polylines are skipped when an axis has
    /// zero length, while labels are still emitted. The only failure source is
    /// the category label lookup.
    pub fn build_render_frame<L>(&self, viewport: Viewport, labels: &L) -> ChartResult<RenderFrame>
    where
        L: CategoryLabels + ?Sized,
    {
        let config = self.config.sanitized();
        let layout = PlotLayout::compute(viewport, config.padding);
        let projector = SlotProjector::from_layout(&layout, config.y_range);
        let mut frame = RenderFrame::new(viewport);

        append_background(&mut frame, &layout, &config);

        let has_plot_area = layout.has_plot_area();
        if has_plot_area {
            if config.y_range.is_degenerate() {
                warn!(
                    y_min = config.y_range.min,
                    y_max = config.y_range.max,
                    "degenerate value range; projecting points onto the vertical midpoint"
                );
            }
            append_axes(&mut frame, &layout, &projector, &config);
        } else {
            debug!(
                x_axis_length = layout.x_axis_length,
                y_axis_length = layout.y_axis_length,
                "plot area collapsed; skipping axis and series geometry"
            );
        }

        for (series_index, series) in self.series.iter().enumerate() {
            trace!(series_index, points = series.len(), "project series");
            let points = projector.project(&series.points);
            if has_plot_area {
                append_series_geometry(&mut frame, series, &points);
            }
            append_category_labels(&mut frame, &layout, &config, series, &points, labels)?;
        }

        append_axis_labels(&mut frame, &layout, &config);

        debug!(
            series = self.series.len(),
            primitives = frame.len(),
            x_axis_length = layout.x_axis_length,
            y_axis_length = layout.y_axis_length,
            "built render frame"
        );
        Ok(frame)
    }
}

fn append_background(frame: &mut RenderFrame, layout: &PlotLayout, config: &ChartConfig) {
    if !layout.viewport.is_valid() {
        return;
    }
    frame.push(
        CanvasLayerKind::Background,
        Primitive::Gradient(GradientPrimitive::vertical(
            layout.full_rect(),
            config.top_color,
            config.bottom_color,
        )),
    );
}

fn append_axes(
    frame: &mut RenderFrame,
    layout: &PlotLayout,
    projector: &SlotProjector,
    config: &ChartConfig,
) {
    if config.axis_width <= 0.0 {
        return;
    }

    let rect = layout.drawable_rect();
    let axis_line = |y: f64| {
        LinePrimitive::new(rect.x, y, rect.right(), y, config.axis_width, config.axis_color)
            .with_antialias(false)
    };

    frame.push(CanvasLayerKind::Axis, Primitive::Line(axis_line(rect.y)));
    frame.push(CanvasLayerKind::Axis, Primitive::Line(axis_line(rect.bottom())));

    let mid_y = projector.value_to_y(config.y_mid_reference);
    frame.push(
        CanvasLayerKind::Axis,
        Primitive::Line(
            axis_line(mid_y).with_style(LineStrokeStyle::Dashed(DashPattern::REFERENCE)),
        ),
    );
}

fn append_series_geometry(frame: &mut RenderFrame, series: &LineSeries, points: &[PixelPoint]) {
    let style = series.style.sanitized();

    if style.point_radius > 0.0 {
        for point in points {
            frame.push(
                CanvasLayerKind::Series,
                Primitive::Marker(MarkerPrimitive {
                    cx: point.x,
                    cy: point.y,
                    radius: style.point_radius,
                    fill_color: style.stroke_color,
                    stroke_color: style.stroke_color,
                }),
            );
        }
    }

    if points.len() >= 2 && style.stroke_width > 0.0 {
        frame.push(
            CanvasLayerKind::Series,
            Primitive::Polyline(PolylinePrimitive {
                points: points.to_vec(),
                stroke_width: style.stroke_width,
                color: style.stroke_color,
                antialias: true,
            }),
        );
    }
}

/// Category labels are looked up even when the plot area is collapsed, so an
/// unknown category fails the same way at every viewport size.
fn append_category_labels<L>(
    frame: &mut RenderFrame,
    layout: &PlotLayout,
    config: &ChartConfig,
    series: &LineSeries,
    points: &[PixelPoint],
    labels: &L,
) -> ChartResult<()>
where
    L: CategoryLabels + ?Sized,
{
    for index in category_label_indices(points.len(), config.category_label_stride) {
        let text = labels.label(series.points[index].category)?;
        if text.is_empty() {
            continue;
        }
        let (x, y) = layout.category_label_anchor(points[index].x);
        frame.push(
            CanvasLayerKind::Label,
            Primitive::Text(TextPrimitive::new(
                text,
                x,
                y,
                config.category_font_size_px,
                config.label_color,
                TextHAlign::Center,
                TextVAnchor::Top,
            )),
        );
    }

    Ok(())
}

fn append_axis_labels(frame: &mut RenderFrame, layout: &PlotLayout, config: &ChartConfig) {
    let mut push_text = |text: String, (x, y): (f64, f64), size: f64, h_align, v_anchor| {
        if text.is_empty() {
            return;
        }
        frame.push(
            CanvasLayerKind::Label,
            Primitive::Text(TextPrimitive::new(
                text,
                x,
                y,
                size,
                config.label_color,
                h_align,
                v_anchor,
            )),
        );
    };

    push_text(
        config.x_axis_title.clone(),
        layout.x_title_anchor(),
        config.title_font_size_px,
        TextHAlign::Center,
        TextVAnchor::Bottom,
    );
    push_text(
        config.y_axis_title.clone(),
        layout.y_title_anchor(),
        config.title_font_size_px,
        TextHAlign::Left,
        TextVAnchor::Top,
    );
    push_text(
        format_scale_value(config.y_range.max),
        layout.upper_scale_anchor(),
        config.scale_font_size_px,
        TextHAlign::Right,
        TextVAnchor::Top,
    );
    push_text(
        format_scale_value(config.y_range.min),
        layout.lower_scale_anchor(),
        config.scale_font_size_px,
        TextHAlign::Right,
        TextVAnchor::Bottom,
    );
}

/// Scale labels show the range bound truncated toward zero.
#[must_use]
pub fn format_scale_value(value: f64) -> String {
    if value.is_finite() {
        (value.trunc() as i64).to_string()
    } else {
        value.to_string()
    }
}
