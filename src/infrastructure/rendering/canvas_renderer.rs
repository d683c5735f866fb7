use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::geometry::monotone_segments;
use crate::domain::{
    chart::{AxisRange, ChartLayout, DashboardProjection, Tick},
    errors::{AppError, RenderingResult},
    logging::{LogComponent, get_logger},
};

pub const TEMPERATURE_COLOR: &str = "#818CF8";
pub const HUMIDITY_COLOR: &str = "#5EEAD4";
const GRID_COLOR: &str = "#374151";
const AXIS_COLOR: &str = "#9CA3AF";
const CURSOR_COLOR: &str = "#6B7280";
const FONT: &str = "12px 'Inter', sans-serif";
const SERIES_WIDTH: f64 = 2.0;
const MAX_X_LABELS: usize = 6;

fn js_err(context: &str) -> impl Fn(JsValue) -> AppError + '_ {
    move |err| AppError::RenderingError(format!("{context}: {err:?}"))
}

/// Draws a `DashboardProjection` as a dual-axis line chart on a 2D canvas.
pub struct CanvasChartRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasChartRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> RenderingResult<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(js_err("get_context"))?
            .ok_or_else(|| AppError::RenderingError("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::RenderingError("Failed to cast to 2D context".to_string()))?;
        Ok(Self { canvas, context })
    }

    /// Matches the backing store to the element's CSS size and pixel ratio.
    /// Returns the layout in CSS pixels.
    pub fn resize_to_display(&self) -> RenderingResult<ChartLayout> {
        let width = self.canvas.client_width().max(1) as f64;
        let height = self.canvas.client_height().max(1) as f64;
        let ratio = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0).max(1.0);

        let backing_w = (width * ratio).round() as u32;
        let backing_h = (height * ratio).round() as u32;
        if self.canvas.width() != backing_w || self.canvas.height() != backing_h {
            self.canvas.set_width(backing_w);
            self.canvas.set_height(backing_h);
        }
        self.context
            .set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)
            .map_err(js_err("set_transform"))?;
        Ok(ChartLayout::new(width, height))
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn render(
        &self,
        projection: &DashboardProjection,
        hover: Option<usize>,
    ) -> RenderingResult<ChartLayout> {
        let layout = self.resize_to_display()?;
        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, layout.width, layout.height);
        ctx.set_font(FONT);

        self.draw_grid(&layout, projection)?;
        self.draw_y_axis(&layout, &projection.temperature_ticks, &projection.temperature_axis, true)?;
        self.draw_y_axis(&layout, &projection.humidity_ticks, &projection.humidity_axis, false)?;
        self.draw_x_labels(&layout, projection)?;

        if projection.is_empty() {
            self.draw_waiting_message(&layout)?;
        } else {
            let n = projection.len();
            let temperatures: Vec<(f64, f64)> = projection
                .points
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    (layout.x_for_index(i, n), layout.y_for_value(p.temperature, &projection.temperature_axis))
                })
                .collect();
            let humidities: Vec<(f64, f64)> = projection
                .points
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    (layout.x_for_index(i, n), layout.y_for_value(p.humidity, &projection.humidity_axis))
                })
                .collect();

            ctx.save();
            ctx.begin_path();
            ctx.rect(layout.plot_left(), layout.plot_top(), layout.plot_width(), layout.plot_height());
            ctx.clip();
            self.draw_series(&temperatures, TEMPERATURE_COLOR);
            self.draw_series(&humidities, HUMIDITY_COLOR);
            if let Some(index) = hover.filter(|i| *i < n) {
                self.draw_cursor(&layout, temperatures[index], humidities[index]);
            }
            ctx.restore();
        }

        self.draw_legend(&layout, projection)?;
        Ok(layout)
    }

    fn set_dash(&self, dash: &[f64]) -> RenderingResult<()> {
        let segments: Array = dash.iter().map(|d| JsValue::from_f64(*d)).collect();
        self.context.set_line_dash(&segments).map_err(js_err("set_line_dash"))
    }

    fn draw_grid(&self, layout: &ChartLayout, projection: &DashboardProjection) -> RenderingResult<()> {
        let ctx = &self.context;
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.set_line_width(1.0);
        self.set_dash(&[3.0, 3.0])?;

        ctx.begin_path();
        for tick in &projection.temperature_ticks {
            let y = layout.y_for_value(tick.value, &projection.temperature_axis);
            ctx.move_to(layout.plot_left(), y);
            ctx.line_to(layout.plot_right(), y);
        }
        for index in x_label_indices(projection.len()) {
            let x = layout.x_for_index(index, projection.len());
            ctx.move_to(x, layout.plot_top());
            ctx.line_to(x, layout.plot_bottom());
        }
        ctx.stroke();
        self.set_dash(&[])
    }

    fn draw_y_axis(
        &self,
        layout: &ChartLayout,
        ticks: &[Tick],
        axis: &AxisRange,
        left: bool,
    ) -> RenderingResult<()> {
        let ctx = &self.context;
        let x = if left { layout.plot_left() } else { layout.plot_right() };
        ctx.set_stroke_style_str(AXIS_COLOR);
        ctx.set_fill_style_str(AXIS_COLOR);
        ctx.begin_path();
        ctx.move_to(x, layout.plot_top());
        ctx.line_to(x, layout.plot_bottom());
        ctx.stroke();

        ctx.set_text_baseline("middle");
        ctx.set_text_align(if left { "right" } else { "left" });
        let label_x = if left { x - 8.0 } else { x + 8.0 };
        for tick in ticks {
            let y = layout.y_for_value(tick.value, axis);
            ctx.fill_text(&tick.label, label_x, y).map_err(js_err("fill_text"))?;
        }
        Ok(())
    }

    fn draw_x_labels(&self, layout: &ChartLayout, projection: &DashboardProjection) -> RenderingResult<()> {
        let ctx = &self.context;
        ctx.set_stroke_style_str(AXIS_COLOR);
        ctx.begin_path();
        ctx.move_to(layout.plot_left(), layout.plot_bottom());
        ctx.line_to(layout.plot_right(), layout.plot_bottom());
        ctx.stroke();

        ctx.set_fill_style_str(AXIS_COLOR);
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");
        let n = projection.len();
        for index in x_label_indices(n) {
            let x = layout.x_for_index(index, n);
            ctx.fill_text(&projection.points[index].label, x, layout.plot_bottom() + 8.0)
                .map_err(js_err("fill_text"))?;
        }
        Ok(())
    }

    fn draw_series(&self, points: &[(f64, f64)], color: &str) {
        let Some(&(x0, y0)) = points.first() else {
            return;
        };
        let ctx = &self.context;
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(SERIES_WIDTH);
        ctx.begin_path();
        ctx.move_to(x0, y0);
        for seg in monotone_segments(points) {
            ctx.bezier_curve_to(seg.c1.0, seg.c1.1, seg.c2.0, seg.c2.1, seg.end.0, seg.end.1);
        }
        ctx.stroke();
    }

    fn draw_cursor(&self, layout: &ChartLayout, temperature: (f64, f64), humidity: (f64, f64)) {
        let ctx = &self.context;
        ctx.set_stroke_style_str(CURSOR_COLOR);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(temperature.0, layout.plot_top());
        ctx.line_to(temperature.0, layout.plot_bottom());
        ctx.stroke();

        for ((x, y), color) in [(temperature, TEMPERATURE_COLOR), (humidity, HUMIDITY_COLOR)] {
            ctx.set_fill_style_str(color);
            ctx.begin_path();
            let _ = ctx.arc(x, y, 4.0, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
    }

    fn draw_legend(&self, layout: &ChartLayout, projection: &DashboardProjection) -> RenderingResult<()> {
        let ctx = &self.context;
        let entries = [
            (projection.temperature_series_name.as_str(), TEMPERATURE_COLOR),
            (projection.humidity_series_name.as_str(), HUMIDITY_COLOR),
        ];
        let swatch = 14.0;
        let gap = 24.0;
        let widths: Vec<f64> = entries
            .iter()
            .map(|(name, _)| ctx.measure_text(name).map(|m| m.width()).unwrap_or(0.0))
            .collect();
        let total: f64 = widths.iter().map(|w| w + swatch + 6.0).sum::<f64>() + gap;
        let y = layout.height - 14.0;
        let mut x = (layout.width - total) / 2.0;

        ctx.set_text_align("left");
        ctx.set_text_baseline("middle");
        ctx.set_line_width(SERIES_WIDTH);
        for ((name, color), width) in entries.iter().zip(widths) {
            ctx.set_stroke_style_str(color);
            ctx.begin_path();
            ctx.move_to(x, y);
            ctx.line_to(x + swatch, y);
            ctx.stroke();
            ctx.set_fill_style_str(color);
            ctx.fill_text(name, x + swatch + 6.0, y).map_err(js_err("fill_text"))?;
            x += swatch + 6.0 + width + gap;
        }
        Ok(())
    }

    fn draw_waiting_message(&self, layout: &ChartLayout) -> RenderingResult<()> {
        let ctx = &self.context;
        ctx.set_fill_style_str(AXIS_COLOR);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(
            "Waiting for readings…",
            layout.plot_left() + layout.plot_width() / 2.0,
            layout.plot_top() + layout.plot_height() / 2.0,
        )
        .map_err(js_err("fill_text"))?;

        get_logger().debug(LogComponent::Infrastructure("CanvasChartRenderer"), "No readings to render yet");
        Ok(())
    }
}

/// At most `MAX_X_LABELS` evenly spread indices, always including the newest.
pub fn x_label_indices(count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let stride = count.div_ceil(MAX_X_LABELS).max(1);
    let mut indices: Vec<usize> = (0..count).rev().step_by(stride).collect();
    indices.reverse();
    indices
}
