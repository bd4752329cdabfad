//! Canvas Renderer
//!
//! Doughnut and bar drawing on HTML5 Canvas, sized for the dashboard
//! cards. Visual defaults follow the page's gray-on-white scheme.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{ChartRenderer, ChartSeries};

/// Canvas background (charts sit on white cards)
const BACKGROUND_COLOR: &str = "#ffffff";
/// Horizontal gridline color on the bar chart
const GRID_COLOR: &str = "rgba(107, 114, 128, 0.08)";
/// Axis tick and category label color
const TICK_COLOR: &str = "#6B7280";
/// Fraction of the doughnut radius cut out of the middle
const DOUGHNUT_CUTOUT: f64 = 0.6;
/// Corner radius of bar tops
const BAR_RADIUS: f64 = 6.0;

/// Draws charts onto one canvas element
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Self {
        Self {
            canvas: canvas.clone(),
        }
    }

    /// Acquire the 2d context; `None` when the canvas cannot provide one
    fn context(&self) -> Option<CanvasRenderingContext2d> {
        match self.canvas.get_context("2d") {
            Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
            _ => None,
        }
    }
}

impl ChartRenderer for CanvasRenderer {
    fn render_doughnut(&self, series: &ChartSeries) {
        let Some(ctx) = self.context() else {
            return;
        };

        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        // Clear canvas
        ctx.set_fill_style(&BACKGROUND_COLOR.into());
        ctx.fill_rect(0.0, 0.0, width, height);

        let total: f64 = series.values.iter().sum();
        if total <= 0.0 {
            return;
        }

        let center_x = width / 2.0;
        let center_y = height / 2.0;
        let radius = (width.min(height) / 2.0) - 12.0;

        // Wedges from 12 o'clock, clockwise, no borders
        let mut angle = -std::f64::consts::PI / 2.0;
        for (idx, &value) in series.values.iter().enumerate() {
            let sweep = (value / total) * std::f64::consts::PI * 2.0;
            let color = series.palette[idx % series.palette.len()];

            ctx.set_fill_style(&color.into());
            ctx.begin_path();
            ctx.move_to(center_x, center_y);
            let _ = ctx.arc(center_x, center_y, radius, angle, angle + sweep);
            ctx.close_path();
            ctx.fill();

            angle += sweep;
        }

        // Cut out the middle
        ctx.set_fill_style(&BACKGROUND_COLOR.into());
        ctx.begin_path();
        let _ = ctx.arc(
            center_x,
            center_y,
            radius * DOUGHNUT_CUTOUT,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.fill();
    }

    fn render_bar(&self, series: &ChartSeries) {
        let Some(ctx) = self.context() else {
            return;
        };

        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        // Margins
        let margin_left = 48.0;
        let margin_right = 16.0;
        let margin_top = 16.0;
        let margin_bottom = 36.0;

        let chart_width = width - margin_left - margin_right;
        let chart_height = height - margin_top - margin_bottom;

        // Clear canvas
        ctx.set_fill_style(&BACKGROUND_COLOR.into());
        ctx.fill_rect(0.0, 0.0, width, height);

        let max = series.values.iter().cloned().fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return;
        }

        ctx.set_font("12px sans-serif");

        // Value axis from zero with light horizontal gridlines
        for i in 0..=5 {
            let y = margin_top + (i as f64 / 5.0) * chart_height;

            ctx.set_stroke_style(&GRID_COLOR.into());
            ctx.set_line_width(1.0);
            ctx.begin_path();
            ctx.move_to(margin_left, y);
            ctx.line_to(width - margin_right, y);
            ctx.stroke();

            // Y-axis tick labels
            let value = max * (1.0 - i as f64 / 5.0);
            ctx.set_fill_style(&TICK_COLOR.into());
            ctx.set_text_align("right");
            let _ = ctx.fill_text(&format!("{:.1}", value), margin_left - 8.0, y + 4.0);
        }

        // One rounded-top bar per entry, palette cycled
        let slot_width = chart_width / series.values.len() as f64;
        let bar_width = slot_width * 0.6;

        for (idx, &value) in series.values.iter().enumerate() {
            let bar_height = (value / max) * chart_height;
            let x = margin_left + idx as f64 * slot_width + (slot_width - bar_width) / 2.0;
            let y = margin_top + chart_height - bar_height;

            let color = series.palette[idx % series.palette.len()];
            ctx.set_fill_style(&color.into());
            fill_rounded_top_rect(&ctx, x, y, bar_width, bar_height, BAR_RADIUS);

            // Category label centered under the bar
            ctx.set_fill_style(&TICK_COLOR.into());
            ctx.set_text_align("center");
            let _ = ctx.fill_text(&series.labels[idx], x + bar_width / 2.0, height - 12.0);
        }
    }
}

/// Fill a rectangle whose top corners are rounded
fn fill_rounded_top_rect(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
) {
    let r = radius.min(width / 2.0).min(height);

    ctx.begin_path();
    ctx.move_to(x, y + height);
    ctx.line_to(x, y + r);
    ctx.quadratic_curve_to(x, y, x + r, y);
    ctx.line_to(x + width - r, y);
    ctx.quadratic_curve_to(x + width, y, x + width, y + r);
    ctx.line_to(x + width, y + height);
    ctx.close_path();
    ctx.fill();
}
