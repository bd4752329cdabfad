//! Dashboard Charts
//!
//! Series derivation and canvas drawing for the dashboard. The data
//! prep in [`view`] is pure; drawing goes through the [`ChartRenderer`]
//! trait so the two stay separable.

pub mod canvas;
pub mod view;

pub use canvas::CanvasRenderer;
pub use view::{cycle_series, top_cost_series, ChartSeries, CYCLE_PALETTE, TOP_COST_PALETTE};

/// Drawing capability the chart components render through
pub trait ChartRenderer {
    /// Draw the series as a doughnut chart
    fn render_doughnut(&self, series: &ChartSeries);

    /// Draw the series as a vertical bar chart
    fn render_bar(&self, series: &ChartSeries);
}
