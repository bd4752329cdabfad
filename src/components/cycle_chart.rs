//! Cycle Distribution Chart
//!
//! Doughnut of subscriptions per billing cycle, with an HTML legend
//! below the canvas. Renders nothing when no cycle has a positive
//! count.

use leptos::*;

use crate::charts::{cycle_series, CanvasRenderer, ChartRenderer, ChartSeries};
use crate::state::dashboard::DashboardState;

/// Cycle-distribution chart section
#[component]
pub fn CycleChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let Some(series) = cycle_series(&state.summary.cycle_distribution) else {
        return view! {}.into_view();
    };

    let canvas_ref = create_node_ref::<html::Canvas>();

    // Draw once the canvas is mounted
    let draw_series = series.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            CanvasRenderer::new(&canvas).render_doughnut(&draw_series);
        }
    });

    view! {
        <div class="bg-white rounded-xl shadow-sm p-6">
            <h2 class="text-lg font-semibold text-gray-900 mb-4">"扣费周期分布"</h2>
            <canvas
                node_ref=canvas_ref
                id="subscriptionCycleChart"
                width="420"
                height="280"
                class="w-full"
            />
            <ChartLegend series=series />
        </div>
    }
    .into_view()
}

/// Legend row with circular color markers, one per wedge
#[component]
fn ChartLegend(series: ChartSeries) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {series
                .labels
                .iter()
                .enumerate()
                .map(|(idx, label)| {
                    let color = series.palette[idx % series.palette.len()];
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-2.5 h-2.5 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-700">{label.clone()}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
