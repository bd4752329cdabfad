//! Top Cost Chart
//!
//! Bar chart of the most expensive subscriptions by monthly-equivalent
//! cost. Renders nothing when the ranking has no positive entries.

use leptos::*;

use crate::charts::{top_cost_series, CanvasRenderer, ChartRenderer};
use crate::state::dashboard::DashboardState;

/// Top monthly-cost chart section
#[component]
pub fn TopCostChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let Some(series) = top_cost_series(&state.summary.top_monthly_cost) else {
        return view! {}.into_view();
    };

    let canvas_ref = create_node_ref::<html::Canvas>();

    // Draw once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            CanvasRenderer::new(&canvas).render_bar(&series);
        }
    });

    view! {
        <div class="bg-white rounded-xl shadow-sm p-6">
            <h2 class="text-lg font-semibold text-gray-900 mb-4">"月折算成本 TOP 5"</h2>
            <canvas
                node_ref=canvas_ref
                id="subscriptionTopCostChart"
                width="420"
                height="280"
                class="w-full"
            />
        </div>
    }
    .into_view()
}
