//! Summary Cards
//!
//! Headline aggregates shown above the charts.

use leptos::*;

use crate::state::dashboard::DashboardState;

/// The four headline stat cards
#[component]
pub fn SummaryCards() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let summary = state.summary;

    view! {
        <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
            <StatCard
                label="订阅总数"
                value=summary.total_count.to_string()
                accent="text-gray-900"
            />
            <StatCard
                label="月度总成本"
                value=format!("¥{:.2}", summary.total_monthly_cost)
                accent="text-gray-900"
            />
            <StatCard
                label="7天内扣费"
                value=summary.upcoming_count.to_string()
                accent="text-amber-600"
            />
            <StatCard
                label="已过期"
                value=summary.expired_count.to_string()
                accent="text-red-600"
            />
        </div>
    }
}

/// One stat card
#[component]
fn StatCard(
    label: &'static str,
    value: String,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm p-5">
            <p class="text-sm text-gray-500">{label}</p>
            <p class=format!("text-2xl font-bold mt-1 {}", accent)>{value}</p>
        </div>
    }
}
