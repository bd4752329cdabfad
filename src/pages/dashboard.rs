//! Dashboard Page
//!
//! Subscription overview: headline stats, the two charts, and the
//! card list with its cancel actions.

use leptos::*;

use crate::components::{CycleChart, SubscriptionCard, SummaryCards, TopCostChart};
use crate::state::dashboard::DashboardState;

/// Main dashboard page
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let subscriptions = state.subscriptions;

    view! {
        <div class="space-y-8">
            // Page header
            <section>
                <h1 class="text-2xl font-bold text-gray-900">"订阅管理"</h1>
                <p class="text-gray-500 mt-1">"订阅支出与扣费周期一览"</p>
            </section>

            // Headline aggregates
            <SummaryCards />

            // Charts, each omitted when its data is empty
            <section class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <CycleChart />
                <TopCostChart />
            </section>

            // Subscription cards
            <section>
                <h2 class="text-lg font-semibold text-gray-900 mb-4">"我的订阅"</h2>
                {move || {
                    let subscriptions = subscriptions.get();
                    if subscriptions.is_empty() {
                        view! {
                            <div class="bg-white rounded-xl shadow-sm p-12 text-center text-gray-400">
                                "暂无订阅"
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                                {subscriptions
                                    .into_iter()
                                    .map(|subscription| {
                                        view! { <SubscriptionCard subscription=subscription /> }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_view()
                    }
                }}
            </section>
        </div>
    }
}
