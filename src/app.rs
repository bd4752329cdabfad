//! App Root Component
//!
//! Mounts the dashboard with its state provider. Navigation between
//! the tracker's pages happens server-side, so there is no client
//! router here.

use leptos::*;

use crate::pages::Dashboard;
use crate::payload::DashboardPayload;
use crate::state::dashboard::provide_dashboard_state;

/// Root application component
#[component]
pub fn App(payload: DashboardPayload) -> impl IntoView {
    // Provide dashboard state to all components
    provide_dashboard_state(payload);

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900">
            <main class="container mx-auto px-4 py-8 max-w-6xl">
                <Dashboard />
            </main>
        </div>
    }
}
