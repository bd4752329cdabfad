//! Dashboard State
//!
//! Reactive state management using Leptos signals. The summary is an
//! immutable snapshot taken at startup; only the card list changes,
//! and only when a cancellation succeeds.

use leptos::*;

use crate::payload::{DashboardPayload, Subscription, SubscriptionSummary};

/// Dashboard state provided to all components
#[derive(Clone)]
pub struct DashboardState {
    /// Summary aggregates, fixed for the lifetime of the page
    pub summary: SubscriptionSummary,
    /// Subscriptions shown as cards
    pub subscriptions: RwSignal<Vec<Subscription>>,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state(payload: DashboardPayload) {
    let state = DashboardState {
        summary: payload.summary,
        subscriptions: create_rw_signal(payload.subscriptions),
    };

    provide_context(state);
}

impl DashboardState {
    /// Drop a subscription card by id
    pub fn remove_subscription(&self, id: i64) {
        self.subscriptions.update(|subscriptions| {
            subscriptions.retain(|subscription| subscription.id != id);
        });
    }
}
