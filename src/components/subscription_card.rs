//! Subscription Card
//!
//! One card per subscription, including the cancel flow: blocking
//! confirm, busy button while the DELETE is in flight, full page
//! reload on success, alert and revert on failure.

use leptos::*;

use crate::api;
use crate::cycles::cycle_label;
use crate::payload::Subscription;
use crate::state::dashboard::DashboardState;

/// Card for a single subscription
#[component]
pub fn SubscriptionCard(subscription: Subscription) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let (deleting, set_deleting) = create_signal(false);

    let id = subscription.id;
    let name = subscription.name.clone();

    let on_delete = move |_| {
        if deleting.get() {
            return;
        }

        if !confirm(&format!("确认取消订阅「{}」吗？", name)) {
            return;
        }

        set_deleting.set(true);

        let state = state.clone();
        spawn_local(async move {
            match api::delete_subscription(id).await {
                Ok(()) => {
                    // Drop the card, then let the server re-render the
                    // page so the summary numbers refresh too
                    state.remove_subscription(id);
                    reload_page();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to cancel subscription {}: {}", id, e).into(),
                    );
                    alert("取消失败，请稍后重试。");
                    set_deleting.set(false);
                }
            }
        });
    };

    view! {
        <div
            id=format!("subscription-card-{}", subscription.id)
            class="bg-white rounded-xl shadow-sm p-6 flex flex-col gap-3"
        >
            // Name, price and category
            <div class="flex items-start justify-between">
                <div>
                    <h3 class="text-base font-semibold text-gray-900">
                        {subscription.name.clone()}
                    </h3>
                    <p class="text-sm text-gray-500 mt-0.5">
                        {format!("¥{:.2} / {}", subscription.amount, cycle_label(&subscription.cycle))}
                    </p>
                </div>
                {subscription.category.clone().map(|category| view! {
                    <span class="text-xs px-2 py-1 rounded-full bg-gray-100 text-gray-600">
                        {category}
                    </span>
                })}
            </div>

            {subscription.note.clone().map(|note| view! {
                <p class="text-xs text-gray-400 truncate">{note}</p>
            })}

            // Normalized cost and billing status
            <div class="flex items-center justify-between text-sm">
                <span class="text-gray-500">
                    {format!("月折算 ¥{:.2}", subscription.monthly_cost)}
                </span>
                <BillingBadge subscription=subscription.clone() />
            </div>

            // Next billing date and cancel action
            <div class="flex items-center justify-between mt-2">
                <span class="text-xs text-gray-400">
                    {format!("下次扣费 {}", subscription.next_billing_date)}
                </span>
                <button
                    class="delete-subscription-btn px-3 py-1.5 rounded-lg text-sm font-medium
                           text-red-600 border border-red-200 hover:bg-red-50
                           disabled:opacity-60 disabled:cursor-not-allowed"
                    data-id=subscription.id.to_string()
                    data-name=subscription.name.clone()
                    disabled=move || deleting.get()
                    on:click=on_delete
                >
                    {move || if deleting.get() { "处理中..." } else { "取消订阅" }}
                </button>
            </div>
        </div>
    }
}

/// Billing status badge: overdue, due today or soon, or days remaining
#[component]
fn BillingBadge(subscription: Subscription) -> impl IntoView {
    if subscription.is_expired {
        return view! {
            <span class="text-xs px-2 py-1 rounded-full bg-red-100 text-red-600">"已过期"</span>
        }
        .into_view();
    }

    let (text, classes) = match subscription.days_until_billing {
        Some(0) => ("今天扣费".to_string(), "bg-amber-100 text-amber-700"),
        Some(days) if subscription.is_upcoming => {
            (format!("{} 天后扣费", days), "bg-amber-100 text-amber-700")
        }
        Some(days) => (format!("{} 天后扣费", days), "bg-gray-100 text-gray-600"),
        None => return view! {}.into_view(),
    };

    view! {
        <span class=format!("text-xs px-2 py-1 rounded-full {}", classes)>{text}</span>
    }
    .into_view()
}

/// Blocking confirm dialog; treated as declined when unavailable
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Blocking alert
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Full page reload, so server-rendered summary data refreshes
fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}
