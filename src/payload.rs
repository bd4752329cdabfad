//! Dashboard Payload
//!
//! Typed model of the JSON document the server embeds in the
//! subscriptions page, plus the one-time read that pulls it out of the
//! DOM at startup. Anything missing or unreadable degrades to empty
//! defaults; the dashboard then simply renders an empty state.

use indexmap::IndexMap;

/// DOM id of the element carrying the embedded JSON payload
pub const PAYLOAD_ELEMENT_ID: &str = "subscription-dashboard-data";

/// Everything the dashboard needs, embedded by the server at render time
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct DashboardPayload {
    #[serde(default)]
    pub summary: SubscriptionSummary,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

/// Aggregates computed server-side over active subscriptions
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct SubscriptionSummary {
    /// Number of active subscriptions
    #[serde(default)]
    pub total_count: u32,
    /// Sum of monthly-equivalent costs across all subscriptions
    #[serde(default)]
    pub total_monthly_cost: f64,
    /// Subscriptions billing within the next seven days
    #[serde(default)]
    pub upcoming_count: u32,
    /// Subscriptions whose next billing date has already passed
    #[serde(default)]
    pub expired_count: u32,
    /// Subscription count per billing cycle, in document order
    #[serde(default)]
    pub cycle_distribution: IndexMap<String, f64>,
    /// Most expensive subscriptions by monthly-equivalent cost, ranked
    #[serde(default)]
    pub top_monthly_cost: Vec<TopCostEntry>,
}

/// One row of the server-ranked top-cost list
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct TopCostEntry {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub monthly_cost: f64,
}

/// One subscription as listed by the server, derived fields included
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub cycle: String,
    #[serde(default)]
    pub next_billing_date: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    /// Amount normalized to a monthly equivalent
    #[serde(default)]
    pub monthly_cost: f64,
    /// Next billing date has passed
    #[serde(default)]
    pub is_expired: bool,
    /// Bills within the next seven days
    #[serde(default)]
    pub is_upcoming: bool,
    /// Days until the next billing date, negative when overdue
    #[serde(default)]
    pub days_until_billing: Option<i64>,
}

/// Read the embedded payload from the page. Called once at startup;
/// a page without the payload element yields an empty dashboard.
pub fn read_embedded() -> DashboardPayload {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(PAYLOAD_ELEMENT_ID))
        .and_then(|element| element.text_content());

    parse_payload(text.as_deref())
}

/// Parse payload text, falling back to empty defaults on any failure
pub fn parse_payload(text: Option<&str>) -> DashboardPayload {
    let Some(raw) = text else {
        return DashboardPayload::default();
    };

    match serde_json::from_str(raw) {
        Ok(payload) => payload,
        Err(_err) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(
                &format!("Ignoring malformed dashboard payload: {}", _err).into(),
            );
            DashboardPayload::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload_parses() {
        let raw = r#"{
            "summary": {
                "total_count": 3,
                "total_monthly_cost": 104.0,
                "upcoming_count": 1,
                "expired_count": 0,
                "cycle_distribution": {"monthly": 2, "yearly": 1},
                "top_monthly_cost": [
                    {"id": 1, "name": "Netflix", "monthly_cost": 68.0},
                    {"id": 2, "name": "iCloud", "monthly_cost": 21.0}
                ]
            },
            "subscriptions": [
                {
                    "id": 1,
                    "name": "Netflix",
                    "amount": 68.0,
                    "cycle": "monthly",
                    "next_billing_date": "2026-09-01",
                    "category": "影音",
                    "monthly_cost": 68.0,
                    "is_expired": false,
                    "is_upcoming": true,
                    "days_until_billing": 5
                }
            ]
        }"#;

        let payload = parse_payload(Some(raw));
        assert_eq!(payload.summary.total_count, 3);
        assert_eq!(payload.summary.top_monthly_cost.len(), 2);
        assert_eq!(payload.summary.top_monthly_cost[0].name, "Netflix");
        assert_eq!(payload.subscriptions.len(), 1);
        assert_eq!(payload.subscriptions[0].cycle, "monthly");
        assert_eq!(payload.subscriptions[0].days_until_billing, Some(5));
    }

    #[test]
    fn test_missing_text_defaults_empty() {
        let payload = parse_payload(None);
        assert_eq!(payload.summary.total_count, 0);
        assert!(payload.summary.cycle_distribution.is_empty());
        assert!(payload.subscriptions.is_empty());
    }

    #[test]
    fn test_malformed_json_defaults_empty() {
        let payload = parse_payload(Some("{not valid json"));
        assert_eq!(payload.summary.total_count, 0);
        assert!(payload.subscriptions.is_empty());
    }

    #[test]
    fn test_partial_summary_fills_defaults() {
        let payload = parse_payload(Some(r#"{"summary": {"total_count": 2}}"#));
        assert_eq!(payload.summary.total_count, 2);
        assert_eq!(payload.summary.total_monthly_cost, 0.0);
        assert!(payload.summary.top_monthly_cost.is_empty());
        assert!(payload.subscriptions.is_empty());
    }

    #[test]
    fn test_cycle_distribution_keeps_document_order() {
        let payload = parse_payload(Some(
            r#"{"summary": {"cycle_distribution": {"yearly": 1, "monthly": 3, "weekly": 2}}}"#,
        ));

        let keys: Vec<&str> = payload
            .summary
            .cycle_distribution
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["yearly", "monthly", "weekly"]);
    }

    #[test]
    fn test_subscription_optional_fields_default() {
        let payload = parse_payload(Some(
            r#"{"subscriptions": [{"id": 9, "name": "Keep"}]}"#,
        ));

        let subscription = &payload.subscriptions[0];
        assert_eq!(subscription.id, 9);
        assert_eq!(subscription.amount, 0.0);
        assert!(subscription.category.is_none());
        assert!(!subscription.is_expired);
        assert!(subscription.days_until_billing.is_none());
    }
}
