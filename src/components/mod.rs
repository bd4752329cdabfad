//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod cost_chart;
pub mod cycle_chart;
pub mod subscription_card;
pub mod summary_cards;

pub use cost_chart::TopCostChart;
pub use cycle_chart::CycleChart;
pub use subscription_card::SubscriptionCard;
pub use summary_cards::SummaryCards;
