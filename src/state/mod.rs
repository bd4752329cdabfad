//! State Management
//!
//! Dashboard state shared through the component tree.

pub mod dashboard;

pub use dashboard::{provide_dashboard_state, DashboardState};
