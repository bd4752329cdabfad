//! Billing Cycles
//!
//! The closed set of billing periods the tracker understands, with
//! their display labels. Payload keys outside the set are shown
//! verbatim instead of being dropped.

/// Billing period of a subscription
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    Yearly,
    Weekly,
    Quarterly,
}

impl BillingCycle {
    /// Parse a payload cycle key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            "weekly" => Some(Self::Weekly),
            "quarterly" => Some(Self::Quarterly),
            _ => None,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "月付",
            Self::Yearly => "年付",
            Self::Weekly => "周付",
            Self::Quarterly => "季付",
        }
    }
}

/// Translate a cycle key to its display label, passing unknown keys
/// through unchanged
pub fn cycle_label(key: &str) -> String {
    match BillingCycle::from_key(key) {
        Some(cycle) => cycle.label().to_string(),
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_cycle_labels() {
        assert_eq!(cycle_label("monthly"), "月付");
        assert_eq!(cycle_label("yearly"), "年付");
        assert_eq!(cycle_label("weekly"), "周付");
        assert_eq!(cycle_label("quarterly"), "季付");
    }

    #[test]
    fn test_unknown_cycle_passes_through() {
        assert_eq!(cycle_label("biweekly"), "biweekly");
        assert_eq!(cycle_label(""), "");
    }

    #[test]
    fn test_from_key_rejects_unknown() {
        assert_eq!(BillingCycle::from_key("monthly"), Some(BillingCycle::Monthly));
        assert_eq!(BillingCycle::from_key("daily"), None);
    }
}
