//! Chart Series Derivation
//!
//! Pure mapping from summary data to drawable series. Series carry
//! only strictly positive entries, in input order; a `None` series
//! means the chart is not rendered at all.

use indexmap::IndexMap;

use crate::cycles::cycle_label;
use crate::payload::TopCostEntry;

/// Doughnut palette for the cycle distribution
pub const CYCLE_PALETTE: [&str; 4] = ["#2563EB", "#14B8A6", "#F59E0B", "#8B5CF6"];

/// Bar palette for the top monthly-cost ranking
pub const TOP_COST_PALETTE: [&str; 5] = ["#2563EB", "#0EA5E9", "#14B8A6", "#22C55E", "#F59E0B"];

/// Labels, values and colors for one chart
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub palette: &'static [&'static str],
}

/// Cycle-distribution series: positive counts in document order, keys
/// translated to display labels
pub fn cycle_series(distribution: &IndexMap<String, f64>) -> Option<ChartSeries> {
    let mut labels = Vec::new();
    let mut values = Vec::new();

    for (key, &count) in distribution {
        if count > 0.0 {
            labels.push(cycle_label(key));
            values.push(count);
        }
    }

    if values.is_empty() {
        return None;
    }

    Some(ChartSeries {
        labels,
        values,
        palette: &CYCLE_PALETTE,
    })
}

/// Top-cost series: the server-ranked list in given order, entries
/// with a positive monthly cost only
pub fn top_cost_series(entries: &[TopCostEntry]) -> Option<ChartSeries> {
    let mut labels = Vec::new();
    let mut values = Vec::new();

    for entry in entries {
        if entry.monthly_cost > 0.0 {
            labels.push(entry.name.clone());
            values.push(entry.monthly_cost);
        }
    }

    if values.is_empty() {
        return None;
    }

    Some(ChartSeries {
        labels,
        values,
        palette: &TOP_COST_PALETTE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribution(pairs: &[(&str, f64)]) -> IndexMap<String, f64> {
        pairs
            .iter()
            .map(|(key, count)| (key.to_string(), *count))
            .collect()
    }

    fn entry(id: i64, name: &str, monthly_cost: f64) -> TopCostEntry {
        TopCostEntry {
            id,
            name: name.to_string(),
            monthly_cost,
        }
    }

    #[test]
    fn test_cycle_series_skips_zero_counts() {
        let series =
            cycle_series(&distribution(&[("monthly", 3.0), ("yearly", 0.0), ("weekly", 1.0)]))
                .unwrap();

        assert_eq!(series.labels, vec!["月付", "周付"]);
        assert_eq!(series.values, vec![3.0, 1.0]);
    }

    #[test]
    fn test_cycle_series_skips_negative_counts() {
        let series = cycle_series(&distribution(&[("monthly", -2.0), ("quarterly", 1.0)])).unwrap();

        assert_eq!(series.labels, vec!["季付"]);
        assert_eq!(series.values, vec![1.0]);
    }

    #[test]
    fn test_cycle_series_preserves_document_order() {
        let series =
            cycle_series(&distribution(&[("yearly", 1.0), ("monthly", 3.0), ("weekly", 2.0)]))
                .unwrap();

        assert_eq!(series.labels, vec!["年付", "月付", "周付"]);
        assert_eq!(series.values, vec![1.0, 3.0, 2.0]);
    }

    #[test]
    fn test_cycle_series_labels_unknown_keys_verbatim() {
        let series = cycle_series(&distribution(&[("biweekly", 2.0)])).unwrap();

        assert_eq!(series.labels, vec!["biweekly"]);
    }

    #[test]
    fn test_empty_distribution_yields_no_series() {
        assert!(cycle_series(&IndexMap::new()).is_none());
    }

    #[test]
    fn test_all_zero_distribution_yields_no_series() {
        assert!(cycle_series(&distribution(&[("monthly", 0.0), ("yearly", 0.0)])).is_none());
    }

    #[test]
    fn test_top_cost_series_preserves_rank_order() {
        let entries = vec![entry(1, "Netflix", 15.0), entry(2, "Spotify", 10.0)];
        let series = top_cost_series(&entries).unwrap();

        assert_eq!(series.labels, vec!["Netflix", "Spotify"]);
        assert_eq!(series.values, vec![15.0, 10.0]);
    }

    #[test]
    fn test_top_cost_series_skips_non_positive_costs() {
        let entries = vec![
            entry(1, "Netflix", 15.0),
            entry(2, "Trial", 0.0),
            entry(3, "Refund", -3.0),
        ];
        let series = top_cost_series(&entries).unwrap();

        assert_eq!(series.labels, vec!["Netflix"]);
        assert_eq!(series.values, vec![15.0]);
    }

    #[test]
    fn test_empty_top_cost_yields_no_series() {
        assert!(top_cost_series(&[]).is_none());
    }

    #[test]
    fn test_palettes_match_series_kind() {
        let cycle = cycle_series(&distribution(&[("monthly", 1.0)])).unwrap();
        assert_eq!(cycle.palette, &CYCLE_PALETTE[..]);

        let top = top_cost_series(&[entry(1, "Netflix", 15.0)]).unwrap();
        assert_eq!(top.palette, &TOP_COST_PALETTE[..]);
    }
}
