//! Scalar summaries over entity slices.
//!
//! The stat tiles at the top of each page are computed here, off the
//! markup, so they stay testable. The mean of an empty slice is a
//! defined "no data" value (`None`), rendered as a dash.

use crate::entities::{Alert, AlertPriority, AlertStatus, Collection, CollectionStatus, TriCenter, Zone, ZoneStatus};

/// Count the records matching a predicate.
pub fn count_matching<T>(items: &[T], pred: impl Fn(&T) -> bool) -> u32 {
    items.iter().filter(|item| pred(item)).count() as u32
}

/// Sum a numeric field over the records.
pub fn total_of<T>(items: &[T], field: impl Fn(&T) -> u32) -> u32 {
    items.iter().map(field).sum()
}

/// Arithmetic mean of a numeric field, `None` when there is nothing to
/// average.
pub fn average_of<T>(items: &[T], field: impl Fn(&T) -> f64) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    Some(items.iter().map(field).sum::<f64>() / items.len() as f64)
}

/// Stat tiles of the alerts page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertSummary {
    pub active: u32,
    pub pending: u32,
    pub resolved: u32,
    pub high_priority: u32,
}

impl AlertSummary {
    /// Single pass over the alerts, mirroring the tile definitions.
    pub fn of(alerts: &[Alert]) -> Self {
        alerts.iter().fold(Self::default(), |mut acc, alert| {
            match alert.status {
                AlertStatus::Active => acc.active += 1,
                AlertStatus::Pending => acc.pending += 1,
                AlertStatus::Resolved => acc.resolved += 1,
                AlertStatus::Unknown => {}
            }
            if alert.priority == AlertPriority::High {
                acc.high_priority += 1;
            }
            acc
        })
    }
}

/// Stat tiles of the zones page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoneSummary {
    pub total: u32,
    pub active: u32,
    pub total_bins: u32,
    pub avg_bins_per_zone: Option<f64>,
}

impl ZoneSummary {
    pub fn of(zones: &[Zone]) -> Self {
        Self {
            total: zones.len() as u32,
            active: count_matching(zones, |z| z.status == ZoneStatus::Active),
            total_bins: total_of(zones, |z| z.bin_count),
            avg_bins_per_zone: average_of(zones, |z| f64::from(z.bin_count)),
        }
    }
}

/// Stat tiles of the collections page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionSummary {
    pub completed: u32,
    pub in_progress: u32,
    pub scheduled: u32,
    pub total_weight_kg: u32,
}

impl CollectionSummary {
    pub fn of(collections: &[Collection]) -> Self {
        Self {
            completed: count_matching(collections, |c| c.status == CollectionStatus::Completed),
            in_progress: count_matching(collections, |c| c.status == CollectionStatus::InProgress),
            scheduled: count_matching(collections, |c| c.status == CollectionStatus::Scheduled),
            total_weight_kg: total_of(collections, |c| c.weight_kg),
        }
    }
}

/// Stat tiles of the sorting centers page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CenterSummary {
    pub total_capacity_t: u32,
    pub total_load_t: u32,
    pub total_daily_processed_t: u32,
    pub avg_efficiency_pct: Option<f64>,
}

impl CenterSummary {
    pub fn of(centers: &[TriCenter]) -> Self {
        Self {
            total_capacity_t: total_of(centers, |c| c.capacity_t),
            total_load_t: total_of(centers, |c| c.current_load_t),
            total_daily_processed_t: total_of(centers, |c| c.daily_processed_t),
            avg_efficiency_pct: average_of(centers, |c| f64::from(c.efficiency_pct)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_alert_counts_partition_the_fixture() {
        let alerts = fixtures::alerts();
        let summary = AlertSummary::of(&alerts);

        assert_eq!(
            (summary.active + summary.pending + summary.resolved) as usize,
            alerts.len()
        );
        assert_eq!(summary.active, 1);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.resolved, 1);
        assert_eq!(summary.high_priority, 2);
    }

    #[test]
    fn test_center_summary_totals_and_average() {
        let centers = fixtures::tri_centers();
        let summary = CenterSummary::of(&centers);

        // Capacities 1000 + 800 + 1200, efficiencies 85, 78, 92.
        assert_eq!(summary.total_capacity_t, 3000);
        assert_eq!(summary.total_load_t, 1900);
        assert_eq!(summary.total_daily_processed_t, 1350);

        let avg = summary.avg_efficiency_pct.unwrap();
        assert_eq!(format!("{avg:.1}"), "85.0");
    }

    #[test]
    fn test_zone_summary() {
        let zones = fixtures::zones();
        let summary = ZoneSummary::of(&zones);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.total_bins, 16);
        let avg = summary.avg_bins_per_zone.unwrap();
        assert!((avg - 16.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_collection_summary() {
        let collections = fixtures::collections();
        let summary = CollectionSummary::of(&collections);

        assert_eq!(summary.completed, 1);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.scheduled, 1);
        assert_eq!(summary.total_weight_kg, 730);
    }

    #[test]
    fn test_empty_input_yields_zero_counts_and_no_average() {
        assert_eq!(AlertSummary::of(&[]), AlertSummary::default());
        assert_eq!(CollectionSummary::of(&[]), CollectionSummary::default());

        let zones = ZoneSummary::of(&[]);
        assert_eq!(zones.total, 0);
        assert_eq!(zones.total_bins, 0);
        assert_eq!(zones.avg_bins_per_zone, None);

        let centers = CenterSummary::of(&[]);
        assert_eq!(centers.total_capacity_t, 0);
        assert_eq!(centers.avg_efficiency_pct, None);
    }

    #[test]
    fn test_generic_helpers() {
        let values = [1u32, 2, 3, 4];
        assert_eq!(count_matching(&values, |v| *v % 2 == 0), 2);
        assert_eq!(total_of(&values, |v| *v), 10);
        assert_eq!(average_of(&values, |v| f64::from(*v)), Some(2.5));
        assert_eq!(average_of::<u32>(&[], |v| f64::from(*v)), None);
    }
}
