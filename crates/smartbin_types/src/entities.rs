//! Entity records rendered by the dashboards.
//!
//! All records are flat, owned and immutable once built. The serde
//! derives pin down the wire form a future backend would have to
//! supply; the snake_case renames match what the mobile team already
//! consumes. Status enumerations are closed, with a catch-all variant
//! so an out-of-enum wire value decodes to an explicit default instead
//! of failing deserialization.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Operational status of a waste bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BinStatus {
    Active,
    Maintenance,
    Full,
    #[serde(other)]
    Unknown,
}

/// A monitored waste bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub id: u32,
    /// Display name, e.g. "Poubelle-001".
    pub name: String,
    /// Human-readable placement, e.g. "Zone A - Entrée principale".
    pub location: String,
    pub status: BinStatus,
    /// Fill percentage, 0-100 by convention (not validated).
    pub fill_level: u8,
    /// Pre-formatted timestamp of the last sensor update.
    pub last_updated: String,
}

/// Status of a collection zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ZoneStatus {
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

/// A geographic collection zone grouping several bins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub status: ZoneStatus,
    /// Number of bins placed in the zone.
    pub bin_count: u32,
    /// Date of the last collection round.
    pub last_collection: String,
    /// "lat, lon" pair as displayed.
    pub coordinates: String,
}

/// What triggered an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlertKind {
    Full,
    Maintenance,
    Error,
    #[serde(other)]
    Other,
}

/// Alert priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlertPriority {
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

/// Alert lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlertStatus {
    Active,
    Pending,
    Resolved,
    #[serde(other)]
    Unknown,
}

/// An alert raised for a bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    /// Technical identifier of the bin, e.g. "BIN-001".
    pub bin_id: String,
    pub bin_name: String,
    pub zone: String,
    pub kind: AlertKind,
    pub priority: AlertPriority,
    pub status: AlertStatus,
    pub message: String,
    pub created_at: String,
    /// Present only once the alert has been resolved (fixture-level
    /// invariant, not enforced by the type).
    pub resolved_at: Option<String>,
}

/// Status of a collection round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CollectionStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// A scheduled or completed collection round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: u32,
    pub date: String,
    pub time: String,
    pub zone: String,
    pub status: CollectionStatus,
    pub driver: String,
    pub vehicle: String,
    /// Number of bins on the round.
    pub bins: u32,
    /// Collected weight in kilograms (0 until the round runs).
    pub weight_kg: u32,
}

/// Status of a sorting center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CenterStatus {
    Active,
    Maintenance,
    Inactive,
    #[serde(other)]
    Unknown,
}

/// A waste sorting center ("centre de tri").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriCenter {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub status: CenterStatus,
    /// Total capacity in tonnes.
    pub capacity_t: u32,
    /// Current load in tonnes.
    pub current_load_t: u32,
    /// Tonnes processed today.
    pub daily_processed_t: u32,
    /// Efficiency percentage, 0-100 by convention.
    pub efficiency_pct: u32,
    pub last_update: String,
}

/// Status of a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SensorStatus {
    Active,
    Inactive,
    Maintenance,
    #[serde(other)]
    Unknown,
}

/// A physical sensor mounted on a bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: u32,
    pub name: String,
    /// Free-form sensor technology, e.g. "Ultrasonique".
    pub kind: String,
    pub status: SensorStatus,
    /// Last reading as displayed ("75%", "23°C", "N/A").
    pub last_reading: String,
    /// Battery percentage, 0-100 by convention.
    pub battery_pct: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_serialization_round_trip() {
        let bin = Bin {
            id: 1,
            name: "Poubelle-001".to_string(),
            location: "Zone A".to_string(),
            status: BinStatus::Active,
            fill_level: 75,
            last_updated: "2024-03-20 14:30".to_string(),
        };

        let json = serde_json::to_string(&bin).unwrap();
        let parsed: Bin = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, bin);
    }

    #[test]
    fn test_statuses_use_snake_case_wire_form() {
        assert_eq!(
            serde_json::to_string(&CollectionStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(serde_json::to_string(&BinStatus::Full).unwrap(), "\"full\"");
        assert_eq!(
            serde_json::to_string(&AlertPriority::High).unwrap(),
            "\"high\""
        );
    }

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(CollectionStatus::InProgress.to_string(), "in_progress");
        assert_eq!(AlertStatus::Resolved.to_string(), "resolved");
        assert_eq!(SensorStatus::Maintenance.to_string(), "maintenance");
    }

    #[test]
    fn test_out_of_enum_status_decodes_to_catch_all() {
        let status: BinStatus = serde_json::from_str("\"exploded\"").unwrap();
        assert_eq!(status, BinStatus::Unknown);

        let kind: AlertKind = serde_json::from_str("\"vandalism\"").unwrap();
        assert_eq!(kind, AlertKind::Other);

        let status: CollectionStatus = serde_json::from_str("\"postponed\"").unwrap();
        assert_eq!(status, CollectionStatus::Unknown);
    }

    #[test]
    fn test_alert_optional_resolved_at() {
        let alert = Alert {
            id: 3,
            bin_id: "BIN-003".to_string(),
            bin_name: "Poubelle-003".to_string(),
            zone: "Zone C".to_string(),
            kind: AlertKind::Error,
            priority: AlertPriority::High,
            status: AlertStatus::Resolved,
            message: "Erreur de communication".to_string(),
            created_at: "2024-03-20 07:45".to_string(),
            resolved_at: Some("2024-03-20 08:15".to_string()),
        };

        let json = serde_json::to_string(&alert).unwrap();
        let parsed: Alert = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.resolved_at.as_deref(), Some("2024-03-20 08:15"));
    }
}
