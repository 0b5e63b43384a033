//! Demonstration fixtures.
//!
//! Hard-coded datasets standing in for a real data source. Pages build
//! their local state from these functions at mount and never mutate it.

use crate::entities::{
    Alert, AlertKind, AlertPriority, AlertStatus, Bin, BinStatus, CenterStatus, Collection,
    CollectionStatus, Sensor, SensorStatus, TriCenter, Zone, ZoneStatus,
};

/// The monitored bins.
pub fn bins() -> Vec<Bin> {
    vec![
        Bin {
            id: 1,
            name: "Poubelle-001".to_string(),
            location: "Zone A - Entrée principale".to_string(),
            status: BinStatus::Active,
            fill_level: 75,
            last_updated: "2024-03-20 14:30".to_string(),
        },
        Bin {
            id: 2,
            name: "Poubelle-002".to_string(),
            location: "Zone B - Cafétéria".to_string(),
            status: BinStatus::Full,
            fill_level: 90,
            last_updated: "2024-03-20 14:25".to_string(),
        },
        Bin {
            id: 3,
            name: "Poubelle-003".to_string(),
            location: "Zone C - Parking".to_string(),
            status: BinStatus::Maintenance,
            fill_level: 45,
            last_updated: "2024-03-20 14:20".to_string(),
        },
    ]
}

/// The collection zones.
pub fn zones() -> Vec<Zone> {
    vec![
        Zone {
            id: 1,
            name: "Zone A".to_string(),
            description: "Centre-ville".to_string(),
            status: ZoneStatus::Active,
            bin_count: 8,
            last_collection: "2024-03-20".to_string(),
            coordinates: "48.8566, 2.3522".to_string(),
        },
        Zone {
            id: 2,
            name: "Zone B".to_string(),
            description: "Quartier résidentiel".to_string(),
            status: ZoneStatus::Active,
            bin_count: 5,
            last_collection: "2024-03-19".to_string(),
            coordinates: "48.8606, 2.3376".to_string(),
        },
        Zone {
            id: 3,
            name: "Zone C".to_string(),
            description: "Zone commerciale".to_string(),
            status: ZoneStatus::Inactive,
            bin_count: 3,
            last_collection: "2024-03-18".to_string(),
            coordinates: "48.8706, 2.3476".to_string(),
        },
    ]
}

/// The raised alerts.
pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            bin_id: "BIN-001".to_string(),
            bin_name: "Poubelle-001".to_string(),
            zone: "Zone A".to_string(),
            kind: AlertKind::Full,
            priority: AlertPriority::High,
            status: AlertStatus::Active,
            message: "Poubelle pleine à 95%".to_string(),
            created_at: "2024-03-20 08:30".to_string(),
            resolved_at: None,
        },
        Alert {
            id: 2,
            bin_id: "BIN-002".to_string(),
            bin_name: "Poubelle-002".to_string(),
            zone: "Zone B".to_string(),
            kind: AlertKind::Maintenance,
            priority: AlertPriority::Medium,
            status: AlertStatus::Pending,
            message: "Maintenance requise - Capteur défectueux".to_string(),
            created_at: "2024-03-20 09:15".to_string(),
            resolved_at: None,
        },
        Alert {
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
        },
    ]
}

/// The collection rounds of the day.
pub fn collections() -> Vec<Collection> {
    vec![
        Collection {
            id: 1,
            date: "2024-03-20".to_string(),
            time: "08:00".to_string(),
            zone: "Zone A".to_string(),
            status: CollectionStatus::Completed,
            driver: "Jean Dupont".to_string(),
            vehicle: "Camion-001".to_string(),
            bins: 8,
            weight_kg: 450,
        },
        Collection {
            id: 2,
            date: "2024-03-20".to_string(),
            time: "10:30".to_string(),
            zone: "Zone B".to_string(),
            status: CollectionStatus::InProgress,
            driver: "Marie Martin".to_string(),
            vehicle: "Camion-002".to_string(),
            bins: 5,
            weight_kg: 280,
        },
        Collection {
            id: 3,
            date: "2024-03-20".to_string(),
            time: "14:00".to_string(),
            zone: "Zone C".to_string(),
            status: CollectionStatus::Scheduled,
            driver: "Pierre Durand".to_string(),
            vehicle: "Camion-003".to_string(),
            bins: 3,
            weight_kg: 0,
        },
    ]
}

/// The sorting centers.
pub fn tri_centers() -> Vec<TriCenter> {
    vec![
        TriCenter {
            id: 1,
            name: "Centre de Tri Nord".to_string(),
            location: "Zone Industrielle Nord".to_string(),
            status: CenterStatus::Active,
            capacity_t: 1000,
            current_load_t: 750,
            daily_processed_t: 450,
            efficiency_pct: 85,
            last_update: "2024-03-20 10:30".to_string(),
        },
        TriCenter {
            id: 2,
            name: "Centre de Tri Sud".to_string(),
            location: "Zone Industrielle Sud".to_string(),
            status: CenterStatus::Maintenance,
            capacity_t: 800,
            current_load_t: 200,
            daily_processed_t: 320,
            efficiency_pct: 78,
            last_update: "2024-03-20 09:15".to_string(),
        },
        TriCenter {
            id: 3,
            name: "Centre de Tri Est".to_string(),
            location: "Zone Industrielle Est".to_string(),
            status: CenterStatus::Active,
            capacity_t: 1200,
            current_load_t: 950,
            daily_processed_t: 580,
            efficiency_pct: 92,
            last_update: "2024-03-20 11:00".to_string(),
        },
    ]
}

/// The deployed sensors.
pub fn sensors() -> Vec<Sensor> {
    vec![
        Sensor {
            id: 1,
            name: "Capteur de Niveau".to_string(),
            kind: "Ultrasonique".to_string(),
            status: SensorStatus::Active,
            last_reading: "75%".to_string(),
            battery_pct: 85,
        },
        Sensor {
            id: 2,
            name: "Capteur de Température".to_string(),
            kind: "Thermique".to_string(),
            status: SensorStatus::Active,
            last_reading: "23°C".to_string(),
            battery_pct: 92,
        },
        Sensor {
            id: 3,
            name: "Capteur de Qualité".to_string(),
            kind: "Air".to_string(),
            status: SensorStatus::Maintenance,
            last_reading: "N/A".to_string(),
            battery_pct: 45,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_ids(ids: impl Iterator<Item = u32>) {
        let ids: Vec<u32> = ids.collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len(), "fixture ids must be unique");
    }

    #[test]
    fn test_fixtures_are_non_empty_with_unique_ids() {
        assert_unique_ids(bins().iter().map(|b| b.id));
        assert_unique_ids(zones().iter().map(|z| z.id));
        assert_unique_ids(alerts().iter().map(|a| a.id));
        assert_unique_ids(collections().iter().map(|c| c.id));
        assert_unique_ids(tri_centers().iter().map(|c| c.id));
        assert_unique_ids(sensors().iter().map(|s| s.id));

        assert!(!bins().is_empty());
        assert!(!sensors().is_empty());
    }

    #[test]
    fn test_alert_resolved_at_present_iff_resolved() {
        for alert in alerts() {
            assert_eq!(
                alert.resolved_at.is_some(),
                alert.status == AlertStatus::Resolved,
                "alert {} breaks the resolved_at invariant",
                alert.id
            );
        }
    }

    #[test]
    fn test_percentage_fields_within_range() {
        for bin in bins() {
            assert!(bin.fill_level <= 100);
        }
        for sensor in sensors() {
            assert!(sensor.battery_pct <= 100);
        }
        for center in tri_centers() {
            assert!(center.efficiency_pct <= 100);
            assert!(center.current_load_t <= center.capacity_t);
        }
    }
}
