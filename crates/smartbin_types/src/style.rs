//! Status-to-style mapping.
//!
//! Total mappings from the closed status enumerations to display
//! tokens. Every match carries the catch-all variant on its default
//! arm, so an unknown value degrades to the neutral token rather than
//! panicking.

use crate::entities::{
    AlertKind, AlertPriority, AlertStatus, BinStatus, CenterStatus, CollectionStatus, SensorStatus,
    ZoneStatus,
};

/// Display token for a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Danger,
    #[default]
    Neutral,
}

impl Tone {
    /// CSS class suffix used by the chip and badge styles.
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Success => "tone-success",
            Tone::Info => "tone-info",
            Tone::Warning => "tone-warning",
            Tone::Danger => "tone-danger",
            Tone::Neutral => "tone-neutral",
        }
    }

    /// Hex color, for inline badge backgrounds on the classic dashboard.
    pub fn color(self) -> &'static str {
        match self {
            Tone::Success => "#2ecc71",
            Tone::Info => "#3498db",
            Tone::Warning => "#f1c40f",
            Tone::Danger => "#e74c3c",
            Tone::Neutral => "#95a5a6",
        }
    }
}

impl BinStatus {
    pub fn tone(self) -> Tone {
        match self {
            BinStatus::Active => Tone::Success,
            BinStatus::Maintenance => Tone::Warning,
            BinStatus::Full => Tone::Danger,
            BinStatus::Unknown => Tone::Neutral,
        }
    }
}

impl ZoneStatus {
    pub fn tone(self) -> Tone {
        match self {
            ZoneStatus::Active => Tone::Success,
            ZoneStatus::Inactive => Tone::Danger,
            ZoneStatus::Unknown => Tone::Neutral,
        }
    }
}

impl AlertPriority {
    pub fn tone(self) -> Tone {
        match self {
            AlertPriority::High => Tone::Danger,
            AlertPriority::Medium => Tone::Warning,
            AlertPriority::Low => Tone::Info,
            AlertPriority::Unknown => Tone::Neutral,
        }
    }
}

impl AlertStatus {
    pub fn tone(self) -> Tone {
        match self {
            AlertStatus::Active => Tone::Danger,
            AlertStatus::Pending => Tone::Warning,
            AlertStatus::Resolved => Tone::Success,
            AlertStatus::Unknown => Tone::Neutral,
        }
    }
}

impl AlertKind {
    /// Icon token shown on the alert type chip.
    pub fn icon(self) -> &'static str {
        match self {
            AlertKind::Full => "error",
            AlertKind::Maintenance => "warning",
            AlertKind::Error => "error",
            AlertKind::Other => "info",
        }
    }
}

impl CollectionStatus {
    pub fn tone(self) -> Tone {
        match self {
            CollectionStatus::Completed => Tone::Success,
            CollectionStatus::InProgress => Tone::Info,
            CollectionStatus::Scheduled => Tone::Warning,
            CollectionStatus::Cancelled => Tone::Danger,
            CollectionStatus::Unknown => Tone::Neutral,
        }
    }

    /// Icon token shown on the collection status chip.
    pub fn icon(self) -> &'static str {
        match self {
            CollectionStatus::Completed => "check",
            CollectionStatus::InProgress => "truck",
            CollectionStatus::Scheduled => "schedule",
            CollectionStatus::Cancelled => "error",
            CollectionStatus::Unknown => "info",
        }
    }
}

impl CenterStatus {
    pub fn tone(self) -> Tone {
        match self {
            CenterStatus::Active => Tone::Success,
            CenterStatus::Maintenance => Tone::Warning,
            CenterStatus::Inactive => Tone::Danger,
            CenterStatus::Unknown => Tone::Neutral,
        }
    }
}

impl SensorStatus {
    pub fn tone(self) -> Tone {
        match self {
            SensorStatus::Active => Tone::Success,
            SensorStatus::Inactive => Tone::Danger,
            SensorStatus::Maintenance => Tone::Warning,
            SensorStatus::Unknown => Tone::Neutral,
        }
    }
}

/// Tone for an efficiency percentage.
pub fn efficiency_tone(pct: f64) -> Tone {
    if pct >= 90.0 {
        Tone::Success
    } else if pct >= 75.0 {
        Tone::Info
    } else if pct >= 60.0 {
        Tone::Warning
    } else {
        Tone::Danger
    }
}

/// Tone for a load bar: danger above 90% of capacity.
pub fn load_tone(current: u32, capacity: u32) -> Tone {
    if f64::from(current) > f64::from(capacity) * 0.9 {
        Tone::Danger
    } else {
        Tone::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tone_tokens_are_non_empty() {
        for tone in [
            Tone::Success,
            Tone::Info,
            Tone::Warning,
            Tone::Danger,
            Tone::Neutral,
        ] {
            assert!(!tone.css_class().is_empty());
            assert!(tone.color().starts_with('#'));
        }
    }

    #[test]
    fn test_status_mappers_are_total() {
        // Every variant of every enumeration must map to a usable token.
        for status in BinStatus::iter() {
            assert!(!status.tone().css_class().is_empty());
        }
        for status in ZoneStatus::iter() {
            assert!(!status.tone().css_class().is_empty());
        }
        for priority in AlertPriority::iter() {
            assert!(!priority.tone().css_class().is_empty());
        }
        for status in AlertStatus::iter() {
            assert!(!status.tone().css_class().is_empty());
        }
        for kind in AlertKind::iter() {
            assert!(!kind.icon().is_empty());
        }
        for status in CollectionStatus::iter() {
            assert!(!status.tone().css_class().is_empty());
            assert!(!status.icon().is_empty());
        }
        for status in CenterStatus::iter() {
            assert!(!status.tone().css_class().is_empty());
        }
        for status in SensorStatus::iter() {
            assert!(!status.tone().css_class().is_empty());
        }
    }

    #[test]
    fn test_out_of_enum_input_maps_to_neutral() {
        let status: BinStatus = serde_json::from_str("\"on_fire\"").unwrap();
        assert_eq!(status.tone(), Tone::Neutral);

        let status: SensorStatus = serde_json::from_str("\"rebooting\"").unwrap();
        assert_eq!(status.tone(), Tone::Neutral);
    }

    #[test]
    fn test_efficiency_tone_thresholds() {
        assert_eq!(efficiency_tone(92.0), Tone::Success);
        assert_eq!(efficiency_tone(90.0), Tone::Success);
        assert_eq!(efficiency_tone(85.0), Tone::Info);
        assert_eq!(efficiency_tone(75.0), Tone::Info);
        assert_eq!(efficiency_tone(60.0), Tone::Warning);
        assert_eq!(efficiency_tone(59.9), Tone::Danger);
    }

    #[test]
    fn test_load_tone_danger_above_ninety_percent() {
        assert_eq!(load_tone(950, 1000), Tone::Danger);
        assert_eq!(load_tone(900, 1000), Tone::Info);
        assert_eq!(load_tone(0, 0), Tone::Info);
    }
}
