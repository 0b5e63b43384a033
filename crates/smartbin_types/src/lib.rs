//! Shared domain types for the SmartBin dashboards.
//!
//! This crate defines the entity records shown by the two frontends,
//! the fixture data they render, and the pure presentation logic
//! (summaries, status-to-style mapping, table projections). Nothing in
//! here touches the DOM, so it all runs and tests on the native target.

pub mod entities;
pub mod fixtures;
pub mod style;
pub mod summary;
pub mod table;

pub use entities::{
    Alert, AlertKind, AlertPriority, AlertStatus, Bin, BinStatus, CenterStatus, Collection,
    CollectionStatus, Sensor, SensorStatus, TriCenter, Zone, ZoneStatus,
};
pub use style::Tone;
pub use summary::{AlertSummary, CenterSummary, CollectionSummary, ZoneSummary};
pub use table::{Cell, PageCommand, Row, RowCommand, TableModel};
