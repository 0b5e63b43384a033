//! Table projection model.
//!
//! Pages project their entity slices into a [`TableModel`] and hand it
//! to the table component, which renders one row per record in input
//! order, keyed by the record id. The action controls rendered next to
//! each row emit [`RowCommand`] values through an optional callback;
//! today no page supplies one, so the controls are inert by
//! construction. The command enums are the extension point a future
//! editing feature plugs into.

use crate::entities::{Alert, Bin, Collection, TriCenter, Zone};
use crate::style::{efficiency_tone, load_tone, Tone};

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// A colored chip, optionally carrying an icon token.
    Chip {
        label: String,
        tone: Tone,
        icon: Option<&'static str>,
    },
    /// A determinate progress bar with a trailing label.
    Progress {
        pct: f64,
        label: String,
        tone: Tone,
    },
}

impl Cell {
    pub fn text(value: impl ToString) -> Self {
        Cell::Text(value.to_string())
    }

    /// Missing optional fields render as a dash.
    pub fn text_or_dash(value: Option<&str>) -> Self {
        Cell::Text(value.unwrap_or("-").to_string())
    }

    pub fn chip(label: impl ToString, tone: Tone) -> Self {
        Cell::Chip {
            label: label.to_string(),
            tone,
            icon: None,
        }
    }

    pub fn chip_with_icon(label: impl ToString, tone: Tone, icon: &'static str) -> Self {
        Cell::Chip {
            label: label.to_string(),
            tone,
            icon: Some(icon),
        }
    }
}

/// One table row with a stable identity key.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: String,
    pub cells: Vec<Cell>,
}

/// Column headers plus rows. The actions column is appended by the
/// table component, not listed here, so `cells.len() == columns.len()`
/// holds for every row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Row>,
}

/// Per-row action emitted by the table component. Currently unwired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowCommand {
    Edit(String),
    Delete(String),
}

/// Page-level action emitted by the toolbar. Currently unwired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCommand {
    Add,
    Refresh,
}

/// Bins table.
pub fn bins_table(bins: &[Bin]) -> TableModel {
    TableModel {
        columns: vec![
            "ID",
            "Nom",
            "Emplacement",
            "Statut",
            "Dernière mise à jour",
        ],
        rows: bins
            .iter()
            .map(|bin| Row {
                key: bin.id.to_string(),
                cells: vec![
                    Cell::text(bin.id),
                    Cell::text(&bin.name),
                    Cell::text(&bin.location),
                    Cell::chip(bin.status, bin.status.tone()),
                    Cell::text(&bin.last_updated),
                ],
            })
            .collect(),
    }
}

/// Zones table.
pub fn zones_table(zones: &[Zone]) -> TableModel {
    TableModel {
        columns: vec![
            "ID",
            "Nom",
            "Description",
            "Statut",
            "Nombre de poubelles",
            "Dernière collecte",
            "Coordonnées",
        ],
        rows: zones
            .iter()
            .map(|zone| Row {
                key: zone.id.to_string(),
                cells: vec![
                    Cell::text(zone.id),
                    Cell::text(&zone.name),
                    Cell::text(&zone.description),
                    Cell::chip(zone.status, zone.status.tone()),
                    Cell::text(zone.bin_count),
                    Cell::text(&zone.last_collection),
                    Cell::text(&zone.coordinates),
                ],
            })
            .collect(),
    }
}

/// Alerts table.
pub fn alerts_table(alerts: &[Alert]) -> TableModel {
    TableModel {
        columns: vec![
            "ID",
            "Poubelle",
            "Zone",
            "Type",
            "Priorité",
            "Statut",
            "Message",
            "Créée le",
            "Résolue le",
        ],
        rows: alerts
            .iter()
            .map(|alert| Row {
                key: alert.id.to_string(),
                cells: vec![
                    Cell::text(alert.id),
                    Cell::text(&alert.bin_name),
                    Cell::text(&alert.zone),
                    Cell::chip_with_icon(alert.kind, Tone::Neutral, alert.kind.icon()),
                    Cell::chip(alert.priority, alert.priority.tone()),
                    Cell::chip(alert.status, alert.status.tone()),
                    Cell::text(&alert.message),
                    Cell::text(&alert.created_at),
                    Cell::text_or_dash(alert.resolved_at.as_deref()),
                ],
            })
            .collect(),
    }
}

/// Collections table.
pub fn collections_table(collections: &[Collection]) -> TableModel {
    TableModel {
        columns: vec![
            "ID",
            "Date",
            "Heure",
            "Zone",
            "Statut",
            "Chauffeur",
            "Véhicule",
            "Poubelles",
            "Poids (kg)",
        ],
        rows: collections
            .iter()
            .map(|collection| Row {
                key: collection.id.to_string(),
                cells: vec![
                    Cell::text(collection.id),
                    Cell::text(&collection.date),
                    Cell::text(&collection.time),
                    Cell::text(&collection.zone),
                    Cell::chip_with_icon(
                        collection.status,
                        collection.status.tone(),
                        collection.status.icon(),
                    ),
                    Cell::text(&collection.driver),
                    Cell::text(&collection.vehicle),
                    Cell::text(collection.bins),
                    Cell::text(collection.weight_kg),
                ],
            })
            .collect(),
    }
}

/// Sorting centers table.
pub fn tri_centers_table(centers: &[TriCenter]) -> TableModel {
    TableModel {
        columns: vec![
            "ID",
            "Nom",
            "Emplacement",
            "Statut",
            "Capacité",
            "Charge actuelle",
            "Traité aujourd'hui",
            "Efficacité",
            "Dernière mise à jour",
        ],
        rows: centers
            .iter()
            .map(|center| {
                let load_pct = if center.capacity_t == 0 {
                    0.0
                } else {
                    f64::from(center.current_load_t) / f64::from(center.capacity_t) * 100.0
                };
                Row {
                    key: center.id.to_string(),
                    cells: vec![
                        Cell::text(center.id),
                        Cell::text(&center.name),
                        Cell::text(&center.location),
                        Cell::chip(center.status, center.status.tone()),
                        Cell::text(format!("{} t", center.capacity_t)),
                        Cell::Progress {
                            pct: load_pct,
                            label: format!("{} t", center.current_load_t),
                            tone: load_tone(center.current_load_t, center.capacity_t),
                        },
                        Cell::text(format!("{} t", center.daily_processed_t)),
                        Cell::chip(
                            format!("{}%", center.efficiency_pct),
                            efficiency_tone(f64::from(center.efficiency_pct)),
                        ),
                        Cell::text(&center.last_update),
                    ],
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn assert_well_formed(model: &TableModel, expected_rows: usize) {
        assert_eq!(model.rows.len(), expected_rows);
        for row in &model.rows {
            assert_eq!(row.cells.len(), model.columns.len());
            assert!(!row.key.is_empty());
        }
    }

    #[test]
    fn test_one_row_per_record_in_input_order() {
        let bins = fixtures::bins();
        let model = bins_table(&bins);

        assert_well_formed(&model, bins.len());
        let keys: Vec<String> = model.rows.iter().map(|r| r.key.clone()).collect();
        let ids: Vec<String> = bins.iter().map(|b| b.id.to_string()).collect();
        assert_eq!(keys, ids);
    }

    #[test]
    fn test_empty_input_produces_zero_rows() {
        assert!(bins_table(&[]).rows.is_empty());
        assert!(zones_table(&[]).rows.is_empty());
        assert!(alerts_table(&[]).rows.is_empty());
        assert!(collections_table(&[]).rows.is_empty());
        assert!(tri_centers_table(&[]).rows.is_empty());
    }

    #[test]
    fn test_all_projections_are_well_formed() {
        assert_well_formed(&zones_table(&fixtures::zones()), 3);
        assert_well_formed(&alerts_table(&fixtures::alerts()), 3);
        assert_well_formed(&collections_table(&fixtures::collections()), 3);
        assert_well_formed(&tri_centers_table(&fixtures::tri_centers()), 3);
    }

    #[test]
    fn test_unresolved_alert_renders_dash() {
        let alerts = fixtures::alerts();
        let model = alerts_table(&alerts);

        // Alert 1 is active, so its "Résolue le" cell is the dash.
        let resolved_col = model
            .columns
            .iter()
            .position(|c| *c == "Résolue le")
            .unwrap();
        assert_eq!(model.rows[0].cells[resolved_col], Cell::Text("-".into()));
        assert_eq!(
            model.rows[2].cells[resolved_col],
            Cell::Text("2024-03-20 08:15".into())
        );
    }

    #[test]
    fn test_status_cells_carry_snake_case_labels() {
        let collections = fixtures::collections();
        let model = collections_table(&collections);

        let status_col = model.columns.iter().position(|c| *c == "Statut").unwrap();
        match &model.rows[1].cells[status_col] {
            Cell::Chip { label, tone, icon } => {
                assert_eq!(label, "in_progress");
                assert_eq!(*tone, Tone::Info);
                assert_eq!(*icon, Some("truck"));
            }
            other => panic!("expected a chip, got {other:?}"),
        }
    }

    #[test]
    fn test_load_bar_percentage_and_tone() {
        let centers = fixtures::tri_centers();
        let model = tri_centers_table(&centers);

        let load_col = model
            .columns
            .iter()
            .position(|c| *c == "Charge actuelle")
            .unwrap();
        // Centre Est: 950 / 1200 ≈ 79.2%, below the 90% danger line.
        match &model.rows[2].cells[load_col] {
            Cell::Progress { pct, label, tone } => {
                assert!((pct - 950.0 / 1200.0 * 100.0).abs() < 1e-9);
                assert_eq!(label, "950 t");
                assert_eq!(*tone, Tone::Info);
            }
            other => panic!("expected a progress bar, got {other:?}"),
        }
    }
}
