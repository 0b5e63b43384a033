//! Zones list page component.

use smartbin_types::{fixtures, table::zones_table, ZoneSummary};
use yew::prelude::*;

use crate::components::{DataTable, StatCard, Toolbar};

/// Zones page component.
#[function_component(ZonesPage)]
pub fn zones_page() -> Html {
    let zones = use_state(fixtures::zones);
    let summary = ZoneSummary::of(&zones);

    let avg = summary
        .avg_bins_per_zone
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "-".to_string());

    html! {
        <div>
            <Toolbar title="Gestion des zones" add_label="Ajouter" />

            <div class="stats-grid">
                <StatCard value={summary.total.to_string()} label="Zones totales" />
                <StatCard value={summary.active.to_string()} label="Zones actives" />
                <StatCard value={summary.total_bins.to_string()} label="Poubelles totales" />
                <StatCard value={avg} label="Moyenne par zone" />
            </div>

            <DataTable model={zones_table(&zones)} />
        </div>
    }
}
