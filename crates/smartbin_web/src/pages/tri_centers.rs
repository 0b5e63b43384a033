//! Sorting centers page component.

use smartbin_types::{
    fixtures, style::efficiency_tone, table::tri_centers_table, CenterSummary,
};
use yew::prelude::*;

use crate::components::{DataTable, StatCard, Tab, TabBar, Toolbar};

/// Sorting centers page component.
#[function_component(TriCentersPage)]
pub fn tri_centers_page() -> Html {
    let centers = use_state(fixtures::tri_centers);
    let tab = use_state(|| 0usize);
    let summary = CenterSummary::of(&centers);

    let on_select = {
        let tab = tab.clone();
        Callback::from(move |index| tab.set(index))
    };

    let tabs = vec![
        Tab::new("Tous les centres"),
        Tab::new("Actifs"),
        Tab::new("En maintenance"),
    ];

    let (avg_value, avg_tone) = match summary.avg_efficiency_pct {
        Some(avg) => (format!("{avg:.1}%"), Some(efficiency_tone(avg))),
        None => ("-".to_string(), None),
    };

    html! {
        <div>
            <Toolbar title="Centres de tri" add_label="Nouveau centre" />

            <div class="stats-grid">
                <StatCard
                    value={format!("{} t", summary.total_capacity_t)}
                    label="Capacité totale"
                />
                <StatCard
                    value={format!("{} t", summary.total_load_t)}
                    label="Charge actuelle"
                />
                <StatCard
                    value={format!("{} t", summary.total_daily_processed_t)}
                    label="Traité aujourd'hui"
                />
                <StatCard value={avg_value} label="Efficacité moyenne" tone={avg_tone} />
            </div>

            <TabBar {tabs} selected={*tab} {on_select} />

            <DataTable model={tri_centers_table(&centers)} />
        </div>
    }
}
