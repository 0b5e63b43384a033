//! Alerts list page component.

use smartbin_types::{fixtures, table::alerts_table, AlertSummary, Tone};
use yew::prelude::*;

use crate::components::{DataTable, StatCard, Tab, TabBar, Toolbar};

/// Alerts page component.
#[function_component(AlertsPage)]
pub fn alerts_page() -> Html {
    let alerts = use_state(fixtures::alerts);
    let tab = use_state(|| 0usize);
    let summary = AlertSummary::of(&alerts);

    let on_select = {
        let tab = tab.clone();
        Callback::from(move |index| tab.set(index))
    };

    let tabs = vec![
        Tab::with_badge("Actives", summary.active, Tone::Danger),
        Tab::with_badge("En attente", summary.pending, Tone::Warning),
        Tab::new("Résolues"),
        Tab::new("Toutes"),
    ];

    html! {
        <div>
            <Toolbar title="Gestion des alertes" add_label="Nouvelle alerte" />

            <div class="stats-grid">
                <StatCard
                    value={summary.active.to_string()}
                    label="Alertes actives"
                    tone={Tone::Danger}
                />
                <StatCard
                    value={summary.pending.to_string()}
                    label="En attente"
                    tone={Tone::Warning}
                />
                <StatCard
                    value={summary.resolved.to_string()}
                    label="Résolues"
                    tone={Tone::Success}
                />
                <StatCard
                    value={summary.high_priority.to_string()}
                    label="Priorité haute"
                    tone={Tone::Danger}
                />
            </div>

            <TabBar {tabs} selected={*tab} {on_select} />

            <DataTable model={alerts_table(&alerts)} />
        </div>
    }
}
