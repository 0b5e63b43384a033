//! Collections list page component.

use smartbin_types::{fixtures, table::collections_table, CollectionSummary};
use yew::prelude::*;

use crate::components::{DataTable, StatCard, Tab, TabBar, Toolbar};

/// Collections page component.
#[function_component(CollectionsPage)]
pub fn collections_page() -> Html {
    let collections = use_state(fixtures::collections);
    let tab = use_state(|| 0usize);
    let summary = CollectionSummary::of(&collections);

    let on_select = {
        let tab = tab.clone();
        Callback::from(move |index| tab.set(index))
    };

    let tabs = vec![
        Tab::new("Toutes les collectes"),
        Tab::new("En cours"),
        Tab::new("Planifiées"),
        Tab::new("Complétées"),
    ];

    html! {
        <div>
            <Toolbar title="Gestion des collectes" add_label="Planifier" />

            <div class="stats-grid">
                <StatCard value={summary.completed.to_string()} label="Collectes complétées" />
                <StatCard value={summary.in_progress.to_string()} label="En cours" />
                <StatCard value={summary.scheduled.to_string()} label="Planifiées" />
                <StatCard value={summary.total_weight_kg.to_string()} label="Poids total (kg)" />
            </div>

            <TabBar {tabs} selected={*tab} {on_select} />

            <DataTable model={collections_table(&collections)} />
        </div>
    }
}
