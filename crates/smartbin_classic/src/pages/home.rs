//! Home page component.

use smartbin_types::fixtures;
use yew::prelude::*;

use crate::components::{BinList, StatsCard};

/// Home page component: headline stats and the bin card list.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let bins = use_state(fixtures::bins);

    html! {
        <div class="home-page">
            <div class="stats-section">
                <StatsCard
                    title="Poubelles Actives"
                    value={15}
                    unit="unités"
                    icon="fas fa-trash"
                />
                <StatsCard
                    title="Niveau Moyen"
                    value={65}
                    unit="%"
                    icon="fas fa-chart-line"
                />
                <StatsCard
                    title="Alertes"
                    value={3}
                    unit="unités"
                    icon="fas fa-exclamation-triangle"
                />
            </div>
            <BinList bins={(*bins).clone()} />
        </div>
    }
}
