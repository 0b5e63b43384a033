//! Home page component.

use yew::prelude::*;

use crate::components::StatCard;

/// Home page component: headline figures and the recent activity feed.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div>
            <h1>{"Tableau de bord"}</h1>

            <div class="stats-grid">
                <StatCard value="24" label="Poubelles actives" />
                <StatCard value="8" label="Zones couvertes" />
                <StatCard value="3" label="Alertes en cours" />
                <StatCard value="12" label="Collectes aujourd'hui" />
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Activité récente"}</h2>
                </div>
                <p class="text-secondary">{"Aucune activité récente à afficher"}</p>
            </div>
        </div>
    }
}
