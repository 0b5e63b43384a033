//! Detailed statistics page component.

use yew::prelude::*;

use crate::components::StatsCard;

/// Detailed statistics page component.
#[function_component(StatsPage)]
pub fn stats_page() -> Html {
    html! {
        <div class="stats-page">
            <h1 class="stats-title">{"Statistiques Détaillées"}</h1>

            <div class="stats-overview">
                <StatsCard
                    title="Total des Poubelles"
                    value={25}
                    unit="unités"
                    icon="fas fa-trash"
                />
                <StatsCard
                    title="Remplissage Moyen"
                    value={68}
                    unit="%"
                    icon="fas fa-chart-pie"
                />
                <StatsCard
                    title="Collectes Hebdo"
                    value={42}
                    unit="fois"
                    icon="fas fa-truck"
                />
                <StatsCard
                    title="Économies CO2"
                    value={1250}
                    unit="kg"
                    icon="fas fa-leaf"
                />
            </div>

            <div class="stats-details">
                <div class="stats-chart">
                    <h2>{"Évolution du Remplissage"}</h2>
                    <div class="chart-placeholder">
                        <p>{"Graphique d'évolution du remplissage"}</p>
                    </div>
                </div>

                <div class="stats-chart">
                    <h2>{"Répartition par Zone"}</h2>
                    <div class="chart-placeholder">
                        <p>{"Graphique de répartition par zone"}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
