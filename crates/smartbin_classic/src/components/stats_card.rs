//! Statistics card component.

use yew::prelude::*;

/// Properties for StatsCard component.
#[derive(Properties, PartialEq)]
pub struct StatsCardProps {
    pub title: String,
    pub value: u32,
    pub unit: String,
    /// Icon class, e.g. "fas fa-trash".
    pub icon: String,
}

/// Statistics card component.
#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    html! {
        <div class="stats-card">
            <div class="stats-card-icon">
                <i class={props.icon.clone()}></i>
            </div>
            <div class="stats-card-content">
                <h3 class="stats-card-title">{ &props.title }</h3>
                <p class="stats-card-value">
                    { props.value }
                    {" "}
                    <span class="stats-card-unit">{ &props.unit }</span>
                </p>
            </div>
        </div>
    }
}
