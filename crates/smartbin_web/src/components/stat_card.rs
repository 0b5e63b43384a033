//! Statistics tile component.

use smartbin_types::Tone;
use yew::prelude::*;

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: String,
    pub label: String,
    /// Colors the value, e.g. the active-alerts count in danger red.
    #[prop_or_default]
    pub tone: Option<Tone>,
}

/// Statistics tile component.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let value_class = match props.tone {
        Some(tone) => classes!("stat-value", tone.css_class()),
        None => classes!("stat-value"),
    };

    html! {
        <div class="card stat-card">
            <div class="stat-label">{ &props.label }</div>
            <div class={value_class}>{ &props.value }</div>
        </div>
    }
}
