//! Sensors page component.

use smartbin_types::fixtures;
use yew::prelude::*;

use crate::components::SensorCard;

/// Sensors page component: one card per sensor.
#[function_component(SensorsPage)]
pub fn sensors_page() -> Html {
    let sensors = use_state(fixtures::sensors);

    html! {
        <div class="sensors-page">
            <h1 class="sensors-title">{"État des Capteurs"}</h1>

            <div class="sensors-grid">
                { for sensors.iter().map(|sensor| {
                    html! {
                        <SensorCard key={sensor.id.to_string()} sensor={sensor.clone()} />
                    }
                })}
            </div>
        </div>
    }
}
