//! Sensor card component.

use smartbin_types::Sensor;
use yew::prelude::*;

/// Properties for SensorCard component.
#[derive(Properties, PartialEq)]
pub struct SensorCardProps {
    pub sensor: Sensor,
}

/// Sensor card component with status badge and battery indicator.
#[function_component(SensorCard)]
pub fn sensor_card(props: &SensorCardProps) -> Html {
    let sensor = &props.sensor;

    html! {
        <div class="sensor-card">
            <div class="sensor-header">
                <h3>{ &sensor.name }</h3>
                <span
                    class="sensor-status"
                    style={format!("background-color: {}", sensor.status.tone().color())}
                >
                    { sensor.status.to_string() }
                </span>
            </div>

            <div class="sensor-details">
                <p>
                    <strong>{"Type: "}</strong>
                    { &sensor.kind }
                </p>
                <p>
                    <strong>{"Dernière lecture: "}</strong>
                    { &sensor.last_reading }
                </p>
                <div class="battery-indicator">
                    <strong>{"Batterie:"}</strong>
                    <div class="battery-bar">
                        <div
                            class="battery-level"
                            style={format!("width: {}%", sensor.battery_pct)}
                        ></div>
                    </div>
                    <span>{ format!("{}%", sensor.battery_pct) }</span>
                </div>
            </div>
        </div>
    }
}
