//! SmartBin public dashboard - Yew WASM frontend.
//!
//! The card-based dashboard: home overview with the bin list, detailed
//! statistics, and sensor status.

mod app;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
