//! SmartBin management dashboard - Yew WASM frontend.
//!
//! Tables, chips and stat tiles over the shared fixtures: bins, zones,
//! collections, alerts and sorting centers.

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
