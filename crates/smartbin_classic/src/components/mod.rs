//! Reusable UI components.

mod bin_list;
mod sensor_card;
mod stats_card;

pub use bin_list::BinList;
pub use sensor_card::SensorCard;
pub use stats_card::StatsCard;
