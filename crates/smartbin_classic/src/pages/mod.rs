//! Page components.

mod home;
mod sensors;
mod stats;

pub use home::HomePage;
pub use sensors::SensorsPage;
pub use stats::StatsPage;
