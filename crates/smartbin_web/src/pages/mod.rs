//! Page components.

mod alerts;
mod bins;
mod collections;
mod home;
mod tri_centers;
mod zones;

pub use alerts::AlertsPage;
pub use bins::BinsPage;
pub use collections::CollectionsPage;
pub use home::HomePage;
pub use tri_centers::TriCentersPage;
pub use zones::ZonesPage;
