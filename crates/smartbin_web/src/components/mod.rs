//! Reusable UI components.

mod data_table;
mod stat_card;
mod tab_bar;
mod toolbar;

pub use data_table::DataTable;
pub use stat_card::StatCard;
pub use tab_bar::{Tab, TabBar};
pub use toolbar::Toolbar;
