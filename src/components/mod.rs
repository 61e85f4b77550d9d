pub mod design_system;
pub mod filter_panel;
pub mod layout;
pub mod result_list;

pub use filter_panel::FilterPanel;
pub use result_list::{ResultCard, ResultList};
