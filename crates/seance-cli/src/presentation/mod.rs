pub mod formatters;
pub mod views;

pub use views::SessionTableView;
