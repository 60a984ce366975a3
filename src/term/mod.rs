//! Terminal output module

pub mod view;

pub use view::SupplyView;
