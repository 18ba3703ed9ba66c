//! Dashboard module
//!
//! Provides an overview page with the most recent expense and the last 30
//! days of spending summed by category.

mod aggregation;
mod charts;
mod handlers;

pub use handlers::get_dashboard_page;
