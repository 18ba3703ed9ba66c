//! The history page: every expense in a sortable, paged table with inline
//! editing and deletion.

mod handlers;
mod query;
mod state;
mod view;

pub use handlers::{delete_expense_endpoint, get_history_page, save_expense_endpoint};
