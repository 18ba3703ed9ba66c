//! The page and endpoint for adding an expense.

mod form;
mod page;

pub use page::{create_expense_endpoint, get_add_expense_page};
