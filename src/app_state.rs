//! Implements a struct that holds the state of the web server.

use std::sync::Arc;

use crate::{
    api::{ExpenseApi, SharedExpenseApi},
    pagination::PaginationConfig,
};

/// The state of the web server.
#[derive(Clone)]
pub struct AppState {
    /// The remote expense collection every view reads from and writes to.
    pub expense_api: SharedExpenseApi,

    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl AppState {
    /// Create a new [AppState] that talks to `expense_api`.
    pub fn new(expense_api: impl ExpenseApi + 'static, pagination_config: PaginationConfig) -> Self {
        Self {
            expense_api: Arc::new(expense_api),
            pagination_config,
        }
    }
}
