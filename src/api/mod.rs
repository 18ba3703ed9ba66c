//! Access to the remote expense collection.
//!
//! Views talk to the collection through the [ExpenseApi] trait. The server
//! binary uses [HttpExpenseApi] and the tests swap in an in-memory
//! collection.

mod http;
#[cfg(test)]
mod in_memory;

use std::sync::Arc;

pub use http::{DEFAULT_API_URL, HttpExpenseApi};
#[cfg(test)]
pub(crate) use in_memory::{ApiCall, InMemoryExpenseApi};

use crate::{
    Error,
    expense::{Expense, ExpenseId, NewExpense},
};

/// The operations the views need from the remote expense collection.
///
/// Every operation is a single request with no retries or caching.
#[async_trait::async_trait]
pub trait ExpenseApi: Send + Sync {
    /// Fetch every expense, in the order the collection returns them.
    async fn list_all(&self) -> Result<Vec<Expense>, Error>;

    /// Fetch one expense.
    async fn get_by_id(&self, id: ExpenseId) -> Result<Expense, Error>;

    /// Create an expense and return it with the ID the collection assigned.
    async fn create(&self, expense: &NewExpense) -> Result<Expense, Error>;

    /// Replace every field of the expense `id` and return the stored result.
    async fn update(&self, id: ExpenseId, expense: &NewExpense) -> Result<Expense, Error>;

    /// Delete the expense `id`.
    async fn delete_by_id(&self, id: ExpenseId) -> Result<(), Error>;
}

/// An [ExpenseApi] that can be shared between request handlers.
pub type SharedExpenseApi = Arc<dyn ExpenseApi>;

/// Fetch every expense, falling back to an empty list if the request fails.
///
/// Pages render with whatever data they have, so a failed fetch is logged and
/// the page shows no expenses.
pub(crate) async fn list_or_empty(expense_api: &dyn ExpenseApi) -> Vec<Expense> {
    match expense_api.list_all().await {
        Ok(expenses) => expenses,
        Err(error) => {
            tracing::error!("Could not fetch expenses: {error}");
            Vec::new()
        }
    }
}
