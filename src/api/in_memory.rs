//! An in-memory expense collection for testing the views without a network.

use std::sync::Mutex;

use crate::{
    Error,
    api::ExpenseApi,
    expense::{Expense, ExpenseId, NewExpense},
};

/// A request made to an [InMemoryExpenseApi].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ApiCall {
    ListAll,
    GetById(ExpenseId),
    Create(NewExpense),
    Update(ExpenseId, NewExpense),
    DeleteById(ExpenseId),
}

#[derive(Debug, Default)]
struct Collection {
    expenses: Vec<Expense>,
    calls: Vec<ApiCall>,
}

/// Holds expenses in memory and records every request made to it.
///
/// When created with [InMemoryExpenseApi::failing], every request fails with
/// [Error::RequestFailed].
#[derive(Debug, Default)]
pub(crate) struct InMemoryExpenseApi {
    collection: Mutex<Collection>,
    fail: bool,
}

impl InMemoryExpenseApi {
    pub(crate) fn new(expenses: Vec<Expense>) -> Self {
        Self {
            collection: Mutex::new(Collection {
                expenses,
                calls: Vec::new(),
            }),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// The requests made so far, oldest first.
    pub(crate) fn calls(&self) -> Vec<ApiCall> {
        self.collection.lock().unwrap().calls.clone()
    }

    /// The expenses currently stored.
    pub(crate) fn expenses(&self) -> Vec<Expense> {
        self.collection.lock().unwrap().expenses.clone()
    }

    fn record(&self, call: ApiCall) -> Result<std::sync::MutexGuard<'_, Collection>, Error> {
        let mut collection = self.collection.lock().unwrap();
        collection.calls.push(call);

        if self.fail {
            return Err(Error::RequestFailed("connection refused".to_owned()));
        }

        Ok(collection)
    }
}

#[async_trait::async_trait]
impl ExpenseApi for InMemoryExpenseApi {
    async fn list_all(&self) -> Result<Vec<Expense>, Error> {
        let collection = self.record(ApiCall::ListAll)?;

        Ok(collection.expenses.clone())
    }

    async fn get_by_id(&self, id: ExpenseId) -> Result<Expense, Error> {
        let collection = self.record(ApiCall::GetById(id))?;

        collection
            .expenses
            .iter()
            .find(|expense| expense.id == id)
            .cloned()
            .ok_or_else(|| Error::RequestFailed(format!("no expense with the ID {id}")))
    }

    async fn create(&self, expense: &NewExpense) -> Result<Expense, Error> {
        let mut collection = self.record(ApiCall::Create(expense.clone()))?;

        let id = collection
            .expenses
            .iter()
            .map(|expense| expense.id)
            .max()
            .unwrap_or(0)
            + 1;
        let created = expense.clone().with_id(id);
        collection.expenses.push(created.clone());

        Ok(created)
    }

    async fn update(&self, id: ExpenseId, expense: &NewExpense) -> Result<Expense, Error> {
        let mut collection = self.record(ApiCall::Update(id, expense.clone()))?;

        let stored = collection
            .expenses
            .iter_mut()
            .find(|stored| stored.id == id)
            .ok_or_else(|| Error::RequestFailed("404 Not Found".to_owned()))?;
        *stored = expense.clone().with_id(id);

        Ok(stored.clone())
    }

    async fn delete_by_id(&self, id: ExpenseId) -> Result<(), Error> {
        let mut collection = self.record(ApiCall::DeleteById(id))?;

        collection.expenses.retain(|expense| expense.id != id);

        Ok(())
    }
}
