//! Implements [ExpenseApi] with JSON over HTTP.

use url::Url;

use crate::{
    Error,
    api::ExpenseApi,
    expense::{Expense, ExpenseId, NewExpense},
};

/// The expense collection URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/expenses";

/// Talks to an expense collection that serves JSON at a collection URL
/// (e.g. `http://localhost:8080/api/expenses`) and a member URL for each
/// expense (e.g. `http://localhost:8080/api/expenses/42`).
#[derive(Debug, Clone)]
pub struct HttpExpenseApi {
    client: reqwest::Client,
    collection_url: Url,
}

impl HttpExpenseApi {
    /// Create a client for the expense collection at `collection_url`.
    ///
    /// # Errors
    /// Returns [Error::InvalidApiUrl] if `collection_url` is not an absolute URL.
    pub fn new(collection_url: &str) -> Result<Self, Error> {
        let url = Url::parse(collection_url)
            .map_err(|error| Error::InvalidApiUrl(collection_url.to_owned(), error.to_string()))?;

        if url.cannot_be_a_base() {
            return Err(Error::InvalidApiUrl(
                collection_url.to_owned(),
                "the URL cannot have a path appended to it".to_owned(),
            ));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            collection_url: url,
        })
    }

    /// The URL of the expense collection.
    pub fn collection_url(&self) -> &str {
        self.collection_url.as_str()
    }

    fn member_url(&self, id: ExpenseId) -> String {
        format!("{}/{id}", self.collection_url.as_str().trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl ExpenseApi for HttpExpenseApi {
    async fn list_all(&self) -> Result<Vec<Expense>, Error> {
        let expenses: Vec<Expense> = self
            .client
            .get(self.collection_url.as_str())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!("Fetched {} expenses", expenses.len());

        Ok(expenses)
    }

    async fn get_by_id(&self, id: ExpenseId) -> Result<Expense, Error> {
        // The collection answers `null` for IDs it does not know.
        let expense: Option<Expense> = self
            .client
            .get(self.member_url(id))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        expense.ok_or_else(|| Error::RequestFailed(format!("no expense with the ID {id}")))
    }

    async fn create(&self, expense: &NewExpense) -> Result<Expense, Error> {
        let created: Expense = self
            .client
            .post(self.collection_url.as_str())
            .json(expense)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!("Created expense {}", created.id);

        Ok(created)
    }

    async fn update(&self, id: ExpenseId, expense: &NewExpense) -> Result<Expense, Error> {
        let updated: Expense = self
            .client
            .put(self.member_url(id))
            .json(expense)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!("Updated expense {id}");

        Ok(updated)
    }

    async fn delete_by_id(&self, id: ExpenseId) -> Result<(), Error> {
        self.client
            .delete(self.member_url(id))
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Deleted expense {id}");

        Ok(())
    }
}
