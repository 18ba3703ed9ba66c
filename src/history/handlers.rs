//! Route handlers for viewing, editing and deleting expenses on the history page.

use axum::{
    extract::{FromRef, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxReplaceUrl;
use serde::Deserialize;

use crate::{
    AppState, endpoints,
    api::{SharedExpenseApi, list_or_empty},
    expense::{Category, ExpenseId, parse_amount, parse_date},
    history::{
        query::HistoryQuery,
        state::ExpenseEdit,
        view::{history_content, history_view},
    },
    pagination::PaginationConfig,
};

/// The state needed for the history page and its endpoints.
#[derive(Clone)]
pub struct HistoryViewState {
    /// The remote expense collection.
    pub expense_api: SharedExpenseApi,
    /// The config that controls how many expenses appear on each page.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for HistoryViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_api: state.expense_api.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// The fields of the edit row, as entered.
#[derive(Debug, Deserialize)]
pub struct EditExpenseForm {
    #[serde(default)]
    category: String,
    #[serde(default)]
    amount: String,
    #[serde(default)]
    date: String,
}

impl EditExpenseForm {
    /// Parse every field, or `None` if any field is empty or malformed.
    fn edits(&self) -> Option<[ExpenseEdit; 3]> {
        if self.category.trim().is_empty() {
            return None;
        }

        Some([
            ExpenseEdit::Category(Category::from(self.category.trim())),
            ExpenseEdit::Amount(parse_amount(&self.amount)?),
            ExpenseEdit::Date(parse_date(&self.date)?),
        ])
    }
}

/// Display the history page in the view state given by the query string.
///
/// If the expenses cannot be fetched, the page is shown as if there were none.
pub async fn get_history_page(
    State(state): State<HistoryViewState>,
    Query(query): Query<HistoryQuery>,
) -> Response {
    let expenses = list_or_empty(state.expense_api.as_ref()).await;
    let history = query.restore(expenses, state.pagination_config.page_size);

    history_view(&history).into_response()
}

/// Save the edit row for `expense_id` and respond with the updated table and
/// pager, the expense out of edit mode.
///
/// The saved expense keeps its place in the table. The browser's URL is
/// replaced with the view state without edit mode. Invalid input or a failed
/// request leaves the page as it is.
pub async fn save_expense_endpoint(
    State(state): State<HistoryViewState>,
    Path(expense_id): Path<ExpenseId>,
    Query(query): Query<HistoryQuery>,
    Form(form): Form<EditExpenseForm>,
) -> Response {
    let Some(edits) = form.edits() else {
        tracing::warn!("Ignoring invalid edit for expense {expense_id}: {form:?}");
        return StatusCode::NO_CONTENT.into_response();
    };

    let expenses = match state.expense_api.list_all().await {
        Ok(expenses) => expenses,
        Err(error) => return error.into_noop_response(),
    };

    let mut history = query
        .with_edit(None)
        .restore(expenses, state.pagination_config.page_size);
    history.begin_edit(expense_id);
    for edit in edits {
        history.edit_field(edit);
    }

    if let Err(error) = history.save(state.expense_api.as_ref()).await {
        return error.into_noop_response();
    }

    let view_url = HistoryQuery::of(&history).to_url(endpoints::HISTORY_VIEW);

    (HxReplaceUrl(view_url), history_content(&history)).into_response()
}

/// Delete `expense_id` and respond with the updated table and pager.
///
/// A failed request leaves the page as it is.
pub async fn delete_expense_endpoint(
    State(state): State<HistoryViewState>,
    Path(expense_id): Path<ExpenseId>,
    Query(query): Query<HistoryQuery>,
) -> Response {
    let expenses = match state.expense_api.list_all().await {
        Ok(expenses) => expenses,
        Err(error) => return error.into_noop_response(),
    };

    let mut history = query.restore(expenses, state.pagination_config.page_size);

    if let Err(error) = history
        .delete(state.expense_api.as_ref(), expense_id)
        .await
    {
        return error.into_noop_response();
    }

    history_content(&history).into_response()
}
