//! Defines the route handlers for the page for adding an expense.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::{Markup, html};

use crate::{
    AppState,
    add_expense::form::{AddExpenseForm, add_expense_form},
    api::SharedExpenseApi,
    endpoints,
    html::{CARD_STYLE, FORM_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
};

/// The htmx event emitted after an expense is added.
///
/// Pages that show the form alongside expense data can listen for it with
/// `hx-trigger="expense-added from:body"` to refresh themselves.
pub const EXPENSE_ADDED_EVENT: &str = "expense-added";

/// The state needed for adding expenses.
#[derive(Clone)]
pub struct AddExpenseState {
    /// The remote expense collection.
    pub expense_api: SharedExpenseApi,
}

impl FromRef<AppState> for AddExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_api: state.expense_api.clone(),
        }
    }
}

fn add_expense_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::ADD_EXPENSE_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold mb-4" { "Add Expense" }

            div class=(CARD_STYLE)
            {
                (add_expense_form(false))
            }
        }
    };

    base("Add Expense", &[dollar_input_styles()], &content)
}

/// Renders the page for adding an expense.
pub async fn get_add_expense_page() -> Response {
    add_expense_view().into_response()
}

/// Create an expense from the submitted form.
///
/// On success, respond with a cleared form and a success notice and emit
/// [EXPENSE_ADDED_EVENT]. Invalid input or a failed request leaves the form as
/// it is.
pub async fn create_expense_endpoint(
    State(state): State<AddExpenseState>,
    Form(form): Form<AddExpenseForm>,
) -> Response {
    let Some(new_expense) = form.validate() else {
        tracing::debug!("Ignoring incomplete add expense form: {form:?}");
        return StatusCode::NO_CONTENT.into_response();
    };

    match state.expense_api.create(&new_expense).await {
        Ok(expense) => {
            tracing::info!("Added expense {}", expense.id);

            (
                [("HX-Trigger", EXPENSE_ADDED_EVENT)],
                add_expense_form(true),
            )
                .into_response()
        }
        Err(error) => error.into_noop_response(),
    }
}
