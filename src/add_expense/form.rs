//! The add expense form: its fields, validation and markup.

use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    endpoints,
    expense::{Category, NewExpense, parse_amount, parse_date},
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner},
};

/// How long the success notice stays on screen, in milliseconds.
const SUCCESS_NOTICE_DURATION_MS: u32 = 3000;

pub(super) const ADD_EXPENSE_FORM_ID: &str = "add-expense-form";

/// The add expense form, as entered.
#[derive(Debug, Default, Deserialize)]
pub struct AddExpenseForm {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub date: String,
}

impl AddExpenseForm {
    /// The expense to create, or `None` if any field is empty or malformed.
    pub(super) fn validate(&self) -> Option<NewExpense> {
        let category = self.category.trim();

        if category.is_empty() {
            return None;
        }

        Some(NewExpense {
            category: Category::from(category),
            amount: parse_amount(&self.amount)?,
            date: parse_date(&self.date)?,
        })
    }
}

/// Render an empty add expense form.
///
/// The form replaces itself with the response to its submission. Set
/// `show_success_notice` to include the notice shown after an expense is added.
pub(super) fn add_expense_form(show_success_notice: bool) -> Markup {
    let spinner = loading_spinner();

    html! {
        form
            id=(ADD_EXPENSE_FORM_ID)
            hx-post=(endpoints::ADD_EXPENSE_VIEW)
            hx-swap="outerHTML"
            class="w-full space-y-4 md:space-y-6"
        {
            h2 class="text-xl font-bold" { "Add a New Expense" }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category"
                }

                select
                    name="category"
                    id="category"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected { "Select a Category" }

                    @for category in Category::ALL {
                        option value=(category) { (category) }
                    }
                }
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        placeholder="0.00"
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date"
                }

                input
                    name="date"
                    id="date"
                    type="date"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span
                    id="indicator"
                    class="inline htmx-indicator"
                {
                    (spinner)
                }
                " Add Expense"
            }

            @if show_success_notice {
                div
                    id="add-expense-success"
                    role="status"
                    data-dismiss-after=(SUCCESS_NOTICE_DURATION_MS)
                    class="p-4 text-sm text-green-800 rounded-lg bg-green-50
                        dark:bg-gray-800 dark:text-green-400"
                {
                    "Expense added successfully!"
                }
            }
        }
    }
}
