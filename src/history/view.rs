//! HTML rendering for the history page.

use maud::{Markup, html};
use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    endpoints::{self, format_endpoint},
    expense::{Category, Expense},
    history::{
        query::HistoryQuery,
        state::{HistoryState, SortField},
    },
    html::{
        BUTTON_DELETE_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency,
    },
    navigation::NavBar,
};

const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[day]/[month]/[year]");

/// The ID of the element the delete endpoint replaces.
pub(super) const HISTORY_CONTENT_ID: &str = "history-content";

pub(super) fn history_view(history: &HistoryState) -> Markup {
    let nav_bar = NavBar::new(endpoints::HISTORY_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-lg"
            {
                h1 class="text-2xl font-bold mb-4" { "Expense History" }

                (history_content(history))
            }
        }
    );

    base("History", &[], &content)
}

/// The table and pager, without the surrounding page.
pub(super) fn history_content(history: &HistoryState) -> Markup {
    let query = HistoryQuery::of(history);
    let editing_id = history.editing_id();

    html!(
        section id=(HISTORY_CONTENT_ID) class="w-full"
        {
            div class="relative overflow-x-auto shadow-md sm:rounded-lg"
            {
                table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            (sort_header("Date", SortField::Date, history, &query))
                            (sort_header("Category", SortField::Category, history, &query))
                            (sort_header("Amount", SortField::Amount, history, &query))
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for expense in history.displayed() {
                            @if Some(expense.id) == editing_id {
                                (edit_row(expense, &query))
                            } @else {
                                (expense_row(expense, &query))
                            }
                        }

                        @if history.expenses().is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td colspan="4" class=(TABLE_CELL_STYLE) { "No expenses yet." }
                            }
                        }
                    }
                }
            }

            (pager(history, &query))
        }
    )
}

fn sort_header(title: &str, field: SortField, history: &HistoryState, query: &HistoryQuery) -> Markup {
    let indicator = if history.sorted_by() == Some(field) {
        // The arrow shows the direction the next click will sort in.
        Some(if history.is_ascending() { "▲" } else { "▼" })
    } else {
        None
    };

    html!(
        th scope="col" class=(TABLE_CELL_STYLE)
        {
            a
                href=(query.sorted_by(field).to_url(endpoints::HISTORY_VIEW))
                data-sort=(field.as_query_value())
                class="cursor-pointer hover:underline"
            {
                (title)
                @if let Some(indicator) = indicator {
                    " " span class="sort-indicator" { (indicator) }
                }
            }
        }
    )
}

fn expense_row(expense: &Expense, query: &HistoryQuery) -> Markup {
    let edit_url = query
        .with_edit(Some(expense.id))
        .to_url(endpoints::HISTORY_VIEW);

    html!(
        tr class=(TABLE_ROW_STYLE) data-expense-id=(expense.id)
        {
            td class=(TABLE_CELL_STYLE) { (format_display_date(expense)) }
            td class=(TABLE_CELL_STYLE) { (expense.category) }
            td class=(TABLE_CELL_STYLE) { (format_currency(expense.amount)) }
            td class={ (TABLE_CELL_STYLE) " flex gap-4" }
            {
                a href=(edit_url) class=(LINK_STYLE) { "Edit" }
                (delete_button(expense, query))
            }
        }
    )
}

fn edit_row(expense: &Expense, query: &HistoryQuery) -> Markup {
    let save_url = query
        .with_edit(None)
        .to_url(&format_endpoint(endpoints::HISTORY_EXPENSE, expense.id));

    html!(
        tr class=(TABLE_ROW_STYLE) data-expense-id=(expense.id) data-editing="true"
        {
            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="date"
                    name="date"
                    value=(expense.date)
                    aria-label="Date"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            td class=(TABLE_CELL_STYLE)
            {
                select name="category" aria-label="Category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @if !expense.category.is_listed() {
                        option value=(expense.category) selected { (expense.category) }
                    }

                    @for category in Category::ALL {
                        option
                            value=(category)
                            selected[category == expense.category]
                        {
                            (category)
                        }
                    }
                }
            }

            td class=(TABLE_CELL_STYLE)
            {
                input
                    type="number"
                    name="amount"
                    step="0.01"
                    value=(expense.amount)
                    aria-label="Amount"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            td class={ (TABLE_CELL_STYLE) " flex gap-4" }
            {
                button
                    type="button"
                    hx-put=(save_url)
                    hx-include="closest tr"
                    hx-target={ "#" (HISTORY_CONTENT_ID) }
                    hx-swap="outerHTML"
                    class=(LINK_STYLE)
                {
                    "Save"
                }

                (delete_button(expense, query))
            }
        }
    )
}

fn delete_button(expense: &Expense, query: &HistoryQuery) -> Markup {
    let delete_url = query.to_url(&format_endpoint(endpoints::HISTORY_EXPENSE, expense.id));

    html!(
        button
            type="button"
            hx-delete=(delete_url)
            hx-target={ "#" (HISTORY_CONTENT_ID) }
            hx-swap="outerHTML"
            class=(BUTTON_DELETE_STYLE)
        {
            "Delete"
        }
    )
}

fn pager(history: &HistoryState, query: &HistoryQuery) -> Markup {
    let current_page = history.current_page();

    html!(
        nav class="flex items-center justify-between mt-4 text-sm" aria-label="Pagination"
        {
            div class="flex-1"
            {
                @if history.has_previous_page() {
                    a
                        id="previous-page"
                        href=(query.with_page(current_page - 1).to_url(endpoints::HISTORY_VIEW))
                        class=(LINK_STYLE)
                    {
                        "Previous"
                    }
                }
            }

            span id="page-indicator" { "Page " (current_page) " of " (history.page_count()) }

            div class="flex-1 text-right"
            {
                @if history.has_next_page() {
                    a
                        id="next-page"
                        href=(query.with_page(current_page + 1).to_url(endpoints::HISTORY_VIEW))
                        class=(LINK_STYLE)
                    {
                        "Next"
                    }
                }
            }
        }
    )
}

fn format_display_date(expense: &Expense) -> String {
    expense
        .date
        .format(DISPLAY_DATE_FORMAT)
        .unwrap_or_else(|_| expense.date.to_string())
}
