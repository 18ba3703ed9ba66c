//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for displaying the dashboard
//! - HTML view functions for rendering the dashboard UI
//! - The state used by the handler

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    AppState,
    api::{SharedExpenseApi, list_or_empty},
    dashboard::{
        aggregation::{
            CategoryTotal, SUMMARY_WINDOW_DAYS, bar_width_percent, filter_recent, most_recent,
            rank_by_total, sum_by_category,
        },
        charts::{
            DashboardChart, ECHARTS_URL, category_totals_chart, chart_view, charts_script,
        },
    },
    endpoints,
    expense::Expense,
    html::{CARD_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base, format_currency, link},
    navigation::NavBar,
};

/// The state needed for displaying the dashboard page.
#[derive(Clone)]
pub struct DashboardState {
    /// The remote expense collection.
    pub expense_api: SharedExpenseApi,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_api: state.expense_api.clone(),
        }
    }
}

/// Holds all the data needed to render the dashboard.
struct DashboardData<'a> {
    most_recent: Option<&'a Expense>,
    chart: DashboardChart,
    ranked_totals: Vec<CategoryTotal>,
}

/// Display a page with the most recent expense and a summary of the last 30 days.
///
/// If the expenses cannot be fetched, the page is shown as if there were none.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Response {
    let expenses = list_or_empty(state.expense_api.as_ref()).await;
    let data = build_dashboard_data(&expenses, OffsetDateTime::now_utc());

    dashboard_view(NavBar::new(endpoints::DASHBOARD_VIEW), &data).into_response()
}

fn build_dashboard_data(expenses: &[Expense], now: OffsetDateTime) -> DashboardData<'_> {
    let recent = filter_recent(expenses, now, SUMMARY_WINDOW_DAYS);
    let totals = sum_by_category(recent);

    DashboardData {
        most_recent: most_recent(expenses),
        chart: DashboardChart {
            id: "expenses-by-category-chart",
            options: category_totals_chart(&totals).to_string(),
        },
        ranked_totals: rank_by_total(&totals),
    }
}

fn dashboard_view(nav_bar: NavBar<'_>, data: &DashboardData<'_>) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class=(PAGE_CONTAINER_STYLE)
        {
            div class="flex flex-col gap-4 w-full max-w-screen-xl"
            {
                h1 class="text-2xl font-bold" { "Dashboard" }

                @if let Some(expense) = data.most_recent {
                    (most_recent_card(expense))
                }

                section class=(CARD_STYLE)
                {
                    (chart_view(&data.chart))
                }

                (category_totals_card(&data.ranked_totals))
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_URL.to_owned()),
        charts_script(std::slice::from_ref(&data.chart)),
    ];

    base("Dashboard", &scripts, &content)
}

fn most_recent_card(expense: &Expense) -> Markup {
    html!(
        section id="most-recent-expense" class=(CARD_STYLE)
        {
            h2 class="text-lg font-semibold mb-2" { "Most Recent Expense" }

            dl class="grid grid-cols-2 gap-1 text-sm"
            {
                dt class="text-gray-500 dark:text-gray-400" { "Category" }
                dd { (expense.category) }
                dt class="text-gray-500 dark:text-gray-400" { "Amount" }
                dd { (format_currency(expense.amount)) }
                dt class="text-gray-500 dark:text-gray-400" { "Date" }
                dd { (expense.date) }
            }
        }
    )
}

fn category_totals_card(ranked_totals: &[CategoryTotal]) -> Markup {
    let max_total = ranked_totals.first().map_or(0.0, |total| total.total);

    html!(
        section id="category-totals" class=(CARD_STYLE)
        {
            h2 class="text-lg font-semibold mb-4" { "Summed Expenses by Category" }

            @if ranked_totals.is_empty() {
                p
                {
                    "No expenses in the last 30 days. You can add one on the "
                    (link(endpoints::ADD_EXPENSE_VIEW, "Add Expense"))
                    " page."
                }
            }

            ul class="flex flex-col gap-3"
            {
                @for total in ranked_totals {
                    li data-category=(total.category)
                    {
                        div class="flex justify-between text-sm mb-1"
                        {
                            span { (total.category) }
                            span { (format_currency(total.total)) }
                        }

                        div class="w-full h-3 bg-gray-200 rounded dark:bg-gray-700"
                        {
                            div
                                class={ "h-3 rounded " (total.category.bar_class()) }
                                style=(format!("width: {:.2}%", bar_width_percent(total.total, max_total)))
                            {}
                        }
                    }
                }
            }
        }
    )
}
