//! Mintly is a web app for tracking day-to-day expenses.
//!
//! This library provides a web server that serves HTML pages and stores the
//! expenses in a separate expense API reached over HTTP. The pages are:
//!
//! - a dashboard with the most recent expense and the last 30 days of spending
//!   summed by category,
//! - a form for adding an expense,
//! - a history of every expense that can be sorted, paged, edited and deleted.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod add_expense;
mod api;
mod app_state;
mod dashboard;
mod endpoints;
mod error;
mod error_pages;
mod expense;
mod history;
mod html;
mod logging;
mod navigation;
mod pagination;
mod routing;

#[cfg(test)]
mod test_utils;

pub use api::{DEFAULT_API_URL, ExpenseApi, HttpExpenseApi, SharedExpenseApi};
pub use app_state::AppState;
pub use error::Error;
pub use expense::{Category, Expense, ExpenseId, NewExpense};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::PaginationConfig;
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
