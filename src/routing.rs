//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    add_expense::{create_expense_endpoint, get_add_expense_page},
    dashboard::get_dashboard_page,
    endpoints,
    error_pages::{get_404_not_found, get_internal_server_error_page},
    history::{delete_expense_endpoint, get_history_page, save_expense_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(
            endpoints::ADD_EXPENSE_VIEW,
            get(get_add_expense_page).post(create_expense_endpoint),
        )
        .route(endpoints::HISTORY_VIEW, get(get_history_page))
        .route(
            endpoints::HISTORY_EXPENSE,
            put(save_expense_endpoint).delete(delete_expense_endpoint),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
