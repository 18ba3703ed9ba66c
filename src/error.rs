//! Defines the app level error type and conversions to rendered HTML pages and
//! no-op htmx responses.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error_pages::ErrorPage;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A request to the expense API could not be sent, returned an error
    /// status, or returned a body that could not be parsed.
    ///
    /// The string holds the underlying error message and should only be
    /// logged on the server.
    #[error("the request to the expense API failed: {0}")]
    RequestFailed(String),

    /// The configured expense API URL could not be parsed.
    ///
    /// Callers should pass in the URL and then the original error as a string.
    #[error("invalid expense API URL \"{0}\": {1}")]
    InvalidApiUrl(String, String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::RequestFailed(value.to_string())
    }
}

impl Error {
    /// Log the error and respond with `204 No Content` so htmx leaves the page
    /// untouched.
    ///
    /// User actions that fail are not reported in the page. The page keeps
    /// whatever it showed before the action.
    pub fn into_noop_response(self) -> Response {
        tracing::error!("{self}");

        StatusCode::NO_CONTENT.into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => ErrorPage::NOT_FOUND.into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                ErrorPage::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
