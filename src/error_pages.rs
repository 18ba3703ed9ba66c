//! Full-page responses for requests that cannot be served.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{endpoints, html::base};

/// A page that explains what went wrong and links back to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub title: &'static str,
    pub description: &'static str,
    pub fix: &'static str,
}

impl ErrorPage {
    /// Shown for routes that do not exist.
    pub const NOT_FOUND: ErrorPage = ErrorPage {
        status: StatusCode::NOT_FOUND,
        title: "Not Found",
        description: "Page not found.",
        fix: "Check the URL or head back to the dashboard.",
    };

    /// Shown when a page could not be built, e.g. the expense API is down.
    pub const INTERNAL_SERVER_ERROR: ErrorPage = ErrorPage {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        title: "Internal Server Error",
        description: "Sorry, something went wrong.",
        fix: "Check that the expense API is running, then try again.",
    };

    fn view(&self) -> Markup {
        // Layout adapted from https://flowbite.com/blocks/marketing/404/
        let content = html! {
            section class="bg-white dark:bg-gray-900"
            {
                div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
                {
                    div class="mx-auto max-w-screen-sm text-center"
                    {
                        h1
                            class="mb-4 text-7xl tracking-tight font-extrabold
                                lg:text-9xl text-blue-600 dark:text-blue-500"
                        {
                            (self.status.as_u16())
                        }

                        p
                            class="mb-4 text-3xl md:text-4xl tracking-tight
                                font-bold text-gray-900 dark:text-white"
                        {
                            (self.description)
                        }

                        p class="mb-4 text-xl md:text-2xl text-gray-900 dark:text-white"
                        {
                            (self.fix)
                        }

                        a
                            href=(endpoints::DASHBOARD_VIEW)
                            class="inline-flex text-white bg-blue-600
                                hover:bg-blue-800 font-medium rounded text-sm px-5
                                py-2.5 text-center my-4"
                        {
                            "Back to Dashboard"
                        }
                    }
                }
            }
        };

        base(self.title, &[], &content)
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        (self.status, Html(self.view().into_string())).into_response()
    }
}

pub async fn get_404_not_found() -> Response {
    ErrorPage::NOT_FOUND.into_response()
}

pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::INTERNAL_SERVER_ERROR.into_response()
}
