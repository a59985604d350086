//! Cookie-based permission guard for the admin page shells.

use axum::extract::{OriginalUri, Request, State};
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use menuhub_auth::guard::PageDenial;

use crate::cookies;
use crate::state::AppState;

/// Where unauthenticated page requests are sent.
pub const LOGIN_PAGE: &str = "/admin/login";

/// Body of the 403 page response.
pub const FORBIDDEN_PAGE_MESSAGE: &str = "You do not have permission to access this page.";

/// Body of the 500 page response.
pub const SERVER_ERROR_MESSAGE: &str = "Server error.";

/// Lets the request through only when the refresh cookie belongs to a user
/// whose permission list contains the requested path.
pub async fn require_page_permission(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request
        .extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.path().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    match state
        .page_guard
        .authorize_page(cookies::refresh_token(&jar), &path)
        .await
    {
        Ok(_) => next.run(request).await,
        Err(denial) => denial_response(denial),
    }
}

fn denial_response(denial: PageDenial) -> Response {
    match denial {
        PageDenial::Login => (StatusCode::FOUND, [(LOCATION, LOGIN_PAGE)]).into_response(),
        PageDenial::Forbidden => (StatusCode::FORBIDDEN, FORBIDDEN_PAGE_MESSAGE).into_response(),
        PageDenial::Internal => {
            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
        }
    }
}
