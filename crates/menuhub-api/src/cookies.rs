//! The `refreshToken` cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::{Duration, OffsetDateTime};

/// Name of the cookie carrying the refresh token.
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Cookie set on login: persistent for `max_age_days`.
pub fn login_cookie(refresh_token: String, max_age_days: i64) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, refresh_token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(Duration::days(max_age_days))
        .build()
}

/// Cookie set on refresh: lives for the browser session.
pub fn session_cookie(refresh_token: String) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, refresh_token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .build()
}

/// Empty cookie that expires immediately.
pub fn cleared_cookie() -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}

/// The refresh token presented by the client, if any.
pub fn refresh_token(jar: &CookieJar) -> Option<&str> {
    jar.get(REFRESH_COOKIE).map(Cookie::value)
}
