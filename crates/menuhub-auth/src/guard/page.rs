//! Refresh-cookie guard for server-rendered admin pages.

use std::sync::Arc;

use tracing::{error, warn};
use uuid::Uuid;

use menuhub_database::UserRepository;

use crate::jwt::JwtDecoder;
use crate::policy::AccessPolicy;
use crate::session::TokenStore;

/// Why a page request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDenial {
    /// No usable session; send the browser to the login page.
    Login,
    /// Authenticated, but the path is not in the user's permissions.
    Forbidden,
    /// Storage failed while checking.
    Internal,
}

/// Authorizes page requests from the `refreshToken` cookie.
#[derive(Debug, Clone)]
pub struct PageGuard {
    store: TokenStore,
    decoder: Arc<JwtDecoder>,
    users: Arc<dyn UserRepository>,
    policy: Arc<dyn AccessPolicy>,
}

impl PageGuard {
    /// Creates a new page guard.
    pub fn new(
        store: TokenStore,
        decoder: Arc<JwtDecoder>,
        users: Arc<dyn UserRepository>,
        policy: Arc<dyn AccessPolicy>,
    ) -> Self {
        Self {
            store,
            decoder,
            users,
            policy,
        }
    }

    /// Returns the user id when the cookie holds a live session allowed on `path`.
    pub async fn authorize_page(
        &self,
        refresh_token: Option<&str>,
        path: &str,
    ) -> Result<Uuid, PageDenial> {
        let refresh_token = refresh_token
            .filter(|t| !t.is_empty())
            .ok_or(PageDenial::Login)?;

        let record = self
            .store
            .find_by_token(refresh_token)
            .await
            .map_err(|e| {
                error!(error = %e, "Token lookup failed during page authorization");
                PageDenial::Internal
            })?
            .ok_or(PageDenial::Login)?;

        let claims = self
            .decoder
            .decode_refresh_token(refresh_token)
            .map_err(|_| PageDenial::Login)?;
        if claims.user_id() != record.user_id {
            return Err(PageDenial::Login);
        }

        let user = self
            .users
            .find_by_id(claims.user_id())
            .await
            .map_err(|e| {
                error!(error = %e, "User lookup failed during page authorization");
                PageDenial::Internal
            })?
            .ok_or(PageDenial::Login)?;

        if !self.policy.has_access(&user, path) {
            warn!(user_id = %user.id, path, "Page access denied");
            return Err(PageDenial::Forbidden);
        }
        Ok(user.id)
    }
}
