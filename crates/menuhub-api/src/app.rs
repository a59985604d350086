//! Application builder: wires repositories, auth, and services into an Axum app.

use std::sync::Arc;

use axum::Router;

use menuhub_auth::credentials::CredentialVerifier;
use menuhub_auth::guard::{AccessGuard, PageGuard};
use menuhub_auth::jwt::{JwtDecoder, JwtEncoder};
use menuhub_auth::password::{PasswordHasher, PasswordValidator};
use menuhub_auth::policy::{AccessPolicy, PathListPolicy};
use menuhub_auth::session::{SessionManager, TokenStore};
use menuhub_core::config::AppConfig;
use menuhub_database::Repositories;
use menuhub_service::{
    AdminUserService, CategoryService, DashboardService, MenuItemService, OrderService,
};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application from configuration and repositories.
pub fn build_app(config: AppConfig, repositories: Repositories) -> Router {
    build_router(build_state(config, repositories))
}

/// Constructs every component over the given repositories.
pub fn build_state(config: AppConfig, repositories: Repositories) -> AppState {
    // ── Auth system ──────────────────────────────────────────────
    let password_hasher = PasswordHasher::new();
    let password_validator = PasswordValidator::new(&config.auth);
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let token_store = TokenStore::new(Arc::clone(&repositories.tokens));
    let policy: Arc<dyn AccessPolicy> = Arc::new(PathListPolicy);

    let verifier = CredentialVerifier::new(
        Arc::clone(&repositories.users),
        password_hasher.clone(),
    );
    let session_manager = Arc::new(SessionManager::new(
        verifier,
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        token_store.clone(),
    ));
    let access_guard = Arc::new(AccessGuard::new(Arc::clone(&jwt_decoder)));
    let page_guard = Arc::new(PageGuard::new(
        token_store.clone(),
        Arc::clone(&jwt_decoder),
        Arc::clone(&repositories.users),
        policy,
    ));

    // ── Services ─────────────────────────────────────────────────
    let user_service = Arc::new(AdminUserService::new(
        Arc::clone(&repositories.users),
        token_store,
        password_hasher,
        password_validator,
    ));
    let category_service = Arc::new(CategoryService::new(Arc::clone(&repositories.categories)));
    let menu_item_service = Arc::new(MenuItemService::new(
        Arc::clone(&repositories.menu_items),
        Arc::clone(&repositories.categories),
    ));
    let order_service = Arc::new(OrderService::new(Arc::clone(&repositories.orders)));
    let dashboard_service = Arc::new(DashboardService::new(
        Arc::clone(&repositories.orders),
        Arc::clone(&repositories.menu_items),
        Arc::clone(&repositories.users),
    ));

    AppState {
        config: Arc::new(config),
        repositories,
        session_manager,
        access_guard,
        page_guard,
        user_service,
        category_service,
        menu_item_service,
        order_service,
        dashboard_service,
    }
}
