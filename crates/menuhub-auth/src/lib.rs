//! # menuhub-auth
//!
//! Authentication and authorization for the MenuHub back office.
//!
//! ## Modules
//!
//! - `jwt`: signed access/refresh token creation and validation
//! - `password`: Argon2id password hashing and policy enforcement
//! - `credentials`: email/password verification against stored users
//! - `session`: refresh-token store and the login/refresh/logout lifecycle
//! - `guard`: bearer-token guard for APIs and cookie guard for admin pages
//! - `policy`: page access decisions

pub mod credentials;
pub mod guard;
pub mod jwt;
pub mod password;
pub mod policy;
pub mod session;

pub use credentials::CredentialVerifier;
pub use guard::{AccessGuard, PageDenial, PageGuard};
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenType};
pub use password::{PasswordHasher, PasswordValidator};
pub use policy::{AccessPolicy, PathListPolicy};
pub use session::{
    ExpiryReason, LoginGrant, RefreshOutcome, Rotation, SessionManager, TokenStore,
};
