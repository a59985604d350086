//! Email/password verification against the user store.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::warn;

use menuhub_core::error::AppError;
use menuhub_core::result::AppResult;
use menuhub_database::UserRepository;
use menuhub_entity::user::{User, normalize_email};

use crate::password::PasswordHasher;

/// Plaintext behind the decoy hash checked for unknown emails.
const DECOY_PASSWORD: &str = "menuhub-decoy-password";

/// Checks login credentials.
///
/// An unknown email and a wrong password produce the same error, and an
/// unknown email still pays for one hash verification.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
    decoy_hash: Arc<OnceCell<String>>,
}

impl CredentialVerifier {
    /// Creates a verifier over the given user repository.
    pub fn new(users: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self {
            users,
            hasher,
            decoy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Returns the user owning `email` if `password` matches.
    pub async fn verify(&self, email: &str, password: &str) -> AppResult<User> {
        let email = normalize_email(email);
        let Some(user) = self.users.find_by_email(&email).await? else {
            let decoy = self.decoy_hash().await?;
            let _ = self.hasher.verify(password.to_string(), decoy).await?;
            warn!(email = %email, "Login attempt for unknown email");
            return Err(AppError::invalid_credentials());
        };

        let matches = self
            .hasher
            .verify(password.to_string(), user.password_hash.clone())
            .await?;
        if !matches {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::invalid_credentials());
        }

        Ok(user)
    }

    async fn decoy_hash(&self) -> AppResult<String> {
        self.decoy_hash
            .get_or_try_init(|| self.hasher.hash(DECOY_PASSWORD.to_string()))
            .await
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menuhub_database::memory::MemoryDatabase;
    use menuhub_entity::user::{CreateUser, UserRole};

    async fn verifier_with_user(email: &str, password: &str) -> CredentialVerifier {
        let users = MemoryDatabase::new().users();
        let hasher = PasswordHasher::new();
        users
            .create(&CreateUser {
                name: "Dana".to_string(),
                email: email.to_string(),
                password_hash: hasher.hash_password(password).unwrap(),
                permissions: Vec::new(),
                role: UserRole::Admin,
                is_verified: true,
            })
            .await
            .unwrap();
        CredentialVerifier::new(Arc::new(users), hasher)
    }

    #[tokio::test]
    async fn test_valid_credentials() {
        let verifier = verifier_with_user("dana@example.com", "s3cretpass").await;
        let user = verifier
            .verify("  Dana@Example.com ", "s3cretpass")
            .await
            .unwrap();
        assert_eq!(user.email, "dana@example.com");
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
        let verifier = verifier_with_user("dana@example.com", "s3cretpass").await;

        let unknown = verifier
            .verify("nobody@example.com", "s3cretpass")
            .await
            .unwrap_err();
        let wrong = verifier
            .verify("dana@example.com", "not-it")
            .await
            .unwrap_err();

        assert_eq!(unknown.kind, wrong.kind);
        assert_eq!(unknown.message, wrong.message);
        assert_eq!(unknown.message, "Invalid email or password");
    }
}
