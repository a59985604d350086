//! Page access decisions.

use menuhub_entity::user::User;

/// Decides whether a user may open an admin page.
pub trait AccessPolicy: Send + Sync + std::fmt::Debug + 'static {
    /// Whether `user` may open `path`.
    fn has_access(&self, user: &User, path: &str) -> bool;
}

/// Grants a path only when it appears verbatim in the user's permission list.
///
/// An empty list grants the dashboard, matching what login reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathListPolicy;

impl AccessPolicy for PathListPolicy {
    fn has_access(&self, user: &User, path: &str) -> bool {
        user.is_permitted(path)
    }
}
