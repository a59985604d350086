//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Built from the access guard's result and passed into service methods so
/// that every operation knows who is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            request_time: Utc::now(),
        }
    }

    /// Whether `user_id` is the caller.
    pub fn is_self(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}
