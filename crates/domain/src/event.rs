use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::UserId;

/// Platform event emitted after a user account has been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDeleted {
    /// Identifier of the deleted user.
    pub user_id: UserId,
    /// When the deletion happened.
    pub occurred_at: DateTime<Utc>,
}

impl UserDeleted {
    /// Creates an event for a user deleted right now.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            occurred_at: Utc::now(),
        }
    }
}
