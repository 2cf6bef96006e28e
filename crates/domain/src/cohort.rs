//! Cohort role assignment records owned by this plugin.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::UserId;

/// Unique identifier for a role definition in the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(Uuid);

impl RoleId {
    /// Creates a new random role identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a role identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RoleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Unique identifier for a cohort, a named group of users in the host
/// platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CohortId(Uuid);

impl CohortId {
    /// Creates a new random cohort identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a cohort identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CohortId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CohortId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Unique identifier for a cohort role assignment record.
///
/// Ordered listings sort by this identifier, so deletions walk records in a
/// stable order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CohortRoleAssignmentId(Uuid);

impl CohortRoleAssignmentId {
    /// Creates a new random assignment identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an assignment identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CohortRoleAssignmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CohortRoleAssignmentId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A record granting a role to a user within a cohort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortRoleAssignment {
    id: CohortRoleAssignmentId,
    user_id: UserId,
    role_id: RoleId,
    cohort_id: CohortId,
    created_at: DateTime<Utc>,
}

impl CohortRoleAssignment {
    /// Reconstructs an assignment record from persisted values.
    #[must_use]
    pub fn from_parts(
        id: CohortRoleAssignmentId,
        user_id: UserId,
        role_id: RoleId,
        cohort_id: CohortId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            role_id,
            cohort_id,
            created_at,
        }
    }

    /// Returns the record identity.
    #[must_use]
    pub fn id(&self) -> CohortRoleAssignmentId {
        self.id
    }

    /// Returns the user the role was assigned to.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the assigned role.
    #[must_use]
    pub fn role_id(&self) -> RoleId {
        self.role_id
    }

    /// Returns the cohort the role applies to.
    #[must_use]
    pub fn cohort_id(&self) -> CohortId {
        self.cohort_id
    }

    /// Returns the record creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_preserves_the_assignment_tuple() {
        let id = CohortRoleAssignmentId::new();
        let user_id = UserId::new();
        let role_id = RoleId::new();
        let cohort_id = CohortId::new();

        let assignment =
            CohortRoleAssignment::from_parts(id, user_id, role_id, cohort_id, Utc::now());

        assert_eq!(assignment.id(), id);
        assert_eq!(assignment.user_id(), user_id);
        assert_eq!(assignment.role_id(), role_id);
        assert_eq!(assignment.cohort_id(), cohort_id);
    }

    #[test]
    fn assignment_ids_order_consistently() {
        let mut ids = vec![
            CohortRoleAssignmentId::new(),
            CohortRoleAssignmentId::new(),
            CohortRoleAssignmentId::new(),
        ];
        ids.sort();

        let resorted = {
            let mut reversed: Vec<_> = ids.iter().rev().copied().collect();
            reversed.sort();
            reversed
        };

        assert_eq!(ids, resorted);
    }
}
