use std::str::FromStr;

use courseforge_core::AppError;
use serde::{Deserialize, Serialize};

/// Capabilities checked against the host platform permission engine.
///
/// The decision procedure (role definitions, context hierarchy aggregation)
/// stays in the host platform; this crate only names the capabilities the
/// plugin surface cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Allows browsing content bank items in a context.
    AccessContentBank,
    /// Allows viewing a course and its contents.
    ViewCourse,
    /// Allows viewing a course category.
    ViewCourseCategory,
    /// Allows administering cohort role assignments.
    ManageCohortRoles,
}

impl Capability {
    /// Returns the stable storage string for this capability.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessContentBank => "contentbank.access",
            Self::ViewCourse => "course.view",
            Self::ViewCourseCategory => "coursecategory.view",
            Self::ManageCohortRoles => "cohortroles.manage",
        }
    }
}

impl FromStr for Capability {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "contentbank.access" => Ok(Self::AccessContentBank),
            "course.view" => Ok(Self::ViewCourse),
            "coursecategory.view" => Ok(Self::ViewCourseCategory),
            "cohortroles.manage" => Ok(Self::ManageCohortRoles),
            _ => Err(AppError::Validation(format!(
                "unknown capability '{value}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_strings_round_trip() {
        for capability in [
            Capability::AccessContentBank,
            Capability::ViewCourse,
            Capability::ViewCourseCategory,
            Capability::ManageCohortRoles,
        ] {
            let parsed = Capability::from_str(capability.as_str());
            assert!(parsed.is_ok_and(|value| value == capability));
        }
    }

    #[test]
    fn unknown_capability_is_rejected() {
        assert!(Capability::from_str("site.config").is_err());
    }
}
