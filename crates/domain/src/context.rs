//! Hierarchical permission-check scopes mirrored from the host platform.

use std::str::FromStr;

use courseforge_core::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hierarchy levels a context can live at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextLevel {
    /// The site-wide root scope.
    System,
    /// A category grouping courses.
    CourseCategory,
    /// A single course.
    Course,
}

impl ContextLevel {
    /// Returns the stable storage string for this level.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::CourseCategory => "coursecategory",
            Self::Course => "course",
        }
    }
}

impl FromStr for ContextLevel {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "system" => Ok(Self::System),
            "coursecategory" => Ok(Self::CourseCategory),
            "course" => Ok(Self::Course),
            _ => Err(AppError::Validation(format!(
                "unknown context level '{value}'"
            ))),
        }
    }
}

/// Identifier of a context instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextId(Uuid);

impl ContextId {
    /// Creates a new random context identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a context identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the identifier of the singleton system context.
    ///
    /// The system context is the one instance every deployment shares; it is
    /// pinned to the nil UUID.
    #[must_use]
    pub fn system() -> Self {
        Self(Uuid::nil())
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ContextId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContextId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A permission-check scope within the platform hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    id: ContextId,
    level: ContextLevel,
}

impl Context {
    /// Creates a context from its identifier and hierarchy level.
    #[must_use]
    pub fn new(id: ContextId, level: ContextLevel) -> Self {
        Self { id, level }
    }

    /// Returns the singleton system context.
    #[must_use]
    pub fn system() -> Self {
        Self {
            id: ContextId::system(),
            level: ContextLevel::System,
        }
    }

    /// Returns the context identifier.
    #[must_use]
    pub fn id(&self) -> ContextId {
        self.id
    }

    /// Returns the hierarchy level of this context.
    #[must_use]
    pub fn level(&self) -> ContextLevel {
        self.level
    }
}
