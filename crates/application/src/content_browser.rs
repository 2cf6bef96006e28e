//! Context-scoped visibility checks for content bank items.
//!
//! Each context level applies its own capability requirements, so the check
//! is a strategy selected by the level of the context a content item lives
//! in.

use std::sync::Arc;

use async_trait::async_trait;
use courseforge_core::AppResult;
use courseforge_domain::{Capability, Context, ContextLevel, UserId};

use crate::content_ports::CapabilityChecker;

/// Visibility check scoped to one context.
#[async_trait]
pub trait ContentBrowser: Send + Sync {
    /// The context this browser is scoped to.
    fn context(&self) -> &Context;

    /// Reports whether the acting user may view content in this context.
    async fn can_access_content(&self, actor: UserId) -> AppResult<bool>;
}

/// Visibility check for system-scoped content.
pub struct SystemContentBrowser {
    context: Context,
    capabilities: Arc<dyn CapabilityChecker>,
}

impl SystemContentBrowser {
    /// Creates a browser scoped to the system context.
    #[must_use]
    pub fn new(context: Context, capabilities: Arc<dyn CapabilityChecker>) -> Self {
        Self {
            context,
            capabilities,
        }
    }
}

#[async_trait]
impl ContentBrowser for SystemContentBrowser {
    fn context(&self) -> &Context {
        &self.context
    }

    async fn can_access_content(&self, actor: UserId) -> AppResult<bool> {
        self.capabilities
            .has_capability(actor, Capability::AccessContentBank, &self.context)
            .await
    }
}

/// Visibility check for content scoped to a course category.
pub struct CourseCategoryContentBrowser {
    context: Context,
    capabilities: Arc<dyn CapabilityChecker>,
}

impl CourseCategoryContentBrowser {
    /// Creates a browser scoped to a course category context.
    #[must_use]
    pub fn new(context: Context, capabilities: Arc<dyn CapabilityChecker>) -> Self {
        Self {
            context,
            capabilities,
        }
    }
}

#[async_trait]
impl ContentBrowser for CourseCategoryContentBrowser {
    fn context(&self) -> &Context {
        &self.context
    }

    async fn can_access_content(&self, actor: UserId) -> AppResult<bool> {
        let can_access = self
            .capabilities
            .has_capability(actor, Capability::AccessContentBank, &self.context)
            .await?;
        if !can_access {
            return Ok(false);
        }

        self.capabilities
            .has_capability(actor, Capability::ViewCourseCategory, &self.context)
            .await
    }
}

/// Visibility check for content scoped to a course.
pub struct CourseContentBrowser {
    context: Context,
    capabilities: Arc<dyn CapabilityChecker>,
}

impl CourseContentBrowser {
    /// Creates a browser scoped to a course context.
    #[must_use]
    pub fn new(context: Context, capabilities: Arc<dyn CapabilityChecker>) -> Self {
        Self {
            context,
            capabilities,
        }
    }
}

#[async_trait]
impl ContentBrowser for CourseContentBrowser {
    fn context(&self) -> &Context {
        &self.context
    }

    async fn can_access_content(&self, actor: UserId) -> AppResult<bool> {
        let can_access = self
            .capabilities
            .has_capability(actor, Capability::AccessContentBank, &self.context)
            .await?;
        if !can_access {
            return Ok(false);
        }

        self.capabilities
            .has_capability(actor, Capability::ViewCourse, &self.context)
            .await
    }
}

/// Builds the browser matching the level of `context`.
#[must_use]
pub fn content_browser_for(
    context: Context,
    capabilities: Arc<dyn CapabilityChecker>,
) -> Box<dyn ContentBrowser> {
    match context.level() {
        ContextLevel::System => Box::new(SystemContentBrowser::new(context, capabilities)),
        ContextLevel::CourseCategory => {
            Box::new(CourseCategoryContentBrowser::new(context, capabilities))
        }
        ContextLevel::Course => Box::new(CourseContentBrowser::new(context, capabilities)),
    }
}
