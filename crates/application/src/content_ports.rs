use async_trait::async_trait;
use courseforge_core::AppResult;
use courseforge_domain::{Capability, ContentItem, Context, ContextId, UserId};

/// Read port over the host platform's content bank.
#[async_trait]
pub trait ContentBank: Send + Sync {
    /// Returns the content items whose name contains `search`
    /// case-insensitively, in the content bank's own emission order. An
    /// empty search string matches every item.
    async fn search_contents(&self, search: &str) -> AppResult<Vec<ContentItem>>;
}

/// Resolves context instances owned by the host platform.
#[async_trait]
pub trait ContextProvider: Send + Sync {
    /// Resolves a context by id.
    ///
    /// Unknown ids are `AppError::NotFound`; a content item referencing a
    /// missing context is a platform inconsistency the caller must see.
    async fn context_by_id(&self, id: ContextId) -> AppResult<Context>;
}

/// Capability decisions delegated to the host platform permission engine.
#[async_trait]
pub trait CapabilityChecker: Send + Sync {
    /// Reports whether `user_id` holds `capability` within `context`.
    async fn has_capability(
        &self,
        user_id: UserId,
        capability: Capability,
        context: &Context,
    ) -> AppResult<bool>;
}
