use std::sync::Arc;

use courseforge_core::AppResult;
use courseforge_domain::{ContentFileNode, UserId};

use crate::content_browser::content_browser_for;
use crate::content_ports::{CapabilityChecker, ContentBank, ContextProvider};


/// Search over the content bank filtered by per-user visibility.
#[derive(Clone)]
pub struct ContentSearchService {
    content_bank: Arc<dyn ContentBank>,
    contexts: Arc<dyn ContextProvider>,
    capabilities: Arc<dyn CapabilityChecker>,
}

impl ContentSearchService {
    /// Creates the service from the host platform ports.
    #[must_use]
    pub fn new(
        content_bank: Arc<dyn ContentBank>,
        contexts: Arc<dyn ContextProvider>,
        capabilities: Arc<dyn CapabilityChecker>,
    ) -> Self {
        Self {
            content_bank,
            contexts,
            capabilities,
        }
    }

    /// Returns display nodes for the content files matching `search` that
    /// the acting user may view.
    ///
    /// Results keep the order the content bank emitted them in; items the
    /// actor may not view and items without a stored file are skipped.
    pub async fn search_contents(
        &self,
        actor: UserId,
        search: &str,
    ) -> AppResult<Vec<ContentFileNode>> {
        let contents = self.content_bank.search_contents(search).await?;

        let mut nodes = Vec::new();
        for content in contents {
            let context = self.contexts.context_by_id(content.context_id).await?;
            let browser = content_browser_for(context, Arc::clone(&self.capabilities));

            if !browser.can_access_content(actor).await? {
                continue;
            }

            if let Some(file) = content.file {
                nodes.push(ContentFileNode::for_file(&file));
            }
        }

        Ok(nodes)
    }
}
