use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use courseforge_application::{CapabilityChecker, ContentBank, ContextProvider};
use courseforge_core::{AppError, AppResult};
use courseforge_domain::{
    Capability, ContentId, ContentItem, Context, ContextId, ContextLevel, StoredFile, UserId,
};

/// Header carrying the shared token issued to this plugin by the platform.
const SERVICE_TOKEN_HEADER: &str = "x-courseforge-service-token";

/// HTTP client adapter over the host platform's internal service API.
///
/// Implements the content bank, context resolution and capability check
/// ports by delegating to the platform deployment this plugin is registered
/// against.
pub struct HttpPlatformClient {
    http_client: reqwest::Client,
    base_url: Url,
    service_token: String,
}

impl HttpPlatformClient {
    /// Creates a client for the platform API at `base_url`.
    pub fn new(
        http_client: reqwest::Client,
        base_url: &str,
        service_token: impl Into<String>,
    ) -> AppResult<Self> {
        let base_url = Url::parse(base_url).map_err(|error| {
            AppError::Validation(format!("invalid platform API url '{base_url}': {error}"))
        })?;

        Ok(Self {
            http_client,
            base_url,
            service_token: service_token.into(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AppError::Validation(format!(
                    "platform API url '{}' cannot carry request paths",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get_json<T>(&self, url: Url) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http_client
            .get(url)
            .header(SERVICE_TOKEN_HEADER, self.service_token.as_str())
            .send()
            .await
            .map_err(|error| AppError::Internal(format!("platform API request failed: {error}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(
                "platform API resource not found".to_owned(),
            ));
        }
        if !response.status().is_success() {
            return Err(AppError::Internal(format!(
                "platform API returned status {}",
                response.status()
            )));
        }

        response.json::<T>().await.map_err(|error| {
            AppError::Internal(format!("failed to decode platform API response: {error}"))
        })
    }
}

#[derive(Debug, Deserialize)]
struct StoredFilePayload {
    filename: String,
    mime_type: String,
    size_bytes: u64,
    modified_at: DateTime<Utc>,
    source_url: String,
}

impl From<StoredFilePayload> for StoredFile {
    fn from(payload: StoredFilePayload) -> Self {
        Self {
            filename: payload.filename,
            mime_type: payload.mime_type,
            size_bytes: payload.size_bytes,
            modified_at: payload.modified_at,
            source_url: payload.source_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ContentEntryPayload {
    id: uuid::Uuid,
    name: String,
    context_id: uuid::Uuid,
    file: Option<StoredFilePayload>,
}

impl From<ContentEntryPayload> for ContentItem {
    fn from(payload: ContentEntryPayload) -> Self {
        Self {
            id: ContentId::from_uuid(payload.id),
            name: payload.name,
            context_id: ContextId::from_uuid(payload.context_id),
            file: payload.file.map(StoredFile::from),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ContextPayload {
    id: uuid::Uuid,
    level: String,
}

#[derive(Debug, Deserialize)]
struct CapabilityDecisionPayload {
    allowed: bool,
}

#[async_trait]
impl ContentBank for HttpPlatformClient {
    async fn search_contents(&self, search: &str) -> AppResult<Vec<ContentItem>> {
        let mut url = self.endpoint(&["api", "contentbank", "contents"])?;
        url.query_pairs_mut().append_pair("search", search);

        let payloads: Vec<ContentEntryPayload> = self.get_json(url).await?;

        Ok(payloads.into_iter().map(ContentItem::from).collect())
    }
}

#[async_trait]
impl ContextProvider for HttpPlatformClient {
    async fn context_by_id(&self, id: ContextId) -> AppResult<Context> {
        let url = self.endpoint(&["api", "contexts", &id.to_string()])?;

        let payload: ContextPayload = self.get_json(url).await.map_err(|error| match error {
            AppError::NotFound(_) => AppError::NotFound(format!("context '{id}' does not exist")),
            other => other,
        })?;

        let level = ContextLevel::from_str(payload.level.as_str())?;
        Ok(Context::new(ContextId::from_uuid(payload.id), level))
    }
}

#[async_trait]
impl CapabilityChecker for HttpPlatformClient {
    async fn has_capability(
        &self,
        user_id: UserId,
        capability: Capability,
        context: &Context,
    ) -> AppResult<bool> {
        let mut url = self.endpoint(&["api", "capabilities", "check"])?;
        url.query_pairs_mut()
            .append_pair("user_id", user_id.to_string().as_str())
            .append_pair("capability", capability.as_str())
            .append_pair("context_id", context.id().to_string().as_str());

        let payload: CapabilityDecisionPayload = self.get_json(url).await?;

        Ok(payload.allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> HttpPlatformClient {
        match HttpPlatformClient::new(reqwest::Client::new(), base_url, "token") {
            Ok(client) => client,
            Err(error) => panic!("client construction failed: {error}"),
        }
    }

    #[test]
    fn endpoint_joins_segments_onto_the_base_url() {
        let client = client("https://platform.example/hub/");

        let url = client.endpoint(&["api", "contexts", "42"]);
        assert!(
            url.is_ok_and(|value| value.as_str() == "https://platform.example/hub/api/contexts/42")
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = HttpPlatformClient::new(reqwest::Client::new(), "not a url", "token");
        assert!(result.is_err());
    }
}
