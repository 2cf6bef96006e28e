//! Content bank items and their display projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ContextId;

/// Unique identifier for a content bank item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(Uuid);

impl ContentId {
    /// Creates a new random content identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a content identifier from an existing UUID value.
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

impl Default for ContentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A file stored behind a content bank item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    /// File name shown to users.
    pub filename: String,
    /// MIME type reported by the storage subsystem.
    pub mime_type: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Last modification timestamp.
    pub modified_at: DateTime<Utc>,
    /// URL the file can be fetched from.
    pub source_url: String,
}

/// A content bank item scoped to a context.
///
/// Items are owned by the host platform content bank; an item without a
/// stored file (for example one still being uploaded) is never rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Item identity within the content bank.
    pub id: ContentId,
    /// Item name, matched against search strings.
    pub name: String,
    /// Context the item is scoped to.
    pub context_id: ContextId,
    /// The stored file behind the item, if any.
    pub file: Option<StoredFile>,
}

/// Display node for a stored content file.
///
/// Ephemeral projection built fresh per search call; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFileNode {
    /// Node title shown in the repository browser.
    pub title: String,
    /// URL the file can be fetched from.
    pub source_url: String,
    /// MIME type of the underlying file.
    pub mime_type: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Last modification timestamp of the underlying file.
    pub modified_at: DateTime<Utc>,
}

impl ContentFileNode {
    /// Builds the display node for a stored file.
    #[must_use]
    pub fn for_file(file: &StoredFile) -> Self {
        Self {
            title: file.filename.clone(),
            source_url: file.source_url.clone(),
            mime_type: file.mime_type.clone(),
            size_bytes: file.size_bytes,
            modified_at: file.modified_at,
        }
    }
}
