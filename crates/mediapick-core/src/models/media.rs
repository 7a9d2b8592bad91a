use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Media type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Photo => write!(f, "photo"),
            MediaType::Video => write!(f, "video"),
        }
    }
}

/// A captured photo and its derived artifacts.
///
/// `modified_image` holds the latest processed version once a filter or crop
/// step has written it; consumers must go through [`Photo::latest_image`]
/// rather than reading `image` directly after processing.
#[derive(Debug, Clone)]
pub struct Photo {
    pub id: Uuid,
    pub image: Bytes,
    pub modified_image: Option<Bytes>,
    pub captured_at: DateTime<Utc>,
}

impl Photo {
    pub fn new(image: Bytes) -> Self {
        Self {
            id: Uuid::new_v4(),
            image,
            modified_image: None,
            captured_at: Utc::now(),
        }
    }

    /// The most recently processed image, falling back to the original.
    pub fn latest_image(&self) -> &Bytes {
        self.modified_image.as_ref().unwrap_or(&self.image)
    }
}

/// Lazy accessor for a video's encoded byte payload.
///
/// Invoked at most once per completion event, and only when the host
/// actually needs the payload.
#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn fetch_data(&self) -> anyhow::Result<Bytes>;
}

/// A captured video: thumbnail and location are materialized eagerly, the
/// encoded payload is fetched on demand through the [`VideoSource`].
#[derive(Clone)]
pub struct Video {
    pub id: Uuid,
    pub thumbnail: Bytes,
    pub url: String,
    pub captured_at: DateTime<Utc>,
    source: Arc<dyn VideoSource>,
}

impl Video {
    pub fn new(thumbnail: Bytes, url: impl Into<String>, source: Arc<dyn VideoSource>) -> Self {
        Self {
            id: Uuid::new_v4(),
            thumbnail,
            url: url.into(),
            captured_at: Utc::now(),
            source,
        }
    }

    pub async fn fetch_data(&self) -> anyhow::Result<Bytes> {
        self.source.fetch_data().await
    }
}

impl fmt::Debug for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Video")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("thumbnail_len", &self.thumbnail.len())
            .field("captured_at", &self.captured_at)
            .finish_non_exhaustive()
    }
}

/// Polymorphic media item (Photo or Video), matched exhaustively at every
/// consumption point.
#[derive(Debug, Clone)]
pub enum MediaItem {
    Photo(Photo),
    Video(Video),
}

impl MediaItem {
    pub fn id(&self) -> Uuid {
        match self {
            MediaItem::Photo(p) => p.id,
            MediaItem::Video(v) => v.id,
        }
    }

    pub fn media_type(&self) -> MediaType {
        match self {
            MediaItem::Photo(_) => MediaType::Photo,
            MediaItem::Video(_) => MediaType::Video,
        }
    }
}
