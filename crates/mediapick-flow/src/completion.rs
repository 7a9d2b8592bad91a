//! Completion adapter: collapse a finalized batch into exactly one host
//! callback.
//!
//! Three optional handler slots are kept so single-item consumers keep
//! working when multi-select is enabled later: a matching single-item
//! handler takes precedence for a batch of one, everything else falls back
//! to the multi-item handler. Routing is a pure function of the batch shape
//! and the registered slots.

use bytes::Bytes;

use mediapick_core::{FlowError, MediaItem, SelectionBatch};

type ImageHandler = Box<dyn Fn(Bytes) + Send + Sync>;
type VideoHandler = Box<dyn Fn(Bytes, Bytes, String) + Send + Sync>;
type ItemsHandler = Box<dyn Fn(SelectionBatch) + Send + Sync>;
type CancelHandler = Box<dyn Fn() + Send + Sync>;

/// Which handler category a completion routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    SingleImage,
    SingleVideo,
    MultiItem,
    Dropped,
}

/// Optional host callbacks, registered before the flow is presented.
#[derive(Default)]
pub struct CompletionHandlers {
    on_image: Option<ImageHandler>,
    on_video: Option<VideoHandler>,
    on_items: Option<ItemsHandler>,
    on_cancel: Option<CancelHandler>,
}

impl CompletionHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_image(mut self, handler: impl Fn(Bytes) + Send + Sync + 'static) -> Self {
        self.on_image = Some(Box::new(handler));
        self
    }

    pub fn on_video(
        mut self,
        handler: impl Fn(Bytes, Bytes, String) + Send + Sync + 'static,
    ) -> Self {
        self.on_video = Some(Box::new(handler));
        self
    }

    pub fn on_items(mut self, handler: impl Fn(SelectionBatch) + Send + Sync + 'static) -> Self {
        self.on_items = Some(Box::new(handler));
        self
    }

    pub fn on_cancel(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_cancel = Some(Box::new(handler));
        self
    }

    /// Decide the handler category for a finalized batch. Pure: depends only
    /// on the batch size, the single item's variant, and which slots are
    /// registered.
    pub fn route(&self, batch: &SelectionBatch) -> HandlerKind {
        if batch.len() == 1 {
            match batch.get(0) {
                Some(MediaItem::Photo(_)) if self.on_image.is_some() => {
                    return HandlerKind::SingleImage
                }
                Some(MediaItem::Video(_)) if self.on_video.is_some() => {
                    return HandlerKind::SingleVideo
                }
                _ => {}
            }
        }
        if self.on_items.is_some() {
            HandlerKind::MultiItem
        } else {
            HandlerKind::Dropped
        }
    }

    /// Invoke exactly one handler for the finalized batch, or none if the
    /// consumer registered nothing that matches.
    pub async fn deliver(&self, batch: SelectionBatch) {
        match self.route(&batch) {
            HandlerKind::SingleImage => {
                if let (Some(handler), Some(MediaItem::Photo(photo))) =
                    (&self.on_image, batch.get(0))
                {
                    handler(photo.latest_image().clone());
                }
            }
            HandlerKind::SingleVideo => {
                if let (Some(handler), Some(MediaItem::Video(video))) =
                    (&self.on_video, batch.get(0))
                {
                    // The payload is fetched here, once, and only because a
                    // video handler is actually registered.
                    match video.fetch_data().await {
                        Ok(data) => handler(data, video.thumbnail.clone(), video.url.clone()),
                        Err(e) => {
                            let err = FlowError::VideoFetch(e);
                            tracing::error!(item_id = %video.id, error = %err, "dropping completion, video payload unavailable");
                        }
                    }
                }
            }
            HandlerKind::MultiItem => {
                if let Some(handler) = &self.on_items {
                    handler(batch);
                }
            }
            HandlerKind::Dropped => {
                tracing::debug!(
                    count = batch.len(),
                    "no completion handler registered, dropping selection"
                );
            }
        }
    }

    /// Surface a cancellation to the host, if it cares.
    pub fn cancelled(&self) {
        if let Some(handler) = &self.on_cancel {
            handler();
        }
    }
}
