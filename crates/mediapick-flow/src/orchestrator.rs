//! Flow orchestration: decide the step sequence for a picked batch and
//! reduce it to a finalized batch or a cancellation.
//!
//! Batches with more than one item go to the review gallery as a whole; a
//! single photo traverses Filter then Crop (each skippable by
//! configuration, the order is fixed because Crop operates on the filtered
//! pixels); a single video traverses Filter only. Steps run strictly
//! sequentially and the batch is moved through them, so no two steps ever
//! hold the same item at once.

use std::sync::Arc;

use mediapick_core::{
    CropMode, FlowConfig, FlowError, MediaItem, MediaType, Photo, SelectionBatch, Video,
};

use crate::steps::{
    AlbumSaver, CropStep, FilterStep, GalleryStep, ProgressIndicator, StepOutcome,
};

/// Stage of the flow, in traversal order. There are no backward transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStage {
    Start,
    Reviewing,
    Filtering,
    Cropping,
    Done,
    Cancelled,
}

/// Terminal outcome of one flow traversal.
#[derive(Debug)]
pub enum FlowOutcome {
    Finalized(SelectionBatch),
    Cancelled,
}

/// Sequences the optional steps for a selection and reduces the results.
pub struct FlowOrchestrator {
    config: FlowConfig,
    filter: Arc<dyn FilterStep>,
    crop: Arc<dyn CropStep>,
    gallery: Arc<dyn GalleryStep>,
    album: Arc<dyn AlbumSaver>,
    progress: Arc<dyn ProgressIndicator>,
}

impl FlowOrchestrator {
    pub fn new(
        config: FlowConfig,
        filter: Arc<dyn FilterStep>,
        crop: Arc<dyn CropStep>,
        gallery: Arc<dyn GalleryStep>,
        album: Arc<dyn AlbumSaver>,
        progress: Arc<dyn ProgressIndicator>,
    ) -> Self {
        Self {
            config,
            filter,
            crop,
            gallery,
            album,
            progress,
        }
    }

    /// Run the flow for a picked batch.
    pub async fn run(&self, batch: SelectionBatch) -> FlowOutcome {
        tracing::debug!(count = batch.len(), stage = ?FlowStage::Start, "flow started");

        let mut items = batch.into_inner();
        if items.len() > 1 {
            return self.review_batch(SelectionBatch::new(items)).await;
        }
        let Some(item) = items.pop() else {
            tracing::warn!("empty selection batch, treating as cancelled");
            return FlowOutcome::Cancelled;
        };

        match item {
            MediaItem::Photo(photo) => self.process_photo(photo).await,
            MediaItem::Video(video) => self.process_video(video).await,
        }
    }

    /// Multi-item branch: the gallery owns the per-item flow and hands back
    /// a finalized batch, possibly reordered or reduced.
    async fn review_batch(&self, batch: SelectionBatch) -> FlowOutcome {
        tracing::debug!(count = batch.len(), stage = ?FlowStage::Reviewing, "routing batch to review gallery");
        self.progress.set_visible(true);
        let outcome = self.gallery.review(batch).await;
        self.progress.set_visible(false);

        match outcome {
            StepOutcome::Completed(finalized) => {
                tracing::debug!(count = finalized.len(), stage = ?FlowStage::Done, "gallery finalized batch");
                FlowOutcome::Finalized(finalized)
            }
            StepOutcome::Cancelled => self.cancelled(FlowStage::Reviewing),
        }
    }

    async fn process_photo(&self, photo: Photo) -> FlowOutcome {
        let mut photo = if self.config.shows_filters {
            match self.filter_photo(photo).await {
                StepOutcome::Completed(p) => p,
                StepOutcome::Cancelled => return self.cancelled(FlowStage::Filtering),
            }
        } else {
            photo
        };

        if let CropMode::Rectangle(ratio) = self.config.crop_mode {
            tracing::debug!(item_id = %photo.id, stage = ?FlowStage::Cropping, ratio = %ratio, "running crop step");
            self.progress.set_visible(true);
            let outcome = self.crop.crop(photo.latest_image().clone(), ratio).await;
            self.progress.set_visible(false);

            match outcome {
                StepOutcome::Completed(cropped) => photo.modified_image = Some(cropped),
                StepOutcome::Cancelled => return self.cancelled(FlowStage::Cropping),
            }
        }

        self.save_to_album(&photo);

        tracing::debug!(item_id = %photo.id, stage = ?FlowStage::Done, "single-photo flow finalized");
        FlowOutcome::Finalized(SelectionBatch::new(vec![MediaItem::Photo(photo)]))
    }

    async fn process_video(&self, video: Video) -> FlowOutcome {
        let video = if self.config.shows_filters {
            match self.filter_video(video).await {
                StepOutcome::Completed(v) => v,
                StepOutcome::Cancelled => return self.cancelled(FlowStage::Filtering),
            }
        } else {
            video
        };

        tracing::debug!(item_id = %video.id, stage = ?FlowStage::Done, "single-video flow finalized");
        FlowOutcome::Finalized(SelectionBatch::new(vec![MediaItem::Video(video)]))
    }

    async fn filter_photo(&self, photo: Photo) -> StepOutcome<Photo> {
        let fallback = photo.clone();
        tracing::debug!(item_id = %photo.id, stage = ?FlowStage::Filtering, "running filter step");
        self.progress.set_visible(true);
        let outcome = self.filter.apply(MediaItem::Photo(photo), false).await;
        self.progress.set_visible(false);

        match outcome {
            StepOutcome::Completed(MediaItem::Photo(filtered)) => StepOutcome::Completed(filtered),
            StepOutcome::Completed(other) => {
                self.mismatch(MediaType::Photo, other.media_type(), fallback.id);
                StepOutcome::Completed(fallback)
            }
            StepOutcome::Cancelled => StepOutcome::Cancelled,
        }
    }

    async fn filter_video(&self, video: Video) -> StepOutcome<Video> {
        let fallback = video.clone();
        tracing::debug!(item_id = %video.id, stage = ?FlowStage::Filtering, "running filter step");
        self.progress.set_visible(true);
        let outcome = self.filter.apply(MediaItem::Video(video), false).await;
        self.progress.set_visible(false);

        match outcome {
            StepOutcome::Completed(MediaItem::Video(filtered)) => StepOutcome::Completed(filtered),
            StepOutcome::Completed(other) => {
                self.mismatch(MediaType::Video, other.media_type(), fallback.id);
                StepOutcome::Completed(fallback)
            }
            StepOutcome::Cancelled => StepOutcome::Cancelled,
        }
    }

    /// The step violated its contract; the core cannot repair that, so the
    /// original item passes through unchanged.
    fn mismatch(&self, expected: MediaType, actual: MediaType, item_id: uuid::Uuid) {
        let err = FlowError::StepTypeMismatch { expected, actual };
        tracing::warn!(item_id = %item_id, error = %err, "filter step violated its contract, passing original through");
    }

    /// Fire-and-forget album save. Unordered with respect to the completion
    /// callback; failures are logged and never surface to the host.
    fn save_to_album(&self, photo: &Photo) {
        if !self.config.should_save_new_pictures_to_album {
            return;
        }
        let Some(image) = photo.modified_image.clone() else {
            return;
        };

        let album = Arc::clone(&self.album);
        let album_name = self.config.album_name.clone();
        let item_id = photo.id;
        tokio::spawn(async move {
            if let Err(e) = album.try_save(image, &album_name).await {
                let err = FlowError::AlbumSave(e);
                tracing::warn!(item_id = %item_id, error = %err, "best-effort album save failed");
            }
        });
    }

    fn cancelled(&self, stage: FlowStage) -> FlowOutcome {
        tracing::debug!(?stage, "flow cancelled");
        FlowOutcome::Cancelled
    }
}
