//! Contracts for the interactive steps of the selection flow.
//!
//! Each step is an external collaborator (a picker screen, a crop tool, a
//! review gallery). The orchestrator only sees a single completion
//! notification per invocation: either a value or a cancellation.

use async_trait::async_trait;
use bytes::Bytes;

use mediapick_core::{AspectRatio, MediaItem, SelectionBatch};

/// Outcome of one interactive step: the user finished with a value, or
/// backed out. Cancellation short-circuits the whole flow.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome<T> {
    Completed(T),
    Cancelled,
}

/// Camera/library picker. A cancelled pick models the picker being closed
/// before any selection was made.
#[async_trait]
pub trait AcquisitionStep: Send + Sync {
    async fn pick(&self) -> StepOutcome<SelectionBatch>;
}

/// Filter tool. Must hand back the same variant it was given; the
/// orchestrator treats a mismatch as a no-op pass-through.
#[async_trait]
pub trait FilterStep: Send + Sync {
    async fn apply(&self, item: MediaItem, is_from_selection: bool) -> StepOutcome<MediaItem>;
}

/// Crop tool for photos. Never invoked for videos.
#[async_trait]
pub trait CropStep: Send + Sync {
    async fn crop(&self, image: Bytes, ratio: AspectRatio) -> StepOutcome<Bytes>;
}

/// Multi-item review gallery. May reorder or reduce the batch; the
/// orchestrator takes whatever comes back as final.
#[async_trait]
pub trait GalleryStep: Send + Sync {
    async fn review(&self, items: SelectionBatch) -> StepOutcome<SelectionBatch>;
}

/// Pass-through filter for hosts that never present a filter screen.
pub struct NoOpFilterStep;

#[async_trait]
impl FilterStep for NoOpFilterStep {
    async fn apply(&self, item: MediaItem, _is_from_selection: bool) -> StepOutcome<MediaItem> {
        StepOutcome::Completed(item)
    }
}

/// Pass-through crop for hosts that never present a crop screen.
pub struct NoOpCropStep;

#[async_trait]
impl CropStep for NoOpCropStep {
    async fn crop(&self, image: Bytes, _ratio: AspectRatio) -> StepOutcome<Bytes> {
        StepOutcome::Completed(image)
    }
}

/// Pass-through gallery that finalizes the batch as-is.
pub struct NoOpGalleryStep;

#[async_trait]
impl GalleryStep for NoOpGalleryStep {
    async fn review(&self, items: SelectionBatch) -> StepOutcome<SelectionBatch> {
        StepOutcome::Completed(items)
    }
}

/// Best-effort persistence of a processed picture into a named album.
/// Failures never block or fail the flow.
#[async_trait]
pub trait AlbumSaver: Send + Sync {
    async fn try_save(&self, image: Bytes, album_name: &str) -> anyhow::Result<()>;
}

/// No-op implementation for hosts without album persistence.
pub struct NoOpAlbumSaver;

#[async_trait]
impl AlbumSaver for NoOpAlbumSaver {
    async fn try_save(&self, _image: Bytes, _album_name: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Process-wide loading indicator, toggled only by the orchestrator at step
/// boundaries: shown while a step is in flight, hidden otherwise.
pub trait ProgressIndicator: Send + Sync {
    fn set_visible(&self, visible: bool);
}

/// No-op implementation for hosts without a loading indicator.
pub struct NoOpProgressIndicator;

impl ProgressIndicator for NoOpProgressIndicator {
    fn set_visible(&self, _visible: bool) {}
}
