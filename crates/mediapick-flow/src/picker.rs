//! Entry point wiring acquisition, the orchestrator, and the host
//! callbacks into one presentation.

use std::sync::Arc;

use mediapick_core::{FlowConfig, SelectionBatch};

use crate::completion::CompletionHandlers;
use crate::orchestrator::{FlowOrchestrator, FlowOutcome};
use crate::steps::{
    AcquisitionStep, AlbumSaver, CropStep, FilterStep, GalleryStep, NoOpAlbumSaver, NoOpCropStep,
    NoOpFilterStep, NoOpGalleryStep, NoOpProgressIndicator, ProgressIndicator, StepOutcome,
};

/// One configured selection flow. Collaborators and callbacks are wired
/// before presenting; each [`MediaPicker::present`] surfaces exactly one
/// completion or cancellation to the host.
pub struct MediaPicker {
    config: FlowConfig,
    filter: Arc<dyn FilterStep>,
    crop: Arc<dyn CropStep>,
    gallery: Arc<dyn GalleryStep>,
    album: Arc<dyn AlbumSaver>,
    progress: Arc<dyn ProgressIndicator>,
    handlers: CompletionHandlers,
}

impl MediaPicker {
    /// A picker with the given configuration and pass-through collaborators.
    /// Hosts inject their real step screens through the `with_*` methods.
    pub fn new(config: FlowConfig) -> Self {
        Self {
            config,
            filter: Arc::new(NoOpFilterStep),
            crop: Arc::new(NoOpCropStep),
            gallery: Arc::new(NoOpGalleryStep),
            album: Arc::new(NoOpAlbumSaver),
            progress: Arc::new(NoOpProgressIndicator),
            handlers: CompletionHandlers::new(),
        }
    }

    pub fn with_filter(mut self, step: Arc<dyn FilterStep>) -> Self {
        self.filter = step;
        self
    }

    pub fn with_crop(mut self, step: Arc<dyn CropStep>) -> Self {
        self.crop = step;
        self
    }

    pub fn with_gallery(mut self, step: Arc<dyn GalleryStep>) -> Self {
        self.gallery = step;
        self
    }

    pub fn with_album_saver(mut self, saver: Arc<dyn AlbumSaver>) -> Self {
        self.album = saver;
        self
    }

    pub fn with_progress_indicator(mut self, indicator: Arc<dyn ProgressIndicator>) -> Self {
        self.progress = indicator;
        self
    }

    pub fn on_image(mut self, handler: impl Fn(bytes::Bytes) + Send + Sync + 'static) -> Self {
        self.handlers = self.handlers.on_image(handler);
        self
    }

    pub fn on_video(
        mut self,
        handler: impl Fn(bytes::Bytes, bytes::Bytes, String) + Send + Sync + 'static,
    ) -> Self {
        self.handlers = self.handlers.on_video(handler);
        self
    }

    pub fn on_items(
        mut self,
        handler: impl Fn(SelectionBatch) + Send + Sync + 'static,
    ) -> Self {
        self.handlers = self.handlers.on_items(handler);
        self
    }

    pub fn on_cancel(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.handlers = self.handlers.on_cancel(handler);
        self
    }

    /// Present the flow: pick, orchestrate, deliver. A closed picker or a
    /// cancelled step surfaces one `on_cancel`; nothing partial is ever
    /// delivered.
    pub async fn present(&self, source: &dyn AcquisitionStep) {
        match source.pick().await {
            StepOutcome::Completed(batch) => {
                let orchestrator = FlowOrchestrator::new(
                    self.config.clone(),
                    Arc::clone(&self.filter),
                    Arc::clone(&self.crop),
                    Arc::clone(&self.gallery),
                    Arc::clone(&self.album),
                    Arc::clone(&self.progress),
                );
                match orchestrator.run(batch).await {
                    FlowOutcome::Finalized(finalized) => self.handlers.deliver(finalized).await,
                    FlowOutcome::Cancelled => self.handlers.cancelled(),
                }
            }
            StepOutcome::Cancelled => {
                tracing::debug!("picker closed without a selection");
                self.handlers.cancelled();
            }
        }
    }
}
