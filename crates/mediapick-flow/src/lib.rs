//! Mediapick Flow Library
//!
//! This crate drives the multi-step media selection flow: it sequences the
//! optional filter/crop/gallery steps for a picked batch and collapses the
//! result into exactly one host callback.

pub mod completion;
pub mod orchestrator;
pub mod picker;
pub mod steps;

// Re-export commonly used types
pub use completion::{CompletionHandlers, HandlerKind};
pub use orchestrator::{FlowOrchestrator, FlowOutcome, FlowStage};
pub use picker::MediaPicker;
pub use steps::{
    AcquisitionStep, AlbumSaver, CropStep, FilterStep, GalleryStep, NoOpAlbumSaver, NoOpCropStep,
    NoOpFilterStep, NoOpGalleryStep, NoOpProgressIndicator, ProgressIndicator, StepOutcome,
};
