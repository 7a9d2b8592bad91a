//! Domain models for selected media.

pub mod batch;
pub mod media;

pub use batch::SelectionBatch;
pub use media::{MediaItem, MediaType, Photo, Video, VideoSource};
