//! Mediapick Core Library
//!
//! This crate provides the domain models, configuration, and error types
//! shared by the mediapick components.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{AspectRatio, CropMode, FlowConfig};
pub use error::FlowError;
pub use models::{MediaItem, MediaType, Photo, SelectionBatch, Video, VideoSource};
