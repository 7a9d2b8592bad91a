//! Error types module
//!
//! Failures the orchestrator handles locally. None of these cross the host
//! boundary as faults: a type mismatch degrades to a pass-through, an album
//! save failure is swallowed, a video fetch failure suppresses the
//! completion callback. User cancellation is a flow outcome, not an error,
//! and deliberately has no variant here.

use crate::models::MediaType;

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("step returned a {actual} for a {expected} input")]
    StepTypeMismatch {
        expected: MediaType,
        actual: MediaType,
    },

    #[error("video data fetch failed")]
    VideoFetch(#[source] anyhow::Error),

    #[error("album save failed")]
    AlbumSave(#[source] anyhow::Error),
}
