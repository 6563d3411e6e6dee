//! Rendering job status.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a rendering job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum RenderState {
    /// Queued, not yet started
    #[display("pending")]
    Pending,
    /// Rendering in progress
    #[display("processing")]
    Processing,
    /// Finished successfully
    #[display("completed")]
    Completed,
    /// Finished with an error
    #[display("failed")]
    Failed,
}

impl RenderState {
    /// Whether polling should stop at this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RenderState::Completed | RenderState::Failed)
    }
}

/// Snapshot returned by a status check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderStatus {
    /// Current job state
    pub state: RenderState,
    /// Video URL, once available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Provider-reported duration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
}

impl RenderStatus {
    /// Status with no URL or duration.
    pub fn new(state: RenderState) -> Self {
        Self {
            state,
            video_url: None,
            duration_seconds: None,
        }
    }

    /// Completed status carrying a video URL.
    pub fn completed(video_url: impl Into<String>) -> Self {
        Self {
            state: RenderState::Completed,
            video_url: Some(video_url.into()),
            duration_seconds: None,
        }
    }
}
