//! Outputs of the voiceover and visual stages.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Narrated audio written by the voiceover stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceoverResult {
    /// Where the audio artifact was written
    pub audio_path: PathBuf,
    /// Voice used for synthesis
    pub voice_id: String,
    /// Carried over from the script's total duration
    pub duration_seconds: f64,
    /// When the audio was produced
    pub generated_at: String,
}

/// Rendered video produced by the visual stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    /// Provider-assigned job/video identifier
    pub video_id: String,
    /// Where the finished video can be fetched
    pub video_url: String,
    /// Provider-reported duration, or the script total when absent
    pub duration_seconds: f64,
    /// When rendering finished
    pub generated_at: String,
}
