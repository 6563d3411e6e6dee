//! Trait definitions for external capabilities.

use async_trait::async_trait;
use explainer_core::{ClientProfile, RenderStatus, Script, VideoType};
use explainer_error::ExplainerResult;
use std::path::PathBuf;

/// Input to script generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptRequest {
    /// Workflow variant
    pub video_type: VideoType,
    /// Client profile for personalized scripts
    pub client_profile: Option<ClientProfile>,
}

/// Input to a rendering job submission.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// Script to render
    pub script: Script,
    /// Path of the narrated audio produced by the voiceover stage
    pub audio_path: PathBuf,
}

/// Turns a workflow variant and optional client profile into a script.
#[async_trait]
pub trait ScriptWriter: Send + Sync {
    /// Generate a validated script.
    ///
    /// # Errors
    ///
    /// Fails if the provider call fails or its response cannot be parsed into
    /// a script with non-empty sections and non-negative durations.
    async fn generate(&self, request: &ScriptRequest) -> ExplainerResult<Script>;

    /// Provider name (e.g., "anthropic", "mock").
    fn provider_name(&self) -> &'static str;
}

/// Converts narration text into audio bytes.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize narration into raw audio bytes.
    ///
    /// # Errors
    ///
    /// Fails with the provider's status and diagnostic text on non-success.
    async fn synthesize(&self, text: &str) -> ExplainerResult<Vec<u8>>;

    /// Voice used for synthesis (configured or default).
    fn voice_id(&self) -> &str;

    /// File extension of the produced audio.
    fn audio_extension(&self) -> &str {
        "mp3"
    }

    /// Provider name (e.g., "elevenlabs", "mock").
    fn provider_name(&self) -> &'static str;
}

/// Submits and tracks asynchronous avatar video rendering jobs.
#[async_trait]
pub trait VideoRenderer: Send + Sync {
    /// Submit a rendering job, returning the provider's job identifier.
    async fn submit(&self, request: &RenderRequest) -> ExplainerResult<String>;

    /// Current status of a previously submitted job.
    async fn status(&self, job_id: &str) -> ExplainerResult<RenderStatus>;

    /// Provider name (e.g., "heygen", "mock").
    fn provider_name(&self) -> &'static str;
}
