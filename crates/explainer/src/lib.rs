//! Explainer - staged video explainer generation
//!
//! Explainer turns a workflow variant and an optional client profile into a
//! finished avatar video by chaining three external capabilities: script
//! generation, voice synthesis and avatar rendering.
//!
//! # Quick Start
//!
//! ```no_run
//! use explainer::{PipelineOptions, WorkflowOverrides, run_workflow};
//!
//! #[tokio::main]
//! async fn main() {
//!     // Mock capabilities are used when none are supplied
//!     let report = run_workflow(WorkflowOverrides::default(), PipelineOptions::default()).await;
//!     println!("succeeded: {}", report.summary.succeeded);
//! }
//! ```
//!
//! # Architecture
//!
//! - `explainer_error` - Error types
//! - `explainer_core` - Scripts, stage runs and reports
//! - `explainer_interface` - Capability traits
//! - `explainer_providers` - Anthropic, ElevenLabs and HeyGen clients plus mocks
//! - `explainer_pipeline` - Polling, stages and the pipeline
//!
//! This crate re-exports everything for convenience and adds report
//! persistence.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod persistence;

pub use persistence::{MANIFEST_SCHEMA_VERSION, Manifest, ReportWriter};

// Re-export error types
pub use explainer_error::{
    CapabilityError, CapabilityErrorKind, ConfigError, ExplainerError, ExplainerErrorKind,
    ExplainerResult, PollError, PollErrorKind, StageError, StageErrorKind, StorageError,
    StorageErrorKind,
};

// Re-export core types
pub use explainer_core::{
    ClientProfile, ClientProfileBuilder, RenderState, RenderStatus, ReportSummary, Script,
    ScriptSection, StageId, StageOutput, StageRun, VideoReport, VideoResult, VideoType,
    VoiceoverResult, file_safe_timestamp, format_timestamp, new_id, timestamp_now,
};

// Re-export capability traits
pub use explainer_interface::{
    Capabilities, RenderRequest, ScriptRequest, ScriptWriter, SpeechSynthesizer, VideoRenderer,
};

// Re-export providers
pub use explainer_providers::{
    AnthropicConfig, AnthropicScriptWriter, ElevenLabsConfig, ElevenLabsSynthesizer,
    HeyGenConfig, HeyGenRenderer, MockRenderer, MockScriptWriter, MockSynthesizer,
    ProvidersConfig, Voice, capabilities_from_config, mock_capabilities,
};

// Re-export pipeline
pub use explainer_pipeline::{
    PipelineOptions, PipelineOptionsBuilder, PollConfig, ScriptStage, Stage, StageDescriptor,
    VideoPipeline, VisualContext, VisualStage, VoiceoverContext, VoiceoverStage, WorkflowContext,
    WorkflowOverrides, create_context, create_pipeline, poll_until, run_workflow,
};
