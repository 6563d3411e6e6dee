//! Staged execution engine for the explainer video pipeline.
//!
//! A run threads a growing context through three stages:
//!
//! 1. [`ScriptStage`] asks the script writer for a [`Script`](explainer_core::Script)
//! 2. [`VoiceoverStage`] synthesizes the narration and writes the audio file
//! 3. [`VisualStage`] submits a rendering job and polls it to completion
//!
//! Every stage is wrapped by [`Stage::run`], which turns failures into a
//! [`StageRun`](explainer_core::StageRun) error list instead of an error
//! value. [`VideoPipeline::run`] stops at the first failed stage and always
//! returns a [`VideoReport`](explainer_core::VideoReport).
//!
//! # Example
//!
//! ```no_run
//! use explainer_pipeline::{PipelineOptions, WorkflowOverrides, run_workflow};
//!
//! # async fn example() {
//! let report = run_workflow(WorkflowOverrides::default(), PipelineOptions::default()).await;
//! if let Some(video) = &report.video {
//!     println!("Video ready at {}", video.video_url);
//! }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod pipeline;
mod polling;
mod stage;
mod stages;
mod workflow;

pub use context::{
    VisualContext, VoiceoverContext, WorkflowContext, WorkflowOverrides, create_context,
};
pub use pipeline::VideoPipeline;
pub use polling::{PollConfig, poll_until};
pub use stage::{Stage, StageDescriptor};
pub use stages::{ScriptStage, VisualStage, VoiceoverStage};
pub use workflow::{PipelineOptions, PipelineOptionsBuilder, create_pipeline, run_workflow};
