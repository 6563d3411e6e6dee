//! Core data types for the explainer video pipeline.
//!
//! This crate provides the values that flow between pipeline stages: the
//! generated [`Script`], the [`VoiceoverResult`] and [`VideoResult`] artifacts,
//! the per-stage [`StageRun`] record and the terminal [`VideoReport`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod profile;
mod render;
mod report;
mod results;
mod script;
mod stage_run;
mod time;
mod video_type;

pub use profile::{ClientProfile, ClientProfileBuilder};
pub use render::{RenderState, RenderStatus};
pub use report::{ReportSummary, VideoReport};
pub use results::{VideoResult, VoiceoverResult};
pub use script::{Script, ScriptSection};
pub use stage_run::{StageId, StageOutput, StageRun};
pub use time::{file_safe_timestamp, format_timestamp, new_id, timestamp_now};
pub use video_type::VideoType;
