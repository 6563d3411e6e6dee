//! Terminal pipeline report.

use crate::{
    Script, StageId, StageOutput, StageRun, VideoResult, VideoType, VoiceoverResult, new_id,
    timestamp_now,
};
use serde::Serialize;

/// Outcome summary of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// True iff no stage run carries errors
    pub succeeded: bool,
    /// First stage (in pipeline order) whose run carries errors
    pub failed_at_stage: Option<StageId>,
    /// Wall-clock time of the whole run
    pub total_duration_ms: u64,
}

/// The single artifact returned by a pipeline run, successful or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoReport {
    /// Fresh identifier per report
    pub id: String,
    /// When the report was assembled
    pub generated_at: String,
    /// Workflow variant
    pub video_type: VideoType,
    /// Client the video targets, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// Script stage output
    pub script: Option<Script>,
    /// Voiceover stage output
    pub voiceover: Option<VoiceoverResult>,
    /// Visual stage output
    pub video: Option<VideoResult>,
    /// Every stage run attempted, in execution order
    pub stage_runs: Vec<StageRun<StageOutput>>,
    /// Outcome summary
    pub summary: ReportSummary,
}

impl VideoReport {
    /// Assemble a report from the runs attempted so far.
    ///
    /// Outputs are read by position: run 0 is the script stage, run 1 the
    /// voiceover stage and run 2 the visual stage. The summary is derived
    /// from the runs themselves.
    pub fn assemble(
        video_type: VideoType,
        client_name: Option<String>,
        stage_runs: Vec<StageRun<StageOutput>>,
        total_duration_ms: u64,
    ) -> Self {
        let script = match stage_runs.first().and_then(StageRun::output) {
            Some(StageOutput::Script(script)) => Some(script.clone()),
            _ => None,
        };
        let voiceover = match stage_runs.get(1).and_then(StageRun::output) {
            Some(StageOutput::Voiceover(voiceover)) => Some(voiceover.clone()),
            _ => None,
        };
        let video = match stage_runs.get(2).and_then(StageRun::output) {
            Some(StageOutput::Video(video)) => Some(video.clone()),
            _ => None,
        };

        let failed_at_stage = stage_runs
            .iter()
            .find(|run| !run.is_success())
            .map(StageRun::stage_id);

        Self {
            id: new_id(),
            generated_at: timestamp_now(),
            video_type,
            client_name,
            script,
            voiceover,
            video,
            stage_runs,
            summary: ReportSummary {
                succeeded: failed_at_stage.is_none(),
                failed_at_stage,
                total_duration_ms,
            },
        }
    }

    /// First stage run that carries errors.
    pub fn failed_run(&self) -> Option<&StageRun<StageOutput>> {
        self.stage_runs.iter().find(|run| !run.is_success())
    }
}
