//! Sequential execution of the three stages.

use crate::{ScriptStage, Stage, StageDescriptor, VisualStage, VoiceoverStage, WorkflowContext};
use explainer_core::{StageOutput, StageRun, VideoReport};
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Runs script, voiceover and visual stages in order.
///
/// Execution stops at the first failed stage; every run attempted so far ends
/// up in the returned report.
#[derive(Debug, Clone)]
pub struct VideoPipeline {
    stages: (ScriptStage, VoiceoverStage, VisualStage),
}

impl VideoPipeline {
    /// Assemble a pipeline from its stages.
    pub fn new(script: ScriptStage, voiceover: VoiceoverStage, visual: VisualStage) -> Self {
        Self {
            stages: (script, voiceover, visual),
        }
    }

    /// Stage descriptors in execution order.
    pub fn descriptors(&self) -> [&StageDescriptor; 3] {
        let (script, voiceover, visual) = &self.stages;
        [script.descriptor(), voiceover.descriptor(), visual.descriptor()]
    }

    /// Execute the pipeline. Never fails; failures are reported in the
    /// returned report's stage runs and summary.
    #[instrument(skip(self, ctx), fields(video_type = %ctx.video_type, started = %ctx.now))]
    pub async fn run(&self, ctx: &WorkflowContext) -> VideoReport {
        let started = Instant::now();
        let (script_stage, voiceover_stage, visual_stage) = &self.stages;
        let mut runs: Vec<StageRun<StageOutput>> = Vec::with_capacity(3);

        let script_run = script_stage.run(ctx).await;
        let script = script_run.output().cloned();
        runs.push(script_run.erase());
        let Some(script) = script else {
            return Self::finish(ctx, runs, started);
        };

        let voiceover_ctx = ctx.clone().with_script(script);
        let voiceover_run = voiceover_stage.run(&voiceover_ctx).await;
        let voiceover = voiceover_run.output().cloned();
        runs.push(voiceover_run.erase());
        let Some(voiceover) = voiceover else {
            return Self::finish(ctx, runs, started);
        };

        let visual_ctx = voiceover_ctx.with_voiceover(voiceover);
        runs.push(visual_stage.run(&visual_ctx).await.erase());

        Self::finish(ctx, runs, started)
    }

    fn finish(
        ctx: &WorkflowContext,
        runs: Vec<StageRun<StageOutput>>,
        started: Instant,
    ) -> VideoReport {
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let report = VideoReport::assemble(
            ctx.video_type,
            ctx.client_name().map(str::to_string),
            runs,
            elapsed_ms,
        );

        match report.failed_run() {
            None => info!(
                report_id = %report.id,
                duration_ms = elapsed_ms,
                "Pipeline completed"
            ),
            Some(run) => warn!(
                report_id = %report.id,
                stage = %run.stage_id(),
                errors = ?run.errors(),
                "Pipeline stopped"
            ),
        }

        report
    }
}

impl Default for VideoPipeline {
    fn default() -> Self {
        crate::create_pipeline(&crate::PipelineOptions::default())
    }
}
