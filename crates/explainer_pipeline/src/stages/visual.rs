use crate::{PollConfig, Stage, StageDescriptor, VisualContext, poll_until};
use async_trait::async_trait;
use explainer_core::{RenderState, RenderStatus, StageId, VideoResult, timestamp_now};
use explainer_error::{ExplainerResult, StageError, StageErrorKind};
use explainer_interface::RenderRequest;
use tracing::{debug, info, instrument};

static DESCRIPTOR: StageDescriptor = StageDescriptor::new(
    StageId::Video,
    "Video Generator",
    "Renders the avatar video and waits for it to finish",
);

/// Submits a rendering job and polls it until it reaches a terminal state.
#[derive(Debug, Clone)]
pub struct VisualStage {
    poll: PollConfig,
}

impl VisualStage {
    /// Create the stage with the polling discipline for rendering jobs.
    pub fn new(poll: PollConfig) -> Self {
        Self { poll }
    }
}

#[async_trait]
impl Stage for VisualStage {
    type Input = VisualContext;
    type Output = VideoResult;

    fn descriptor(&self) -> &StageDescriptor {
        &DESCRIPTOR
    }

    #[instrument(skip(self, ctx), fields(script_id = %ctx.script.id(), provider = ctx.workflow.capabilities.renderer.provider_name()))]
    async fn produce(&self, ctx: &VisualContext) -> ExplainerResult<VideoResult> {
        let renderer = ctx.workflow.capabilities.renderer.as_ref();
        let request = RenderRequest {
            script: ctx.script.clone(),
            audio_path: ctx.voiceover.audio_path.clone(),
        };

        let job_id = renderer.submit(&request).await?;
        info!(job_id = %job_id, "Render job submitted");

        let job = job_id.as_str();
        let status = poll_until(
            move || renderer.status(job),
            |status: &RenderStatus| status.state.is_terminal(),
            &self.poll,
        )
        .await?;
        debug!(job_id = %job_id, state = %status.state, "Render job finished");

        if status.state == RenderState::Failed {
            return Err(StageError::new(StageErrorKind::JobFailed { job_id }).into());
        }

        let video_url = match status.video_url {
            Some(url) => url,
            None => {
                return Err(StageError::new(StageErrorKind::MissingVideoUrl { job_id }).into());
            }
        };

        Ok(VideoResult {
            video_id: job_id,
            video_url,
            duration_seconds: status
                .duration_seconds
                .unwrap_or(*ctx.script.total_duration_seconds()),
            generated_at: timestamp_now(),
        })
    }
}
