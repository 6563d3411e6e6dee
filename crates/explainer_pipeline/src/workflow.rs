//! Workflow entry point.

use crate::{
    PollConfig, ScriptStage, VideoPipeline, VisualStage, VoiceoverStage, WorkflowOverrides,
    create_context,
};
use derive_getters::Getters;
use explainer_core::VideoReport;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::instrument;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(600);

/// Pipeline tuning.
///
/// # Examples
///
/// ```
/// use explainer_pipeline::PipelineOptionsBuilder;
/// use std::time::Duration;
///
/// let options = PipelineOptionsBuilder::default()
///     .poll_interval(Duration::from_secs(5))
///     .build()
///     .unwrap();
///
/// assert_eq!(*options.poll_interval(), Duration::from_secs(5));
/// assert_eq!(*options.poll_timeout(), Duration::from_secs(600));
/// ```
#[derive(Debug, Clone, derive_builder::Builder, Getters)]
#[builder(setter(into))]
pub struct PipelineOptions {
    /// Pause between render status checks
    #[builder(default = "DEFAULT_POLL_INTERVAL")]
    poll_interval: Duration,
    /// Budget for the render job to finish
    #[builder(default = "DEFAULT_POLL_TIMEOUT")]
    poll_timeout: Duration,
    /// Stops a pending render wait when cancelled
    #[builder(default, setter(strip_option))]
    cancellation: Option<CancellationToken>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            poll_timeout: DEFAULT_POLL_TIMEOUT,
            cancellation: None,
        }
    }
}

impl PipelineOptions {
    fn poll_config(&self) -> PollConfig {
        let config = PollConfig::new(self.poll_interval, self.poll_timeout);
        match &self.cancellation {
            Some(token) => config.with_cancellation(token.clone()),
            None => config,
        }
    }
}

/// Build the standard three-stage pipeline.
pub fn create_pipeline(options: &PipelineOptions) -> VideoPipeline {
    VideoPipeline::new(
        ScriptStage::new(),
        VoiceoverStage::new(),
        VisualStage::new(options.poll_config()),
    )
}

/// Run the whole workflow and return its report.
///
/// Unset overrides fall back to a generic video written under `./data`
/// using mock capabilities.
#[instrument(skip_all)]
pub async fn run_workflow(overrides: WorkflowOverrides, options: PipelineOptions) -> VideoReport {
    let ctx = create_context(overrides);
    create_pipeline(&options).run(&ctx).await
}
