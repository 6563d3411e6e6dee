use crate::{Stage, StageDescriptor, WorkflowContext};
use async_trait::async_trait;
use explainer_core::{Script, StageId};
use explainer_error::ExplainerResult;
use explainer_interface::ScriptRequest;
use tracing::{debug, instrument};

static DESCRIPTOR: StageDescriptor = StageDescriptor::new(
    StageId::Script,
    "Script Generator",
    "Generates the narrated section-by-section script",
);

/// Asks the script writer for a script matching the workflow variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptStage;

impl ScriptStage {
    /// Create the stage.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Stage for ScriptStage {
    type Input = WorkflowContext;
    type Output = Script;

    fn descriptor(&self) -> &StageDescriptor {
        &DESCRIPTOR
    }

    #[instrument(skip(self, ctx), fields(video_type = %ctx.video_type, provider = ctx.capabilities.script_writer.provider_name()))]
    async fn produce(&self, ctx: &WorkflowContext) -> ExplainerResult<Script> {
        let request = ScriptRequest {
            video_type: ctx.video_type,
            client_profile: ctx.client_profile.clone(),
        };
        let script = ctx.capabilities.script_writer.generate(&request).await?;
        debug!(
            script_id = %script.id(),
            sections = script.sections().len(),
            duration = script.total_duration_seconds(),
            "Script generated"
        );
        Ok(script)
    }
}
