use crate::{Stage, StageDescriptor, VoiceoverContext};
use async_trait::async_trait;
use explainer_core::{StageId, VoiceoverResult, timestamp_now};
use explainer_error::{ExplainerResult, StorageError, StorageErrorKind};
use tracing::{debug, instrument};

static DESCRIPTOR: StageDescriptor = StageDescriptor::new(
    StageId::Voiceover,
    "Voiceover Generator",
    "Synthesizes the script narration into an audio file",
);

/// Synthesizes the full narration and writes it next to the other artifacts.
///
/// The audio lands at `<output_dir>/<script id>-voiceover.<ext>`; the
/// directory is created when missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoiceoverStage;

impl VoiceoverStage {
    /// Create the stage.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Stage for VoiceoverStage {
    type Input = VoiceoverContext;
    type Output = VoiceoverResult;

    fn descriptor(&self) -> &StageDescriptor {
        &DESCRIPTOR
    }

    #[instrument(skip(self, ctx), fields(script_id = %ctx.script.id(), provider = ctx.workflow.capabilities.speech.provider_name()))]
    async fn produce(&self, ctx: &VoiceoverContext) -> ExplainerResult<VoiceoverResult> {
        let speech = &ctx.workflow.capabilities.speech;
        let audio = speech.synthesize(ctx.script.raw_narration()).await?;

        let dir = &ctx.workflow.output_dir;
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        let audio_path = dir.join(format!(
            "{}-voiceover.{}",
            ctx.script.id(),
            speech.audio_extension()
        ));
        tokio::fs::write(&audio_path, &audio).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Write(format!(
                "{}: {}",
                audio_path.display(),
                e
            )))
        })?;
        debug!(path = %audio_path.display(), bytes = audio.len(), "Audio written");

        Ok(VoiceoverResult {
            audio_path,
            voice_id: speech.voice_id().to_string(),
            duration_seconds: *ctx.script.total_duration_seconds(),
            generated_at: timestamp_now(),
        })
    }
}
