//! Context threaded through the stages.
//!
//! Each stage receives a context that already holds the outputs of every
//! stage before it. Extending a context consumes it and returns the next
//! one, so earlier contexts are never mutated.

use chrono::{DateTime, Utc};
use explainer_core::{ClientProfile, Script, VideoType, VoiceoverResult};
use explainer_interface::Capabilities;
use explainer_providers::mock_capabilities;
use std::path::PathBuf;

const DEFAULT_OUTPUT_DIR: &str = "./data";

/// Workflow-wide inputs shared by every stage.
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// When the workflow was started
    pub now: DateTime<Utc>,
    /// Workflow variant
    pub video_type: VideoType,
    /// Client profile for personalized videos
    pub client_profile: Option<ClientProfile>,
    /// Directory for generated artifacts
    pub output_dir: PathBuf,
    /// External capability clients
    pub capabilities: Capabilities,
}

impl WorkflowContext {
    /// Client name, if a profile is present.
    pub fn client_name(&self) -> Option<&str> {
        self.client_profile.as_ref().map(|p| p.name.as_str())
    }

    /// Extend with the script stage output.
    pub fn with_script(self, script: Script) -> VoiceoverContext {
        VoiceoverContext {
            workflow: self,
            script,
        }
    }
}

/// Input of the voiceover stage.
#[derive(Debug, Clone)]
pub struct VoiceoverContext {
    /// Workflow inputs
    pub workflow: WorkflowContext,
    /// Script produced by the script stage
    pub script: Script,
}

impl VoiceoverContext {
    /// Extend with the voiceover stage output.
    pub fn with_voiceover(self, voiceover: VoiceoverResult) -> VisualContext {
        VisualContext {
            workflow: self.workflow,
            script: self.script,
            voiceover,
        }
    }
}

/// Input of the visual stage.
#[derive(Debug, Clone)]
pub struct VisualContext {
    /// Workflow inputs
    pub workflow: WorkflowContext,
    /// Script produced by the script stage
    pub script: Script,
    /// Audio produced by the voiceover stage
    pub voiceover: VoiceoverResult,
}

/// Optional replacements for the context defaults.
#[derive(Debug, Clone, Default)]
pub struct WorkflowOverrides {
    /// Start time (default: now)
    pub now: Option<DateTime<Utc>>,
    /// Workflow variant (default: generic)
    pub video_type: Option<VideoType>,
    /// Client profile (default: none)
    pub client_profile: Option<ClientProfile>,
    /// Output directory (default: `./data`)
    pub output_dir: Option<PathBuf>,
    /// Capability clients (default: mocks)
    pub capabilities: Option<Capabilities>,
}

/// Build a workflow context, filling unset fields with defaults.
pub fn create_context(overrides: WorkflowOverrides) -> WorkflowContext {
    WorkflowContext {
        now: overrides.now.unwrap_or_else(Utc::now),
        video_type: overrides.video_type.unwrap_or_default(),
        client_profile: overrides.client_profile,
        output_dir: overrides
            .output_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        capabilities: overrides.capabilities.unwrap_or_else(mock_capabilities),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explainer_core::ScriptSection;

    #[test]
    fn test_defaults_fill_unset_fields() {
        let ctx = create_context(WorkflowOverrides::default());

        assert_eq!(ctx.video_type, VideoType::Generic);
        assert!(ctx.client_profile.is_none());
        assert_eq!(ctx.output_dir, PathBuf::from("./data"));
        assert_eq!(ctx.capabilities.renderer.provider_name(), "mock");
    }

    #[test]
    fn test_overrides_win() {
        let ctx = create_context(WorkflowOverrides {
            video_type: Some(VideoType::Personalized),
            client_profile: Some(ClientProfile::new("Initech")),
            output_dir: Some(PathBuf::from("/tmp/out")),
            ..Default::default()
        });

        assert_eq!(ctx.video_type, VideoType::Personalized);
        assert_eq!(ctx.client_name(), Some("Initech"));
        assert_eq!(ctx.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_extension_carries_earlier_outputs() {
        let ctx = create_context(WorkflowOverrides::default());
        let script = Script::new(
            VideoType::Generic,
            None,
            vec![ScriptSection::new("hook", "Hi.", 3.0)],
        )
        .unwrap();
        let voiceover = VoiceoverResult {
            audio_path: PathBuf::from("a.mp3"),
            voice_id: "v".to_string(),
            duration_seconds: 3.0,
            generated_at: explainer_core::timestamp_now(),
        };

        let visual = ctx.with_script(script.clone()).with_voiceover(voiceover);

        assert_eq!(visual.script, script);
        assert_eq!(visual.voiceover.voice_id, "v");
        assert_eq!(visual.workflow.video_type, VideoType::Generic);
    }
}
