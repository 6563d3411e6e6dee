//! Deterministic offline capabilities.
//!
//! Used when a provider has no configuration and throughout the test suites.

use async_trait::async_trait;
use explainer_core::{RenderStatus, Script, ScriptSection, VideoType, new_id};
use explainer_error::{ExplainerResult, StageError, StageErrorKind};
use explainer_interface::{
    Capabilities, RenderRequest, ScriptRequest, ScriptWriter, SpeechSynthesizer, VideoRenderer,
};
use std::sync::Arc;
use tracing::debug;

const MOCK_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
const MOCK_VIDEO_SECONDS: f64 = 90.0;

/// Returns a fixed script for each video type.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockScriptWriter;

impl MockScriptWriter {
    /// Create a mock writer.
    pub fn new() -> Self {
        Self
    }
}

fn section(id: &str, label: &str, seconds: f64, narration: &str, cue: &str) -> ScriptSection {
    ScriptSection {
        id: id.to_string(),
        label: label.to_string(),
        duration_seconds: seconds,
        narration: narration.to_string(),
        visual_cue: cue.to_string(),
        on_screen_text: None,
    }
}

fn generic_sections() -> Vec<ScriptSection> {
    vec![
        section(
            "hook",
            "Hook",
            10.0,
            "Your team ships more work than ever, and still nobody can say where the week went.",
            "Presenter facing camera, busy dashboard blurred behind",
        ),
        section(
            "problem",
            "Problem",
            20.0,
            "Status lives in five tools. Updates arrive late, priorities drift, and every Monday starts with a meeting about the meeting.",
            "Split screen of chat threads, spreadsheets and calendar invites",
        ),
        section(
            "solution",
            "Solution",
            25.0,
            "Our platform connects those tools into one live view. Work is tracked where it happens, and leaders see progress without asking for it.",
            "Product walkthrough of the unified board",
        ),
        section(
            "proof",
            "Proof",
            12.0,
            "Teams using it cut status meetings in half within their first month.",
            "Customer logos and a single bold statistic",
        ),
        section(
            "cta",
            "Call to action",
            8.0,
            "See it with your own data. Book a fifteen minute demo today.",
            "Presenter with booking link on screen",
        ),
    ]
}

fn personalized_sections(client: &str) -> Vec<ScriptSection> {
    vec![
        section(
            "greeting",
            "Greeting",
            8.0,
            &format!("Hi {} team, this short video was made just for you.", client),
            "Presenter with client name on screen",
        ),
        section(
            "context",
            "Context",
            15.0,
            &format!(
                "We looked at how {} works today and heard the same story from teams like yours.",
                client
            ),
            "Industry imagery",
        ),
        section(
            "problem",
            "Problem",
            18.0,
            "Hand-offs get lost between tools, reporting takes days, and the people closest to the work spend hours on updates.",
            "Animated hand-off chain breaking apart",
        ),
        section(
            "solution",
            "Solution",
            22.0,
            "Our platform gives every team one place to plan, track and report, with updates flowing automatically.",
            "Product walkthrough tailored to the client's use cases",
        ),
        section(
            "outcome",
            "Outcome",
            15.0,
            &format!("For {}, that means faster decisions and fewer status meetings.", client),
            "Before and after comparison",
        ),
        section(
            "cta",
            "Call to action",
            10.0,
            "Reply to this message and we will set up a walkthrough with your own data.",
            "Presenter with reply prompt",
        ),
    ]
}

#[async_trait]
impl ScriptWriter for MockScriptWriter {
    async fn generate(&self, request: &ScriptRequest) -> ExplainerResult<Script> {
        let client_name = request.client_profile.as_ref().map(|p| p.name.clone());
        let sections = match (request.video_type, client_name.as_deref()) {
            (VideoType::Generic, _) => generic_sections(),
            (VideoType::Personalized, Some(client)) => personalized_sections(client),
            (VideoType::Personalized, None) => {
                return Err(StageError::new(StageErrorKind::Configuration(
                    "personalized scripts require a client profile".to_string(),
                ))
                .into());
            }
        };
        debug!(
            video_type = %request.video_type,
            sections = sections.len(),
            "Mock script generated"
        );
        Script::new(request.video_type, client_name, sections)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Returns a single silent MP3 frame.
#[derive(Debug, Clone, Default)]
pub struct MockSynthesizer;

impl MockSynthesizer {
    /// Create a mock synthesizer.
    pub fn new() -> Self {
        Self
    }

    fn silent_frame() -> Vec<u8> {
        let mut frame = vec![0xff, 0xfb, 0x90, 0x00];
        frame.resize(32, 0);
        frame
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, text: &str) -> ExplainerResult<Vec<u8>> {
        debug!(chars = text.len(), "Mock synthesis");
        Ok(Self::silent_frame())
    }

    fn voice_id(&self) -> &str {
        MOCK_VOICE_ID
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Accepts every job and reports it completed on the first status check.
#[derive(Debug, Clone, Default)]
pub struct MockRenderer;

impl MockRenderer {
    /// Create a mock renderer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl VideoRenderer for MockRenderer {
    async fn submit(&self, request: &RenderRequest) -> ExplainerResult<String> {
        let job_id = format!("mock-video-{}", new_id());
        debug!(job_id = %job_id, audio = %request.audio_path.display(), "Mock render submitted");
        Ok(job_id)
    }

    async fn status(&self, job_id: &str) -> ExplainerResult<RenderStatus> {
        let mut status =
            RenderStatus::completed(format!("https://mock.heygen.com/videos/{}.mp4", job_id));
        status.duration_seconds = Some(MOCK_VIDEO_SECONDS);
        Ok(status)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Capabilities made entirely of mocks.
pub fn mock_capabilities() -> Capabilities {
    Capabilities::new(
        Arc::new(MockScriptWriter::new()),
        Arc::new(MockSynthesizer::new()),
        Arc::new(MockRenderer::new()),
    )
}
