//! Set of capability handles threaded through a workflow.

use crate::{ScriptWriter, SpeechSynthesizer, VideoRenderer};
use std::fmt;
use std::sync::Arc;

/// Handles to the three capabilities a workflow needs.
///
/// Cloning is cheap; every clone shares the same clients.
#[derive(Clone)]
pub struct Capabilities {
    /// Script generation
    pub script_writer: Arc<dyn ScriptWriter>,
    /// Text-to-speech
    pub speech: Arc<dyn SpeechSynthesizer>,
    /// Avatar video rendering
    pub renderer: Arc<dyn VideoRenderer>,
}

impl Capabilities {
    /// Bundle three capability clients.
    pub fn new(
        script_writer: Arc<dyn ScriptWriter>,
        speech: Arc<dyn SpeechSynthesizer>,
        renderer: Arc<dyn VideoRenderer>,
    ) -> Self {
        Self {
            script_writer,
            speech,
            renderer,
        }
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("script_writer", &self.script_writer.provider_name())
            .field("speech", &self.speech.provider_name())
            .field("renderer", &self.renderer.provider_name())
            .finish()
    }
}
