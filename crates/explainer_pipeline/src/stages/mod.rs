//! The three pipeline stages.

mod script;
mod visual;
mod voiceover;

pub use script::ScriptStage;
pub use visual::VisualStage;
pub use voiceover::VoiceoverStage;
