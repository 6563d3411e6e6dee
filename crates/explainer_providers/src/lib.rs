//! Provider integrations for the explainer video pipeline.
//!
//! This crate implements the capability traits from `explainer_interface`:
//!
//! | capability | HTTP adapter | mock |
//! |---|---|---|
//! | [`ScriptWriter`](explainer_interface::ScriptWriter) | [`AnthropicScriptWriter`] | [`MockScriptWriter`] |
//! | [`SpeechSynthesizer`](explainer_interface::SpeechSynthesizer) | [`ElevenLabsSynthesizer`] | [`MockSynthesizer`] |
//! | [`VideoRenderer`](explainer_interface::VideoRenderer) | [`HeyGenRenderer`] | [`MockRenderer`] |
//!
//! [`capabilities_from_config`] wires HTTP adapters for every provider that
//! has a configuration section and mocks for the rest.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod config;
mod elevenlabs;
mod heygen;
mod mock;
mod parse;
mod templates;

pub use anthropic::AnthropicScriptWriter;
pub use config::{AnthropicConfig, ElevenLabsConfig, HeyGenConfig, ProvidersConfig};
pub use elevenlabs::{ElevenLabsSynthesizer, Voice};
pub use heygen::HeyGenRenderer;
pub use mock::{MockRenderer, MockScriptWriter, MockSynthesizer, mock_capabilities};
pub use parse::parse_script_response;
pub use templates::{generic_system_prompt, personalized_system_prompt};

use explainer_interface::Capabilities;
use std::sync::Arc;

/// Build capabilities from provider configuration.
///
/// Providers without a configuration section (or no configuration at all)
/// fall back to their mock implementation.
pub fn capabilities_from_config(config: Option<&ProvidersConfig>) -> Capabilities {
    let Some(config) = config else {
        return mock_capabilities();
    };

    let fallback = mock_capabilities();

    Capabilities::new(
        match &config.anthropic {
            Some(c) => Arc::new(AnthropicScriptWriter::new(c.clone())),
            None => fallback.script_writer,
        },
        match &config.elevenlabs {
            Some(c) => Arc::new(ElevenLabsSynthesizer::new(c.clone())),
            None => fallback.speech,
        },
        match &config.heygen {
            Some(c) => Arc::new(HeyGenRenderer::new(c.clone())),
            None => fallback.renderer,
        },
    )
}
