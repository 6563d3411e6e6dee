//! Text-to-speech through the ElevenLabs API.

use crate::ElevenLabsConfig;
use async_trait::async_trait;
use derive_getters::Getters;
use explainer_error::{CapabilityError, CapabilityErrorKind, ExplainerError, ExplainerResult};
use explainer_interface::SpeechSynthesizer;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[derive(Debug, Serialize)]
struct TextToSpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

#[derive(Debug, Deserialize)]
struct VoicesResponse {
    #[serde(default)]
    voices: Vec<Voice>,
}

/// A voice available to the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Voice {
    /// Voice identifier
    voice_id: String,
    /// Display name
    name: String,
}

/// [`SpeechSynthesizer`] backed by ElevenLabs.
#[derive(Debug, Clone)]
pub struct ElevenLabsSynthesizer {
    client: Client,
    config: ElevenLabsConfig,
}

impl ElevenLabsSynthesizer {
    /// Create a synthesizer from configuration.
    pub fn new(config: ElevenLabsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// List the voices available to the configured account.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or an
    /// unparseable body.
    #[instrument(skip(self))]
    pub async fn list_voices(&self) -> ExplainerResult<Vec<Voice>> {
        let url = format!("{}/voices", self.config.base_url);
        debug!(url = %url, "Listing ElevenLabs voices");

        let response = self
            .client
            .get(&url)
            .header("xi-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| {
                ExplainerError::from(CapabilityError::new(CapabilityErrorKind::Http(format!(
                    "ElevenLabs request failed: {}",
                    e
                ))))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(CapabilityError::new(CapabilityErrorKind::Api {
                provider: "elevenlabs".to_string(),
                status,
                message,
            })
            .into());
        }

        let parsed: VoicesResponse = response.json().await.map_err(|e| {
            ExplainerError::from(CapabilityError::new(CapabilityErrorKind::Parse(format!(
                "Failed to parse ElevenLabs voices: {}",
                e
            ))))
        })?;

        Ok(parsed.voices)
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    #[instrument(skip(self, text), fields(chars = text.len(), voice_id = %self.config.default_voice_id))]
    async fn synthesize(&self, text: &str) -> ExplainerResult<Vec<u8>> {
        let url = format!(
            "{}/text-to-speech/{}",
            self.config.base_url, self.config.default_voice_id
        );
        let body = TextToSpeechRequest {
            text,
            model_id: &self.config.model_id,
            voice_settings: VoiceSettings {
                stability: self.config.stability,
                similarity_boost: self.config.similarity_boost,
            },
        };
        debug!(url = %url, "Sending ElevenLabs TTS request");

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                ExplainerError::from(CapabilityError::new(CapabilityErrorKind::Http(format!(
                    "ElevenLabs request failed: {}",
                    e
                ))))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(CapabilityError::new(CapabilityErrorKind::Api {
                provider: "elevenlabs".to_string(),
                status,
                message,
            })
            .into());
        }

        let audio = response.bytes().await.map_err(|e| {
            ExplainerError::from(CapabilityError::new(CapabilityErrorKind::Http(format!(
                "Failed to read ElevenLabs audio: {}",
                e
            ))))
        })?;

        debug!(bytes = audio.len(), "Received synthesized audio");
        Ok(audio.to_vec())
    }

    fn voice_id(&self) -> &str {
        &self.config.default_voice_id
    }

    fn provider_name(&self) -> &'static str {
        "elevenlabs"
    }
}
