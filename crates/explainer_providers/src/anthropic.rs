//! Script generation through the Anthropic Messages API.

use crate::{
    AnthropicConfig, generic_system_prompt, parse_script_response, personalized_system_prompt,
};
use async_trait::async_trait;
use explainer_core::{Script, VideoType};
use explainer_error::{
    CapabilityError, CapabilityErrorKind, ExplainerError, ExplainerResult, StageError,
    StageErrorKind,
};
use explainer_interface::{ScriptRequest, ScriptWriter};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const USER_INSTRUCTION: &str =
    "Generate the video script now. Return ONLY valid JSON matching the schema described.";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: String,
    messages: Vec<MessageParam<'a>>,
}

#[derive(Debug, Serialize)]
struct MessageParam<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// [`ScriptWriter`] backed by a Claude model.
#[derive(Debug, Clone)]
pub struct AnthropicScriptWriter {
    client: Client,
    config: AnthropicConfig,
}

impl AnthropicScriptWriter {
    /// Create a writer from configuration.
    pub fn new(config: AnthropicConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn system_prompt(&self, request: &ScriptRequest) -> ExplainerResult<String> {
        match request.video_type {
            VideoType::Generic => Ok(generic_system_prompt()),
            VideoType::Personalized => match &request.client_profile {
                Some(profile) => Ok(personalized_system_prompt(profile)),
                None => Err(StageError::new(StageErrorKind::Configuration(
                    "personalized scripts require a client profile".to_string(),
                ))
                .into()),
            },
        }
    }
}

#[async_trait]
impl ScriptWriter for AnthropicScriptWriter {
    #[instrument(skip(self, request), fields(video_type = %request.video_type, model = %self.config.model))]
    async fn generate(&self, request: &ScriptRequest) -> ExplainerResult<Script> {
        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            system: self.system_prompt(request)?,
            messages: vec![MessageParam {
                role: "user",
                content: USER_INSTRUCTION,
            }],
        };

        let url = format!("{}/v1/messages", self.config.base_url);
        debug!(url = %url, "Sending Anthropic API request");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                ExplainerError::from(CapabilityError::new(CapabilityErrorKind::Http(format!(
                    "Anthropic request failed: {}",
                    e
                ))))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(CapabilityError::new(CapabilityErrorKind::Api {
                provider: "anthropic".to_string(),
                status,
                message,
            })
            .into());
        }

        let parsed: MessagesResponse = response.json().await.map_err(|e| {
            ExplainerError::from(CapabilityError::new(CapabilityErrorKind::Parse(format!(
                "Failed to parse Anthropic response: {}",
                e
            ))))
        })?;

        let text = parsed
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| {
                CapabilityError::new(CapabilityErrorKind::Parse(
                    "No text content in Claude response".to_string(),
                ))
            })?;

        debug!(chars = text.len(), "Received script text");
        parse_script_response(&text, request)
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }
}
