//! Avatar video rendering through the HeyGen API.

use crate::HeyGenConfig;
use async_trait::async_trait;
use explainer_core::{RenderState, RenderStatus};
use explainer_error::{CapabilityError, CapabilityErrorKind, ExplainerError, ExplainerResult};
use explainer_interface::{RenderRequest, VideoRenderer};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[derive(Debug, Serialize)]
struct GenerateRequest {
    video_inputs: Vec<VideoInput>,
    dimension: Dimension,
}

#[derive(Debug, Serialize)]
struct VideoInput {
    character: Character,
    voice: VoiceInput,
    background: Background,
}

#[derive(Debug, Serialize)]
struct Character {
    #[serde(rename = "type")]
    kind: &'static str,
    avatar_id: String,
    avatar_style: &'static str,
}

#[derive(Debug, Serialize)]
struct VoiceInput {
    #[serde(rename = "type")]
    kind: &'static str,
    voice_id: String,
    input_text: String,
    speed: f32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Background {
    Template { template_id: String },
    Color { value: String },
}

#[derive(Debug, Serialize)]
struct Dimension {
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct GenerateData {
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct StatusData {
    status: String,
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
}

/// [`VideoRenderer`] backed by HeyGen avatar videos.
///
/// Each script section becomes one video input spoken by the configured
/// avatar.
#[derive(Debug, Clone)]
pub struct HeyGenRenderer {
    client: Client,
    config: HeyGenConfig,
}

impl HeyGenRenderer {
    /// Create a renderer from configuration.
    pub fn new(config: HeyGenConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn build_payload(&self, request: &RenderRequest) -> GenerateRequest {
        let background = match &self.config.background_id {
            Some(template_id) => Background::Template {
                template_id: template_id.clone(),
            },
            None => Background::Color {
                value: self.config.background_color.clone(),
            },
        };

        GenerateRequest {
            video_inputs: request
                .script
                .sections()
                .iter()
                .map(|section| VideoInput {
                    character: Character {
                        kind: "avatar",
                        avatar_id: self.config.avatar_id.clone(),
                        avatar_style: "normal",
                    },
                    voice: VoiceInput {
                        kind: "text",
                        voice_id: self.config.voice_id.clone(),
                        input_text: section.narration.clone(),
                        speed: 1.0,
                    },
                    background: background.clone(),
                })
                .collect(),
            dimension: Dimension {
                width: self.config.width,
                height: self.config.height,
            },
        }
    }

    async fn check(response: Response, action: &str) -> ExplainerResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        Err(CapabilityError::new(CapabilityErrorKind::Api {
            provider: format!("heygen {}", action),
            status,
            message,
        })
        .into())
    }
}

fn map_state(status: &str) -> RenderState {
    match status {
        "completed" => RenderState::Completed,
        "failed" => RenderState::Failed,
        "processing" => RenderState::Processing,
        _ => RenderState::Pending,
    }
}

#[async_trait]
impl VideoRenderer for HeyGenRenderer {
    #[instrument(skip(self, request), fields(sections = request.script.sections().len(), avatar_id = %self.config.avatar_id))]
    async fn submit(&self, request: &RenderRequest) -> ExplainerResult<String> {
        let url = format!("{}/v2/video/generate", self.config.base_url);
        debug!(url = %url, "Submitting HeyGen render job");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .json(&self.build_payload(request))
            .send()
            .await
            .map_err(|e| {
                ExplainerError::from(CapabilityError::new(CapabilityErrorKind::Http(format!(
                    "HeyGen submit failed: {}",
                    e
                ))))
            })?;
        let response = Self::check(response, "submit").await?;

        let parsed: Envelope<GenerateData> = response.json().await.map_err(|e| {
            ExplainerError::from(CapabilityError::new(CapabilityErrorKind::Parse(format!(
                "Failed to parse HeyGen submit response: {}",
                e
            ))))
        })?;

        debug!(job_id = %parsed.data.video_id, "HeyGen job accepted");
        Ok(parsed.data.video_id)
    }

    #[instrument(skip(self))]
    async fn status(&self, job_id: &str) -> ExplainerResult<RenderStatus> {
        let url = format!("{}/v1/video_status.get", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("video_id", job_id)])
            .header("x-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| {
                ExplainerError::from(CapabilityError::new(CapabilityErrorKind::Http(format!(
                    "HeyGen status check failed: {}",
                    e
                ))))
            })?;
        let response = Self::check(response, "status check").await?;

        let parsed: Envelope<StatusData> = response.json().await.map_err(|e| {
            ExplainerError::from(CapabilityError::new(CapabilityErrorKind::Parse(format!(
                "Failed to parse HeyGen status response: {}",
                e
            ))))
        })?;

        let status = RenderStatus {
            state: map_state(&parsed.data.status),
            video_url: parsed.data.video_url,
            duration_seconds: parsed.data.duration,
        };
        debug!(state = %status.state, "HeyGen job status");
        Ok(status)
    }

    fn provider_name(&self) -> &'static str {
        "heygen"
    }
}
