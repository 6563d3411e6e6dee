//! Provider configuration.
//!
//! Configuration is layered with the `config` crate, lowest precedence first:
//! - `~/.config/explainer/providers.{toml,json}` (optional)
//! - `./config/providers.{toml,json}` (optional)
//! - an explicit file passed by the caller (required when given)
//! - `EXPLAINER_*` environment variables, `__` separating nested keys
//!   (e.g. `EXPLAINER_ELEVENLABS__API_KEY`)
//!
//! Keys are snake_case; camelCase spellings (`apiKey`, `defaultVoiceId`)
//! are accepted as aliases so existing `providers.json` files keep loading.
//!
//! # Example
//!
//! ```toml
//! [anthropic]
//! api_key = "sk-ant-..."
//!
//! [elevenlabs]
//! api_key = "..."
//! default_voice_id = "21m00Tcm4TlvDq8ikWAM"
//!
//! [heygen]
//! api_key = "..."
//! avatar_id = "Abigail_expressive_2024112501"
//! ```

use config::{Config, Environment, File};
use explainer_error::{ConfigError, ExplainerError, ExplainerResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Script-writer (Anthropic Messages API) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthropicConfig {
    /// API key sent as `x-api-key`
    #[serde(alias = "apiKey", alias = "apikey")]
    pub api_key: String,
    /// Model identifier
    #[serde(default = "default_anthropic_model")]
    pub model: String,
    /// Completion budget per script
    #[serde(default = "default_max_tokens", alias = "maxTokens", alias = "maxtokens")]
    pub max_tokens: u32,
    /// API base URL
    #[serde(default = "default_anthropic_base_url", alias = "baseUrl", alias = "baseurl")]
    pub base_url: String,
}

impl AnthropicConfig {
    /// Config with the given key and documented defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: default_anthropic_model(),
            max_tokens: default_max_tokens(),
            base_url: default_anthropic_base_url(),
        }
    }
}

/// Text-to-speech (ElevenLabs) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevenLabsConfig {
    /// API key sent as `xi-api-key`
    #[serde(alias = "apiKey", alias = "apikey")]
    pub api_key: String,
    /// Voice used when none is requested ("Rachel" by default)
    #[serde(
        default = "default_elevenlabs_voice",
        alias = "defaultVoiceId",
        alias = "defaultvoiceid",
    )]
    pub default_voice_id: String,
    /// Synthesis model
    #[serde(default = "default_elevenlabs_model", alias = "modelId", alias = "modelid")]
    pub model_id: String,
    /// Voice stability (0.0-1.0)
    #[serde(default = "default_stability")]
    pub stability: f32,
    /// Similarity boost (0.0-1.0)
    #[serde(
        default = "default_similarity_boost",
        alias = "similarityBoost",
        alias = "similarityboost",
    )]
    pub similarity_boost: f32,
    /// API base URL
    #[serde(default = "default_elevenlabs_base_url", alias = "baseUrl", alias = "baseurl")]
    pub base_url: String,
}

impl ElevenLabsConfig {
    /// Config with the given key and documented defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            default_voice_id: default_elevenlabs_voice(),
            model_id: default_elevenlabs_model(),
            stability: default_stability(),
            similarity_boost: default_similarity_boost(),
            base_url: default_elevenlabs_base_url(),
        }
    }
}

/// Avatar video (HeyGen) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeyGenConfig {
    /// API key sent as `x-api-key`
    #[serde(alias = "apiKey", alias = "apikey")]
    pub api_key: String,
    /// Avatar presenting the video ("Abigail, upper body" by default)
    #[serde(default = "default_avatar", alias = "avatarId", alias = "avatarid")]
    pub avatar_id: String,
    /// Avatar voice ("Archer" by default)
    #[serde(default = "default_heygen_voice", alias = "voiceId", alias = "voiceid")]
    pub voice_id: String,
    /// Background template; a solid colour is used when absent
    #[serde(default, alias = "backgroundId", alias = "backgroundid")]
    pub background_id: Option<String>,
    /// Solid background colour used without a template
    #[serde(
        default = "default_background_color",
        alias = "backgroundColor",
        alias = "backgroundcolor",
    )]
    pub background_color: String,
    /// Output width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Output height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
    /// API base URL
    #[serde(default = "default_heygen_base_url", alias = "baseUrl", alias = "baseurl")]
    pub base_url: String,
}

impl HeyGenConfig {
    /// Config with the given key and documented defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            avatar_id: default_avatar(),
            voice_id: default_heygen_voice(),
            background_id: None,
            background_color: default_background_color(),
            width: default_width(),
            height: default_height(),
            base_url: default_heygen_base_url(),
        }
    }
}

fn default_anthropic_model() -> String {
    "claude-sonnet-4-5-20250929".to_string()
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_anthropic_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_elevenlabs_voice() -> String {
    "21m00Tcm4TlvDq8ikWAM".to_string()
}

fn default_elevenlabs_model() -> String {
    "eleven_monolingual_v1".to_string()
}

fn default_stability() -> f32 {
    0.5
}

fn default_similarity_boost() -> f32 {
    0.75
}

fn default_elevenlabs_base_url() -> String {
    "https://api.elevenlabs.io/v1".to_string()
}

fn default_avatar() -> String {
    "Abigail_expressive_2024112501".to_string()
}

fn default_heygen_voice() -> String {
    "453c20e1525a429080e2ad9e4b26f2cd".to_string()
}

fn default_background_color() -> String {
    "#0f172a".to_string()
}

fn default_width() -> u32 {
    1920
}

fn default_height() -> u32 {
    1080
}

fn default_heygen_base_url() -> String {
    "https://api.heygen.com".to_string()
}

/// Settings for every provider; an absent section selects the mock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Script writer
    #[serde(default)]
    pub anthropic: Option<AnthropicConfig>,
    /// Text-to-speech
    #[serde(default)]
    pub elevenlabs: Option<ElevenLabsConfig>,
    /// Avatar video renderer
    #[serde(default)]
    pub heygen: Option<HeyGenConfig>,
}

impl ProvidersConfig {
    /// Whether no provider is configured.
    pub fn is_empty(&self) -> bool {
        self.anthropic.is_none() && self.elevenlabs.is_none() && self.heygen.is_none()
    }

    /// Load configuration from a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ExplainerResult<Self> {
        debug!("Loading providers configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ExplainerError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ExplainerError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load layered configuration.
    ///
    /// Returns `Ok(None)` when no source configures any provider.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` is given but missing, or any source
    /// fails to parse.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> ExplainerResult<Option<Self>> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir");

        let mut builder = Config::builder();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/explainer/providers");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("config/providers").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("EXPLAINER")
                .prefix_separator("_")
                .separator("__"),
        );

        let config: ProvidersConfig = builder
            .build()
            .map_err(|e| {
                ExplainerError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ExplainerError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        if config.is_empty() {
            debug!("No provider configured");
            Ok(None)
        } else {
            Ok(Some(config))
        }
    }
}
