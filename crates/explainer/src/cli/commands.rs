//! CLI argument definitions.

use clap::Parser;
use explainer::{ClientProfile, ConfigError, ExplainerResult, VideoType};
use std::path::PathBuf;
use std::time::Duration;

/// Explainer - generate a narrated avatar explainer video
#[derive(Parser, Debug)]
#[command(name = "explainer")]
#[command(about = "Generate a narrated avatar explainer video", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Video variant: generic or personalized
    #[arg(long = "type", default_value_t = VideoType::Generic)]
    pub video_type: VideoType,

    /// Client name (required for personalized videos)
    #[arg(long)]
    pub client: Option<String>,

    /// Client industry
    #[arg(long)]
    pub industry: Option<String>,

    /// Comma-separated client pain points
    #[arg(long, value_delimiter = ',')]
    pub pain_points: Vec<String>,

    /// Comma-separated use cases to highlight
    #[arg(long, value_delimiter = ',')]
    pub use_cases: Vec<String>,

    /// Directory for audio, reports and the manifest
    #[arg(long, default_value = "./data")]
    pub output: PathBuf,

    /// Providers configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Milliseconds between render status checks
    #[arg(long, default_value_t = 10_000)]
    pub poll_interval: u64,

    /// Milliseconds to wait for the render job
    #[arg(long, default_value_t = 600_000)]
    pub timeout: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Client profile assembled from the client flags.
    ///
    /// # Errors
    ///
    /// Personalized videos require `--client`.
    pub fn client_profile(&self) -> ExplainerResult<Option<ClientProfile>> {
        let Some(name) = self.client.as_deref().map(str::trim).filter(|n| !n.is_empty()) else {
            if self.video_type == VideoType::Personalized {
                return Err(ConfigError::new("Personalized videos require --client").into());
            }
            return Ok(None);
        };

        Ok(Some(ClientProfile {
            name: name.to_string(),
            industry: self.industry.clone(),
            pain_points: clean_list(&self.pain_points),
            use_cases: clean_list(&self.use_cases),
        }))
    }

    /// Pause between render status checks.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval)
    }

    /// Render wait budget.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }
}

fn clean_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
