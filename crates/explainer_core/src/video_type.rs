//! Workflow variant.

use serde::{Deserialize, Serialize};

/// Which flavour of explainer video to produce.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    /// Product-level explainer with no client-specific content
    #[default]
    #[display("generic")]
    Generic,
    /// Explainer tailored to a client profile
    #[display("personalized")]
    Personalized,
}

impl std::str::FromStr for VideoType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generic" => Ok(VideoType::Generic),
            "personalized" => Ok(VideoType::Personalized),
            _ => Err(format!("Unknown video type: {}", s)),
        }
    }
}
