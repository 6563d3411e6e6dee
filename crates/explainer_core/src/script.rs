//! Generated video script.

use crate::{VideoType, new_id, timestamp_now};
use derive_getters::Getters;
use explainer_error::{CapabilityError, CapabilityErrorKind, ExplainerResult};
use serde::{Deserialize, Serialize};

/// One narrated section of a script.
///
/// Only `narration` and `durationSeconds` are required when deserializing
/// provider output; the descriptive fields default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptSection {
    /// Short section identifier (e.g. "hook")
    #[serde(default)]
    pub id: String,
    /// Human-readable section label
    #[serde(default)]
    pub label: String,
    /// Spoken length of the section
    pub duration_seconds: f64,
    /// Text to be spoken
    pub narration: String,
    /// What should appear on screen
    #[serde(default)]
    pub visual_cue: String,
    /// Optional short text overlay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_screen_text: Option<String>,
}

impl ScriptSection {
    /// Section with narration and duration only.
    pub fn new(id: impl Into<String>, narration: impl Into<String>, duration_seconds: f64) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            duration_seconds,
            narration: narration.into(),
            visual_cue: String::new(),
            on_screen_text: None,
        }
    }
}

/// A complete, validated script.
///
/// Scripts are only built through [`Script::new`], so every script has at
/// least one section and `total_duration_seconds` is the exact sum of the
/// section durations.
///
/// # Examples
///
/// ```
/// use explainer_core::{Script, ScriptSection, VideoType};
///
/// let script = Script::new(
///     VideoType::Generic,
///     None,
///     vec![
///         ScriptSection::new("hook", "Picture this.", 30.0),
///         ScriptSection::new("cta", "Book a demo.", 45.0),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(*script.total_duration_seconds(), 75.0);
/// assert_eq!(script.raw_narration(), "Picture this. Book a demo.");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    id: String,
    video_type: VideoType,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_name: Option<String>,
    total_duration_seconds: f64,
    sections: Vec<ScriptSection>,
    generated_at: String,
    raw_narration: String,
}

impl Script {
    /// Validate sections and assemble a script with a fresh id and timestamp.
    ///
    /// The client name is only kept for personalized scripts. Sections
    /// without an id are numbered `section-1`, `section-2`, ...
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityErrorKind::InvalidScript`] if `sections` is empty,
    /// a duration is negative or not finite, or a narration is blank.
    pub fn new(
        video_type: VideoType,
        client_name: Option<String>,
        mut sections: Vec<ScriptSection>,
    ) -> ExplainerResult<Self> {
        if sections.is_empty() {
            return Err(invalid("missing or empty sections array").into());
        }

        for (index, section) in sections.iter().enumerate() {
            if !section.duration_seconds.is_finite() || section.duration_seconds < 0.0 {
                return Err(invalid(format!(
                    "section {} has invalid duration {}",
                    index, section.duration_seconds
                ))
                .into());
            }
            if section.narration.trim().is_empty() {
                return Err(invalid(format!("section {} has empty narration", index)).into());
            }
        }

        for (index, section) in sections.iter_mut().enumerate() {
            if section.id.trim().is_empty() {
                section.id = format!("section-{}", index + 1);
            }
        }

        let total_duration_seconds = sections.iter().map(|s| s.duration_seconds).sum();
        let raw_narration = sections
            .iter()
            .map(|s| s.narration.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Self {
            id: new_id(),
            video_type,
            client_name: match video_type {
                VideoType::Personalized => client_name,
                VideoType::Generic => None,
            },
            total_duration_seconds,
            sections,
            generated_at: timestamp_now(),
            raw_narration,
        })
    }
}

#[track_caller]
fn invalid(message: impl Into<String>) -> CapabilityError {
    CapabilityError::new(CapabilityErrorKind::InvalidScript(message.into()))
}
