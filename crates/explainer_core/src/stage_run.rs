//! Per-stage execution record.

use crate::{Script, VideoResult, VoiceoverResult};
use serde::{Deserialize, Serialize};

/// Stable identifier of a pipeline stage.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum StageId {
    /// Script generation
    #[display("script")]
    Script,
    /// Voice synthesis
    #[display("voiceover")]
    Voiceover,
    /// Avatar video rendering
    #[display("video")]
    Video,
}

/// Output of any stage, used where runs of different stages share a list.
#[derive(Debug, Clone, PartialEq, Serialize, derive_more::From)]
#[serde(untagged)]
pub enum StageOutput {
    /// Script stage output
    Script(Script),
    /// Voiceover stage output
    Voiceover(VoiceoverResult),
    /// Visual stage output
    Video(VideoResult),
}

/// Record of one stage invocation.
///
/// A run carries an output exactly when its error list is empty; the two
/// constructors are the only way to build one.
///
/// # Examples
///
/// ```
/// use explainer_core::{StageId, StageRun};
///
/// let run: StageRun<u32> = StageRun::failed(
///     StageId::Voiceover,
///     "Voiceover Generator",
///     "2026-10-18T09:30:00.000Z".to_string(),
///     vec!["quota exceeded".to_string()],
/// );
/// assert!(run.output().is_none());
/// assert_eq!(run.errors(), ["quota exceeded"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageRun<T> {
    stage_id: StageId,
    stage_name: String,
    started_at: String,
    finished_at: String,
    output: Option<T>,
    errors: Vec<String>,
}

impl<T> StageRun<T> {
    /// Successful run, finishing now.
    pub fn succeeded(
        stage_id: StageId,
        stage_name: impl Into<String>,
        started_at: String,
        output: T,
    ) -> Self {
        Self {
            stage_id,
            stage_name: stage_name.into(),
            started_at,
            finished_at: crate::timestamp_now(),
            output: Some(output),
            errors: Vec::new(),
        }
    }

    /// Failed run, finishing now.
    ///
    /// An empty `errors` list is replaced with a single "Unknown error" entry.
    pub fn failed(
        stage_id: StageId,
        stage_name: impl Into<String>,
        started_at: String,
        errors: Vec<String>,
    ) -> Self {
        let errors = if errors.is_empty() {
            vec!["Unknown error".to_string()]
        } else {
            errors
        };
        Self {
            stage_id,
            stage_name: stage_name.into(),
            started_at,
            finished_at: crate::timestamp_now(),
            output: None,
            errors,
        }
    }

    /// Stage that produced this run.
    pub fn stage_id(&self) -> StageId {
        self.stage_id
    }

    /// Display name of the stage.
    pub fn stage_name(&self) -> &str {
        &self.stage_name
    }

    /// When the stage started.
    pub fn started_at(&self) -> &str {
        &self.started_at
    }

    /// When the stage finished.
    pub fn finished_at(&self) -> &str {
        &self.finished_at
    }

    /// Stage output, present only on success.
    pub fn output(&self) -> Option<&T> {
        self.output.as_ref()
    }

    /// Error messages, empty on success.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether the stage produced an output.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Transform the output, keeping the record intact.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StageRun<U> {
        StageRun {
            stage_id: self.stage_id,
            stage_name: self.stage_name,
            started_at: self.started_at,
            finished_at: self.finished_at,
            output: self.output.map(f),
            errors: self.errors,
        }
    }
}

impl<T: Into<StageOutput>> StageRun<T> {
    /// Erase the output type so runs of different stages can share a list.
    pub fn erase(self) -> StageRun<StageOutput> {
        self.map(Into::into)
    }
}
