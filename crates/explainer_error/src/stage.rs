//! Stage-level error types.

/// Failure conditions detected by a pipeline stage itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StageErrorKind {
    /// The rendering job reported a failed terminal status
    #[display("Video rendering failed for job {}", job_id)]
    JobFailed {
        /// Provider job identifier
        job_id: String,
    },
    /// The rendering job completed but carried no video URL
    #[display("Video job {} completed without a video URL", job_id)]
    MissingVideoUrl {
        /// Provider job identifier
        job_id: String,
    },
    /// Stage input was malformed or incomplete
    #[display("Configuration error: {}", _0)]
    Configuration(String),
}

/// Error type for stage execution.
///
/// # Examples
///
/// ```
/// use explainer_error::{StageError, StageErrorKind};
///
/// let err = StageError::new(StageErrorKind::JobFailed {
///     job_id: "job-42".to_string(),
/// });
/// assert!(format!("{}", err).contains("job-42"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Stage Error: {} at line {} in {}", kind, line, file)]
pub struct StageError {
    /// The specific error condition
    pub kind: StageErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StageError {
    /// Create a new StageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
