//! Polling error types.

/// Reasons a bounded wait ended without a terminal result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PollErrorKind {
    /// The deadline elapsed before the predicate held
    #[display("Polling timed out after {}ms", timeout_ms)]
    Timeout {
        /// Configured timeout in milliseconds
        timeout_ms: u64,
    },
    /// The caller's cancellation token fired
    #[display("Polling cancelled")]
    Cancelled,
}

/// Error type for polling operations.
///
/// # Examples
///
/// ```
/// use explainer_error::{PollError, PollErrorKind};
///
/// let err = PollError::new(PollErrorKind::Timeout { timeout_ms: 600_000 });
/// assert!(format!("{}", err).contains("600000ms"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Poll Error: {} at line {} in {}", kind, line, file)]
pub struct PollError {
    /// The specific error condition
    pub kind: PollErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PollError {
    /// Create a new PollError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PollErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
