//! Capability (external provider) error types.

/// Specific failure conditions of an external capability call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CapabilityErrorKind {
    /// Transport-level failure (connection refused, TLS, body read)
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Provider answered with a non-success status
    #[display("{} request failed ({}): {}", provider, status, message)]
    Api {
        /// Provider name
        provider: String,
        /// HTTP status code
        status: u16,
        /// Diagnostic text returned by the provider
        message: String,
    },
    /// Response could not be parsed into the expected shape
    #[display("{}", _0)]
    Parse(String),
    /// Script shape rule violated (empty sections, negative duration, ...)
    #[display("Invalid script: {}", _0)]
    InvalidScript(String),
    /// Free-form provider failure
    #[display("{}", _0)]
    Provider(String),
}

/// Error raised by a capability client.
///
/// # Examples
///
/// ```
/// use explainer_error::{CapabilityError, CapabilityErrorKind};
///
/// let err = CapabilityError::new(CapabilityErrorKind::Api {
///     provider: "elevenlabs".to_string(),
///     status: 429,
///     message: "quota exceeded".to_string(),
/// });
/// assert!(format!("{}", err).contains("elevenlabs request failed (429)"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Capability Error: {} at line {} in {}", kind, line, file)]
pub struct CapabilityError {
    /// The specific error condition
    pub kind: CapabilityErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CapabilityError {
    /// Create a new CapabilityError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CapabilityErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
