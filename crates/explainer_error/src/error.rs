//! Top-level error wrapper types.

use crate::{CapabilityError, ConfigError, PollError, StageError, StorageError};

/// Every error condition an explainer crate can produce.
///
/// # Examples
///
/// ```
/// use explainer_error::{ExplainerError, PollError, PollErrorKind};
///
/// let err: ExplainerError = PollError::new(PollErrorKind::Cancelled).into();
/// assert!(format!("{}", err).contains("Poll Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ExplainerErrorKind {
    /// External capability failure
    #[from(CapabilityError)]
    Capability(CapabilityError),
    /// Bounded wait ended without a terminal result
    #[from(PollError)]
    Poll(PollError),
    /// Stage-detected failure
    #[from(StageError)]
    Stage(StageError),
    /// Artifact persistence failure
    #[from(StorageError)]
    Storage(StorageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Explainer error with kind discrimination.
///
/// # Examples
///
/// ```
/// use explainer_error::{ConfigError, ExplainerResult};
///
/// fn might_fail() -> ExplainerResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert_eq!(might_fail().unwrap_err().reason(), "Missing field");
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Explainer Error: {}", _0)]
pub struct ExplainerError(Box<ExplainerErrorKind>);

impl ExplainerError {
    /// Create a new error from a kind.
    pub fn new(kind: ExplainerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ExplainerErrorKind {
        &self.0
    }

    /// Human-readable description without source location.
    pub fn reason(&self) -> String {
        match self.kind() {
            ExplainerErrorKind::Capability(e) => e.kind.to_string(),
            ExplainerErrorKind::Poll(e) => e.kind.to_string(),
            ExplainerErrorKind::Stage(e) => e.kind.to_string(),
            ExplainerErrorKind::Storage(e) => e.kind.to_string(),
            ExplainerErrorKind::Config(e) => e.message.clone(),
        }
    }
}

// Generic From implementation for any type that converts to ExplainerErrorKind
impl<T> From<T> for ExplainerError
where
    T: Into<ExplainerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for explainer operations.
pub type ExplainerResult<T> = std::result::Result<T, ExplainerError>;
