//! Error types for the explainer video pipeline.
//!
//! This crate provides the error taxonomy shared by every explainer crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Pipeline stages never surface these errors to their callers. They are
//! converted into stage run error entries using [`ExplainerError::reason`],
//! which yields the message without the source location.
//!
//! # Examples
//!
//! ```
//! use explainer_error::{CapabilityError, CapabilityErrorKind, ExplainerResult};
//!
//! fn synthesize() -> ExplainerResult<Vec<u8>> {
//!     Err(CapabilityError::new(CapabilityErrorKind::Provider(
//!         "quota exceeded".to_string(),
//!     )))?
//! }
//!
//! let err = synthesize().unwrap_err();
//! assert_eq!(err.reason(), "quota exceeded");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capability;
mod config;
mod error;
mod poll;
mod stage;
mod storage;

pub use capability::{CapabilityError, CapabilityErrorKind};
pub use config::ConfigError;
pub use error::{ExplainerError, ExplainerErrorKind, ExplainerResult};
pub use poll::{PollError, PollErrorKind};
pub use stage::{StageError, StageErrorKind};
pub use storage::{StorageError, StorageErrorKind};
