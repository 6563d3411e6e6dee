//! Capability traits for the explainer video pipeline.
//!
//! The pipeline never talks to a provider directly. It depends only on the
//! three narrow capabilities defined here, each of which may be backed by an
//! HTTP adapter, a mock, or a test stub.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capabilities;
mod traits;

pub use capabilities::Capabilities;
pub use traits::{RenderRequest, ScriptRequest, ScriptWriter, SpeechSynthesizer, VideoRenderer};
