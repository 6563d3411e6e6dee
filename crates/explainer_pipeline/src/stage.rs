//! The stage contract.

use async_trait::async_trait;
use explainer_core::{StageId, StageRun, timestamp_now};
use explainer_error::ExplainerResult;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tracing::{info, warn};

const UNKNOWN_ERROR: &str = "Unknown error";

/// Fixed identity of a stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageDescriptor {
    id: StageId,
    name: &'static str,
    description: &'static str,
}

impl StageDescriptor {
    /// Describe a stage.
    pub const fn new(id: StageId, name: &'static str, description: &'static str) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    /// Stable stage identifier.
    pub fn id(&self) -> StageId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-line description of what the stage does.
    pub fn description(&self) -> &'static str {
        self.description
    }
}

/// One step of the pipeline.
///
/// Implementors provide [`produce`](Stage::produce); callers use
/// [`run`](Stage::run), which never fails and never panics.
#[async_trait]
pub trait Stage: Send + Sync {
    /// Context the stage reads.
    type Input: Send + Sync;
    /// Value the stage produces.
    type Output: Send;

    /// Identity of this stage.
    fn descriptor(&self) -> &StageDescriptor;

    /// Do the stage's work.
    async fn produce(&self, input: &Self::Input) -> ExplainerResult<Self::Output>;

    /// Run the stage, recording timing and capturing every failure.
    ///
    /// Errors are recorded by their [`reason`](explainer_error::ExplainerError::reason);
    /// a panic inside [`produce`](Stage::produce) is recorded as "Unknown error".
    async fn run(&self, input: &Self::Input) -> StageRun<Self::Output> {
        let descriptor = self.descriptor();
        let started_at = timestamp_now();

        match AssertUnwindSafe(self.produce(input)).catch_unwind().await {
            Ok(Ok(output)) => {
                info!(stage = %descriptor.id(), "Stage completed");
                StageRun::succeeded(descriptor.id(), descriptor.name(), started_at, output)
            }
            Ok(Err(err)) => {
                let reason = err.reason();
                warn!(stage = %descriptor.id(), error = %reason, "Stage failed");
                StageRun::failed(descriptor.id(), descriptor.name(), started_at, vec![reason])
            }
            Err(_) => {
                warn!(stage = %descriptor.id(), "Stage panicked");
                StageRun::failed(
                    descriptor.id(),
                    descriptor.name(),
                    started_at,
                    vec![UNKNOWN_ERROR.to_string()],
                )
            }
        }
    }
}
