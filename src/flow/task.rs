//! Async work spawned by the flow.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::provider::{GenerationError, TextGenerator};

/// One in-flight call to the generation provider.
///
/// The call runs on the tokio runtime as soon as the task is created. It can
/// be aborted; an aborted task settles as [`GenerationError::Cancelled`].
pub struct GenerationTask {
    handle: JoinHandle<Result<String, GenerationError>>,
}

impl GenerationTask {
    /// Spawn the provider call. Must be called within a tokio runtime.
    pub(crate) fn spawn(generator: Arc<dyn TextGenerator>, prompt: String) -> Self {
        let handle = tokio::spawn(async move {
            tracing::debug!(provider = generator.name(), "Generation started");
            generator.generate(&prompt).await
        });
        Self { handle }
    }

    /// Stop the call. Has no effect once it has finished.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Check if the call has settled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the outcome.
    pub async fn join(self) -> Result<String, GenerationError> {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => Err(GenerationError::Cancelled),
            Err(e) => {
                tracing::error!(error = %e, "Generation task panicked");
                Err(GenerationError::provider(None::<String>))
            }
        }
    }
}

/// Delay after which a copy acknowledgement should be cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AckTimer {
    epoch: u64,
    delay: Duration,
}

impl AckTimer {
    pub(crate) fn new(epoch: u64, delay: Duration) -> Self {
        Self { epoch, delay }
    }

    /// Epoch of the copy this timer belongs to.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleep for the delay and return the epoch to expire.
    pub async fn elapsed(self) -> u64 {
        tokio::time::sleep(self.delay).await;
        self.epoch
    }
}
