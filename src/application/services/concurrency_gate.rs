use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio_util::sync::CancellationToken;

/// Fixed-capacity admission control for the CPU-bound transcription stage.
///
/// The underlying engine uses several threads per job, so capacity is capped
/// at half the processor count. Waiters are served in FIFO order; a caller
/// canceled while waiting acquires nothing.
pub struct ConcurrencyGate {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

impl ConcurrencyGate {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "gate capacity must be positive");
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    pub fn for_cpu_count(cpus: usize) -> Self {
        Self::new(std::cmp::max(1, cpus / 2))
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Blocks until a permit is free or `cancel` fires. The permit releases
    /// itself when the returned guard drops, so a double release is not
    /// expressible.
    pub async fn acquire(&self, cancel: &CancellationToken) -> Result<GatePermit, GateError> {
        tokio::select! {
            _ = cancel.cancelled() => Err(GateError::Canceled),
            permit = Arc::clone(&self.semaphore).acquire_owned() => {
                let permit = permit.map_err(|_| GateError::Closed)?;
                Ok(GatePermit { _permit: permit })
            }
        }
    }
}

/// Opaque capacity token. Dropping it frees the slot.
pub struct GatePermit {
    _permit: OwnedSemaphorePermit,
}

#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("canceled while waiting for a transcription slot")]
    Canceled,
    #[error("gate closed")]
    Closed,
}
