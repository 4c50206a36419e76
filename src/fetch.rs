use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Lifetime scope for the requests a view issues.
///
/// Every in-flight fetch captures a [`FetchToken`] before dispatch and
/// checks it when the response lands. Tearing the view down (or switching
/// a filter, which restarts its requests) bumps the generation, so a late
/// response for the old view applies nothing. This also removes the
/// last-write-wins race between a slow early request and a fast later one:
/// only responses from the current generation are accepted.
#[derive(Debug, Default)]
pub struct ViewScope {
    generation: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct FetchToken {
    generation: Arc<AtomicU64>,
    issued_at: u64,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current generation for one request.
    pub fn token(&self) -> FetchToken {
        FetchToken {
            generation: Arc::clone(&self.generation),
            issued_at: self.generation.load(Ordering::Acquire),
        }
    }

    /// Invalidate all outstanding tokens. Called on view teardown and
    /// whenever the view restarts its requests with new parameters.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl FetchToken {
    pub fn is_live(&self) -> bool {
        self.generation.load(Ordering::Acquire) == self.issued_at
    }

    /// Gate a response through the token: `Some(value)` while the scope is
    /// still current, `None` once it has been cancelled or superseded.
    pub fn accept<T>(&self, value: T) -> Option<T> {
        if self.is_live() {
            Some(value)
        } else {
            None
        }
    }
}
