use std::future::Future;
use std::sync::{Mutex, PoisonError};

use futures::future::{AbortHandle, Abortable};

/// Last-request-wins guard.
///
/// Each call to [`run`](Self::run) aborts whichever request is still in
/// flight through the same guard. The superseded call resolves to `None`
/// and its result is never observed.
#[derive(Debug, Default)]
pub struct LatestRequest {
    in_flight: Mutex<Option<AbortHandle>>,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn run<F, T>(&self, request: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.lock().replace(handle) {
            previous.abort();
        }
        Abortable::new(request, registration).await.ok()
    }

    /// Abort the in-flight request, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.lock().take() {
            handle.abort();
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<AbortHandle>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
