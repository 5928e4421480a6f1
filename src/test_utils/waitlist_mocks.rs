//! In-memory `WaitlistSource` implementations for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::oneshot;

use crate::{
    app_error::{FetchError, FetchResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistSource,
};

/// Replays queued responses in order; an exhausted queue answers with an
/// empty list.
#[derive(Default)]
pub struct InMemoryWaitlistSource {
    responses: Mutex<VecDeque<FetchResult<Vec<WaitlistEntry>>>>,
    calls: AtomicUsize,
}

impl InMemoryWaitlistSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, entries: Vec<WaitlistEntry>) {
        self.responses.lock().unwrap().push_back(Ok(entries));
    }

    pub fn push_err(&self, err: FetchError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    /// Number of fetches issued so far (for test assertions).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistSource for InMemoryWaitlistSource {
    async fn list_entries(&self) -> FetchResult<Vec<WaitlistEntry>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

type Gate = oneshot::Receiver<FetchResult<Vec<WaitlistEntry>>>;

/// Each fetch waits until the test releases its gate, so tests decide the
/// order in which overlapping requests complete.
pub struct GatedWaitlistSource {
    gates: Mutex<VecDeque<Gate>>,
}

impl GatedWaitlistSource {
    /// Returns the source plus one sender per expected fetch, in call order.
    pub fn with_gates(
        count: usize,
    ) -> (Self, Vec<oneshot::Sender<FetchResult<Vec<WaitlistEntry>>>>) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) =
            (0..count).map(|_| oneshot::channel()).unzip();
        (
            Self {
                gates: Mutex::new(receivers),
            },
            senders,
        )
    }
}

#[async_trait]
impl WaitlistSource for GatedWaitlistSource {
    async fn list_entries(&self) -> FetchResult<Vec<WaitlistEntry>> {
        let gate = self.gates.lock().unwrap().pop_front();
        match gate {
            Some(gate) => gate
                .await
                .unwrap_or_else(|_| Err(FetchError::Network("gate dropped".into()))),
            None => Err(FetchError::Network("no gate left".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_entry;

    #[tokio::test]
    async fn in_memory_source_replays_in_order() {
        let source = InMemoryWaitlistSource::new();
        source.push_ok(vec![create_test_entry(1, |_| {})]);
        source.push_err(FetchError::Status(500));

        assert_eq!(source.list_entries().await.unwrap().len(), 1);
        assert_eq!(source.list_entries().await, Err(FetchError::Status(500)));
        assert!(source.list_entries().await.unwrap().is_empty());
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn gated_source_waits_for_release() {
        let (source, mut gates) = GatedWaitlistSource::with_gates(1);
        gates
            .remove(0)
            .send(Ok(vec![create_test_entry(3, |_| {})]))
            .unwrap();

        let entries = source.list_entries().await.unwrap();
        assert_eq!(entries[0].id, 3);
    }
}
