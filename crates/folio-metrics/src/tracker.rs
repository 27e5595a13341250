//! Per-mount view tracking with exactly-once and fallback semantics.

use std::collections::{HashMap, HashSet};

use crate::client::MetricsApi;

/// Guard owned by one mounted view.
///
/// `on_display` registers a view and fetches the count exactly once per
/// document identifier for the tracker's lifetime; duplicate triggers
/// for the same identifier return the held count without touching the
/// network. Failures are logged and degrade to the last known count
/// (zero before any success) — they never propagate to the caller.
///
/// Cancellation: all work happens inside the returned future, so
/// dropping an in-flight `on_display` call (the view was torn down)
/// discards the result; a stale count can never reach a view that is
/// no longer displayed.
pub struct ViewTracker<A: MetricsApi> {
    api: A,
    registered: HashSet<String>,
    last_known: HashMap<String, u64>,
}

impl<A: MetricsApi> ViewTracker<A> {
    /// Create a tracker over the given metrics transport.
    pub fn new(api: A) -> Self {
        Self {
            api,
            registered: HashSet::new(),
            last_known: HashMap::new(),
        }
    }

    /// Record that `id` is being displayed and return the view count.
    pub async fn on_display(&mut self, id: &str) -> u64 {
        if self.registered.contains(id) {
            return self.last_known.get(id).copied().unwrap_or(0);
        }
        self.registered.insert(id.to_string());

        match self.api.record_and_fetch(id).await {
            Ok(metrics) => {
                self.last_known.insert(id.to_string(), metrics.views);
                metrics.views
            }
            Err(e) => {
                log::warn!("metrics unavailable for '{id}': {e}");
                self.last_known.get(id).copied().unwrap_or(0)
            }
        }
    }

    /// Last count seen for `id`, without any network traffic.
    pub fn last_known(&self, id: &str) -> u64 {
        self.last_known.get(id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ViewMetrics;
    use async_trait::async_trait;
    use folio_core::{Error, Result};
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    /// Mock transport: counts calls, optionally fails.
    #[derive(Default)]
    struct MockApi {
        registers: AtomicU64,
        fetches: AtomicU64,
        fail: Mutex<bool>,
        views: AtomicU64,
    }

    impl MockApi {
        fn with_views(views: u64) -> Self {
            let api = Self::default();
            api.views.store(views, Ordering::SeqCst);
            api
        }

        fn set_fail(&self, fail: bool) {
            *self.fail.lock().unwrap() = fail;
        }

        fn failing(&self) -> bool {
            *self.fail.lock().unwrap()
        }
    }

    #[async_trait]
    impl MetricsApi for MockApi {
        async fn register_view(&self, id: &str) -> Result<()> {
            if self.failing() {
                return Err(Error::metrics(format!("register '{id}': down")));
            }
            self.registers.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn fetch(&self, id: &str) -> Result<ViewMetrics> {
            if self.failing() {
                return Err(Error::metrics(format!("fetch '{id}': down")));
            }
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(ViewMetrics {
                views: self.views.load(Ordering::SeqCst),
                ..ViewMetrics::default()
            })
        }
    }

    #[tokio::test]
    async fn test_on_display_registers_then_fetches() {
        let mut tracker = ViewTracker::new(MockApi::with_views(42));

        let views = tracker.on_display("doc").await;

        assert_eq!(views, 42);
        assert_eq!(tracker.api.registers.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.api.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_duplicate_display_is_idempotent() {
        let mut tracker = ViewTracker::new(MockApi::with_views(7));

        let first = tracker.on_display("doc").await;
        let second = tracker.on_display("doc").await;

        assert_eq!(first, 7);
        assert_eq!(second, 7);
        // One register, one fetch — not two.
        assert_eq!(tracker.api.registers.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.api.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_distinct_documents_each_register() {
        let mut tracker = ViewTracker::new(MockApi::with_views(1));

        tracker.on_display("a").await;
        tracker.on_display("b").await;

        assert_eq!(tracker.api.registers.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failure_degrades_to_zero_first() {
        let api = MockApi::with_views(9);
        api.set_fail(true);
        let mut tracker = ViewTracker::new(api);

        let views = tracker.on_display("doc").await;

        assert_eq!(views, 0);
        assert_eq!(tracker.last_known("doc"), 0);
    }

    #[tokio::test]
    async fn test_failure_keeps_last_known_value() {
        let mut tracker = ViewTracker::new(MockApi::with_views(5));

        // Success stores 5; subsequent duplicate trigger returns it even
        // after the service goes down.
        assert_eq!(tracker.on_display("doc").await, 5);
        tracker.api.set_fail(true);
        assert_eq!(tracker.on_display("doc").await, 5);
        assert_eq!(tracker.last_known("doc"), 5);
    }

    #[tokio::test]
    async fn test_register_failure_skips_fetch() {
        let api = MockApi::with_views(3);
        api.set_fail(true);
        let mut tracker = ViewTracker::new(api);

        tracker.on_display("doc").await;

        // Sequenced: no fetch may happen before a settled register.
        assert_eq!(tracker.api.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_last_known_without_any_display() {
        let tracker = ViewTracker::new(MockApi::default());
        assert_eq!(tracker.last_known("never-shown"), 0);
    }

    /// Transport whose registration never settles, so an `on_display`
    /// call can be caught (and dropped) mid-flight.
    #[derive(Default)]
    struct StalledApi {
        fetches: AtomicU64,
    }

    #[async_trait]
    impl MetricsApi for StalledApi {
        async fn register_view(&self, _id: &str) -> Result<()> {
            std::future::pending::<()>().await;
            Ok(())
        }

        async fn fetch(&self, _id: &str) -> Result<ViewMetrics> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(ViewMetrics::default())
        }
    }

    #[test]
    fn test_dropped_in_flight_display_discards_result() {
        let mut tracker = ViewTracker::new(StalledApi::default());

        {
            let mut display = tokio_test::task::spawn(tracker.on_display("doc"));
            assert!(display.poll().is_pending());
        } // torn down mid-flight

        // No fetch happened and no count was recorded.
        assert_eq!(tracker.api.fetches.load(Ordering::SeqCst), 0);
        assert_eq!(tracker.last_known("doc"), 0);
    }
}
