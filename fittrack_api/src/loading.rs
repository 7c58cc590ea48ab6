//! Shared in-flight request counter driving the global loading indicator.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts requests currently in flight across every clone of the tracker.
///
/// The counter is incremented when a request starts and decremented when it
/// completes, whether it succeeded, failed, or was cancelled. Clones share
/// the same counter, so a tracker can be handed to both the client and
/// whatever renders the loading indicator.
#[derive(Clone, Debug, Default)]
pub struct LoadingTracker {
    in_flight: Arc<AtomicUsize>,
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a request as started. The returned guard decrements the counter
    /// when dropped, so every exit path of a request balances the increment.
    pub fn start(&self) -> LoadingGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    /// Number of requests currently in flight.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }
}

/// RAII guard for one in-flight request.
pub struct LoadingGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_balances_counter() {
        let tracker = LoadingTracker::new();
        assert!(!tracker.is_loading());

        let first = tracker.start();
        let second = tracker.start();
        assert_eq!(tracker.in_flight(), 2);

        drop(first);
        assert_eq!(tracker.in_flight(), 1);
        drop(second);
        assert!(!tracker.is_loading());
    }

    #[test]
    fn clones_share_the_counter() {
        let tracker = LoadingTracker::new();
        let observer = tracker.clone();

        let guard = tracker.start();
        assert_eq!(observer.in_flight(), 1);
        drop(guard);
        assert_eq!(observer.in_flight(), 0);
    }
}
