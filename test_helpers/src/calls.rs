//! Side-effect recorders for closures handed to the combinators.
//!
//! # Examples
//!
//! ```
//! use test_helpers::CallCounter;
//!
//! let counter = CallCounter::new();
//! let double = counter.counted(|n: i32| n * 2);
//! assert_eq!(double(4), 8);
//! assert_eq!(counter.count(), 1);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, ensure};
use parking_lot::Mutex;

/// Shared counter incremented each time a wrapped closure runs.
///
/// Clones share the same count, so a counter can be moved into a closure
/// while the test keeps a handle for assertions.
#[derive(Clone, Debug, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    /// Creates a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a single invocation.
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of invocations recorded so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Wraps a one-argument closure so each call is counted before it runs.
    pub fn counted<A, R, F>(&self, f: F) -> impl FnOnce(A) -> R + use<A, R, F>
    where
        F: FnOnce(A) -> R,
    {
        let counter = self.clone();
        move |arg| {
            counter.hit();
            f(arg)
        }
    }

    /// Wraps a zero-argument supplier so each call is counted before it runs.
    pub fn counted_supplier<R, F>(&self, f: F) -> impl FnOnce() -> R + use<R, F>
    where
        F: FnOnce() -> R,
    {
        let counter = self.clone();
        move || {
            counter.hit();
            f()
        }
    }

    /// Checks the recorded count against `expected`.
    ///
    /// # Errors
    ///
    /// Returns an error describing both counts when they differ.
    pub fn ensure_count(&self, expected: usize) -> Result<()> {
        let actual = self.count();
        ensure!(
            actual == expected,
            "expected {expected} invocation(s), observed {actual}"
        );
        Ok(())
    }
}

/// Ordered record of labelled invocations.
///
/// Used to assert both *which* steps of a chain ran and in *what* order.
#[derive(Clone, Debug, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `label` to the log.
    pub fn record(&self, label: impl Into<String>) {
        self.0.lock().push(label.into());
    }

    /// Snapshot of every label recorded so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    /// Wraps a one-argument closure so `label` is recorded before it runs.
    pub fn step<A, R, F>(&self, label: &str, f: F) -> impl FnOnce(A) -> R + use<A, R, F>
    where
        F: FnOnce(A) -> R,
    {
        let log = self.clone();
        let owned = label.to_owned();
        move |arg| {
            log.record(owned);
            f(arg)
        }
    }
}
