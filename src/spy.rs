//! Generic call recorder backing spy doubles.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::transcript::format::Entry;

/// Records every call made on a double as an ordered log entry.
///
/// `Spy` is a handle: cloning it yields a second handle to the same log, so
/// a test can keep one handle for its assertions while injecting the other
/// into the unit under test. The log is append-only; entries appear in
/// invocation order, duplicates included.
///
/// The record type `C` is a tagged enum supplied by the test, one case per
/// observable operation, each case carrying the exact arguments passed.
#[derive(Debug)]
pub struct Spy<C> {
    calls: Arc<Mutex<Vec<C>>>,
}

impl<C> Clone for Spy<C> {
    fn clone(&self) -> Self {
        Self { calls: Arc::clone(&self.calls) }
    }
}

impl<C> Default for Spy<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Spy<C> {
    /// Creates a spy with an empty call log.
    #[must_use]
    pub fn new() -> Self {
        Self { calls: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Appends one call record to the log. Always succeeds.
    pub fn record(&self, call: C) {
        let mut guard = self.calls.lock().expect("call log lock poisoned");
        guard.push(call);
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.lock().expect("call log lock poisoned").len()
    }

    /// Whether no calls have been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: Clone> Spy<C> {
    /// Returns a snapshot of the call log in invocation order.
    ///
    /// The snapshot is a clone; mutating it never alters the recorded
    /// history.
    #[must_use]
    pub fn calls(&self) -> Vec<C> {
        self.calls.lock().expect("call log lock poisoned").clone()
    }
}

impl<C: Serialize> Spy<C> {
    /// Exports the log as transcript entries for a
    /// [`TranscriptWriter`](crate::transcript::TranscriptWriter).
    ///
    /// `double` names the double the entries came from (e.g. "analytics").
    ///
    /// # Panics
    ///
    /// Panics if a call record cannot be serialized to JSON.
    #[must_use]
    pub fn export(&self, double: &str) -> Vec<Entry> {
        let guard = self.calls.lock().expect("call log lock poisoned");
        (0u64..)
            .zip(guard.iter())
            .map(|(seq, call)| {
                let value =
                    serde_json::to_value(call).expect("failed to serialize call record");
                Entry::from_value(seq, double, value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_preserves_invocation_order() {
        let spy = Spy::new();
        spy.record("first");
        spy.record("second");
        spy.record("third");
        assert_eq!(spy.calls(), vec!["first", "second", "third"]);
    }

    #[test]
    fn repeated_calls_are_logged_once_per_invocation() {
        let spy = Spy::new();
        spy.record(7);
        spy.record(7);
        assert_eq!(spy.calls(), vec![7, 7]);
        assert_eq!(spy.len(), 2);
    }

    #[test]
    fn fresh_spy_is_empty() {
        let spy: Spy<u8> = Spy::new();
        assert!(spy.is_empty());
        assert_eq!(spy.calls(), Vec::<u8>::new());
    }

    #[test]
    fn cloned_handles_share_one_log() {
        let spy = Spy::new();
        let injected = spy.clone();
        injected.record("a");
        spy.record("b");
        assert_eq!(spy.calls(), vec!["a", "b"]);
        assert_eq!(injected.calls(), vec!["a", "b"]);
    }

    #[test]
    fn snapshot_is_independent_of_the_log() {
        let spy = Spy::new();
        spy.record(1);
        let mut snapshot = spy.calls();
        snapshot.push(2);
        assert_eq!(spy.calls(), vec![1]);
    }

    #[test]
    fn separately_constructed_spies_never_share_state() {
        let one = Spy::new();
        let two: Spy<&str> = Spy::new();
        one.record("only-on-one");
        assert!(two.is_empty());
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn export_splits_variant_tag_and_arguments() {
        #[derive(Serialize)]
        enum Call {
            Ping,
            Highlight { street: String },
        }

        let spy = Spy::new();
        spy.record(Call::Ping);
        spy.record(Call::Highlight { street: "Rua Augusta".into() });

        let entries = spy.export("analytics");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].seq, 0);
        assert_eq!(entries[0].double, "analytics");
        assert_eq!(entries[0].operation, "Ping");
        assert_eq!(entries[0].args, serde_json::Value::Null);
        assert_eq!(entries[1].seq, 1);
        assert_eq!(entries[1].operation, "Highlight");
        assert_eq!(entries[1].args, serde_json::json!({"street": "Rua Augusta"}));
    }
}
