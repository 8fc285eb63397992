//! Scripted return values for stub doubles.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Pre-configured return values, keyed by operation tag.
///
/// Values queued with [`push`](StubScript::push) are served once each, in
/// push order, per tag. A value registered with
/// [`always`](StubScript::always) is served any time the tag's queue is
/// empty. Configuring a script never touches any call log; a double that is
/// both spy and stub records into its [`Spy`](crate::Spy) separately.
#[derive(Debug)]
pub struct StubScript<K, V> {
    /// Per-tag queue of one-shot values (in order).
    queues: HashMap<K, Vec<V>>,
    /// Per-tag cursor tracking position in the queue.
    cursors: HashMap<K, usize>,
    /// Per-tag values served whenever the queue is exhausted.
    fallbacks: HashMap<K, V>,
}

impl<K, V> Default for StubScript<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> StubScript<K, V> {
    /// Creates an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self { queues: HashMap::new(), cursors: HashMap::new(), fallbacks: HashMap::new() }
    }
}

impl<K, V> StubScript<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: Clone,
{
    /// Queues a value served exactly once, after previously queued values
    /// for the same tag.
    pub fn push(&mut self, tag: K, value: V) {
        self.cursors.entry(tag.clone()).or_insert(0);
        self.queues.entry(tag).or_default().push(value);
    }

    /// Registers a value served every time the tag's queue is exhausted.
    pub fn always(&mut self, tag: K, value: V) {
        self.fallbacks.insert(tag, value);
    }

    /// Consumes and returns the next scripted value for the given tag.
    ///
    /// # Panics
    ///
    /// Panics if nothing is scripted for the tag, printing the tag that was
    /// requested and the tags that are configured.
    pub fn next(&mut self, tag: &K) -> V {
        if let Some(queue) = self.queues.get(tag) {
            let cursor = self.cursors.get_mut(tag).expect("cursor must exist");
            if *cursor < queue.len() {
                let value = queue[*cursor].clone();
                *cursor += 1;
                return value;
            }
        }
        if let Some(value) = self.fallbacks.get(tag) {
            return value.clone();
        }
        let configured: Vec<String> = self
            .queues
            .keys()
            .chain(self.fallbacks.keys())
            .map(|k| format!("{k:?}"))
            .collect();
        panic!(
            "Stub script exhausted: nothing scripted for {tag:?}. Configured tags: [{}]",
            configured.join(", ")
        );
    }
}
