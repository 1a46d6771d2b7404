//! "Observe once, then unsubscribe."
//!
//! Reveal, skill bars and chip stagger all want the same thing: run an
//! effect the first time a target becomes visible and never again.
//! [`OnceObserver`] holds the set of targets still waiting and dispatches
//! batches of visibility entries against it.

use serde::{Deserialize, Serialize};

/// Intersection options for one observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserveOptions {
    pub threshold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_margin: Option<String>,
}

impl ObserveOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: None,
        }
    }

    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = Some(margin.into());
        self
    }
}

/// Targets waiting for their first visible entry.
///
/// Keys only need equality, so browser element handles work as-is.
#[derive(Debug, Clone)]
pub struct OnceObserver<K> {
    pending: Vec<K>,
}

impl<K> Default for OnceObserver<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<K: PartialEq + Clone> OnceObserver<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start waiting on `key`. Observing twice is a no-op.
    pub fn observe(&mut self, key: K) {
        if !self.pending.contains(&key) {
            self.pending.push(key);
        }
    }

    pub fn is_observing(&self, key: &K) -> bool {
        self.pending.contains(key)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Apply `effect` to each entry whose target is still pending and which
    /// satisfies `visible`, then stop observing that target.
    ///
    /// Returns the targets that fired, so the caller can unsubscribe them
    /// from the underlying event source.
    pub fn dispatch<E>(
        &mut self,
        entries: impl IntoIterator<Item = E>,
        target: impl Fn(&E) -> K,
        visible: impl Fn(&E) -> bool,
        mut effect: impl FnMut(&E),
    ) -> Vec<K> {
        let mut fired = Vec::new();
        for entry in entries {
            if !visible(&entry) {
                continue;
            }
            let key = target(&entry);
            let Some(index) = self.pending.iter().position(|k| *k == key) else {
                continue;
            };
            self.pending.swap_remove(index);
            effect(&entry);
            fired.push(key);
        }
        fired
    }
}
