//! One-shot viewport subscriptions
//!
//! Scroll reveals and counters fire the first time their element enters the
//! viewport and never again. [`OneShot`] tracks that lifecycle per element:
//! subscribe, fire at most once, unsubscribe on fire.

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct OneShot<K> {
    watching: HashSet<K>,
    fired: HashSet<K>,
}

impl<K: Eq + Hash + Copy> Default for OneShot<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Copy> OneShot<K> {
    pub fn new() -> Self {
        Self {
            watching: HashSet::new(),
            fired: HashSet::new(),
        }
    }

    /// Start watching `key`. Returns false if it is already watched or has
    /// already fired.
    pub fn subscribe(&mut self, key: K) -> bool {
        if self.fired.contains(&key) {
            return false;
        }
        self.watching.insert(key)
    }

    /// Mark `key` as already fired without watching it (e.g. revealed by
    /// some other path before observation began).
    pub fn mark_fired(&mut self, key: K) {
        self.watching.remove(&key);
        self.fired.insert(key);
    }

    /// Report an intersection change. Returns true exactly once per key: on
    /// the first report with `intersecting == true` while subscribed.
    pub fn notify(&mut self, key: K, intersecting: bool) -> bool {
        if !intersecting || !self.watching.remove(&key) {
            return false;
        }
        self.fired.insert(key);
        true
    }

    pub fn is_watching(&self, key: K) -> bool {
        self.watching.contains(&key)
    }

    pub fn has_fired(&self, key: K) -> bool {
        self.fired.contains(&key)
    }

    pub fn watching_count(&self) -> usize {
        self.watching.len()
    }
}

/// Rank of `element` among the marked elements of a stagger-enabled parent.
///
/// `marked` lists the marked descendants of the parent in document order.
/// Returns `None` when the parent is not stagger-enabled or the element is
/// not among them.
pub fn stagger_index<T: PartialEq>(parent_staggers: bool, marked: &[T], element: &T) -> Option<usize> {
    if !parent_staggers {
        return None;
    }
    marked.iter().position(|m| m == element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_fires_without_entry() {
        let mut obs = OneShot::new();
        assert!(obs.subscribe(1u32));
        assert!(!obs.notify(1, false));
        assert!(!obs.notify(1, false));
        assert!(!obs.has_fired(1));
        assert!(obs.is_watching(1));
    }

    #[test]
    fn test_fires_once_then_unsubscribes() {
        let mut obs = OneShot::new();
        obs.subscribe(3u32);
        assert!(obs.notify(3, true));
        assert!(!obs.is_watching(3));

        // Scroll out and back in
        assert!(!obs.notify(3, false));
        assert!(!obs.notify(3, true));

        // Re-subscribing a fired key is refused
        assert!(!obs.subscribe(3));
        assert_eq!(obs.watching_count(), 0);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut obs: OneShot<u32> = OneShot::new();
        assert!(!obs.notify(9, true));
        assert!(!obs.has_fired(9));
    }

    #[test]
    fn test_mark_fired_skips_observation() {
        let mut obs = OneShot::new();
        obs.subscribe(5u32);
        obs.mark_fired(5);
        assert!(!obs.notify(5, true));
        assert!(!obs.subscribe(5));
    }

    #[test]
    fn test_stagger_indices_in_document_order() {
        let marked = ["a", "b", "c"];
        assert_eq!(stagger_index(true, &marked, &"a"), Some(0));
        assert_eq!(stagger_index(true, &marked, &"b"), Some(1));
        assert_eq!(stagger_index(true, &marked, &"c"), Some(2));
        assert_eq!(stagger_index(false, &marked, &"b"), None);
        assert_eq!(stagger_index(true, &marked, &"z"), None);
    }
}
