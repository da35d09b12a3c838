use super::ObjectRef;
use ahash::AHashSet;
use greenhouse_core::{GreenhouseResource, WatchEvent};
use parking_lot::RwLock;
use std::sync::Arc;

/// An immutable snapshot of a watched collection
///
/// Snapshot identity (the outer `Arc`) changes if and only if collection
/// content changed, so view layers can skip re-rendering by pointer
/// comparison.
pub type Snapshot<K> = Arc<Vec<Arc<K>>>;

/// A writable Store handle
///
/// This is exclusive since it's not safe to share a single `Writer`
/// between multiple watch streams; entries applied by one stream would
/// clobber the bookkeeping of the other.
#[derive(Debug)]
pub struct Writer<K> {
    shared: Arc<RwLock<Snapshot<K>>>,
}

impl<K> Default for Writer<K> {
    fn default() -> Self {
        Self {
            shared: Arc::new(RwLock::new(Arc::new(Vec::new()))),
        }
    }
}

impl<K: GreenhouseResource + Clone + PartialEq> Writer<K> {
    /// Return a read handle to the store
    ///
    /// Multiple read handles may be obtained, by either calling `as_reader`
    /// multiple times, or by calling `Store::clone()` afterwards.
    #[must_use]
    pub fn as_reader(&self) -> Store<K> {
        Store {
            shared: self.shared.clone(),
        }
    }

    /// Applies a single watch event to the store
    ///
    /// Returns `true` iff the collection content changed. The snapshot is
    /// recomputed, never mutated in place; readers holding the previous
    /// snapshot keep observing it unchanged.
    pub fn apply(&mut self, event: &WatchEvent<K>) -> bool {
        match event {
            WatchEvent::Added(items) => self.add(items),
            WatchEvent::Modified(items) => self.modify(items),
            WatchEvent::Deleted(items) => self.delete(items),
            WatchEvent::Error(err) => {
                tracing::debug!(code = err.code, reason = %err.reason, "ignoring in-band watch error");
                false
            }
        }
    }

    // Append items whose key is not yet present. Duplicate delivery of an
    // Add (and duplicates within one batch) leave the collection untouched.
    fn add(&mut self, items: &[K]) -> bool {
        let mut guard = self.shared.write();
        let current = &**guard;
        let mut known: AHashSet<ObjectRef> =
            current.iter().map(|obj| ObjectRef::from_obj(&**obj)).collect();
        let appended: Vec<Arc<K>> = items
            .iter()
            .filter(|item| known.insert(ObjectRef::from_obj(*item)))
            .map(|item| Arc::new(item.clone()))
            .collect();
        if appended.is_empty() {
            return false;
        }
        let mut next = Vec::with_capacity(current.len() + appended.len());
        next.extend(current.iter().cloned());
        next.extend(appended);
        *guard = Arc::new(next);
        true
    }

    // Replace entries with matching keys, but only when the incoming value
    // differs; redundant modifies must not produce a new snapshot identity.
    // Items with no matching key are ignored.
    fn modify(&mut self, items: &[K]) -> bool {
        let mut guard = self.shared.write();
        let current = &**guard;
        let mut next: Option<Vec<Arc<K>>> = None;
        for item in items {
            let key = ObjectRef::from_obj(item);
            let entries = next.as_deref().unwrap_or(current);
            let Some(pos) = entries
                .iter()
                .position(|obj| ObjectRef::from_obj(&**obj) == key)
            else {
                continue;
            };
            if *entries[pos] == *item {
                continue;
            }
            next.get_or_insert_with(|| current.to_vec())[pos] = Arc::new(item.clone());
        }
        match next {
            Some(vec) => {
                *guard = Arc::new(vec);
                true
            }
            None => false,
        }
    }

    // Drop exactly the entries whose key matches an incoming item's key.
    fn delete(&mut self, items: &[K]) -> bool {
        let mut guard = self.shared.write();
        let current = &**guard;
        let doomed: AHashSet<ObjectRef> = items.iter().map(ObjectRef::from_obj).collect();
        let next: Vec<Arc<K>> = current
            .iter()
            .filter(|obj| !doomed.contains(&ObjectRef::from_obj(&***obj)))
            .cloned()
            .collect();
        if next.len() == current.len() {
            return false;
        }
        *guard = Arc::new(next);
        true
    }
}

/// A readable cache of watched Greenhouse objects of kind `K`
///
/// Cloning will produce a new reference to the same backing store.
///
/// Cannot be constructed directly since one writer handle is required,
/// use [`store`] or `Writer::as_reader()` instead.
#[derive(Debug)]
pub struct Store<K> {
    shared: Arc<RwLock<Snapshot<K>>>,
}

impl<K> Clone for Store<K> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<K: GreenhouseResource> Store<K> {
    /// Retrieve the entry referred to by `key`, if it is in the cache
    ///
    /// Note that this is a cache and may be stale: deleted objects may
    /// still appear until the Deleted event arrives, and created objects
    /// may not appear yet.
    #[must_use]
    pub fn get(&self, key: &ObjectRef) -> Option<Arc<K>> {
        self.shared
            .read()
            .iter()
            .find(|obj| ObjectRef::from_obj(&***obj) == *key)
            .cloned()
    }

    /// Return the current snapshot
    ///
    /// Entries appear in arrival order; UI-level sort criteria are
    /// reapplied by the view layer.
    #[must_use]
    pub fn state(&self) -> Snapshot<K> {
        self.shared.read().clone()
    }

    /// Number of entries in the collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.read().len()
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Creates a (reader, writer) pair for a watched collection
#[must_use]
pub fn store<K: GreenhouseResource + Clone + PartialEq>() -> (Store<K>, Writer<K>) {
    let writer = Writer::default();
    (writer.as_reader(), writer)
}

#[cfg(test)]
mod tests {
    use super::store;
    use crate::reflector::ObjectRef;
    use greenhouse_core::{kinds::Plugin, WatchEvent};
    use rand::{
        distr::{Bernoulli, Uniform},
        Rng,
    };
    use std::{collections::HashMap, sync::Arc};

    fn plugin(name: &str) -> Plugin {
        let mut plugin = Plugin::default();
        plugin.metadata.name = Some(name.to_string());
        plugin
    }

    #[test]
    fn added_events_append_distinct_keys_in_any_order() {
        let forwards = vec![plugin("a"), plugin("b"), plugin("c")];
        let mut backwards = forwards.clone();
        backwards.reverse();

        for items in [forwards, backwards] {
            let (reader, mut writer) = store::<Plugin>();
            for item in &items {
                assert!(writer.apply(&WatchEvent::Added(vec![item.clone()])));
            }
            assert_eq!(reader.len(), 3);
        }
    }

    #[test]
    fn duplicate_add_delivery_is_idempotent() {
        let (reader, mut writer) = store::<Plugin>();
        assert!(writer.apply(&WatchEvent::Added(vec![plugin("a")])));
        let snapshot = reader.state();
        assert!(!writer.apply(&WatchEvent::Added(vec![plugin("a")])));
        assert!(Arc::ptr_eq(&snapshot, &reader.state()));
        assert_eq!(reader.len(), 1);
    }

    #[test]
    fn appended_entries_keep_arrival_order() {
        let (reader, mut writer) = store::<Plugin>();
        writer.apply(&WatchEvent::Added(vec![plugin("b"), plugin("a")]));
        writer.apply(&WatchEvent::Added(vec![plugin("c")]));
        let names: Vec<_> = reader
            .state()
            .iter()
            .map(|p| p.metadata.name.clone().unwrap())
            .collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn equal_modify_keeps_snapshot_identity() {
        let (reader, mut writer) = store::<Plugin>();
        writer.apply(&WatchEvent::Added(vec![plugin("a")]));
        let snapshot = reader.state();
        assert!(!writer.apply(&WatchEvent::Modified(vec![plugin("a")])));
        assert!(Arc::ptr_eq(&snapshot, &reader.state()));
    }

    #[test]
    fn differing_modify_replaces_in_place() {
        let (reader, mut writer) = store::<Plugin>();
        writer.apply(&WatchEvent::Added(vec![plugin("a"), plugin("b")]));
        let snapshot = reader.state();

        let mut changed = plugin("a");
        changed.spec.disabled = true;
        assert!(writer.apply(&WatchEvent::Modified(vec![changed])));

        assert!(!Arc::ptr_eq(&snapshot, &reader.state()));
        let state = reader.state();
        assert!(state[0].spec.disabled);
        assert_eq!(state[1].metadata.name.as_deref(), Some("b"));
    }

    #[test]
    fn modify_for_absent_key_is_ignored() {
        let (reader, mut writer) = store::<Plugin>();
        writer.apply(&WatchEvent::Added(vec![plugin("a")]));
        assert!(!writer.apply(&WatchEvent::Modified(vec![plugin("ghost")])));
        assert_eq!(reader.len(), 1);
    }

    // Regression test for the inverted delete filter in the original
    // console: partial deletions from a multi-entry collection must keep
    // every non-matching entry.
    #[test]
    fn delete_removes_exactly_matching_keys() {
        let (reader, mut writer) = store::<Plugin>();
        writer.apply(&WatchEvent::Added(vec![plugin("a"), plugin("b"), plugin("c")]));

        assert!(writer.apply(&WatchEvent::Deleted(vec![plugin("b")])));
        let names: Vec<_> = reader
            .state()
            .iter()
            .map(|p| p.metadata.name.clone().unwrap())
            .collect();
        assert_eq!(names, ["a", "c"]);

        assert!(writer.apply(&WatchEvent::Deleted(vec![plugin("a"), plugin("c")])));
        assert!(reader.is_empty());

        assert!(!writer.apply(&WatchEvent::Deleted(vec![plugin("ghost")])));
    }

    #[test]
    fn store_never_contains_duplicates() {
        let mut rng = rand::rng();
        let item_dist = Uniform::new(0_u8, 100).unwrap();
        let deleted_dist = Bernoulli::new(0.40).unwrap();
        let (reader, mut writer) = store::<Plugin>();
        for _ in 0_u32..10_000 {
            let obj = plugin(&rng.sample(item_dist).to_string());
            if rng.sample(deleted_dist) {
                writer.apply(&WatchEvent::Deleted(vec![obj]));
            } else {
                writer.apply(&WatchEvent::Added(vec![obj]));
            }
        }
        let mut seen = HashMap::new();
        for obj in reader.state().iter() {
            let key = ObjectRef::from_obj(&**obj);
            assert_eq!(seen.insert(key.clone(), ()), None, "duplicate entry for {key}");
        }
    }
}
