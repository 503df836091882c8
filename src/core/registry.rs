//! # Listener registry - event key to ordered listener sequence.
//!
//! The registry is the storage half of the emitter: a map from [`EventName`] to a
//! shared [`Sequence`], plus the first-registration order of keys.
//!
//! ## Architecture
//! ```text
//! Registry
//!   ├─ order:  [k1, k2, ...]                    (first-registration order)
//!   └─ events: k ─► Arc<Mutex<Vec<Arc<ListenerEntry>>>>
//!                          ▲
//!                          └─ cloned by emit(); survives remove() while a dispatch runs
//! ```
//!
//! ## Rules
//! - A key is created by [`get_or_create`](Registry::get_or_create) only (registration path).
//! - Lookups never create keys.
//! - A key disappears only through [`remove`](Registry::remove); emptying its
//!   sequence keeps the key.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::key::EventName;
use crate::listeners::ListenerEntry;

/// Ordered listener sequence for one key, shared with in-flight dispatches.
pub(crate) type Sequence<A> = Arc<Mutex<Vec<Arc<ListenerEntry<A>>>>>;

/// Key map with stable insertion order.
pub(crate) struct Registry<A>
where
    A: Send + Sync + 'static,
{
    events: HashMap<EventName, Sequence<A>>,
    order: Vec<EventName>,
}

impl<A> Registry<A>
where
    A: Send + Sync + 'static,
{
    pub(crate) fn new() -> Self {
        Self {
            events: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Sequence for `key`, if the key exists.
    pub(crate) fn get(&self, key: &EventName) -> Option<Sequence<A>> {
        self.events.get(key).cloned()
    }

    /// Sequence for `key`, creating an empty one (and recording the key order) if needed.
    pub(crate) fn get_or_create(&mut self, key: &EventName) -> Sequence<A> {
        if let Some(seq) = self.events.get(key) {
            return Arc::clone(seq);
        }
        let seq: Sequence<A> = Arc::new(Mutex::new(Vec::new()));
        self.events.insert(key.clone(), Arc::clone(&seq));
        self.order.push(key.clone());
        seq
    }

    /// Current length of `key`'s sequence (0 if absent).
    pub(crate) fn len_of(&self, key: &EventName) -> usize {
        self.events.get(key).map_or(0, |seq| seq.lock().len())
    }

    /// Detaches `key`'s sequence from the registry.
    pub(crate) fn remove(&mut self, key: &EventName) -> Option<Sequence<A>> {
        let seq = self.events.remove(key)?;
        self.order.retain(|k| k != key);
        Some(seq)
    }

    /// Keys in first-registration order.
    pub(crate) fn names(&self) -> Vec<EventName> {
        self.order.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_does_not_create() {
        let reg: Registry<()> = Registry::new();
        let key = EventName::from("a");
        assert!(reg.get(&key).is_none());
        assert_eq!(reg.len_of(&key), 0);
        assert!(reg.names().is_empty());
    }

    #[test]
    fn test_get_or_create_is_stable() {
        let mut reg: Registry<()> = Registry::new();
        let key = EventName::from("a");
        let first = reg.get_or_create(&key);
        let second = reg.get_or_create(&key);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(reg.names(), vec![key]);
    }

    #[test]
    fn test_order_survives_remove_and_readd() {
        let mut reg: Registry<()> = Registry::new();
        let (a, b) = (EventName::from("a"), EventName::from("b"));
        reg.get_or_create(&a);
        reg.get_or_create(&b);
        assert_eq!(reg.names(), vec![a.clone(), b.clone()]);

        let detached = reg.remove(&a);
        assert!(detached.is_some());
        assert!(reg.remove(&a).is_none());
        reg.get_or_create(&a);
        assert_eq!(reg.names(), vec![b, a]);
    }
}
