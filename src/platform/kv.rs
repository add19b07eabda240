//! Observable key-value store
//!
//! Values are opaque JSON blobs. Every write notifies subscribers with the
//! key that changed; subscribers run after the store's lock is released, so
//! a callback may read the store again.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use serde_json::Value;

use crate::{Error, Result};

/// Sent to subscribers after a key was written or removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEvent {
    pub key: String,
}

pub type Callback = Arc<dyn Fn(&StoreEvent) + Send + Sync>;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&self, key: &str, value: Value) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
    /// Register `callback` for every future write. Dropping the returned
    /// [`Subscription`] unsubscribes.
    fn subscribe(&self, callback: Callback) -> Subscription;
}

/// Subscriber list shared by store implementations
#[derive(Default)]
pub struct Subscribers {
    next: AtomicU64,
    entries: Mutex<Vec<(u64, Callback)>>,
}

impl Subscribers {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add(self: &Arc<Self>, callback: Callback) -> Subscription {
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        lock(&self.entries).push((id, callback));
        Subscription {
            id,
            owner: Arc::downgrade(self),
        }
    }

    fn remove(&self, id: u64) {
        lock(&self.entries).retain(|(i, _)| *i != id);
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call every subscriber; the list is snapshotted first
    pub fn notify(&self, key: &str) {
        let callbacks: Vec<Callback> = lock(&self.entries).iter().map(|(_, c)| c.clone()).collect();
        let event = StoreEvent { key: key.to_string() };
        log::debug!("store write {} -> {} subscriber(s)", key, callbacks.len());
        for cb in callbacks {
            cb(&event);
        }
    }
}

/// A poisoned lock still guards valid data here: writers never panic mid-update
fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Live registration; unsubscribes on drop
pub struct Subscription {
    id: u64,
    owner: Weak<Subscribers>,
}

impl Subscription {
    /// Keep the callback registered for the store's whole lifetime
    pub fn detach(self) {
        std::mem::forget(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(owner) = self.owner.upgrade() {
            owner.remove(self.id);
        }
    }
}

/// In-memory store, the default backing for tests and embedded use
pub struct MemoryKvStore {
    entries: Mutex<BTreeMap<String, Value>>,
    subscribers: Arc<Subscribers>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        MemoryKvStore {
            entries: Mutex::new(BTreeMap::new()),
            subscribers: Subscribers::new(),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        lock(&self.entries).keys().cloned().collect()
    }
}

impl Default for MemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(lock(&self.entries).get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        if key.is_empty() {
            return Err(Error::Store("empty key".to_string()));
        }
        lock(&self.entries).insert(key.to_string(), value);
        self.subscribers.notify(key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let existed = lock(&self.entries).remove(key).is_some();
        if existed {
            self.subscribers.notify(key);
        }
        Ok(())
    }

    fn subscribe(&self, callback: Callback) -> Subscription {
        self.subscribers.add(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn writes_notify_until_subscription_dropped() {
        let store = MemoryKvStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let sub = store.subscribe(Arc::new(move |e: &StoreEvent| sink.lock().unwrap().push(e.key.clone())));

        store.set("a", json!(1)).unwrap();
        store.remove("a").unwrap();
        store.remove("missing").unwrap();
        drop(sub);
        store.set("b", json!(2)).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["a".to_string(), "a".to_string()]);
        assert!(store.subscribers.is_empty());
    }

    #[test]
    fn subscribers_may_read_back() {
        let store = Arc::new(MemoryKvStore::new());
        let reader = store.clone();
        let got = Arc::new(Mutex::new(None));
        let sink = got.clone();
        store
            .subscribe(Arc::new(move |e: &StoreEvent| {
                *sink.lock().unwrap() = reader.get(&e.key).unwrap();
            }))
            .detach();
        store.set("k", json!("v")).unwrap();
        assert_eq!(*got.lock().unwrap(), Some(json!("v")));
    }
}
