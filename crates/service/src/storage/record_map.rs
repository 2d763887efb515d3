use std::{collections::HashMap, hash::Hash, sync::Arc};
use tokio::sync::RwLock;

/// Generic in-memory key-value map store.
///
/// Wraps a `HashMap<K, V>` behind an async `RwLock` and provides simple CRUD
/// helpers. Every helper holds the lock for its whole read-modify-write, so
/// concurrent writers to the same key serialise instead of interleaving.
/// Contents live as long as the process.
pub struct RecordMap<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

impl<K, V> RecordMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create an empty store.
    pub fn new() -> Arc<Self> {
        Arc::new(Self { inner: RwLock::new(HashMap::new()) })
    }

    /// List all values. Order is unspecified.
    pub async fn values(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    pub async fn contains_key(&self, key: &K) -> bool {
        self.inner.read().await.contains_key(key)
    }

    /// Insert a value under a freshly generated key.
    ///
    /// `next_key` is called until it yields a key not already present; `build`
    /// then receives that key and produces the value. Returns the stored value.
    pub async fn insert_new<G, B>(&self, mut next_key: G, build: B) -> V
    where
        G: FnMut() -> K,
        B: FnOnce(&K) -> V,
    {
        let mut map = self.inner.write().await;
        let key = loop {
            let candidate = next_key();
            if !map.contains_key(&candidate) {
                break candidate;
            }
        };
        let value = build(&key);
        map.insert(key, value.clone());
        value
    }

    /// Remove a key, returning the value it held.
    pub async fn remove(&self, key: &K) -> Option<V> {
        let mut map = self.inner.write().await;
        map.remove(key)
    }

    /// Apply a mutation to the value under `key` while holding the write lock.
    /// Returns `None` when the key is absent; the closure is not called then.
    pub async fn update<F, T>(&self, key: &K, f: F) -> Option<T>
    where
        F: FnOnce(&mut V) -> T,
    {
        let mut map = self.inner.write().await;
        map.get_mut(key).map(f)
    }
}
