use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

struct Entry<V> {
    value: V,
    inserted_at: Instant,
}

/// Process-wide response cache with a fixed TTL per cache instance.
///
/// Keys are canonicalized request parameters (see
/// [`ProductQuery::cache_key`](crate::api::ProductQuery::cache_key)).
/// Expired entries are dropped on lookup; there is no background
/// sweeper, so the map never outgrows the set of keys actually asked
/// for within one TTL window.
pub struct TtlCache<V> {
    ttl: Duration,
    entries: Mutex<HashMap<String, Entry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    pub fn insert(&self, key: impl Into<String>, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    fn get_at(&self, key: &str, now: Instant) -> Option<V> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if now.duration_since(entry.inserted_at) < self.ttl => {
                Some(entry.value.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn insert_at(&self, key: impl Into<String>, value: V, now: Instant) {
        self.entries.lock().insert(
            key.into(),
            Entry {
                value,
                inserted_at: now,
            },
        );
    }
}
