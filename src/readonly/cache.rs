use hashbrown::HashMap as FastHashMap;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::MatchedRoute;

/// Bounded LRU of lookup results keyed by the raw request path. Misses are
/// cached as `None`.
#[derive(Debug)]
pub struct RouteCache<H> {
    capacity: usize,
    map: FastHashMap<String, Option<MatchedRoute<H>>>,
    order: VecDeque<String>,
}

impl<H: Clone> RouteCache<H> {
    pub fn new(capacity: usize) -> Self {
        let cap = capacity.max(1);
        Self {
            capacity: cap,
            map: FastHashMap::with_capacity(cap),
            order: VecDeque::with_capacity(cap),
        }
    }

    pub fn peek(&self, key: &str) -> Option<Option<MatchedRoute<H>>> {
        self.map.get(key).cloned()
    }

    pub fn touch(&mut self, key: &str) {
        if self.map.contains_key(key) {
            self.promote(key);
        }
    }

    pub fn insert(&mut self, key: String, result: Option<MatchedRoute<H>>) {
        if let Some(entry) = self.map.get_mut(key.as_str()) {
            *entry = result;
            self.promote(&key);
            return;
        }

        if self.order.len() == self.capacity
            && let Some(oldest) = self.order.pop_back()
        {
            self.map.remove(oldest.as_str());
        }

        self.order.push_front(key.clone());
        self.map.insert(key, result);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn promote(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|existing| existing == key) {
            self.order.remove(pos);
        }
        self.order.push_front(key.to_string());
    }
}

#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheStats {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}
