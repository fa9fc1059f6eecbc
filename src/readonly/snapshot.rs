use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use super::cache::{CacheStats, RouteCache};
use crate::trie::RouteTrie;
use crate::types::{MatchedRoute, RouteMatch};

/// Sealed, immutable routes plus an optional lookup cache. Safe to share
/// across threads when `H` is.
#[derive(Debug)]
pub struct RouterReadOnly<H> {
    trie: RouteTrie<H>,
    cache: Option<RwLock<RouteCache<H>>>,
    cache_stats: Option<CacheStats>,
    debug: bool,
}

impl<H: Clone> RouterReadOnly<H> {
    pub fn from_trie(trie: RouteTrie<H>) -> Self {
        let options = trie.options().clone();
        let cache = options
            .cache_routes
            .then(|| RwLock::new(RouteCache::new(options.cache_capacity)));
        let cache_stats = cache.as_ref().map(|_| CacheStats::default());

        Self {
            trie,
            cache,
            cache_stats,
            debug: options.debug,
        }
    }

    pub fn trie(&self) -> &RouteTrie<H> {
        &self.trie
    }

    /// Borrowing lookup that bypasses the cache.
    pub fn find_route(&self, path: &str) -> Option<RouteMatch<'_, H>> {
        self.trie.find_route(path)
    }

    #[tracing::instrument(level = "trace", skip(self, path), fields(path = %path))]
    pub fn find(&self, path: &str) -> Option<MatchedRoute<H>> {
        let Some(cache) = self.cache.as_ref() else {
            return self.trie.find_route(path).map(RouteMatch::into_owned);
        };

        let guard = cache.upgradable_read();
        if let Some(hit) = guard.peek(path) {
            if let Some(stats) = &self.cache_stats {
                stats.record_hit();
            }
            if self.debug {
                tracing::event!(tracing::Level::DEBUG, cache = "hit", path = %path, "router cache hit");
            }
            let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
            guard.touch(path);
            return hit;
        }
        drop(guard);

        if let Some(stats) = &self.cache_stats {
            stats.record_miss();
        }
        if self.debug {
            tracing::event!(tracing::Level::DEBUG, cache = "miss", path = %path, "router cache miss");
        }

        let found = self.trie.find_route(path).map(RouteMatch::into_owned);
        cache.write().insert(path.to_string(), found.clone());
        found
    }

    /// `(hits, misses)` when caching is enabled.
    pub fn cache_metrics(&self) -> Option<(u64, u64)> {
        self.cache_stats.as_ref().map(CacheStats::snapshot)
    }
}
