use serde_json::Value;

use crate::registry::RegistryMetrics;
use crate::route_spec::RouteSpec;
use crate::router::RouterOptions;
use crate::trie::{RouteTrie, TrieResult};
use crate::types::RouteIndex;

#[derive(Debug)]
pub struct RouteRegistry<H> {
    tree: RouteTrie<H>,
    metrics: RegistryMetrics,
}

impl<H> RouteRegistry<H> {
    pub fn new(options: RouterOptions) -> Self {
        Self {
            tree: RouteTrie::with_options(options),
            metrics: RegistryMetrics::default(),
        }
    }

    pub fn insert(&mut self, path: &str, spec: RouteSpec<H>) -> TrieResult<Vec<RouteIndex>> {
        let before = self.snapshot();
        let result = self.tree.add_route(path, spec);
        self.record_since(before);
        result
    }

    pub fn insert_value<F>(
        &mut self,
        path: &str,
        value: &Value,
        resolve: F,
    ) -> TrieResult<Vec<RouteIndex>>
    where
        F: Fn(&str) -> Option<H>,
    {
        let before = self.snapshot();
        let result = self.tree.add_route_value(path, value, resolve);
        self.record_since(before);
        result
    }

    /// Moves the built trie out, leaving an empty one behind.
    pub fn take_tree(&mut self) -> RouteTrie<H> {
        let options = self.tree.options().clone();
        std::mem::replace(&mut self.tree, RouteTrie::with_options(options))
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }

    fn snapshot(&self) -> (RouteIndex, usize) {
        (self.tree.next_index(), self.tree.len())
    }

    // Counts from the trie rather than the returned indices so that routes
    // registered before a failure are recorded too.
    fn record_since(&mut self, (index, live): (RouteIndex, usize)) {
        let registered = (self.tree.next_index() - index) as usize;
        let added = self.tree.len() - live;
        self.metrics.record(registered, added);
    }
}
