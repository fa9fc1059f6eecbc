use super::node::{NodeId, TrieNode};
use crate::matcher::find_best;
use crate::path::lookup_segments;
use crate::router::RouterOptions;
use crate::types::{RouteIndex, RouteMatch};

// Fixed ceiling for the registration counter
pub const MAX_ROUTES: RouteIndex = RouteIndex::MAX;

/// Segment trie mapping route patterns to handlers.
///
/// Registration takes `&mut self` and is the only writer; lookups take `&self`
/// and keep all of their state on the stack, so a built trie can be shared
/// across threads for concurrent lookups.
#[derive(Debug, Clone)]
pub struct RouteTrie<H> {
    pub(crate) nodes: Vec<TrieNode<H>>,
    pub(crate) next_index: RouteIndex,
    pub(crate) live_routes: usize,
    pub(crate) options: RouterOptions,
}

impl<H> Default for RouteTrie<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteTrie<H> {
    pub fn new() -> Self {
        Self::with_options(RouterOptions::default())
    }

    pub fn with_options(options: RouterOptions) -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            next_index: 0,
            live_routes: 0,
            options,
        }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    /// Number of patterns currently bound to a handler.
    pub fn len(&self) -> usize {
        self.live_routes
    }

    pub fn is_empty(&self) -> bool {
        self.live_routes == 0
    }

    /// Index the next registration will receive.
    pub fn next_index(&self) -> RouteIndex {
        self.next_index
    }

    #[inline(always)]
    pub(crate) fn node(&self, id: NodeId) -> &TrieNode<H> {
        &self.nodes[id.as_usize()]
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TrieNode<H> {
        &mut self.nodes[id.as_usize()]
    }

    /// Resolves `path` to the most recently registered route that matches it.
    ///
    /// A miss is `None`; lookups never fail.
    pub fn find_route(&self, path: &str) -> Option<RouteMatch<'_, H>> {
        tracing::event!(tracing::Level::TRACE, operation = "find_route", path = %path);

        let segments = lookup_segments(path);
        let candidate = find_best(self, &segments)?;
        let route = self.node(candidate.node).route()?;

        Some(RouteMatch {
            handler: &route.handler,
            params: candidate.params,
            index: route.index,
        })
    }
}
