use std::borrow::Cow;

use super::ParamStack;
use crate::path::decode_component_cow;
use crate::trie::{NodeId, RouteTrie};
use crate::types::{RouteIndex, RouteParams};

/// Best full match found in a subtree.
#[derive(Debug)]
pub(crate) struct Candidate {
    pub(crate) node: NodeId,
    pub(crate) index: RouteIndex,
    pub(crate) params: RouteParams,
}

/// Exhaustive depth-first search for the highest-index route that consumes
/// every segment. `segments[0]` must be the root segment.
pub(crate) fn find_best<H>(trie: &RouteTrie<H>, segments: &[&str]) -> Option<Candidate> {
    let mut search = Search {
        trie,
        segments,
        decode: trie.options().decode_parameters,
        params: ParamStack::new(),
    };
    search.descend(NodeId::ROOT, 0, None)
}

struct Search<'t, 'p, H> {
    trie: &'t RouteTrie<H>,
    segments: &'p [&'p str],
    decode: bool,
    params: ParamStack<'t, 'p>,
}

impl<'t, 'p, H> Search<'t, 'p, H> {
    /// Matches `node_id` against `segments[cursor]`, then explores its children.
    fn descend(
        &mut self,
        node_id: NodeId,
        cursor: usize,
        last_match: Option<RouteIndex>,
    ) -> Option<Candidate> {
        let trie = self.trie;
        let node = trie.node(node_id);
        let segments = self.segments;
        let segment = *segments.get(cursor)?;

        let checkpoint = self.params.checkpoint();
        match node.param_name() {
            Some(name) => {
                let value = if self.decode {
                    match decode_component_cow(segment) {
                        Ok(value) => value,
                        Err(err) => {
                            tracing::event!(
                                tracing::Level::TRACE,
                                operation = "bind_param",
                                param = %name,
                                error = %err,
                                "segment does not decode; branch skipped"
                            );
                            return None;
                        }
                    }
                } else {
                    Cow::Borrowed(segment)
                };
                self.params.bind(name, value);
            }
            None if node.segment() != segment => return None,
            None => {}
        }

        let found = self.explore(node_id, cursor, last_match);
        self.params.truncate(checkpoint);
        found
    }

    fn explore(
        &mut self,
        node_id: NodeId,
        cursor: usize,
        mut last_match: Option<RouteIndex>,
    ) -> Option<Candidate> {
        let trie = self.trie;
        let node = trie.node(node_id);
        let mut result = None;

        if cursor + 1 == self.segments.len()
            && let Some(route) = node.route()
            && last_match.is_none_or(|last| route.index > last)
        {
            result = Some(Candidate {
                node: node_id,
                index: route.index,
                params: self.params.to_map(),
            });
            last_match = Some(route.index);
        }

        let next = self.skip_empty(cursor + 1);
        let segments = self.segments;
        let Some(&segment) = segments.get(next) else {
            return result;
        };

        // only the literal child equal to the segment can match; every
        // parameter child can
        let literal = node.static_children.get(segment).copied();
        for child in literal.into_iter().chain(node.param_children.iter().copied()) {
            if let Some(found) = self.descend(child, next, last_match) {
                last_match = Some(found.index);
                result = Some(found);
            }
        }

        result
    }

    fn skip_empty(&self, mut cursor: usize) -> usize {
        while cursor != 0 && cursor < self.segments.len() && self.segments[cursor].is_empty() {
            cursor += 1;
        }
        cursor
    }
}
