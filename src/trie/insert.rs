use serde_json::Value;

use super::node::{NodeId, RouteEntry, TrieNode, is_param_segment};
use super::tree::{MAX_ROUTES, RouteTrie};
use super::{TrieError, TrieResult};
use crate::path::{decode_component, pattern_segments};
use crate::route_spec::{RouteSpec, json_kind};
use crate::types::RouteIndex;

impl<H> RouteTrie<H> {
    /// Registers every route described by `spec` under `path` and returns the
    /// assigned indices in registration order.
    ///
    /// On error the routes registered before the failing one stay in place.
    pub fn add_route(&mut self, path: &str, spec: RouteSpec<H>) -> TrieResult<Vec<RouteIndex>> {
        let mut assigned = Vec::new();
        self.register(path, spec, &mut assigned)?;
        Ok(assigned)
    }

    /// Registers a dynamic route table. Strings name handlers and are resolved
    /// through `resolve`, arrays register each element at the same path and
    /// objects append their keys as path suffixes.
    pub fn add_route_value<F>(
        &mut self,
        path: &str,
        value: &Value,
        resolve: F,
    ) -> TrieResult<Vec<RouteIndex>>
    where
        F: Fn(&str) -> Option<H>,
    {
        let mut assigned = Vec::new();
        self.register_value(path, value, &resolve, &mut assigned)?;
        Ok(assigned)
    }

    fn register(
        &mut self,
        path: &str,
        spec: RouteSpec<H>,
        assigned: &mut Vec<RouteIndex>,
    ) -> TrieResult<()> {
        match spec {
            RouteSpec::Handler(handler) => {
                assigned.push(self.insert(path, handler)?);
            }
            RouteSpec::List(items) => {
                for item in items {
                    self.register(path, item, assigned)?;
                }
            }
            RouteSpec::Group(entries) => {
                for (suffix, item) in entries {
                    self.register(&join_suffix(path, &suffix), item, assigned)?;
                }
            }
        }
        Ok(())
    }

    fn register_value<F>(
        &mut self,
        path: &str,
        value: &Value,
        resolve: &F,
        assigned: &mut Vec<RouteIndex>,
    ) -> TrieResult<()>
    where
        F: Fn(&str) -> Option<H>,
    {
        match value {
            Value::String(name) => {
                let handler = resolve(name).ok_or_else(|| TrieError::UnknownHandler {
                    path: path.to_string(),
                    name: name.clone(),
                })?;
                assigned.push(self.insert(path, handler)?);
            }
            Value::Array(items) => {
                for item in items {
                    self.register_value(path, item, resolve, assigned)?;
                }
            }
            Value::Object(entries) => {
                for (suffix, item) in entries {
                    self.register_value(&join_suffix(path, suffix), item, resolve, assigned)?;
                }
            }
            other => {
                return Err(TrieError::InvalidSpecification {
                    path: path.to_string(),
                    found: json_kind(other),
                });
            }
        }
        Ok(())
    }

    /// Binds a single handler to `path`, replacing any handler already bound to
    /// the identical pattern.
    pub fn insert(&mut self, path: &str, handler: H) -> TrieResult<RouteIndex> {
        tracing::event!(tracing::Level::TRACE, operation = "insert", path = %path);

        if self.next_index == MAX_ROUTES {
            return Err(TrieError::RouteLimitExceeded { limit: MAX_ROUTES });
        }

        let segments = pattern_segments(path);
        let mut current = NodeId::ROOT;
        for segment in segments.iter().skip(1) {
            if segment.is_empty() {
                continue;
            }
            current = self.descend_or_create(current, segment, path)?;
        }

        let index = self.next_index;
        self.next_index += 1;

        let debug = self.options.debug;
        let node = self.node_mut(current);
        let previous = node.route.replace(RouteEntry { index, handler });
        match previous {
            Some(old) if debug => {
                tracing::event!(
                    tracing::Level::DEBUG,
                    path = %path,
                    replaced = old.index,
                    index,
                    "route overwrites an earlier registration"
                );
            }
            Some(_) => {}
            None => self.live_routes += 1,
        }

        Ok(index)
    }

    fn descend_or_create(&mut self, parent: NodeId, segment: &str, path: &str) -> TrieResult<NodeId> {
        if is_param_segment(segment) {
            let existing = self
                .node(parent)
                .param_children
                .iter()
                .copied()
                .find(|&child| self.node(child).segment() == segment);
            if let Some(child) = existing {
                return Ok(child);
            }

            let name = self.param_name_for(segment, path)?;
            let child = self.alloc_node(TrieNode::new(Box::from(segment), Some(name)));
            self.node_mut(parent).param_children.push(child);
            return Ok(child);
        }

        if let Some(&child) = self.node(parent).static_children.get(segment) {
            return Ok(child);
        }

        let child = self.alloc_node(TrieNode::new(Box::from(segment), None));
        self.node_mut(parent)
            .static_children
            .insert(Box::from(segment), child);
        Ok(child)
    }

    fn param_name_for(&self, segment: &str, path: &str) -> TrieResult<Box<str>> {
        let raw = &segment[1..];
        if !self.options.decode_parameters {
            return Ok(Box::from(raw));
        }

        decode_component(raw)
            .map(String::into_boxed_str)
            .map_err(|source| TrieError::InvalidParameterName {
                segment: segment.to_string(),
                path: path.to_string(),
                source,
            })
    }

    fn alloc_node(&mut self, node: TrieNode<H>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }
}

fn join_suffix(path: &str, suffix: &str) -> String {
    let mut joined = String::with_capacity(path.len() + suffix.len() + 1);
    joined.push_str(path);
    joined.push('/');
    joined.push_str(suffix);
    joined
}
