use super::node::NodeId;
use super::tree::RouteTrie;
use crate::types::RouteIndex;

const TRAVERSAL_STACK_CAPACITY: usize = 64;

/// A live route as seen by [`RouteTrie::routes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo<'a, H> {
    /// Pattern rebuilt from the trie, with empty segments collapsed.
    pub pattern: String,
    pub index: RouteIndex,
    pub handler: &'a H,
}

impl<H> RouteTrie<H> {
    /// Lists every live route in registration order.
    pub fn routes(&self) -> Vec<RouteInfo<'_, H>> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<(NodeId, String)> = Vec::with_capacity(TRAVERSAL_STACK_CAPACITY);
        stack.push((NodeId::ROOT, String::new()));

        while let Some((id, pattern)) = stack.pop() {
            let node = self.node(id);
            if let Some(route) = node.route() {
                let display = if pattern.is_empty() {
                    "/".to_string()
                } else {
                    pattern.clone()
                };
                out.push(RouteInfo {
                    pattern: display,
                    index: route.index,
                    handler: &route.handler,
                });
            }

            let children = node
                .static_children
                .values()
                .chain(node.param_children.iter());
            for &child in children {
                let mut child_pattern = pattern.clone();
                child_pattern.push('/');
                child_pattern.push_str(self.node(child).segment());
                stack.push((child, child_pattern));
            }
        }

        out.sort_unstable_by_key(|info| info.index);
        out
    }
}
