use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;

use crate::types::RouteIndex;

pub(crate) const PARAM_PREFIX: char = ':';

/// Handle into the trie's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    #[inline(always)]
    pub(crate) fn as_usize(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteEntry<H> {
    pub(crate) index: RouteIndex,
    pub(crate) handler: H,
}

#[derive(Debug, Clone)]
pub(crate) struct TrieNode<H> {
    // raw segment text that leads here, `""` for the root
    pub(crate) segment: Box<str>,
    // decoded name when `segment` starts with ':'
    pub(crate) param_name: Option<Box<str>>,
    pub(crate) static_children: FastHashMap<Box<str>, NodeId>,
    // kept in insertion order
    pub(crate) param_children: SmallVec<[NodeId; 2]>,
    pub(crate) route: Option<RouteEntry<H>>,
}

impl<H> TrieNode<H> {
    pub(crate) fn root() -> Self {
        Self::new(Box::from(""), None)
    }

    pub(crate) fn new(segment: Box<str>, param_name: Option<Box<str>>) -> Self {
        Self {
            segment,
            param_name,
            static_children: FastHashMap::new(),
            param_children: SmallVec::new(),
            route: None,
        }
    }

    #[inline(always)]
    pub(crate) fn segment(&self) -> &str {
        &self.segment
    }

    #[inline(always)]
    pub(crate) fn param_name(&self) -> Option<&str> {
        self.param_name.as_deref()
    }

    #[inline(always)]
    pub(crate) fn route(&self) -> Option<&RouteEntry<H>> {
        self.route.as_ref()
    }
}

#[inline(always)]
pub(crate) fn is_param_segment(segment: &str) -> bool {
    segment.starts_with(PARAM_PREFIX)
}
