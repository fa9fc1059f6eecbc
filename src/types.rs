use std::collections::HashMap;

/// Registration order of a route; the higher index wins when several routes match.
pub type RouteIndex = u32;

/// Parameter name -> decoded value.
pub type RouteParams = HashMap<String, String>;

/// Borrowed lookup result from a [`RouteTrie`](crate::RouteTrie).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a, H> {
    pub handler: &'a H,
    pub params: RouteParams,
    pub index: RouteIndex,
}

impl<H: Clone> RouteMatch<'_, H> {
    pub fn into_owned(self) -> MatchedRoute<H> {
        MatchedRoute {
            handler: self.handler.clone(),
            params: self.params,
            index: self.index,
        }
    }
}

/// Owned lookup result, as returned by the sealed [`Router`](crate::Router).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute<H> {
    pub handler: H,
    pub params: RouteParams,
    pub index: RouteIndex,
}
