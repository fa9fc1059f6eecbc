use smallvec::SmallVec;
use std::borrow::Cow;

use crate::types::RouteParams;

const PARAM_INLINE_CAPACITY: usize = 8;

/// Bindings of the branch currently being searched.
///
/// A branch records a checkpoint before binding and truncates back to it on
/// the way out, so siblings explored from the same ancestor never see each
/// other's bindings.
#[derive(Debug, Default)]
pub(crate) struct ParamStack<'n, 'v> {
    entries: SmallVec<[(&'n str, Cow<'v, str>); PARAM_INLINE_CAPACITY]>,
}

impl<'n, 'v> ParamStack<'n, 'v> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn bind(&mut self, name: &'n str, value: Cow<'v, str>) {
        self.entries.push((name, value));
    }

    #[inline]
    pub(crate) fn truncate(&mut self, checkpoint: usize) {
        self.entries.truncate(checkpoint);
    }

    /// Snapshot of the current branch. A name bound twice keeps the deeper value.
    pub(crate) fn to_map(&self) -> RouteParams {
        let mut map = RouteParams::with_capacity(self.entries.len());
        for (name, value) in self.entries.iter() {
            map.insert((*name).to_string(), value.clone().into_owned());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_discards_branch_bindings() {
        let mut stack = ParamStack::new();
        stack.bind("a", Cow::Borrowed("1"));
        let checkpoint = stack.checkpoint();
        stack.bind("b", Cow::Borrowed("2"));
        stack.truncate(checkpoint);

        let map = stack.to_map();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn deeper_binding_wins_for_repeated_name() {
        let mut stack = ParamStack::new();
        stack.bind("id", Cow::Borrowed("outer"));
        stack.bind("id", Cow::Owned("inner".to_string()));
        assert_eq!(stack.to_map().get("id").map(String::as_str), Some("inner"));
    }
}
