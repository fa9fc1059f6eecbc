use smallvec::SmallVec;

const SEGMENT_INLINE_CAPACITY: usize = 16;

/// Tokenized path. Index 0 is always the (empty) root segment.
pub type PathSegments<'a> = SmallVec<[&'a str; SEGMENT_INLINE_CAPACITY]>;

/// Splits a route pattern on `/`, synthesizing the empty root segment when the
/// pattern has no leading slash. Empty segments are kept; callers skip them.
#[inline]
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn pattern_segments(path: &str) -> PathSegments<'_> {
    let mut segments = PathSegments::new();
    if !path.is_empty() && !path.starts_with('/') {
        segments.push("");
    }

    let mut start = 0usize;
    for idx in memchr::memchr_iter(b'/', path.as_bytes()) {
        segments.push(&path[start..idx]);
        start = idx + 1;
    }
    segments.push(&path[start..]);

    segments
}

/// Same as [`pattern_segments`] but drops trailing empty segments, never
/// going below the root segment.
#[inline]
pub fn lookup_segments(path: &str) -> PathSegments<'_> {
    let mut segments = pattern_segments(path);
    while segments.len() > 1 && segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments
}
