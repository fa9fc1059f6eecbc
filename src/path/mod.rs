mod decode;
mod error;
mod segments;

pub use decode::{decode_component, decode_component_cow};
pub use error::{PathError, PathResult};
pub use segments::{PathSegments, lookup_segments, pattern_segments};
