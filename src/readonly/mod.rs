mod cache;
mod snapshot;

pub use cache::{CacheStats, RouteCache};
pub use snapshot::RouterReadOnly;
