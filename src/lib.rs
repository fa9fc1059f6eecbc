mod matcher;
pub mod path;
pub mod readonly;
pub mod registry;
pub mod route_spec;
pub mod router;
pub mod trie;
pub mod types;

pub use readonly::RouterReadOnly;
pub use registry::RegistryMetrics;
pub use route_spec::RouteSpec;
pub use router::{Router, RouterError, RouterOptions, RouterOptionsError, RouterResult};
pub use trie::{RouteInfo, RouteTrie, TrieError, TrieResult};
pub use types::{MatchedRoute, RouteIndex, RouteMatch, RouteParams};
