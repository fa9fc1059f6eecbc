mod error;
mod insert;
mod node;
mod traversal;
mod tree;

pub use error::{TrieError, TrieResult};
pub(crate) use node::NodeId;
pub use traversal::RouteInfo;
pub use tree::{MAX_ROUTES, RouteTrie};
