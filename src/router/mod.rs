mod errors;
mod options;
mod service;

pub use errors::{RouterError, RouterResult};
pub use options::{DEFAULT_CACHE_CAPACITY, RouterOptions, RouterOptionsBuilder, RouterOptionsError};
pub use service::Router;
