use crate::path::PathError;
use crate::types::RouteIndex;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("invalid route specification at '{path}': expected handler, list or group, found {found}")]
    InvalidSpecification { path: String, found: &'static str },
    #[error("route '{path}' refers to unknown handler '{name}'")]
    UnknownHandler { path: String, name: String },
    #[error("parameter segment '{segment}' in '{path}' has an undecodable name")]
    InvalidParameterName {
        segment: String,
        path: String,
        #[source]
        source: PathError,
    },
    #[error("maximum number of routes exceeded (limit {limit})")]
    RouteLimitExceeded { limit: RouteIndex },
}

pub type TrieResult<T> = Result<T, TrieError>;
