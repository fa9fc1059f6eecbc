use crate::router::RouterOptionsError;
use crate::trie::TrieError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("router is sealed; cannot add route '{path}'")]
    AddWhileSealed { path: String },
    #[error("router is not sealed; cannot perform route lookup")]
    FindWhileMutable,
    #[error("router is not sealed; readonly snapshot is unavailable")]
    ReadOnlyUnavailable,
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
    #[error(transparent)]
    Trie(#[from] TrieError),
}

pub type RouterResult<T> = Result<T, RouterError>;
