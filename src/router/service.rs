use parking_lot::RwLock;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

use crate::readonly::RouterReadOnly;
use crate::registry::{RegistryMetrics, RouteRegistry};
use crate::route_spec::RouteSpec;
use crate::router::{RouterError, RouterOptions, RouterResult};
use crate::types::{MatchedRoute, RouteIndex};

#[derive(Debug)]
struct RouterState<H> {
    registry: RouteRegistry<H>,
    readonly: OnceLock<Arc<RouterReadOnly<H>>>,
}

/// Build-then-serve wrapper around a [`RouteTrie`](crate::RouteTrie).
///
/// Registrations are serialized behind a write lock until [`Router::seal`]
/// freezes the routes into a shared read-only snapshot; lookups are only
/// served after that.
#[derive(Debug)]
pub struct Router<H> {
    inner: RwLock<RouterState<H>>,
}

impl<H: Clone> Router<H> {
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self {
            inner: RwLock::new(RouterState {
                registry: RouteRegistry::new(options.unwrap_or_default()),
                readonly: OnceLock::new(),
            }),
        }
    }

    pub fn try_new(options: RouterOptions) -> RouterResult<Self> {
        options.validate()?;
        Ok(Self::new(Some(options)))
    }

    pub fn add(&self, path: &str, spec: RouteSpec<H>) -> RouterResult<Vec<RouteIndex>> {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            return Err(RouterError::AddWhileSealed {
                path: path.to_string(),
            });
        }

        Ok(guard.registry.insert(path, spec)?)
    }

    pub fn add_value<F>(&self, path: &str, value: &Value, resolve: F) -> RouterResult<Vec<RouteIndex>>
    where
        F: Fn(&str) -> Option<H>,
    {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            return Err(RouterError::AddWhileSealed {
                path: path.to_string(),
            });
        }

        Ok(guard.registry.insert_value(path, value, resolve)?)
    }

    pub fn seal(&self) {
        let mut guard = self.inner.write();
        if guard.readonly.get().is_some() {
            return;
        }

        let trie = guard.registry.take_tree();
        tracing::event!(tracing::Level::TRACE, operation = "seal", routes = trie.len() as u64);
        let _ = guard.readonly.set(Arc::new(RouterReadOnly::from_trie(trie)));
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().readonly.get().is_some()
    }

    /// A miss is `Ok(None)`.
    pub fn find(&self, path: &str) -> RouterResult<Option<MatchedRoute<H>>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(ro) => Ok(ro.find(path)),
            None => Err(RouterError::FindWhileMutable),
        }
    }

    pub fn get_readonly(&self) -> RouterResult<Arc<RouterReadOnly<H>>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(ro) => Ok(ro.clone()),
            None => Err(RouterError::ReadOnlyUnavailable),
        }
    }

    pub fn metrics(&self) -> RegistryMetrics {
        *self.inner.read().registry.metrics()
    }
}
