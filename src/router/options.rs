use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CACHE_CAPACITY: usize = 256;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    /// Percent-decode parameter names and values. When off, raw text is bound.
    pub decode_parameters: bool,
    /// Memoize lookup results (hits and misses) on the sealed router.
    pub cache_routes: bool,
    pub cache_capacity: usize,
    /// Emit DEBUG events for cache activity and overwritten routes.
    pub debug: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            decode_parameters: true,
            cache_routes: false,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            debug: false,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.cache_capacity == 0 {
            return Err(RouterOptionsError::CacheCapacityInvalid {
                provided: self.cache_capacity,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn decode_parameters(mut self, value: bool) -> Self {
        self.options.decode_parameters = value;
        self
    }

    pub fn cache_routes(mut self, value: bool) -> Self {
        self.options.cache_routes = value;
        self
    }

    pub fn cache_capacity(mut self, value: usize) -> Self {
        self.options.cache_capacity = value;
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("cache_capacity must be at least 1 (got {provided})")]
    CacheCapacityInvalid { provided: usize },
}
