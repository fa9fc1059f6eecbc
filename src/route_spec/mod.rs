mod value;

pub use value::json_kind;

/// What to register under a base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSpec<H> {
    /// One route at the base path.
    Handler(H),
    /// Each element registered at the same base path, in order.
    List(Vec<RouteSpec<H>>),
    /// Each entry registered at `base + "/" + suffix`, in order.
    Group(Vec<(String, RouteSpec<H>)>),
}

impl<H> RouteSpec<H> {
    pub fn handler(handler: H) -> Self {
        Self::Handler(handler)
    }

    pub fn list<I>(handlers: I) -> Self
    where
        I: IntoIterator<Item = H>,
    {
        Self::List(handlers.into_iter().map(Self::Handler).collect())
    }

    pub fn group<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, RouteSpec<H>)>,
        S: Into<String>,
    {
        Self::Group(
            entries
                .into_iter()
                .map(|(suffix, spec)| (suffix.into(), spec))
                .collect(),
        )
    }
}
