mod params;
mod resolver;

pub(crate) use params::ParamStack;
pub(crate) use resolver::find_best;
