use serde_json::Value;

use super::RouteSpec;
use crate::trie::TrieError;

/// JSON kind name used in error reports.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Value> for RouteSpec<String> {
    type Error = TrieError;

    /// Strings become handlers, arrays lists and objects groups. Errors report
    /// the offending position as a path relative to the table root.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        convert(String::new(), value)
    }
}

fn convert(path: String, value: Value) -> Result<RouteSpec<String>, TrieError> {
    match value {
        Value::String(name) => Ok(RouteSpec::Handler(name)),
        Value::Array(items) => items
            .into_iter()
            .map(|item| convert(path.clone(), item))
            .collect::<Result<Vec<_>, _>>()
            .map(RouteSpec::List),
        Value::Object(entries) => entries
            .into_iter()
            .map(|(suffix, item)| {
                let nested = format!("{path}/{suffix}");
                convert(nested, item).map(|spec| (suffix, spec))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(RouteSpec::Group),
        other => Err(TrieError::InvalidSpecification {
            path,
            found: json_kind(&other),
        }),
    }
}
