//! Reading through a path.

use facet_value::Value;

use crate::node::child;
use crate::{IntoPath, is_vacant, trace};

/// Resolve `path` against `tree`.
///
/// Returns `None` wherever [`get`] would fall back to its default:
///
/// - the tree itself is [vacant](is_vacant);
/// - a segment has no child to step into;
/// - an intermediate node is vacant (the walk stops there even though the
///   node exists, so `a.b.c` on `{"a": {"b": 0}}` misses).
///
/// The last segment only needs to exist: `a.b` on the same tree resolves to
/// `0`. An empty path resolves to the tree.
pub fn lookup<'v>(tree: &'v Value, path: impl IntoPath) -> Option<&'v Value> {
    if is_vacant(tree) {
        return None;
    }

    let path = path.into_path();
    let Some((last, intermediate)) = path.segments().split_last() else {
        return Some(tree);
    };

    let mut current = tree;
    for segment in intermediate {
        match child(current, segment) {
            Some(next) if !is_vacant(next) => current = next,
            _ => {
                trace!("lookup of {path} stopped at {segment}: missing or vacant");
                return None;
            }
        }
    }
    child(current, last)
}

/// Read the node at `path`, or `default` if the path doesn't resolve.
///
/// See [`lookup`] for exactly when a path resolves.
///
/// ```
/// use facet_dotpath::get;
/// use facet_value::{Value, value};
///
/// let cache = value!({"scan": {"count": 0, "platforms": ["steam"]}});
/// let none = Value::from("none");
///
/// assert_eq!(get(&cache, "scan.platforms.[0]", &none), &Value::from("steam"));
/// assert_eq!(get(&cache, "scan.count", &none), &Value::from(0));
/// assert_eq!(get(&cache, "scan.count.total", &none), &none);
/// ```
pub fn get<'v>(tree: &'v Value, path: impl IntoPath, default: &'v Value) -> &'v Value {
    lookup(tree, path).unwrap_or(default)
}

/// Like [`get`], but returns an owned copy of the node.
pub fn get_or(tree: &Value, path: impl IntoPath, default: impl Into<Value>) -> Value {
    match lookup(tree, path) {
        Some(value) => value.clone(),
        None => default.into(),
    }
}
