//! Stepping from a node to one of its children.
//!
//! - object + key: the member with that name
//! - object + `[n]`: the member literally named `[n]`
//! - array + `[n]` or canonical decimal key: element `n`
//! - anything else: no child

use facet_value::Value;

use crate::Segment;

/// The child of `node` addressed by `segment`, if there is one.
pub(crate) fn child<'v>(node: &'v Value, segment: &Segment) -> Option<&'v Value> {
    if let Some(array) = node.as_array() {
        return array.get(segment.position()?);
    }
    match segment {
        Segment::Key(key) => node.as_object()?.get(key),
        Segment::Index(_) => node.as_object()?.get(&segment.key_text()),
    }
}

/// Mutable counterpart of [`child`].
pub(crate) fn child_mut<'v>(node: &'v mut Value, segment: &Segment) -> Option<&'v mut Value> {
    if node.is_array() {
        return node.as_array_mut()?.get_mut(segment.position()?);
    }
    match segment {
        Segment::Key(key) => node.as_object_mut()?.get_mut(key),
        Segment::Index(_) => node.as_object_mut()?.get_mut(&segment.key_text()),
    }
}

/// Returns `true` if `value` can hold children.
pub(crate) fn is_container(value: &Value) -> bool {
    value.is_object() || value.is_array()
}
