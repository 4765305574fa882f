//! Writing through a path.

use facet_value::{VObject, Value, ValueType};

use crate::node::is_container;
use crate::{IntoPath, Path, PathConflictError, Segment, debug, trace};

/// Why a node could not take the next step of a write.
enum Blocked {
    /// The node itself cannot hold the segment (a scalar, or an array asked
    /// for a non-positional key).
    Here(ValueType),
    /// The child the segment names is not a container, or is an array slot
    /// that doesn't exist.
    Below(Option<ValueType>),
}

/// Write `value` at `path`, creating missing intermediate objects.
///
/// Walking down the path:
///
/// - an index segment on an array descends into the existing element; on the
///   last segment it replaces the element, or appends when the position is
///   exactly the array's length (positions further out are a conflict);
/// - a key segment whose member is missing gets a fresh empty object;
/// - a key segment whose member is an object or array descends into it;
/// - a key segment whose member is anything else is a conflict.
///
/// Arrays are never created, and array slots are never created on the way
/// down. An index segment that lands on an object acts as the key `[n]`.
///
/// On conflict the tree is left untouched: objects are only created below the
/// last existing node, and an empty object can always take the rest of the
/// path.
///
/// ```
/// use facet_dotpath::set;
/// use facet_value::value;
///
/// let mut tree = value!({});
/// set(&mut tree, "a.b.c", 1).unwrap();
/// assert_eq!(tree, value!({"a": {"b": {"c": 1}}}));
///
/// let err = set(&mut tree, "a.b.c.d", 2).unwrap_err();
/// assert_eq!(err.to_string(), "cannot add a nested property `d` under `a.b.c`: found a number");
/// ```
pub fn set(
    tree: &mut Value,
    path: impl IntoPath,
    value: impl Into<Value>,
) -> Result<(), PathConflictError> {
    let path = path.into_path();
    let Some((last, intermediate)) = path.segments().split_last() else {
        return Ok(());
    };

    let mut acc = tree;
    for (depth, segment) in intermediate.iter().enumerate() {
        acc = match ensure_container_at(acc, segment) {
            Ok(next) => next,
            Err(Blocked::Here(found)) => return Err(conflict(&path, depth, Some(found))),
            Err(Blocked::Below(found)) => return Err(conflict(&path, depth + 1, found)),
        };
    }

    place(acc, last, value.into())
        .map_err(|found| conflict(&path, intermediate.len(), Some(found)))
}

fn conflict(path: &Path, depth: usize, found: Option<ValueType>) -> PathConflictError {
    let err = PathConflictError::new(path.clone(), depth, found);
    debug!("set {path}: {err}");
    err
}

/// Step from `node` into the container named by `segment`, creating an empty
/// object if an object member is missing.
fn ensure_container_at<'v>(
    node: &'v mut Value,
    segment: &Segment,
) -> Result<&'v mut Value, Blocked> {
    let kind = node.value_type();

    if kind == ValueType::Array {
        let position = segment.position().ok_or(Blocked::Here(kind))?;
        let element = node
            .as_array_mut()
            .and_then(|array| array.get_mut(position))
            .ok_or(Blocked::Below(None))?;
        return descend(element);
    }

    let object = node.as_object_mut().ok_or(Blocked::Here(kind))?;
    let key = segment.key_text();
    if !object.contains_key(&key) {
        trace!("creating object at `{key}`");
        object.insert(key.clone(), VObject::new());
    }
    let member = object.get_mut(&key).ok_or(Blocked::Below(None))?;
    descend(member)
}

fn descend(child: &mut Value) -> Result<&mut Value, Blocked> {
    if is_container(child) {
        Ok(child)
    } else {
        Err(Blocked::Below(Some(child.value_type())))
    }
}

/// Store `value` in `node` under the final `segment`.
///
/// Fails with the kind of `node` when it cannot hold the segment.
fn place(node: &mut Value, segment: &Segment, value: Value) -> Result<(), ValueType> {
    let kind = node.value_type();

    if let Some(array) = node.as_array_mut() {
        let position = segment.position().ok_or(kind)?;
        let len = array.len();
        match array.get_mut(position) {
            Some(slot) => *slot = value,
            None if position == len => {
                trace!("appending element {position}");
                array.push(value);
            }
            None => return Err(kind),
        }
        return Ok(());
    }

    let object = node.as_object_mut().ok_or(kind)?;
    object.insert(segment.key_text(), value);
    Ok(())
}
