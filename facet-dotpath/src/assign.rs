//! Shallow refresh of known keys.

use alloc::borrow::ToOwned;
use alloc::string::ToString;

use facet_value::Value;

use crate::node::child_mut;
use crate::{Segment, trace};

/// Overwrite the values of `target`'s own keys with the values `source` has
/// for the same keys. Returns how many keys were overwritten.
///
/// Keys that only `source` has are ignored: this refreshes the fields a
/// record already knows about, it does not merge two records. Only the top
/// level is visited: a nested container in `source` replaces the target's
/// value wholesale.
///
/// Objects enumerate their member names and arrays their positions (`"0"`,
/// `"1"`, ...). Scalars have no keys, so a scalar on either side makes this
/// a no-op.
///
/// ```
/// use facet_dotpath::assign_enumerable;
/// use facet_value::value;
///
/// let mut target = value!({"x": 1, "y": 2});
/// let count = assign_enumerable(&mut target, &value!({"y": 5, "z": 9}));
/// assert_eq!(count, 1);
/// assert_eq!(target, value!({"x": 1, "y": 5}));
/// ```
pub fn assign_enumerable(target: &mut Value, source: &Value) -> usize {
    let mut overwritten = 0;

    if let Some(members) = source.as_object() {
        for (key, value) in members.iter() {
            if let Some(slot) = own_slot(target, key.as_str()) {
                *slot = value.clone();
                overwritten += 1;
            }
        }
    } else if let Some(elements) = source.as_array() {
        for (position, value) in elements.iter().enumerate() {
            if let Some(slot) = own_slot(target, &position.to_string()) {
                *slot = value.clone();
                overwritten += 1;
            }
        }
    }

    trace!("assign_enumerable overwrote {overwritten} keys");
    overwritten
}

/// The value `target` holds under its own key `key`.
fn own_slot<'v>(target: &'v mut Value, key: &str) -> Option<&'v mut Value> {
    child_mut(target, &Segment::Key(key.to_owned()))
}
