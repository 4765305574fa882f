use facet_value::{Value, ValueType};

/// Returns `true` if `value` counts as missing when a read walks through it.
///
/// The vacant values are exactly:
///
/// - `null`
/// - `false`
/// - numeric zero (`0`, `0.0`, `-0.0`)
/// - the empty string
///
/// Everything else is occupied, including empty arrays and empty objects.
/// [`get`](crate::get) gives up with the caller's default as soon as an
/// intermediate node is vacant, so `a.b.c` on `{"a": {"b": 0}}` misses.
pub fn is_vacant(value: &Value) -> bool {
    match value.value_type() {
        ValueType::Null => true,
        ValueType::Bool => value.is_false(),
        ValueType::Number => value.as_number().is_some_and(|n| {
            n.to_i64() == Some(0) || n.to_u64() == Some(0) || n.to_f64() == Some(0.0)
        }),
        ValueType::String => value.as_string().is_some_and(|s| s.as_str().is_empty()),
        _ => false,
    }
}
