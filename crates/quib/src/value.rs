/// Render an argument value as a literal.
///
/// Strings are double-quoted with JSON escaping, numbers and booleans are
/// bare, `null` is `null`, and lists/objects are rendered recursively (objects
/// keep their insertion order).
///
/// Floats keep their fractional part even when it is zero: `1.0` renders as
/// `1.0`, not `1`.
pub fn serialize_value(value: &serde_json::Value) -> String {
    value.to_string()
}
