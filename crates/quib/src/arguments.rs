use crate::serialize_value;
use indexmap::IndexMap;

/// Argument name -> literal value for a single operation, in insertion order.
pub type ArgumentMap = IndexMap<String, serde_json::Value>;

/// Produce the ` (name:value,...)` suffix that follows an operation name.
///
/// Returns an empty string when `args` is absent or empty. Entries are emitted
/// in the map's insertion order, joined by `,` with no whitespace.
pub fn compose_args(args: Option<&ArgumentMap>) -> String {
    let Some(args) = args.filter(|args| !args.is_empty()) else {
        return String::new();
    };

    let composed =
        args.iter()
            .map(|(name, value)| format!("{name}:{}", serialize_value(value)))
            .collect::<Vec<_>>()
            .join(",");

    format!(" ({composed})")
}
