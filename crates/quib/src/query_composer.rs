use crate::compose_args;
use crate::stringify_fields;
use crate::ValidatedRequest;

const CLOSING_INDENT: &str = "  ";
const FIELDS_INDENT: &str = "      ";
const OPERATION_INDENT: &str = "    ";

/// Assemble the query text for an already-validated request.
///
/// Each operation becomes a block shaped like
///
/// ```text
/// name (args) {
///       fields
///     }
/// ```
///
/// Blocks are concatenated with no separator and wrapped once in an outer
/// `{ ... }`. A single operation therefore renders as:
///
/// ```text
/// {
///     getName {
///       id,name
///     }
///   }
/// ```
pub fn compose_query(request: &ValidatedRequest<'_>) -> String {
    let mut operations = String::new();
    for op in request.operations() {
        log::trace!("Emitting operation block for `{}`.", op.name());
        operations.push_str(op.name());
        operations.push_str(&compose_args(op.args()));
        operations.push_str(" {\n");
        operations.push_str(FIELDS_INDENT);
        if let Some(fields) = op.fields() {
            operations.push_str(&stringify_fields(fields));
        }
        operations.push('\n');
        operations.push_str(OPERATION_INDENT);
        operations.push('}');
    }

    format!("{{\n{OPERATION_INDENT}{operations}\n{CLOSING_INDENT}}}")
}
