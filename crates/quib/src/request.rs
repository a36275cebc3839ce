use crate::ArgumentMap;
use crate::FieldNode;
use crate::FieldTree;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Deserializer;

/// Input for [`Composer::compose()`](crate::Composer::compose).
///
/// The two variants correspond to the two ways a query can be described. The
/// variant is chosen by the caller, so validation never has to guess which
/// shape it was handed.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryRequest {
    /// A single named operation: `{ name, schema, response?, args? }`.
    Operation(OperationRequest),

    /// One operation per root key of a field tree, with arguments keyed by
    /// operation name.
    Operations(OperationSetRequest),
}
impl std::convert::From<OperationRequest> for QueryRequest {
    fn from(value: OperationRequest) -> Self {
        Self::Operation(value)
    }
}
impl std::convert::From<OperationSetRequest> for QueryRequest {
    fn from(value: OperationSetRequest) -> Self {
        Self::Operations(value)
    }
}

/// Describes one named operation.
///
/// All fields are optional here so that a [`Validator`](crate::Validator) can
/// report which one is missing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OperationRequest {
    pub(crate) args: Option<ArgumentMap>,
    #[serde(deserialize_with = "deserialize_name")]
    pub(crate) name: Option<String>,
    #[serde(deserialize_with = "deserialize_field_tree")]
    pub(crate) response: Option<FieldTree>,
    #[serde(deserialize_with = "deserialize_field_tree")]
    pub(crate) schema: Option<FieldTree>,
}
impl OperationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn args(&self) -> Option<&ArgumentMap> {
        self.args.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn response(&self) -> Option<&FieldTree> {
        self.response.as_ref()
    }

    pub fn schema(&self) -> Option<&FieldTree> {
        self.schema.as_ref()
    }

    /// Add a single argument after any previously added arguments.
    pub fn with_arg(
        mut self,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.args
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set the full argument list.
    ///
    /// NOTE: Any arguments previously added with
    /// [`OperationRequest::with_arg()`] are replaced.
    pub fn with_args(mut self, args: ArgumentMap) -> Self {
        self.args = Some(args);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Emit `response` instead of `schema` as the operation's selection.
    ///
    /// `response` is not checked against `schema`.
    pub fn with_response(mut self, response: FieldTree) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_schema(mut self, schema: FieldTree) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// Describes several operations at once: every root key of `schema` names an
/// operation whose selection is the subtree beneath it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OperationSetRequest {
    pub(crate) args: IndexMap<String, ArgumentMap>,
    #[serde(deserialize_with = "deserialize_field_tree")]
    pub(crate) schema: Option<FieldTree>,
}
impl OperationSetRequest {
    pub fn new(schema: FieldTree) -> Self {
        Self {
            args: IndexMap::new(),
            schema: Some(schema),
        }
    }

    /// Arguments for every operation, keyed by operation name.
    pub fn args(&self) -> &IndexMap<String, ArgumentMap> {
        &self.args
    }

    pub fn schema(&self) -> Option<&FieldTree> {
        self.schema.as_ref()
    }

    /// Set the arguments for the operation named `operation_name`.
    ///
    /// Arguments for a name that is not a root key of the schema are ignored
    /// when composing.
    pub fn with_operation_args(
        mut self,
        operation_name: impl Into<String>,
        args: ArgumentMap,
    ) -> Self {
        self.args.insert(operation_name.into(), args);
        self
    }
}

/// Accept any value where a field tree is expected. Values that cannot hold a
/// selection (scalars, `null`) are treated as absent so that validation reports
/// them as a missing schema.
fn deserialize_field_tree<'de, D>(
    deserializer: D,
) -> Result<Option<FieldTree>, D::Error>
where
    D: Deserializer<'de>,
{
    let node = Option::<FieldNode>::deserialize(deserializer)?;
    Ok(node.and_then(FieldNode::into_subtree))
}

/// Only a string is a usable operation name; any other value is treated as
/// absent so that validation reports it as a missing name.
fn deserialize_name<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match name {
        Some(serde_json::Value::String(name)) => Some(name),
        _ => None,
    })
}
