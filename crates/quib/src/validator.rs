use crate::ArgumentMap;
use crate::ComposeError;
use crate::ComposeErrorKind;
use crate::FieldTree;
use crate::OperationRequest;
use crate::OperationSetRequest;
use crate::QueryRequest;
use crate::QuibConfig;

type Result<T> = std::result::Result<T, ComposeError>;

/// Outcome of [`Validator::validate()`].
///
/// `valid` is true exactly when `message` is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub kind: Option<ComposeErrorKind>,
    pub message: String,
    pub valid: bool,
}
impl ValidationResult {
    pub fn success() -> Self {
        Self {
            kind: None,
            message: String::new(),
            valid: true,
        }
    }
}
impl std::convert::From<&ComposeError> for ValidationResult {
    fn from(value: &ComposeError) -> Self {
        Self {
            kind: Some(value.kind()),
            message: value.to_string(),
            valid: false,
        }
    }
}

/// Which shape of [`QueryRequest`] a [`ValidatedRequest`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestForm {
    Operation,
    Operations,
}
impl std::fmt::Display for RequestForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Operation => "single-operation",
            Self::Operations => "multi-operation",
        })
    }
}

/// One operation block that is ready to be emitted.
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperation<'req> {
    args: Option<&'req ArgumentMap>,
    fields: Option<&'req FieldTree>,
    name: &'req str,
}
impl<'req> RootOperation<'req> {
    pub fn args(&self) -> Option<&'req ArgumentMap> {
        self.args
    }

    /// The selection emitted for this operation. `None` when the operation was
    /// given as a plain leaf and therefore selects nothing.
    pub fn fields(&self) -> Option<&'req FieldTree> {
        self.fields
    }

    pub fn name(&self) -> &'req str {
        self.name
    }
}

/// A [`QueryRequest`] that passed validation, borrowed as a list of
/// [`RootOperation`]s in emission order.
///
/// Only a [`Validator`] can produce one, so
/// [`compose_query()`](crate::compose_query) never sees unchecked input.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedRequest<'req> {
    form: RequestForm,
    operations: Vec<RootOperation<'req>>,
}
impl<'req> ValidatedRequest<'req> {
    pub fn form(&self) -> RequestForm {
        self.form
    }

    pub fn operations(&self) -> &[RootOperation<'req>] {
        self.operations.as_slice()
    }
}

/// Checks that a [`QueryRequest`] carries everything needed to compose a
/// query.
///
/// Checks run in order and stop at the first failure:
///
/// 1. a request was given at all ([`ComposeError::MissingRequest`]),
/// 2. it names at least one operation ([`ComposeError::MissingName`]),
/// 3. it carries a field tree ([`ComposeError::MissingSchema`]).
///
/// For [`QueryRequest::Operations`] the operation names are the schema's root
/// keys, so an absent schema is reported as missing before any name check.
#[derive(Clone, Copy, Debug)]
pub struct Validator<'cfg> {
    config: &'cfg QuibConfig,
}
impl<'cfg> Validator<'cfg> {
    pub fn new(config: &'cfg QuibConfig) -> Self {
        Self { config }
    }

    pub fn check<'req>(
        &self,
        request: Option<&'req QueryRequest>,
    ) -> Result<ValidatedRequest<'req>> {
        let result = match request {
            None => Err(ComposeError::MissingRequest {
                namespace: self.namespace(),
            }),
            Some(QueryRequest::Operation(op)) => self.check_operation(op),
            Some(QueryRequest::Operations(ops)) => self.check_operation_set(ops),
        };

        if let Err(err) = &result {
            log::trace!("Rejected query request: {err}");
        }
        result
    }

    pub fn validate(&self, request: Option<&QueryRequest>) -> ValidationResult {
        match self.check(request) {
            Ok(_) => ValidationResult::success(),
            Err(err) => ValidationResult::from(&err),
        }
    }

    fn check_operation<'req>(
        &self,
        op: &'req OperationRequest,
    ) -> Result<ValidatedRequest<'req>> {
        let name =
            op.name()
                .filter(|name| !name.is_empty())
                .ok_or_else(|| ComposeError::MissingName {
                    namespace: self.namespace(),
                })?;

        let schema = op.schema().ok_or_else(|| ComposeError::MissingSchema {
            namespace: self.namespace(),
        })?;

        Ok(ValidatedRequest {
            form: RequestForm::Operation,
            operations: vec![RootOperation {
                args: op.args(),
                fields: Some(op.response().unwrap_or(schema)),
                name,
            }],
        })
    }

    fn check_operation_set<'req>(
        &self,
        ops: &'req OperationSetRequest,
    ) -> Result<ValidatedRequest<'req>> {
        let schema = ops.schema().ok_or_else(|| ComposeError::MissingSchema {
            namespace: self.namespace(),
        })?;

        if schema.is_empty() {
            return Err(ComposeError::MissingName {
                namespace: self.namespace(),
            });
        }

        Ok(ValidatedRequest {
            form: RequestForm::Operations,
            operations: schema.iter()
                .map(|(name, node)| RootOperation {
                    args: ops.args().get(name),
                    fields: node.as_subtree(),
                    name: name.as_str(),
                })
                .collect(),
        })
    }

    fn namespace(&self) -> String {
        self.config.namespace().to_string()
    }
}
