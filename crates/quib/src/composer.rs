use crate::compose_query;
use crate::ComposeError;
use crate::OperationRequest;
use crate::QueryRequest;
use crate::QuibConfig;
use crate::ValidationResult;
use crate::Validator;
use serde::Deserialize;

type Result<T> = std::result::Result<T, ComposeError>;

/// Validates [`QueryRequest`]s and composes them into query strings.
///
/// A `Composer` only holds its [`QuibConfig`]; it can be shared freely across
/// threads and every call is independent of every other.
#[derive(Clone, Debug, Default)]
pub struct Composer {
    config: QuibConfig,
}
impl Composer {
    pub fn new(config: QuibConfig) -> Self {
        Self { config }
    }

    /// Validate `request`, then compose it.
    ///
    /// Fails without producing any output if validation fails.
    pub fn compose(&self, request: Option<&QueryRequest>) -> Result<String> {
        let validated = self.validator().check(request)?;
        log::debug!(
            "Composing {} operation(s) from a {} request.",
            validated.operations().len(),
            validated.form(),
        );
        Ok(compose_query(&validated))
    }

    /// Compose a single-operation request given as plain JSON, e.g.
    ///
    /// ```json
    /// { "name": "getName", "args": { "id": 451 }, "schema": { "id": "", "name": "" } }
    /// ```
    ///
    /// JSON `null` is treated as a missing request. Inside `schema` and
    /// `response`, object and array values nest and every other value marks a
    /// plain field.
    pub fn compose_json(&self, request: &serde_json::Value) -> Result<String> {
        if request.is_null() {
            return self.compose(None);
        }

        let op = OperationRequest::deserialize(request).map_err(|err| {
            log::trace!("Failed to read query request from JSON: {err}");
            ComposeError::MalformedRequest {
                namespace: self.config.namespace().to_string(),
                reason: err.to_string(),
            }
        })?;
        self.compose(Some(&QueryRequest::Operation(op)))
    }

    pub fn config(&self) -> &QuibConfig {
        &self.config
    }

    pub fn validate(&self, request: Option<&QueryRequest>) -> ValidationResult {
        self.validator().validate(request)
    }

    pub fn validator(&self) -> Validator<'_> {
        Validator::new(&self.config)
    }
}

/// Convenience wrapper around [`Composer::compose()`] using the default
/// [`QuibConfig`].
pub fn compose(request: &QueryRequest) -> Result<String> {
    Composer::default().compose(Some(request))
}
