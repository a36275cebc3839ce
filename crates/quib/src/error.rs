use thiserror::Error;

/// Fieldless counterpart of [`ComposeError`], convenient for matching on the
/// failure category alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposeErrorKind {
    MalformedRequest,
    MissingName,
    MissingRequest,
    MissingSchema,
}

/// Every way composing a query can fail. All of these are detected before any
/// output is produced.
///
/// The `Display` text of each variant starts with the namespace configured on
/// the [`Composer`](crate::Composer) that raised it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("{namespace}The query request is malformed: {reason}")]
    MalformedRequest {
        namespace: String,
        reason: String,
    },

    #[error("{namespace}The query name is required")]
    MissingName {
        namespace: String,
    },

    #[error("{namespace}No prop argument passed")]
    MissingRequest {
        namespace: String,
    },

    #[error("{namespace}The query schema is required")]
    MissingSchema {
        namespace: String,
    },
}
impl ComposeError {
    pub fn kind(&self) -> ComposeErrorKind {
        match self {
            Self::MalformedRequest { .. } => ComposeErrorKind::MalformedRequest,
            Self::MissingName { .. } => ComposeErrorKind::MissingName,
            Self::MissingRequest { .. } => ComposeErrorKind::MissingRequest,
            Self::MissingSchema { .. } => ComposeErrorKind::MissingSchema,
        }
    }

    pub fn namespace(&self) -> &str {
        match self {
            Self::MalformedRequest { namespace, .. }
            | Self::MissingName { namespace }
            | Self::MissingRequest { namespace }
            | Self::MissingSchema { namespace } => namespace.as_str(),
        }
    }
}
