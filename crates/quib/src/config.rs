/// Namespace prepended to every error message when no other namespace is
/// configured.
pub const DEFAULT_NAMESPACE: &str = "[quib] ";

/// Immutable configuration handed to a [`Composer`](crate::Composer) when it
/// is constructed.
///
/// Missing fields fall back to their defaults when deserialized, so a host
/// application can embed a (possibly empty) `quib` table in its own config
/// files.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct QuibConfig {
    namespace: String,
}
impl QuibConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// The prefix carried by every [`ComposeError`](crate::ComposeError)
    /// message.
    pub fn namespace(&self) -> &str {
        self.namespace.as_str()
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}
impl std::default::Default for QuibConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}
