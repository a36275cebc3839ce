//! Compose GraphQL query strings from plain, ordered field trees.
//!
//! A query is described either as a single named operation
//! ([`OperationRequest`]) or as a set of operations keyed by name
//! ([`OperationSetRequest`]). A [`Composer`] validates the request and renders
//! it:
//!
//! ```
//! use quib::Composer;
//! use quib::FieldTree;
//! use quib::OperationRequest;
//!
//! let request = OperationRequest::new("getName")
//!     .with_arg("color", "red")
//!     .with_arg("id", 451)
//!     .with_schema(FieldTree::new().leaf("id").leaf("name"));
//!
//! let query = Composer::default().compose(Some(&request.into())).unwrap();
//! assert_eq!(
//!     query,
//!     "{\n    getName (color:\"red\",id:451) {\n      id,name\n    }\n  }",
//! );
//! ```
//!
//! Fields and arguments are always emitted in insertion order.

mod arguments;
mod composer;
mod config;
mod error;
mod field_tree;
mod query_composer;
mod request;
mod validator;
mod value;

pub use arguments::compose_args;
pub use arguments::ArgumentMap;
pub use composer::compose;
pub use composer::Composer;
pub use config::QuibConfig;
pub use config::DEFAULT_NAMESPACE;
pub use error::ComposeError;
pub use error::ComposeErrorKind;
pub use field_tree::stringify_fields;
pub use field_tree::FieldNode;
pub use field_tree::FieldTree;
pub use query_composer::compose_query;
pub use request::OperationRequest;
pub use request::OperationSetRequest;
pub use request::QueryRequest;
pub use validator::RequestForm;
pub use validator::RootOperation;
pub use validator::ValidatedRequest;
pub use validator::ValidationResult;
pub use validator::Validator;
pub use value::serialize_value;

#[cfg(test)]
mod tests;
