use crate::tests::utils::arg_map;
use crate::tests::utils::artists_schema;
use crate::tests::utils::simple_schema;
use crate::ComposeError;
use crate::ComposeErrorKind;
use crate::FieldTree;
use crate::OperationRequest;
use crate::OperationSetRequest;
use crate::QueryRequest;
use crate::QuibConfig;
use crate::RequestForm;
use crate::Validator;
use crate::DEFAULT_NAMESPACE;
use serde_json::json;

fn check_kind(request: Option<&QueryRequest>) -> Option<ComposeErrorKind> {
    let config = QuibConfig::default();
    Validator::new(&config).check(request).err().map(|err| err.kind())
}

// =============================================================================
// Single-operation form
// =============================================================================

#[test]
fn absent_request_is_missing_request() {
    assert_eq!(check_kind(None), Some(ComposeErrorKind::MissingRequest));
}

#[test]
fn empty_request_is_missing_name() {
    let request = QueryRequest::from(OperationRequest::default());
    assert_eq!(check_kind(Some(&request)), Some(ComposeErrorKind::MissingName));
}

#[test]
fn empty_name_is_missing_name() {
    let request = QueryRequest::from(
        OperationRequest::new("").with_schema(simple_schema()),
    );
    assert_eq!(check_kind(Some(&request)), Some(ComposeErrorKind::MissingName));
}

#[test]
fn name_is_checked_before_schema() {
    let request = QueryRequest::from(OperationRequest::default());
    let config = QuibConfig::default();
    let err = Validator::new(&config).check(Some(&request)).unwrap_err();
    assert_eq!(err, ComposeError::MissingName {
        namespace: DEFAULT_NAMESPACE.to_string(),
    });
}

#[test]
fn missing_schema() {
    let request = QueryRequest::from(OperationRequest::new("myQuery"));
    assert_eq!(check_kind(Some(&request)), Some(ComposeErrorKind::MissingSchema));
}

#[test]
fn response_without_schema_is_missing_schema() {
    let request = QueryRequest::from(
        OperationRequest::new("myQuery").with_response(simple_schema()),
    );
    assert_eq!(check_kind(Some(&request)), Some(ComposeErrorKind::MissingSchema));
}

#[test]
fn empty_schema_is_valid() {
    let request = QueryRequest::from(
        OperationRequest::new("myQuery").with_schema(FieldTree::new()),
    );
    assert_eq!(check_kind(Some(&request)), None);
}

#[test]
fn response_replaces_schema_without_subset_check() {
    let response = FieldTree::new().leaf("notInSchema");
    let request = QueryRequest::from(
        OperationRequest::new("getName")
            .with_schema(simple_schema())
            .with_response(response.clone()),
    );
    let config = QuibConfig::default();
    let validated = Validator::new(&config).check(Some(&request)).unwrap();

    assert_eq!(validated.form(), RequestForm::Operation);
    assert_eq!(validated.operations().len(), 1);
    assert_eq!(validated.operations()[0].name(), "getName");
    assert_eq!(validated.operations()[0].fields(), Some(&response));
}

// =============================================================================
// Multi-operation form
// =============================================================================

#[test]
fn operation_set_without_schema_is_missing_schema() {
    let request = QueryRequest::from(OperationSetRequest::default());
    assert_eq!(check_kind(Some(&request)), Some(ComposeErrorKind::MissingSchema));
}

#[test]
fn operation_set_without_root_keys_is_missing_name() {
    let request = QueryRequest::from(OperationSetRequest::new(FieldTree::new()));
    assert_eq!(check_kind(Some(&request)), Some(ComposeErrorKind::MissingName));
}

#[test]
fn operation_set_scopes_args_by_root_key() {
    let request = QueryRequest::from(
        OperationSetRequest::new(artists_schema())
            .with_operation_args("queryArtists", arg_map(json!({ "name": "My name" })))
            .with_operation_args("unknownOperation", arg_map(json!({ "x": 1 }))),
    );
    let config = QuibConfig::default();
    let validated = Validator::new(&config).check(Some(&request)).unwrap();
    let ops = validated.operations();

    assert_eq!(validated.form(), RequestForm::Operations);
    assert_eq!(
        ops.iter().map(|op| op.name()).collect::<Vec<_>>(),
        vec!["getAllArtists", "queryArtists"],
    );
    assert_eq!(ops[0].args(), None);
    assert_eq!(ops[1].args().map(|args| args.len()), Some(1));
}

#[test]
fn leaf_root_key_selects_nothing() {
    let request = QueryRequest::from(
        OperationSetRequest::new(FieldTree::new().leaf("ping")),
    );
    let config = QuibConfig::default();
    let validated = Validator::new(&config).check(Some(&request)).unwrap();
    assert_eq!(validated.operations()[0].fields(), None);
}

// =============================================================================
// ValidationResult
// =============================================================================

#[test]
fn validation_result_for_valid_request() {
    let request = QueryRequest::from(
        OperationRequest::new("getName").with_schema(simple_schema()),
    );
    let config = QuibConfig::default();
    let result = Validator::new(&config).validate(Some(&request));

    assert!(result.valid);
    assert!(result.message.is_empty());
    assert_eq!(result.kind, None);
}

#[test]
fn validation_result_carries_namespaced_message() {
    let config = QuibConfig::new("my-lib: ");
    let result = Validator::new(&config).validate(None);

    assert!(!result.valid);
    assert_eq!(result.kind, Some(ComposeErrorKind::MissingRequest));
    assert_eq!(result.message, "my-lib: No prop argument passed");
}

#[test]
fn every_failure_message_is_namespaced_and_non_empty() {
    let config = QuibConfig::default().with_namespace("ns::");
    let validator = Validator::new(&config);
    let requests = [
        None,
        Some(QueryRequest::from(OperationRequest::default())),
        Some(QueryRequest::from(OperationRequest::new("q"))),
        Some(QueryRequest::from(OperationSetRequest::default())),
        Some(QueryRequest::from(OperationSetRequest::new(FieldTree::new()))),
    ];

    for request in &requests {
        let result = validator.validate(request.as_ref());
        assert!(!result.valid);
        assert!(result.message.starts_with("ns::"), "{}", result.message);
        assert!(result.message.len() > "ns::".len());
    }
}
