use crate::MalformedDocumentError;
use crate::ast::Document;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::file_reader::ReadArtifactError;
use crate::registry::DocumentRegistryBuildError;
use crate::registry::DocumentRegistryBuilder;
use crate::tests::utils::GUEST_LOG_IN_JSON;
use crate::tests::utils::UPCOMING_REMINDERS_JSON;
use crate::tests::utils::edit_fixture;
use crate::tests::utils::field;
use crate::tests::utils::guest_log_in;
use crate::tests::utils::query;
use crate::tests::utils::spread;
use std::path::PathBuf;

#[test]
fn builds_from_strings_in_registration_order() {
    let mut builder = DocumentRegistryBuilder::new();
    builder.add_from_str(UPCOMING_REMINDERS_JSON, None).unwrap();
    builder.add_from_str(GUEST_LOG_IN_JSON, None).unwrap();
    let registry = builder.build();

    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.operation_names().collect::<Vec<_>>(),
        vec!["upcomingReminders", "guestLogIn"],
    );
    assert_eq!(*registry.get("guestLogIn").unwrap(), guest_log_in());
    assert!(registry.get("unknown").is_none());
}

#[test]
fn builds_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let guest_path = dir.path().join("guestLogIn.json");
    let reminders_path = dir.path().join("upcomingReminders.json");
    std::fs::write(&guest_path, GUEST_LOG_IN_JSON).unwrap();
    std::fs::write(&reminders_path, UPCOMING_REMINDERS_JSON).unwrap();

    let mut builder = DocumentRegistryBuilder::default();
    builder.add_from_file(&guest_path).unwrap();
    builder.add_from_file(&reminders_path).unwrap();
    let registry = builder.build();

    assert!(registry.contains("guestLogIn"));
    assert!(registry.contains("upcomingReminders"));
}

#[test]
fn duplicate_operation_names_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    std::fs::write(&first, GUEST_LOG_IN_JSON).unwrap();
    std::fs::write(&second, GUEST_LOG_IN_JSON).unwrap();

    let mut builder = DocumentRegistryBuilder::new();
    builder.add_from_file(&first).unwrap();
    match builder.add_from_file(&second) {
        Err(DocumentRegistryBuildError::DuplicateOperation {
            operation_name,
            first_file_path,
            second_file_path,
        }) => {
            assert_eq!(operation_name, "guestLogIn");
            assert_eq!(first_file_path, Some(first));
            assert_eq!(second_file_path, Some(second));
        },
        other => panic!("Expected DuplicateOperation, found {other:?}"),
    }
}

#[test]
fn anonymous_operations_are_rejected() {
    let anonymous = Document::new(OperationDefinition::new(
        OperationKind::Query,
        None,
        SelectionSet::new(vec![field("id")]),
    ));

    let mut builder = DocumentRegistryBuilder::new();
    assert!(matches!(
        builder.add_document(anonymous),
        Err(DocumentRegistryBuildError::AnonymousOperation { file_path: None }),
    ));
    assert!(builder.build().is_empty());
}

/// Pre-built documents are validated before they are accepted.
#[test]
fn invalid_documents_are_rejected() {
    let mut builder = DocumentRegistryBuilder::new();
    let result = builder.add_document(query("viewer", vec![spread("Missing")]));
    assert!(matches!(
        result,
        Err(DocumentRegistryBuildError::MalformedDocument {
            file_path: None,
            err: MalformedDocumentError::UnresolvedFragment(_),
        }),
    ));
}

#[test]
fn malformed_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    let broken = edit_fixture(GUEST_LOG_IN_JSON, |json| {
        json["definitions"].as_array_mut().unwrap().remove(1);
    });
    std::fs::write(&path, broken).unwrap();

    let mut builder = DocumentRegistryBuilder::new();
    let err = builder.add_from_file(&path).unwrap_err();
    match &err {
        DocumentRegistryBuildError::MalformedDocument { file_path, err } => {
            assert_eq!(file_path.as_ref(), Some(&path));
            assert!(matches!(err, MalformedDocumentError::UnresolvedFragment(_)));
        },
        other => panic!("Expected MalformedDocument, found {other:?}"),
    }
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn missing_file_is_a_read_error() {
    let path = PathBuf::from("/nonexistent/artifacts/guestLogIn.json");

    let mut builder = DocumentRegistryBuilder::new();
    match builder.add_from_file(&path) {
        Err(DocumentRegistryBuildError::FileReadError(err)) => {
            assert_eq!(err, ReadArtifactError::PathIsNotAFile(path));
        },
        other => panic!("Expected FileReadError, found {other:?}"),
    }
}
