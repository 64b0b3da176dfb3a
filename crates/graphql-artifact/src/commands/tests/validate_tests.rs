use crate::commands::tests::GUEST_LOG_IN_JSON;
use crate::commands::tests::UPCOMING_REMINDERS_JSON;
use crate::commands::validate::ValidationSummary;
use crate::commands::validate::collect_artifact_paths;
use crate::commands::validate::validate_artifacts;
use std::path::PathBuf;

fn json_exts() -> Vec<String> {
    vec!["json".to_string()]
}

#[test]
fn collects_matching_files_recursively() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested");
    std::fs::create_dir(&nested).unwrap();
    std::fs::write(dir.path().join("guestLogIn.json"), GUEST_LOG_IN_JSON).unwrap();
    std::fs::write(nested.join("upcomingReminders.json"), UPCOMING_REMINDERS_JSON).unwrap();
    std::fs::write(dir.path().join("README.md"), "artifacts").unwrap();

    let found = collect_artifact_paths(&[dir.path().to_path_buf()], &[".json".to_string()]);
    assert!(found.errors.is_empty());
    assert_eq!(found.num_skipped, 1);
    assert_eq!(found.file_paths, vec![
        dir.path().join("guestLogIn.json"),
        nested.join("upcomingReminders.json"),
    ]);

    assert_eq!(validate_artifacts(&found.file_paths).unwrap(), ValidationSummary {
        num_files: 2,
        num_fragments: 3,
        num_operations: 2,
    });
}

/// A lone file argument is validated whatever its extension.
#[test]
fn single_file_ignores_extension_filter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guestLogIn.artifact");
    std::fs::write(&path, GUEST_LOG_IN_JSON).unwrap();

    let found = collect_artifact_paths(&[path.clone()], &json_exts());
    assert_eq!(found.file_paths, vec![path]);
    assert_eq!(found.num_skipped, 0);
}

#[test]
fn missing_path_is_reported() {
    let found = collect_artifact_paths(
        &[PathBuf::from("/nonexistent/artifacts")],
        &json_exts(),
    );
    assert_eq!(found.errors.len(), 1);
    assert!(found.file_paths.is_empty());
}

/// Every failing file is reported, not just the first.
#[test]
fn reports_every_failing_file() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.json");
    let broken = dir.path().join("broken.json");
    let duplicate = dir.path().join("duplicate.json");
    std::fs::write(&good, GUEST_LOG_IN_JSON).unwrap();
    std::fs::write(&broken, "{\"kind\": \"Document\"}").unwrap();
    std::fs::write(&duplicate, GUEST_LOG_IN_JSON).unwrap();

    let errors = validate_artifacts(&[good, broken, duplicate]).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(format!("{:#}", errors[0]).contains("broken.json"));
    assert!(errors[1].to_string().contains("Operation `guestLogIn` is defined by both"));
}
