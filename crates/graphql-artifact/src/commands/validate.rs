use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::load_document;
use crate::output_utils;
use libgraphql_artifact::ast::Document;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    artifact_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more artifact files or directories containing \
             artifact files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// Artifact files found under the requested paths.
#[derive(Debug, Default)]
pub(super) struct ArtifactPaths {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
    pub errors: Vec<anyhow::Error>,
}

/// Recursively find every file at or under `file_or_dir_paths` whose
/// extension is one of `file_exts` (given with or without a leading `.`).
///
/// A single file argument is kept even when its extension doesn't match.
pub(super) fn collect_artifact_paths(
    file_or_dir_paths: &[PathBuf],
    file_exts: &[String],
) -> ArtifactPaths {
    let file_exts: HashSet<&str> = file_exts
        .iter()
        .map(|ext| ext.trim_start_matches('.'))
        .collect();

    log::debug!("Scanning {} input paths...", file_or_dir_paths.len());
    let mut found = ArtifactPaths::default();
    for path in file_or_dir_paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.errors.push(err.into());
                    continue;
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }

            let matches_ext = entry_path
                .extension()
                .map(|ext| ext.to_string_lossy())
                .is_some_and(|ext| file_exts.contains(ext.as_ref()));
            if matches_ext {
                log::trace!("Found artifact at {entry_path:#?}.");
                found.file_paths.push(entry_path.to_path_buf());
            } else {
                found.num_skipped += 1;
            }
        }
    }

    if found.file_paths.is_empty()
        && let [single_path] = file_or_dir_paths
        && single_path.is_file() {
        log::warn!(
            "Proceeding to validate {single_path:#?} even though it doesn't \
            match any of the --artifact-file-exts ({}).",
            file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = found.num_skipped.saturating_sub(1);
        found.file_paths.push(single_path.clone());
    }

    found
}

/// Totals for a successful validation run.
#[derive(Debug, Default, PartialEq)]
pub(super) struct ValidationSummary {
    pub num_files: usize,
    pub num_fragments: usize,
    pub num_operations: usize,
}

/// Load every artifact, continuing past failures, and reject operation
/// names used by more than one artifact.
pub(super) fn validate_artifacts(
    file_paths: &[PathBuf],
) -> Result<ValidationSummary, Vec<anyhow::Error>> {
    let mut errors = vec![];
    let mut operation_files: HashMap<String, &Path> = HashMap::new();
    let mut summary = ValidationSummary::default();

    for file_path in file_paths {
        let document: Document = match load_document(file_path) {
            Ok(document) => document,
            Err(err) => {
                errors.push(err);
                continue;
            },
        };

        summary.num_files += 1;
        summary.num_operations += 1;
        summary.num_fragments += document.fragments.len();

        let unused = document.unused_fragments();
        if !unused.is_empty() {
            log::warn!("{file_path:?} defines unused fragments: {}.", unused.join(", "));
        }

        let Some(operation_name) = document.operation_name() else {
            continue;
        };
        if let Some(first_file_path) = operation_files.get(operation_name) {
            errors.push(anyhow::anyhow!(
                "Operation `{operation_name}` is defined by both {first_file_path:?} \
                and {file_path:?}",
            ));
        } else {
            operation_files.insert(operation_name.to_string(), file_path);
        }
    }

    if errors.is_empty() {
        Ok(summary)
    } else {
        Err(errors)
    }
}

fn format_errors(errors: &[anyhow::Error]) -> String {
    errors
        .iter()
        .map(|err| format!("  * {err:#}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let found = collect_artifact_paths(
            &self.file_or_dir_paths,
            &self.artifact_file_exts,
        );
        if !found.errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors finding artifact files:\n{}",
                output_utils::RED_X,
                format_errors(&found.errors),
            ));
        }

        log::debug!("Found {} artifact files to be validated.", found.file_paths.len());

        match validate_artifacts(&found.file_paths) {
            Ok(summary) => CommandResult::stdout(format_args!(
                concat!(
                    "{} All artifacts validated successfully:\n",
                    "  * Analyzed {} files.\n",
                    "  * Skipped {} non-artifact files.\n",
                    "  * Validated {} operations.\n",
                    "  * Validated {} fragment definitions.",
                ),
                output_utils::GREEN_CHECK,
                summary.num_files,
                found.num_skipped,
                summary.num_operations,
                summary.num_fragments,
            )),

            Err(errors) => CommandResult::stderr(format_args!(
                "{} {} artifact validation error(s):\n{}",
                output_utils::RED_X,
                errors.len(),
                format_errors(&errors),
            )),
        }
    }
}
