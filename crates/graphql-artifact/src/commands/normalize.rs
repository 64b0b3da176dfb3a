use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::load_document;
use crate::output_utils;
use anyhow::Context;
use libgraphql_artifact::codec;
use libgraphql_artifact::codec::SerializeOptions;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct NormalizeCmd {
    #[arg(
        help="Write the artifact on a single line.",
        long,
    )]
    compact: bool,

    #[arg(
        help="Path to the artifact file to normalize.",
        name="FILE",
    )]
    file_path: PathBuf,

    #[arg(
        help="Omit every `loc` from the output.",
        long,
    )]
    no_location: bool,

    #[arg(
        help="Overwrite FILE instead of printing to stdout.",
        long,
    )]
    write: bool,
}

impl NormalizeCmd {
    fn serialize_options(&self) -> SerializeOptions {
        let mut options = SerializeOptions::default();
        if self.compact {
            options = options.compact();
        }
        if self.no_location {
            options = options.without_locations();
        }
        options
    }
}

/// Load the artifact at `file_path` and re-encode it with `options`.
pub(super) fn normalize_file(
    file_path: &Path,
    options: &SerializeOptions,
) -> anyhow::Result<String> {
    let document = load_document(file_path)?;
    let normalized = codec::serialize_with(&document, options)?;
    Ok(normalized)
}

#[inherent::inherent]
impl RunnableCommand for NormalizeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let normalized = match normalize_file(&self.file_path, &self.serialize_options()) {
            Ok(normalized) => normalized,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        if !self.write {
            return CommandResult::stdout(format_args!("{normalized}"));
        }

        let written = std::fs::write(&self.file_path, &normalized)
            .with_context(|| format!("Failed to write {:?}", self.file_path));
        match written {
            Ok(()) => CommandResult::stdout(format_args!(
                "{} Normalized {:?}.",
                output_utils::GREEN_CHECK,
                self.file_path,
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
