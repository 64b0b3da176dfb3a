mod normalize;
mod print;
mod validate;

use crate::Cli;
use crate::CommandResult;
use anyhow::Context;
use libgraphql_artifact::ast::Document;
use libgraphql_artifact::codec;
use libgraphql_artifact::file_reader;
use normalize::NormalizeCmd;
use print::PrintCmd;
use std::path::Path;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-artifact")]
pub(crate) enum CommandEnum {
    /// Re-encode an artifact with stable key order and formatting.
    Normalize(Box<NormalizeCmd>),
    /// Print an artifact as GraphQL source text.
    Print(Box<PrintCmd>),
    /// Load and validate artifact files.
    Validate(Box<ValidateCmd>),
}

impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Normalize(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

/// Read and deserialize the artifact at `file_path`.
pub(crate) fn load_document(file_path: &Path) -> anyhow::Result<Document> {
    let content = file_reader::read_artifact(file_path)?;
    let document = codec::deserialize(&content)
        .with_context(|| format!("Malformed artifact at {file_path:?}"))?;
    log::debug!(
        "Loaded operation {:?} from {file_path:?}.",
        document.operation_name(),
    );
    Ok(document)
}

#[cfg(test)]
mod tests;
