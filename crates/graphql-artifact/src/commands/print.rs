use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::load_document;
use crate::output_utils;
use libgraphql_artifact::printer;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        help="Path to the artifact file to print.",
        name="FILE",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match load_document(&self.file_path) {
            Ok(document) => CommandResult::stdout(format_args!(
                "{}",
                printer::print_document(&document),
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
