use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_web::ParseOptions;
use graphql_web::ast::Node;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct AstCmd {
    #[arg(
        help="Leave source locations out of the dumped tree.",
        long,
    )]
    no_location: bool,

    #[arg(
        help="Path to the GraphQL file to dump.",
        name="FILE",
    )]
    file: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for AstCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match output_utils::read_source(&self.file).await {
            Ok(source) => source,
            Err(e) => return CommandResult::from_anyhow(e),
        };
        let options = ParseOptions { no_location: self.no_location };
        let doc = match graphql_web::parse_document(source, options) {
            Ok(doc) => doc,
            Err(e) => return CommandResult::stderr(format_args!("{}", e.format_detailed())),
        };
        match serde_json::to_string_pretty(&Node::from(doc)).context("failed to serialize tree") {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(e) => CommandResult::from_anyhow(e),
        }
    }
}
