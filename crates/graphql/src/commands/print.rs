use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_web::ParseOptions;
use graphql_web::ast::Node;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        help="Path to the GraphQL file to print.",
        name="FILE",
    )]
    file: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match output_utils::read_source(&self.file).await {
            Ok(source) => source,
            Err(e) => return CommandResult::from_anyhow(e),
        };
        match graphql_web::parse_document(source, ParseOptions::without_locations()) {
            Ok(doc) => CommandResult::stdout(format_args!(
                "{}",
                graphql_web::print(&Node::from(doc)),
            )),
            Err(e) => CommandResult::stderr(format_args!("{}", e.format_detailed())),
        }
    }
}
