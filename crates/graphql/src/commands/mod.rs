mod ast;
mod check;
mod print;

use crate::Cli;
use crate::CommandResult;
use ast::AstCmd;
use check::CheckCmd;
use print::PrintCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Parse GraphQL files and report any syntax errors.
    Check(Box<CheckCmd>),

    /// Print a GraphQL file in canonical form.
    Print(PrintCmd),

    /// Dump the syntax tree of a GraphQL file as JSON.
    Ast(AstCmd),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
            Self::Ast(cmd) => cmd.run(cli).await,
        }
    }
}
