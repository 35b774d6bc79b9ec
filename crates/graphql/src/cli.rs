use clap::CommandFactory;
use crate::commands;

/// Check, format and inspect GraphQL executable documents.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql", version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Log at debug level (overrides `LOG_LEVEL`).",
        global=true,
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// Without a subcommand there is nothing to do but explain usage.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
