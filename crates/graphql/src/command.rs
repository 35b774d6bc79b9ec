use crate::Cli;
use crate::CommandResult;

/// A subcommand. Failures are reported through the returned
/// [`CommandResult`] rather than as an `Err`, so every command decides its
/// own output and exit code.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
