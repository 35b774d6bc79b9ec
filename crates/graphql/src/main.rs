mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

/// Installs the global subscriber. Logs go to stderr so that `print` and
/// `ast` output can be piped.
fn setup_logger(cli: &Cli) {
    let (log_level, warning) =
        if cli.verbose {
            (tracing::Level::DEBUG, None)
        } else {
            log_level_from_env()
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// Reads `LOG_LEVEL`, falling back to [`DEFAULT_LOG_LEVEL`] with a warning
/// for unrecognized values.
fn log_level_from_env() -> (tracing::Level, Option<String>) {
    let Ok(value) = std::env::var("LOG_LEVEL") else {
        return (DEFAULT_LOG_LEVEL, None);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => (tracing::Level::TRACE, None),
        "debug" | "verbose" => (tracing::Level::DEBUG, None),
        "info" => (tracing::Level::INFO, None),
        "warn" => (tracing::Level::WARN, None),
        "error" => (tracing::Level::ERROR, None),
        _ => (
            DEFAULT_LOG_LEVEL,
            Some(format!(
                "Invalid `LOG_LEVEL` environment variable value: `{}`",
                value.trim(),
            )),
        ),
    }
}
