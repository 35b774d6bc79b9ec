use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_web::ParseOptions;
use std::path::PathBuf;
use tokio::task::JoinSet;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// What parsing one file produced.
#[derive(Debug)]
struct FileReport {
    path: PathBuf,
    outcome: anyhow::Result<(usize, usize)>,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let found = output_utils::find_graphql_files(
            &self.file_or_dir_paths,
            &self.graphql_file_exts,
        );
        if !found.errors.is_empty() {
            let errors = found.errors.iter()
                .map(|e| format!("  * {e}"))
                .collect::<Vec<_>>()
                .join("\n");
            return CommandResult::stderr(format_args!(
                "{} Failed to scan input paths:\n{errors}",
                output_utils::RED_X,
            ));
        }
        log::debug!("Found {} GraphQL files to be checked.", found.paths.len());

        let mut tasks = JoinSet::new();
        for path in found.paths.iter().cloned() {
            tasks.spawn(async move {
                let outcome = check_file(&path).await;
                FileReport { path, outcome }
            });
        }

        let mut reports = Vec::with_capacity(found.paths.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(report) => reports.push(report),
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} A check task failed: {e}",
                    output_utils::RED_X,
                )),
            }
        }
        reports.sort_by(|a, b| a.path.cmp(&b.path));

        let mut num_operations = 0;
        let mut num_fragments = 0;
        let mut failures = vec![];
        for report in &reports {
            match &report.outcome {
                Ok((operations, fragments)) => {
                    log::debug!("{} parsed successfully.", report.path.display());
                    num_operations += operations;
                    num_fragments += fragments;
                },
                Err(e) => failures.push(format!("{e:#}")),
            }
        }

        if !failures.is_empty() {
            return CommandResult::stderr(format_args!(
                "{}\n{} {} of {} GraphQL files failed to parse.",
                failures.join("\n"),
                output_utils::RED_X,
                failures.len(),
                reports.len(),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL parsed successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Parsed {} operations.\n",
                "  * Parsed {} fragments.",
            ),
            output_utils::GREEN_CHECK,
            reports.len(),
            found.num_skipped,
            num_operations,
            num_fragments,
        ))
    }
}

/// Parses one file, returning its operation and fragment counts.
async fn check_file(path: &std::path::Path) -> anyhow::Result<(usize, usize)> {
    let source = output_utils::read_source(path).await?;
    let doc = graphql_web::parse_document(source, ParseOptions::without_locations())
        .map_err(|e| anyhow::anyhow!("{}", e.format_detailed()))?;
    Ok((doc.operations().count(), doc.fragments().count()))
}
