use crate::report::{
    run_recruiter_export, run_recruiter_report, run_search, RecruiterExportArgs,
    RecruiterReportArgs, SearchArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use staffing_desk::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Staffing Desk",
    about = "Serve and inspect recruiter assignment statistics from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect a single recruiter's assignments
    Recruiter {
        #[command(subcommand)]
        command: RecruiterCommand,
    },
    /// Search recruiters, vacancies or companies
    Search(SearchArgs),
}

#[derive(Subcommand, Debug)]
enum RecruiterCommand {
    /// Print totals, bands and assignment cards for a recruiter
    Report(RecruiterReportArgs),
    /// Write the recruiter summary as CSV
    Export(RecruiterExportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Directory snapshot (JSON) to serve. Defaults to APP_SNAPSHOT_PATH.
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recruiter {
            command: RecruiterCommand::Report(args),
        } => run_recruiter_report(args),
        Command::Recruiter {
            command: RecruiterCommand::Export(args),
        } => run_recruiter_export(args),
        Command::Search(args) => run_search(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SearchEntity;

    #[test]
    fn no_arguments_means_serve() {
        let cli = Cli::try_parse_from(["staffing-desk-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn recruiter_report_accepts_scope_and_date() {
        let cli = Cli::try_parse_from([
            "staffing-desk-api",
            "recruiter",
            "report",
            "--snapshot",
            "snapshot.json",
            "--recruiter",
            "rec-1",
            "--company",
            "co-2",
            "--today",
            "2025-10-01",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Recruiter {
                command: RecruiterCommand::Report(args),
            }) => {
                assert_eq!(args.recruiter, "rec-1");
                assert_eq!(args.company.as_deref(), Some("co-2"));
                assert_eq!(args.today.map(|date| date.to_string()).as_deref(), Some("2025-10-01"));
            }
            other => panic!("expected recruiter report, got {other:?}"),
        }
    }

    #[test]
    fn search_takes_entity_and_optional_query() {
        let cli = Cli::try_parse_from(["staffing-desk-api", "search", "companies", "devops"])
            .expect("parses");

        match cli.command {
            Some(Command::Search(args)) => {
                assert_eq!(args.entity, SearchEntity::Companies);
                assert_eq!(args.query.as_deref(), Some("devops"));
                assert!(args.snapshot.is_none());
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn invalid_today_is_rejected() {
        let result = Cli::try_parse_from([
            "staffing-desk-api",
            "recruiter",
            "report",
            "--recruiter",
            "rec-1",
            "--today",
            "tomorrow",
        ]);
        assert!(result.is_err());
    }
}
