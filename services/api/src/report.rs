use crate::infra::{load_directory, snapshot_path, InMemoryDirectory};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use staffing_desk::config::AppConfig;
use staffing_desk::dashboard::bands::current_date;
use staffing_desk::dashboard::export::export_overview_csv;
use staffing_desk::dashboard::roster::avatar_color;
use staffing_desk::dashboard::stats::views::RecruiterOverview;
use staffing_desk::dashboard::{CompanyScope, DashboardService, RecruiterId};
use staffing_desk::error::AppError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RecruiterReportArgs {
    /// Directory snapshot (JSON). Defaults to APP_SNAPSHOT_PATH.
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
    /// Recruiter to report on
    #[arg(long)]
    pub(crate) recruiter: String,
    /// Restrict assignment cards to one company ("0" for all)
    #[arg(long)]
    pub(crate) company: Option<String>,
    /// Evaluation date for deadline badges (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct RecruiterExportArgs {
    /// Directory snapshot (JSON). Defaults to APP_SNAPSHOT_PATH.
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
    /// Recruiter to export
    #[arg(long)]
    pub(crate) recruiter: String,
    /// Restrict exported rows to one company ("0" for all)
    #[arg(long)]
    pub(crate) company: Option<String>,
    /// Write the CSV here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SearchEntity {
    Recruiters,
    Vacancies,
    Companies,
}

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Which list to search
    #[arg(value_enum)]
    pub(crate) entity: SearchEntity,
    /// Case-insensitive substring; omit to list everything
    pub(crate) query: Option<String>,
    /// Directory snapshot (JSON). Defaults to APP_SNAPSHOT_PATH.
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
}

fn open_service(
    snapshot: Option<PathBuf>,
) -> Result<DashboardService<InMemoryDirectory>, AppError> {
    let config = AppConfig::load()?;
    let directory = load_directory(snapshot_path(snapshot, &config))?;
    Ok(DashboardService::new(Arc::new(directory)))
}

pub(crate) fn run_recruiter_report(args: RecruiterReportArgs) -> Result<(), AppError> {
    let RecruiterReportArgs {
        snapshot,
        recruiter,
        company,
        today,
    } = args;

    let today = today.unwrap_or_else(current_date);
    let service = open_service(snapshot)?;
    let scope = CompanyScope::parse(company.as_deref());
    let overview = service.recruiter_overview(&RecruiterId::new(recruiter), &scope, today)?;

    render_recruiter_overview(&overview, today);
    Ok(())
}

pub(crate) fn run_recruiter_export(args: RecruiterExportArgs) -> Result<(), AppError> {
    let RecruiterExportArgs {
        snapshot,
        recruiter,
        company,
        output,
    } = args;

    let today = current_date();
    let service = open_service(snapshot)?;
    let scope = CompanyScope::parse(company.as_deref());
    let overview = service.recruiter_overview(&RecruiterId::new(recruiter), &scope, today)?;

    match output {
        Some(path) => {
            let file = File::create(&path)?;
            export_overview_csv(&overview, BufWriter::new(file))?;
            println!(
                "Wrote {} assignment row(s) for {} to {}",
                overview.assignments.len(),
                overview.recruiter.full_name(),
                path.display()
            );
        }
        None => export_overview_csv(&overview, io::stdout().lock())?,
    }

    Ok(())
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        entity,
        query,
        snapshot,
    } = args;

    let query = query.unwrap_or_default();
    let service = open_service(snapshot)?;
    let mut out = io::stdout().lock();

    match entity {
        SearchEntity::Recruiters => {
            for recruiter in service.search_recruiters(&query)? {
                writeln!(
                    out,
                    "{} | {} | {} | avatar {}",
                    recruiter.id,
                    recruiter.full_name(),
                    recruiter.email,
                    avatar_color(recruiter.id.as_str())
                )?;
            }
        }
        SearchEntity::Vacancies => {
            let today = current_date();
            for listing in service.search_vacancies(&query, today)? {
                let deadline = match (listing.vacancy.deadline, listing.deadline_band) {
                    (Some(deadline), Some(band)) => {
                        format!("due {} ({})", deadline.date_naive(), band.color())
                    }
                    _ => "no deadline".to_string(),
                };
                writeln!(
                    out,
                    "{} | {} | company {} | {}",
                    listing.vacancy.id, listing.vacancy.title, listing.vacancy.company_id, deadline
                )?;
            }
        }
        SearchEntity::Companies => {
            for company in service.search_companies(&query)? {
                writeln!(
                    out,
                    "{} | {} | {}",
                    company.id,
                    company.name,
                    company.email.as_deref().unwrap_or("-")
                )?;
            }
        }
    }

    Ok(())
}

pub(crate) fn render_recruiter_overview(overview: &RecruiterOverview, today: NaiveDate) {
    let recruiter = &overview.recruiter;
    let stats = &overview.stats;

    println!("Recruiter overview");
    println!(
        "{} <{}> (avatar {})",
        recruiter.full_name(),
        recruiter.email,
        avatar_color(recruiter.id.as_str())
    );
    println!("Evaluated {}", today);

    println!("\nTotals across all assignments");
    println!(
        "- {} active vacancies | {} remaining resumes ({})",
        stats.active_vacancies, stats.remaining_resumes, stats.remaining_color
    );
    println!(
        "- required {} | sent {} | accepted {} | rejected {}",
        stats.total_required, stats.total_sent, stats.total_accepted, stats.total_rejected
    );
    println!(
        "- efficiency {}% ({}) | relevance {}% ({})",
        stats.efficiency_percent,
        stats.efficiency_band.color(),
        stats.relevance_percent,
        stats.relevance_band.color()
    );

    let scope_label = overview
        .scope_options
        .iter()
        .find(|option| option.value == overview.selected_company)
        .map(|option| option.label.as_str())
        .unwrap_or(overview.selected_company.as_str());
    println!("\nAssignments ({})", scope_label);

    if overview.assignments.is_empty() {
        println!("- none");
        return;
    }

    for card in &overview.assignments {
        let deadline = match (card.deadline, card.deadline_band) {
            (Some(deadline), Some(band)) => {
                format!("due {} ({})", deadline.date_naive(), band.color())
            }
            _ => "no deadline".to_string(),
        };
        println!(
            "- {} | {} | {}/{} sent, {} accepted, {} rejected",
            card.vacancy_title,
            deadline,
            card.sent_resumes,
            card.required_resumes,
            card.accepted_resumes,
            card.rejected_resumes
        );
        println!(
            "  efficiency {}% | relevance {}% | {} ({})",
            card.stats.efficiency_percent,
            card.stats.relevance_percent,
            card.stats.outcome.label(),
            card.stats.color_band
        );
    }
}
