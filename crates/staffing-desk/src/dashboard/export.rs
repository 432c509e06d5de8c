use std::io::Write;

use serde::Serialize;

use super::stats::views::RecruiterOverview;

const TOTAL_ROW_LABEL: &str = "TOTAL";

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    vacancy: &'a str,
    deadline: Option<String>,
    required_resumes: i64,
    sent_resumes: i64,
    accepted_resumes: i64,
    rejected_resumes: i64,
    efficiency_percent: u8,
    relevance_percent: u8,
    outcome: &'static str,
}

/// Write the recruiter summary as CSV: one row per scoped assignment and a closing total row.
pub fn export_overview_csv<W: Write>(
    overview: &RecruiterOverview,
    writer: W,
) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);

    for card in &overview.assignments {
        csv.serialize(SummaryRow {
            vacancy: &card.vacancy_title,
            deadline: card
                .deadline
                .map(|deadline| deadline.date_naive().to_string()),
            required_resumes: card.required_resumes,
            sent_resumes: card.sent_resumes,
            accepted_resumes: card.accepted_resumes,
            rejected_resumes: card.rejected_resumes,
            efficiency_percent: card.stats.efficiency_percent,
            relevance_percent: card.stats.relevance_percent,
            outcome: card.stats.outcome.label(),
        })?;
    }

    let totals = &overview.stats;
    csv.serialize(SummaryRow {
        vacancy: TOTAL_ROW_LABEL,
        deadline: None,
        required_resumes: totals.total_required,
        sent_resumes: totals.total_sent,
        accepted_resumes: totals.total_accepted,
        rejected_resumes: totals.total_rejected,
        efficiency_percent: totals.efficiency_percent,
        relevance_percent: totals.relevance_percent,
        outcome: "",
    })?;

    csv.flush()?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode summary: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write summary: {0}")]
    Io(#[from] std::io::Error),
}
