use super::super::bands::{DeadlineBand, OutcomeBand, ProgressBand, RemainingBand};
use super::super::domain::{Assignment, ResumeCounters};
use super::views::{AssignmentCardView, AssignmentStatsView, RecruiterStatsView};
use chrono::NaiveDate;

const UNTITLED_VACANCY: &str = "Untitled";

/// `numerator / denominator` as a whole percentage in `[0, 100]`.
///
/// A non-positive denominator yields 0. Halves round up.
pub fn ratio_percent(numerator: i64, denominator: i64) -> u8 {
    if denominator <= 0 {
        return 0;
    }

    let percent = (numerator as f64 / denominator as f64 * 100.0 + 0.5).floor();
    percent.clamp(0.0, 100.0) as u8
}

/// Share of required resumes that were sent.
pub fn efficiency_percent(counters: &ResumeCounters) -> u8 {
    ratio_percent(counters.sent, counters.required)
}

/// Share of sent resumes the client accepted.
pub fn relevance_percent(counters: &ResumeCounters) -> u8 {
    ratio_percent(counters.accepted, counters.sent)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentStats {
    pub efficiency_percent: u8,
    pub relevance_percent: u8,
    pub outcome: OutcomeBand,
}

impl AssignmentStats {
    pub fn from_counters(counters: &ResumeCounters) -> Self {
        Self {
            efficiency_percent: efficiency_percent(counters),
            relevance_percent: relevance_percent(counters),
            outcome: OutcomeBand::classify(counters),
        }
    }

    pub fn to_view(&self) -> AssignmentStatsView {
        AssignmentStatsView {
            efficiency_percent: self.efficiency_percent,
            relevance_percent: self.relevance_percent,
            efficiency_band: ProgressBand::classify(self.efficiency_percent),
            relevance_band: ProgressBand::classify(self.relevance_percent),
            outcome: self.outcome,
            color_band: self.outcome.color(),
        }
    }
}

/// Recruiter-level totals across every assignment handed to [`RecruiterRollup::from_assignments`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecruiterRollup {
    pub totals: ResumeCounters,
    pub remaining_resumes: i64,
    pub active_vacancies: usize,
    pub efficiency_percent: u8,
    pub relevance_percent: u8,
}

impl RecruiterRollup {
    pub fn from_assignments<'a, I>(assignments: I) -> Self
    where
        I: IntoIterator<Item = &'a Assignment>,
    {
        let mut active_vacancies = 0;
        let totals: ResumeCounters = assignments
            .into_iter()
            .inspect(|_| active_vacancies += 1)
            .map(Assignment::counters)
            .sum();

        Self {
            totals,
            remaining_resumes: totals.required.saturating_sub(totals.sent).max(0),
            active_vacancies,
            efficiency_percent: efficiency_percent(&totals),
            relevance_percent: relevance_percent(&totals),
        }
    }

    pub fn to_view(&self) -> RecruiterStatsView {
        let remaining_band = RemainingBand::classify(self.remaining_resumes);
        RecruiterStatsView {
            active_vacancies: self.active_vacancies,
            remaining_resumes: self.remaining_resumes,
            remaining_band,
            remaining_color: remaining_band.color(),
            total_required: self.totals.required,
            total_sent: self.totals.sent,
            total_accepted: self.totals.accepted,
            total_rejected: self.totals.rejected,
            efficiency_percent: self.efficiency_percent,
            relevance_percent: self.relevance_percent,
            efficiency_band: ProgressBand::classify(self.efficiency_percent),
            relevance_band: ProgressBand::classify(self.relevance_percent),
        }
    }
}

/// Annotate a single assignment for display on a recruiter's vacancy list.
pub fn assignment_card(assignment: &Assignment, today: NaiveDate) -> AssignmentCardView {
    let counters = assignment.counters();
    let vacancy = assignment.vacancy.as_ref();
    let deadline = vacancy.and_then(|vacancy| vacancy.deadline);
    let vacancy_title = vacancy
        .map(|vacancy| vacancy.title.as_str())
        .filter(|title| !title.is_empty())
        .unwrap_or(UNTITLED_VACANCY)
        .to_string();

    AssignmentCardView {
        assignment_id: assignment.id.clone(),
        recruiter_id: assignment.recruiter_id.clone(),
        vacancy_id: assignment.vacancy_id.clone(),
        vacancy_title,
        company_id: assignment.company_id().cloned(),
        deadline,
        deadline_band: deadline
            .map(|deadline| DeadlineBand::for_deadline(deadline, today)),
        required_resumes: counters.required,
        sent_resumes: counters.sent,
        accepted_resumes: counters.accepted,
        rejected_resumes: counters.rejected,
        stats: AssignmentStats::from_counters(&counters).to_view(),
        created_at: assignment.created_at,
    }
}
