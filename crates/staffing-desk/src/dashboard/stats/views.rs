use super::super::bands::{DeadlineBand, OutcomeBand, ProgressBand, RemainingBand};
use super::super::domain::{
    AssignmentId, Company, CompanyId, Recruiter, RecruiterId, Vacancy, VacancyId,
};
use super::super::filter::ScopeOption;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentStatsView {
    pub efficiency_percent: u8,
    pub relevance_percent: u8,
    pub efficiency_band: ProgressBand,
    pub relevance_band: ProgressBand,
    pub outcome: OutcomeBand,
    pub color_band: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentCardView {
    pub assignment_id: AssignmentId,
    pub recruiter_id: RecruiterId,
    pub vacancy_id: VacancyId,
    pub vacancy_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_band: Option<DeadlineBand>,
    pub required_resumes: i64,
    pub sent_resumes: i64,
    pub accepted_resumes: i64,
    pub rejected_resumes: i64,
    #[serde(flatten)]
    pub stats: AssignmentStatsView,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterStatsView {
    pub active_vacancies: usize,
    pub remaining_resumes: i64,
    pub remaining_band: RemainingBand,
    pub remaining_color: &'static str,
    pub total_required: i64,
    pub total_sent: i64,
    pub total_accepted: i64,
    pub total_rejected: i64,
    pub efficiency_percent: u8,
    pub relevance_percent: u8,
    pub efficiency_band: ProgressBand,
    pub relevance_band: ProgressBand,
}

/// Vacancy list entry: the vacancy as received plus its deadline badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancyListingView {
    #[serde(flatten)]
    pub vacancy: Vacancy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_band: Option<DeadlineBand>,
}

/// Stateless assessment of an arbitrary batch of assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentBatchView {
    pub cards: Vec<AssignmentCardView>,
    pub rollup: RecruiterStatsView,
}

/// Everything the recruiter detail page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterOverview {
    pub recruiter: Recruiter,
    pub stats: RecruiterStatsView,
    pub selected_company: String,
    pub companies: Vec<Company>,
    pub scope_options: Vec<ScopeOption>,
    pub assignments: Vec<AssignmentCardView>,
}
