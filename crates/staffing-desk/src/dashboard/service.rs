use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::bands::DeadlineBand;
use super::directory::{DirectoryError, RecruitingDirectory};
use super::domain::{Assignment, Company, Recruiter, RecruiterId, VacancyId};
use super::filter::{self, CompanyScope};
use super::roster::RosterChange;
use super::stats::views::{AssignmentBatchView, RecruiterOverview, VacancyListingView};
use super::stats::{assignment_card, RecruiterRollup};

/// Read-side facade composing the directory with the statistics and filter helpers.
pub struct DashboardService<D> {
    directory: Arc<D>,
}

impl<D> DashboardService<D>
where
    D: RecruitingDirectory + 'static,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    pub fn search_recruiters(&self, query: &str) -> Result<Vec<Recruiter>, DashboardServiceError> {
        let recruiters = self.directory.recruiters()?;
        debug!(total = recruiters.len(), "filtering recruiters");
        Ok(filter::search(recruiters, query))
    }

    pub fn search_companies(&self, query: &str) -> Result<Vec<Company>, DashboardServiceError> {
        let companies = self.directory.companies()?;
        debug!(total = companies.len(), "filtering companies");
        Ok(filter::search(companies, query))
    }

    pub fn search_vacancies(
        &self,
        query: &str,
        today: NaiveDate,
    ) -> Result<Vec<VacancyListingView>, DashboardServiceError> {
        let vacancies = self.directory.vacancies()?;
        debug!(total = vacancies.len(), "filtering vacancies");
        Ok(filter::search(vacancies, query)
            .into_iter()
            .map(|vacancy| VacancyListingView {
                deadline_band: vacancy
                    .deadline
                    .map(|deadline| DeadlineBand::for_deadline(deadline, today)),
                vacancy,
            })
            .collect())
    }

    /// Statistics cover every assignment of the recruiter; cards honor `scope`.
    pub fn recruiter_overview(
        &self,
        recruiter_id: &RecruiterId,
        scope: &CompanyScope,
        today: NaiveDate,
    ) -> Result<RecruiterOverview, DashboardServiceError> {
        let recruiter = match self.directory.recruiter(recruiter_id)? {
            Some(recruiter) => recruiter,
            None => {
                warn!(%recruiter_id, "recruiter not found");
                return Err(DashboardServiceError::RecruiterNotFound(
                    recruiter_id.clone(),
                ));
            }
        };

        let assignments = self.directory.assignments_for_recruiter(recruiter_id)?;
        let all_companies = self.directory.companies()?;
        debug!(
            %recruiter_id,
            assignments = assignments.len(),
            scope = scope.as_value(),
            "building recruiter overview"
        );

        let stats = RecruiterRollup::from_assignments(&assignments).to_view();
        let companies: Vec<Company> = filter::recruiter_companies(&assignments, &all_companies)
            .into_iter()
            .cloned()
            .collect();
        let scope_options = filter::scope_options(&companies);
        let cards = filter::scope_assignments(&assignments, scope)
            .into_iter()
            .map(|assignment| assignment_card(assignment, today))
            .collect();

        Ok(RecruiterOverview {
            recruiter,
            stats,
            selected_company: scope.as_value().to_string(),
            companies,
            scope_options,
            assignments: cards,
        })
    }

    /// Diff the vacancy's current recruiters against `desired`.
    pub fn plan_roster(
        &self,
        vacancy_id: &VacancyId,
        desired: &[RecruiterId],
    ) -> Result<RosterChange, DashboardServiceError> {
        let current = self.directory.assignments_for_vacancy(vacancy_id)?;
        let change = RosterChange::plan(&current, desired);
        debug!(
            %vacancy_id,
            assign = change.recruiters_to_assign.len(),
            remove = change.assignments_to_remove.len(),
            "planned roster change"
        );
        Ok(change)
    }
}

/// Cards and rollup for assignments supplied by the caller rather than the directory.
pub fn assess_assignments(assignments: &[Assignment], today: NaiveDate) -> AssignmentBatchView {
    AssignmentBatchView {
        cards: assignments
            .iter()
            .map(|assignment| assignment_card(assignment, today))
            .collect(),
        rollup: RecruiterRollup::from_assignments(assignments).to_view(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DashboardServiceError {
    #[error("recruiter {0} not found")]
    RecruiterNotFound(RecruiterId),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
