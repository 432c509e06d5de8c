use super::domain::{Assignment, Company, Recruiter, RecruiterId, Vacancy, VacancyId};

/// Read-only view of the entities owned by the upstream staffing API.
pub trait RecruitingDirectory: Send + Sync {
    fn recruiters(&self) -> Result<Vec<Recruiter>, DirectoryError>;
    fn recruiter(&self, id: &RecruiterId) -> Result<Option<Recruiter>, DirectoryError>;
    fn companies(&self) -> Result<Vec<Company>, DirectoryError>;
    fn vacancies(&self) -> Result<Vec<Vacancy>, DirectoryError>;
    fn assignments_for_recruiter(
        &self,
        id: &RecruiterId,
    ) -> Result<Vec<Assignment>, DirectoryError>;
    fn assignments_for_vacancy(&self, id: &VacancyId) -> Result<Vec<Assignment>, DirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory unavailable: {0}")]
    Unavailable(String),
    #[error("directory returned inconsistent data: {0}")]
    Inconsistent(String),
}
