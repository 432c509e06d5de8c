use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::dashboard::directory::{DirectoryError, RecruitingDirectory};
use crate::dashboard::domain::{
    Assignment, AssignmentId, Company, CompanyId, Recruiter, RecruiterId, Vacancy, VacancyId,
    VacancySnapshot,
};
use crate::dashboard::snapshot::DirectorySnapshot;
use crate::dashboard::{dashboard_router, DashboardService};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
}

pub(super) fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn recruiter(id: &str, first_name: &str, last_name: &str) -> Recruiter {
    Recruiter {
        id: RecruiterId::new(id),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!("{}@staffing.example", first_name.to_ascii_lowercase()),
        phone: None,
    }
}

fn company(id: &str, name: &str) -> Company {
    Company {
        id: CompanyId::new(id),
        name: name.to_string(),
        address: None,
        email: None,
        phone: None,
    }
}

fn vacancy(id: &str, title: &str, company_id: &str, deadline: Option<DateTime<Utc>>) -> Vacancy {
    Vacancy {
        id: VacancyId::new(id),
        title: title.to_string(),
        description: None,
        deadline,
        company_id: CompanyId::new(company_id),
        created_at: timestamp(2025, 9, 1),
        updated_at: timestamp(2025, 9, 1),
    }
}

pub(super) fn assignment(
    id: &str,
    recruiter_id: &str,
    vacancy: Option<&Vacancy>,
    counters: [i64; 4],
) -> Assignment {
    let [required, sent, accepted, rejected] = counters;
    Assignment {
        id: AssignmentId::new(id),
        recruiter_id: RecruiterId::new(recruiter_id),
        vacancy_id: vacancy
            .map(|vacancy| vacancy.id.clone())
            .unwrap_or_else(|| VacancyId::new("vac-detached")),
        required_resumes: required,
        sent_resumes: sent,
        accepted_resumes: accepted,
        rejected_resumes: rejected,
        created_at: timestamp(2025, 9, 2),
        updated_at: timestamp(2025, 9, 2),
        vacancy: vacancy.map(|vacancy| VacancySnapshot {
            id: vacancy.id.clone(),
            title: vacancy.title.clone(),
            company_id: vacancy.company_id.clone(),
            deadline: vacancy.deadline,
        }),
        recruiter: None,
    }
}

/// Three recruiters, three companies, three vacancies.
///
/// `rec-1` holds an overdue DevOps assignment, an upcoming Severstal assignment, and one
/// assignment whose vacancy was not embedded.
pub(super) fn snapshot() -> DirectorySnapshot {
    let backend = vacancy(
        "vac-1",
        "Backend Engineer",
        "co-1",
        Some(timestamp(2025, 9, 20)),
    );
    let qa = vacancy("vac-2", "QA Lead", "co-2", Some(timestamp(2025, 10, 15)));
    let analyst = vacancy("vac-3", "Data Analyst", "co-3", None);

    DirectorySnapshot {
        recruiters: vec![
            recruiter("rec-1", "Anna", "Petrova"),
            recruiter("rec-2", "Boris", "Ivanov"),
            recruiter("rec-3", "Clara", "Smith"),
        ],
        companies: vec![
            company("co-1", "DevOps Inc"),
            company("co-2", "Северсталь"),
            company("co-3", "Acme Staffing"),
        ],
        assignments: vec![
            assignment("as-1", "rec-1", Some(&backend), [10, 5, 2, 1]),
            assignment("as-2", "rec-1", Some(&qa), [4, 4, 0, 3]),
            assignment("as-3", "rec-1", None, [2, 0, 0, 0]),
            assignment("as-4", "rec-2", Some(&backend), [3, 3, 3, 0]),
        ],
        vacancies: vec![backend, qa, analyst],
    }
}

pub(super) struct MemoryDirectory {
    snapshot: DirectorySnapshot,
}

impl MemoryDirectory {
    pub(super) fn new(snapshot: DirectorySnapshot) -> Self {
        Self { snapshot }
    }
}

impl RecruitingDirectory for MemoryDirectory {
    fn recruiters(&self) -> Result<Vec<Recruiter>, DirectoryError> {
        Ok(self.snapshot.recruiters.clone())
    }

    fn recruiter(&self, id: &RecruiterId) -> Result<Option<Recruiter>, DirectoryError> {
        Ok(self.snapshot.recruiter(id).cloned())
    }

    fn companies(&self) -> Result<Vec<Company>, DirectoryError> {
        Ok(self.snapshot.companies.clone())
    }

    fn vacancies(&self) -> Result<Vec<Vacancy>, DirectoryError> {
        Ok(self.snapshot.vacancies.clone())
    }

    fn assignments_for_recruiter(
        &self,
        id: &RecruiterId,
    ) -> Result<Vec<Assignment>, DirectoryError> {
        Ok(self.snapshot.assignments_for_recruiter(id).cloned().collect())
    }

    fn assignments_for_vacancy(&self, id: &VacancyId) -> Result<Vec<Assignment>, DirectoryError> {
        Ok(self.snapshot.assignments_for_vacancy(id).cloned().collect())
    }
}

pub(super) struct UnavailableDirectory;

impl RecruitingDirectory for UnavailableDirectory {
    fn recruiters(&self) -> Result<Vec<Recruiter>, DirectoryError> {
        Err(DirectoryError::Unavailable("staffing api offline".to_string()))
    }

    fn recruiter(&self, _id: &RecruiterId) -> Result<Option<Recruiter>, DirectoryError> {
        Err(DirectoryError::Unavailable("staffing api offline".to_string()))
    }

    fn companies(&self) -> Result<Vec<Company>, DirectoryError> {
        Err(DirectoryError::Unavailable("staffing api offline".to_string()))
    }

    fn vacancies(&self) -> Result<Vec<Vacancy>, DirectoryError> {
        Err(DirectoryError::Unavailable("staffing api offline".to_string()))
    }

    fn assignments_for_recruiter(
        &self,
        _id: &RecruiterId,
    ) -> Result<Vec<Assignment>, DirectoryError> {
        Err(DirectoryError::Unavailable("staffing api offline".to_string()))
    }

    fn assignments_for_vacancy(&self, _id: &VacancyId) -> Result<Vec<Assignment>, DirectoryError> {
        Err(DirectoryError::Unavailable("staffing api offline".to_string()))
    }
}

pub(super) fn build_service() -> DashboardService<MemoryDirectory> {
    DashboardService::new(Arc::new(MemoryDirectory::new(snapshot())))
}

pub(super) fn router_with_service<D>(service: DashboardService<D>) -> axum::Router
where
    D: RecruitingDirectory + 'static,
{
    dashboard_router(Arc::new(service))
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}

/// Directory whose upstream payloads reference records it cannot resolve.
pub(super) struct InconsistentDirectory;

impl InconsistentDirectory {
    fn error() -> DirectoryError {
        DirectoryError::Inconsistent("assignment as-1 references missing vacancy".to_string())
    }
}

impl RecruitingDirectory for InconsistentDirectory {
    fn recruiters(&self) -> Result<Vec<Recruiter>, DirectoryError> {
        Err(Self::error())
    }

    fn recruiter(&self, _id: &RecruiterId) -> Result<Option<Recruiter>, DirectoryError> {
        Err(Self::error())
    }

    fn companies(&self) -> Result<Vec<Company>, DirectoryError> {
        Err(Self::error())
    }

    fn vacancies(&self) -> Result<Vec<Vacancy>, DirectoryError> {
        Err(Self::error())
    }

    fn assignments_for_recruiter(
        &self,
        _id: &RecruiterId,
    ) -> Result<Vec<Assignment>, DirectoryError> {
        Err(Self::error())
    }

    fn assignments_for_vacancy(&self, _id: &VacancyId) -> Result<Vec<Assignment>, DirectoryError> {
        Err(Self::error())
    }
}
