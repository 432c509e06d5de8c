use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use staffing_desk::config::AppConfig;
use staffing_desk::dashboard::directory::{DirectoryError, RecruitingDirectory};
use staffing_desk::dashboard::domain::{
    Assignment, Company, Recruiter, RecruiterId, Vacancy, VacancyId,
};
use staffing_desk::dashboard::snapshot::DirectorySnapshot;
use staffing_desk::error::AppError;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Directory backed by a snapshot loaded once at startup.
#[derive(Default, Clone)]
pub(crate) struct InMemoryDirectory {
    snapshot: Arc<DirectorySnapshot>,
}

impl InMemoryDirectory {
    pub(crate) fn new(snapshot: DirectorySnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }
}

impl RecruitingDirectory for InMemoryDirectory {
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
        Ok(self
            .snapshot
            .assignments_for_recruiter(id)
            .cloned()
            .collect())
    }

    fn assignments_for_vacancy(&self, id: &VacancyId) -> Result<Vec<Assignment>, DirectoryError> {
        Ok(self.snapshot.assignments_for_vacancy(id).cloned().collect())
    }
}

/// Explicit `--snapshot` wins over `APP_SNAPSHOT_PATH`.
pub(crate) fn snapshot_path(explicit: Option<PathBuf>, config: &AppConfig) -> Option<PathBuf> {
    explicit.or_else(|| config.directory.snapshot_path.clone())
}

pub(crate) fn load_directory(path: Option<PathBuf>) -> Result<InMemoryDirectory, AppError> {
    match path {
        Some(path) => {
            let snapshot = DirectorySnapshot::from_path(&path)?;
            info!(
                path = %path.display(),
                recruiters = snapshot.recruiters.len(),
                companies = snapshot.companies.len(),
                vacancies = snapshot.vacancies.len(),
                assignments = snapshot.assignments.len(),
                "loaded directory snapshot"
            );
            Ok(InMemoryDirectory::new(snapshot))
        }
        None => {
            warn!("no directory snapshot configured; serving an empty directory");
            Ok(InMemoryDirectory::default())
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
