use super::domain::{Assignment, Company, Recruiter, RecruiterId, Vacancy, VacancyId};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Fully resolved copy of the upstream API's collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectorySnapshot {
    pub recruiters: Vec<Recruiter>,
    pub companies: Vec<Company>,
    pub vacancies: Vec<Vacancy>,
    pub assignments: Vec<Assignment>,
}

impl DirectorySnapshot {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        let snapshot = serde_json::from_reader(reader)?;
        Ok(snapshot)
    }

    pub fn recruiter(&self, id: &RecruiterId) -> Option<&Recruiter> {
        self.recruiters.iter().find(|recruiter| &recruiter.id == id)
    }

    pub fn assignments_for_recruiter<'a>(
        &'a self,
        id: &'a RecruiterId,
    ) -> impl Iterator<Item = &'a Assignment> + 'a {
        self.assignments
            .iter()
            .filter(move |assignment| &assignment.recruiter_id == id)
    }

    pub fn assignments_for_vacancy<'a>(
        &'a self,
        id: &'a VacancyId,
    ) -> impl Iterator<Item = &'a Assignment> + 'a {
        self.assignments
            .iter()
            .filter(move |assignment| &assignment.vacancy_id == id)
    }
}

#[derive(Debug)]
pub enum SnapshotError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Io { path, source } => write!(
                f,
                "failed to read directory snapshot {}: {}",
                path.display(),
                source
            ),
            SnapshotError::Json(err) => write!(f, "invalid directory snapshot: {}", err),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io { source, .. } => Some(source),
            SnapshotError::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
