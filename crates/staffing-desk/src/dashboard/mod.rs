//! Read-side engine of the recruiting operations dashboard: assignment statistics, color
//! bands, search and company scoping, form validation, and route resolution.

pub mod bands;
pub mod directory;
pub mod domain;
pub mod export;
pub mod filter;
pub mod navigation;
pub mod roster;
pub mod router;
pub mod service;
pub mod snapshot;
pub mod stats;
pub mod validation;

#[cfg(test)]
mod tests;

pub use bands::{DeadlineBand, OutcomeBand, ProgressBand, RemainingBand};
pub use directory::{DirectoryError, RecruitingDirectory};
pub use domain::{
    Assignment, AssignmentId, Company, CompanyId, Recruiter, RecruiterId, ResumeCounters, Vacancy,
    VacancyId,
};
pub use export::{export_overview_csv, ExportError};
pub use filter::{CompanyScope, ScopeOption, SearchQuery};
pub use navigation::{Drawer, Page, Resolution, Route, Tab, UiState};
pub use roster::{avatar_color, RosterChange};
pub use router::dashboard_router;
pub use service::{assess_assignments, DashboardService, DashboardServiceError};
pub use snapshot::{DirectorySnapshot, SnapshotError};
pub use stats::views::{
    AssignmentBatchView, AssignmentCardView, AssignmentStatsView, RecruiterOverview,
    RecruiterStatsView, VacancyListingView,
};
pub use stats::{AssignmentStats, RecruiterRollup};
pub use validation::{FormError, FormKind, Validate, ValidationErrors};
