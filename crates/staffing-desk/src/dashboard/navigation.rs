//! Mapping between dashboard URLs and the page/drawer they display.

use serde::Serialize;

use super::domain::{AssignmentId, CompanyId, RecruiterId, VacancyId};

/// Every addressable location in the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Recruiters,
    RecruiterCreate,
    RecruiterDetail {
        recruiter_id: RecruiterId,
    },
    RecruiterEdit {
        recruiter_id: RecruiterId,
    },
    RecruiterAssignment {
        recruiter_id: RecruiterId,
        assignment_id: AssignmentId,
    },
    Vacancies,
    VacancyCreate,
    VacancyDetail {
        vacancy_id: VacancyId,
    },
    VacancyEdit {
        vacancy_id: VacancyId,
    },
    Clients,
    ClientCreate,
    CompanyEdit {
        company_id: CompanyId,
    },
}

/// Outcome of resolving a raw path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    Render { route: Route, state: UiState },
    Redirect { location: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Recruiters,
    Vacancies,
    Clients,
}

impl Tab {
    pub const fn ordered() -> [Self; 3] {
        [Self::Recruiters, Self::Vacancies, Self::Clients]
    }

    pub fn root(self) -> Route {
        match self {
            Self::Recruiters => Route::Recruiters,
            Self::Vacancies => Route::Vacancies,
            Self::Clients => Route::Clients,
        }
    }

    pub fn create(self) -> Route {
        match self {
            Self::Recruiters => Route::RecruiterCreate,
            Self::Vacancies => Route::VacancyCreate,
            Self::Clients => Route::ClientCreate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Recruiters,
    RecruiterDetail { recruiter_id: RecruiterId },
    Vacancies,
    Clients,
    CompanyEdit { company_id: CompanyId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "drawer", rename_all = "snake_case")]
pub enum Drawer {
    CreateRecruiter,
    EditRecruiter { recruiter_id: RecruiterId },
    Assignment { assignment_id: AssignmentId },
    CreateVacancy,
    Vacancy { vacancy_id: VacancyId, editing: bool },
    CreateClient,
}

/// What the dashboard shows for a route, and where closing the drawer leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub page: Page,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab: Option<Tab>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawer: Option<Drawer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_to: Option<String>,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Recruiters => "/recruiters".to_string(),
            Self::RecruiterCreate => "/recruiters/create".to_string(),
            Self::RecruiterDetail { recruiter_id } => format!("/recruiters/{recruiter_id}"),
            Self::RecruiterEdit { recruiter_id } => format!("/recruiters/{recruiter_id}/edit"),
            Self::RecruiterAssignment {
                recruiter_id,
                assignment_id,
            } => format!("/recruiters/{recruiter_id}/assignments/{assignment_id}"),
            Self::Vacancies => "/vacancies".to_string(),
            Self::VacancyCreate => "/vacancies/create".to_string(),
            Self::VacancyDetail { vacancy_id } => format!("/vacancies/{vacancy_id}"),
            Self::VacancyEdit { vacancy_id } => format!("/vacancies/{vacancy_id}/edit"),
            Self::Clients => "/clients".to_string(),
            Self::ClientCreate => "/clients/create".to_string(),
            Self::CompanyEdit { company_id } => format!("/company/{company_id}/edit"),
        }
    }

    /// Resolve a browser path. Unknown paths redirect to the recruiter list.
    pub fn resolve(raw: &str) -> Resolution {
        let path = raw
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            ["recruiters"] => Self::Recruiters,
            ["recruiters", "create"] => Self::RecruiterCreate,
            ["recruiters", id] => Self::RecruiterDetail {
                recruiter_id: RecruiterId::new(*id),
            },
            ["recruiters", id, "edit"] => Self::RecruiterEdit {
                recruiter_id: RecruiterId::new(*id),
            },
            ["recruiters", id, "assignments", assignment] => Self::RecruiterAssignment {
                recruiter_id: RecruiterId::new(*id),
                assignment_id: AssignmentId::new(*assignment),
            },
            ["vacancies"] => Self::Vacancies,
            ["vacancies", "create"] => Self::VacancyCreate,
            ["vacancies", id] => Self::VacancyDetail {
                vacancy_id: VacancyId::new(*id),
            },
            ["vacancies", id, "edit"] => Self::VacancyEdit {
                vacancy_id: VacancyId::new(*id),
            },
            ["clients"] => Self::Clients,
            ["clients", "create"] => Self::ClientCreate,
            ["company", id, "edit"] => Self::CompanyEdit {
                company_id: CompanyId::new(*id),
            },
            ["company", id] => {
                return Resolution::Redirect {
                    location: Self::CompanyEdit {
                        company_id: CompanyId::new(*id),
                    }
                    .path(),
                }
            }
            _ => {
                return Resolution::Redirect {
                    location: Self::Recruiters.path(),
                }
            }
        };

        let state = route.ui_state();
        Resolution::Render { route, state }
    }

    pub fn ui_state(&self) -> UiState {
        let (page, drawer) = match self {
            Self::Recruiters => (Page::Recruiters, None),
            Self::RecruiterCreate => (Page::Recruiters, Some(Drawer::CreateRecruiter)),
            Self::RecruiterDetail { recruiter_id } => (recruiter_page(recruiter_id), None),
            Self::RecruiterEdit { recruiter_id } => (
                recruiter_page(recruiter_id),
                Some(Drawer::EditRecruiter {
                    recruiter_id: recruiter_id.clone(),
                }),
            ),
            Self::RecruiterAssignment {
                recruiter_id,
                assignment_id,
            } => (
                recruiter_page(recruiter_id),
                Some(Drawer::Assignment {
                    assignment_id: assignment_id.clone(),
                }),
            ),
            Self::Vacancies => (Page::Vacancies, None),
            Self::VacancyCreate => (Page::Vacancies, Some(Drawer::CreateVacancy)),
            Self::VacancyDetail { vacancy_id } => (
                Page::Vacancies,
                Some(Drawer::Vacancy {
                    vacancy_id: vacancy_id.clone(),
                    editing: false,
                }),
            ),
            Self::VacancyEdit { vacancy_id } => (
                Page::Vacancies,
                Some(Drawer::Vacancy {
                    vacancy_id: vacancy_id.clone(),
                    editing: true,
                }),
            ),
            Self::Clients => (Page::Clients, None),
            Self::ClientCreate => (Page::Clients, Some(Drawer::CreateClient)),
            Self::CompanyEdit { company_id } => (
                Page::CompanyEdit {
                    company_id: company_id.clone(),
                },
                None,
            ),
        };

        let close_to = drawer.as_ref().map(|_| self.close_target().path());
        UiState {
            tab: page.tab(),
            page,
            drawer,
            close_to,
        }
    }

    /// Route shown after the drawer opened by this route is dismissed.
    pub fn close_target(&self) -> Route {
        match self {
            Self::RecruiterEdit { recruiter_id }
            | Self::RecruiterAssignment { recruiter_id, .. } => Self::RecruiterDetail {
                recruiter_id: recruiter_id.clone(),
            },
            Self::RecruiterCreate => Self::Recruiters,
            Self::VacancyCreate | Self::VacancyDetail { .. } | Self::VacancyEdit { .. } => {
                Self::Vacancies
            }
            Self::ClientCreate => Self::Clients,
            other => other.clone(),
        }
    }
}

fn recruiter_page(recruiter_id: &RecruiterId) -> Page {
    Page::RecruiterDetail {
        recruiter_id: recruiter_id.clone(),
    }
}

impl Page {
    pub fn tab(&self) -> Option<Tab> {
        match self {
            Self::Recruiters => Some(Tab::Recruiters),
            Self::Vacancies => Some(Tab::Vacancies),
            Self::Clients => Some(Tab::Clients),
            Self::RecruiterDetail { .. } | Self::CompanyEdit { .. } => None,
        }
    }
}
