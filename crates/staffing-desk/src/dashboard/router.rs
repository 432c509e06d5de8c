use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::bands::current_date;
use super::directory::{DirectoryError, RecruitingDirectory};
use super::domain::{Assignment, RecruiterId, VacancyId};
use super::export::export_overview_csv;
use super::filter::CompanyScope;
use super::navigation::Route;
use super::service::{assess_assignments, DashboardService, DashboardServiceError};
use super::validation::{FormError, FormKind};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    pub(crate) search: Option<String>,
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OverviewParams {
    #[serde(default)]
    pub(crate) company: Option<String>,
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NavigationParams {
    pub(crate) path: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RosterRequest {
    pub(crate) recruiter_ids: Vec<RecruiterId>,
}

/// Router builder exposing the dashboard read models over HTTP.
pub fn dashboard_router<D>(service: Arc<DashboardService<D>>) -> Router
where
    D: RecruitingDirectory + 'static,
{
    Router::new()
        .route("/api/v1/recruiters", get(recruiters_handler::<D>))
        .route(
            "/api/v1/recruiters/:recruiter_id/overview",
            get(overview_handler::<D>),
        )
        .route(
            "/api/v1/recruiters/:recruiter_id/summary.csv",
            get(summary_csv_handler::<D>),
        )
        .route("/api/v1/vacancies", get(vacancies_handler::<D>))
        .route(
            "/api/v1/vacancies/:vacancy_id/roster/plan",
            post(roster_plan_handler::<D>),
        )
        .route("/api/v1/companies", get(companies_handler::<D>))
        .route("/api/v1/assignments/stats", post(assignment_stats_handler))
        .route("/api/v1/forms/:form/validate", post(validate_form_handler))
        .route("/api/v1/navigation/resolve", get(navigation_handler))
        .with_state(service)
}

fn today_or_current(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(current_date)
}

pub(crate) async fn recruiters_handler<D>(
    State(service): State<Arc<DashboardService<D>>>,
    Query(params): Query<SearchParams>,
) -> Response
where
    D: RecruitingDirectory + 'static,
{
    match service.search_recruiters(params.search.as_deref().unwrap_or_default()) {
        Ok(recruiters) => (StatusCode::OK, Json(recruiters)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn companies_handler<D>(
    State(service): State<Arc<DashboardService<D>>>,
    Query(params): Query<SearchParams>,
) -> Response
where
    D: RecruitingDirectory + 'static,
{
    match service.search_companies(params.search.as_deref().unwrap_or_default()) {
        Ok(companies) => (StatusCode::OK, Json(companies)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn vacancies_handler<D>(
    State(service): State<Arc<DashboardService<D>>>,
    Query(params): Query<SearchParams>,
) -> Response
where
    D: RecruitingDirectory + 'static,
{
    let today = today_or_current(params.today);
    match service.search_vacancies(params.search.as_deref().unwrap_or_default(), today) {
        Ok(vacancies) => (StatusCode::OK, Json(vacancies)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn overview_handler<D>(
    State(service): State<Arc<DashboardService<D>>>,
    Path(recruiter_id): Path<String>,
    Query(params): Query<OverviewParams>,
) -> Response
where
    D: RecruitingDirectory + 'static,
{
    let scope = CompanyScope::parse(params.company.as_deref());
    let today = today_or_current(params.today);
    match service.recruiter_overview(&RecruiterId(recruiter_id), &scope, today) {
        Ok(overview) => (StatusCode::OK, Json(overview)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn summary_csv_handler<D>(
    State(service): State<Arc<DashboardService<D>>>,
    Path(recruiter_id): Path<String>,
    Query(params): Query<OverviewParams>,
) -> Response
where
    D: RecruitingDirectory + 'static,
{
    let scope = CompanyScope::parse(params.company.as_deref());
    let today = today_or_current(params.today);
    let overview = match service.recruiter_overview(&RecruiterId(recruiter_id), &scope, today) {
        Ok(overview) => overview,
        Err(error) => return service_error_response(error),
    };

    let mut buffer = Vec::new();
    match export_overview_csv(&overview, &mut buffer) {
        Ok(()) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            buffer,
        )
            .into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn roster_plan_handler<D>(
    State(service): State<Arc<DashboardService<D>>>,
    Path(vacancy_id): Path<String>,
    Json(request): Json<RosterRequest>,
) -> Response
where
    D: RecruitingDirectory + 'static,
{
    match service.plan_roster(&VacancyId(vacancy_id), &request.recruiter_ids) {
        Ok(change) => (StatusCode::OK, Json(change)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn assignment_stats_handler(
    Query(params): Query<SearchParams>,
    Json(assignments): Json<Vec<Assignment>>,
) -> Response {
    let today = today_or_current(params.today);
    let view = assess_assignments(&assignments, today);
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn validate_form_handler(
    Path(form): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Response {
    let kind = match form.parse::<FormKind>() {
        Ok(kind) => kind,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::NOT_FOUND, Json(payload)).into_response();
        }
    };

    match kind.validate_payload(payload) {
        Ok(()) => (StatusCode::OK, Json(json!({ "valid": true }))).into_response(),
        Err(FormError::Invalid(errors)) => {
            let payload = json!({
                "valid": false,
                "form": kind.label(),
                "errors": errors.errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": format!("{} form: {error}", kind.label()) });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn navigation_handler(Query(params): Query<NavigationParams>) -> Response {
    (StatusCode::OK, Json(Route::resolve(&params.path))).into_response()
}

fn service_error_response(error: DashboardServiceError) -> Response {
    let status = match &error {
        DashboardServiceError::RecruiterNotFound(_) => StatusCode::NOT_FOUND,
        DashboardServiceError::Directory(DirectoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        DashboardServiceError::Directory(DirectoryError::Inconsistent(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status.is_server_error() {
        warn!(%error, "dashboard request failed");
    }

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
