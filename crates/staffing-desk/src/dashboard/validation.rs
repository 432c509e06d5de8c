//! Field-level validation for the create/edit forms of the dashboard.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::domain::RecruiterId;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\S+@\S+$").expect("email pattern compiles"))
}

/// Per-field messages collected while validating a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    pub errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.is_empty() {
            self.add(field, message);
        }
    }

    fn non_negative(&mut self, field: &'static str, value: i64) {
        if value < 0 {
            self.add(field, "Must be zero or greater");
        }
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecruiterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl Validate for RecruiterForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("firstName", &self.first_name, "First name is required");
        errors.require("lastName", &self.last_name, "Last name is required");
        if self.email.is_empty() {
            errors.add("email", "Email is required");
        } else if !email_pattern().is_match(&self.email) {
            errors.add("email", "Email is invalid");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyForm {
    pub name: String,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Validate for CompanyForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("name", &self.name, "Company name is required");
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VacancyForm {
    pub title: String,
    pub description: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    pub deadline: Option<String>,
    pub company_id: String,
    pub recruiter_ids: Vec<RecruiterId>,
    pub required_resumes: i64,
}

impl Validate for VacancyForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("title", &self.title, "Title is required");
        errors.require("companyId", &self.company_id, "Company is required");

        match self.deadline.as_deref() {
            None | Some("") => errors.add("deadline", "Deadline is required"),
            Some(raw) if !is_date(raw) => errors.add("deadline", "Deadline must be a valid date"),
            Some(_) => {}
        }

        errors.non_negative("requiredResumes", self.required_resumes);
        errors.into_result()
    }
}

fn is_date(raw: &str) -> bool {
    DateTime::parse_from_rfc3339(raw).is_ok() || NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentForm {
    pub required_resumes: i64,
    pub sent_resumes: i64,
    pub accepted_resumes: i64,
    pub rejected_resumes: i64,
}

impl Validate for AssignmentForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.non_negative("requiredResumes", self.required_resumes);
        errors.non_negative("sentResumes", self.sent_resumes);
        errors.non_negative("acceptedResumes", self.accepted_resumes);
        errors.non_negative("rejectedResumes", self.rejected_resumes);
        errors.into_result()
    }
}

/// Forms exposed through the validation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Recruiter,
    Company,
    Vacancy,
    Assignment,
}

impl FormKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Recruiter => "recruiter",
            Self::Company => "company",
            Self::Vacancy => "vacancy",
            Self::Assignment => "assignment",
        }
    }

    /// Decode `payload` as this form and validate it.
    pub fn validate_payload(self, payload: serde_json::Value) -> Result<(), FormError> {
        match self {
            Self::Recruiter => decode_and_validate::<RecruiterForm>(payload),
            Self::Company => decode_and_validate::<CompanyForm>(payload),
            Self::Vacancy => decode_and_validate::<VacancyForm>(payload),
            Self::Assignment => decode_and_validate::<AssignmentForm>(payload),
        }
    }
}

impl FromStr for FormKind {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "recruiter" | "recruiters" => Ok(Self::Recruiter),
            "company" | "companies" | "client" | "clients" => Ok(Self::Company),
            "vacancy" | "vacancies" => Ok(Self::Vacancy),
            "assignment" | "assignments" => Ok(Self::Assignment),
            other => Err(FormError::UnknownForm(other.to_string())),
        }
    }
}

fn decode_and_validate<F>(payload: serde_json::Value) -> Result<(), FormError>
where
    F: DeserializeOwned + Validate,
{
    let form: F = serde_json::from_value(payload)?;
    form.validate()?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("unknown form '{0}'")]
    UnknownForm(String),
    #[error("malformed form payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn recruiter_form() -> RecruiterForm {
        RecruiterForm {
            first_name: "Anna".to_string(),
            last_name: "Petrova".to_string(),
            email: "anna@example.com".to_string(),
            phone: None,
        }
    }

    #[test]
    fn recruiter_form_accepts_complete_input() {
        assert!(recruiter_form().validate().is_ok());
    }

    #[test]
    fn recruiter_form_reports_each_missing_field() {
        let errors = RecruiterForm::default()
            .validate()
            .expect_err("empty form is invalid");
        assert_eq!(errors.get("firstName"), Some("First name is required"));
        assert_eq!(errors.get("lastName"), Some("Last name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn recruiter_form_rejects_malformed_email() {
        let mut form = recruiter_form();
        form.email = "anna at example.com".to_string();
        let errors = form.validate().expect_err("email is invalid");
        assert_eq!(errors.get("email"), Some("Email is invalid"));
        assert_eq!(errors.errors.len(), 1);

        form.email = "a@b".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn whitespace_counts_as_a_value() {
        let form = CompanyForm {
            name: " ".to_string(),
            ..CompanyForm::default()
        };
        assert!(form.validate().is_ok());
        assert!(CompanyForm::default().validate().is_err());
    }

    #[test]
    fn vacancy_form_requires_title_company_and_deadline() {
        let errors = VacancyForm::default()
            .validate()
            .expect_err("empty vacancy is invalid");
        assert!(errors.get("title").is_some());
        assert!(errors.get("companyId").is_some());
        assert_eq!(errors.get("deadline"), Some("Deadline is required"));

        let form = VacancyForm {
            title: "Backend Engineer".to_string(),
            company_id: "co-1".to_string(),
            deadline: Some("2025-12-01".to_string()),
            ..VacancyForm::default()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn vacancy_form_rejects_unparseable_deadline() {
        let form = VacancyForm {
            title: "Backend Engineer".to_string(),
            company_id: "co-1".to_string(),
            deadline: Some("next friday".to_string()),
            required_resumes: -1,
            ..VacancyForm::default()
        };
        let errors = form.validate().expect_err("deadline invalid");
        assert_eq!(errors.get("deadline"), Some("Deadline must be a valid date"));
        assert!(errors.get("requiredResumes").is_some());
    }

    #[test]
    fn assignment_form_rejects_negative_counters() {
        let form = AssignmentForm {
            required_resumes: 5,
            sent_resumes: -2,
            accepted_resumes: 0,
            rejected_resumes: -1,
        };
        let errors = form.validate().expect_err("negative counters");
        assert_eq!(errors.errors.len(), 2);
        assert!(errors.get("sentResumes").is_some());
        assert!(errors.get("rejectedResumes").is_some());
    }

    #[test]
    fn form_kind_validates_json_payloads() {
        let kind: FormKind = "recruiters".parse().expect("known form");
        assert_eq!(kind, FormKind::Recruiter);

        let result = kind.validate_payload(json!({ "firstName": "Anna", "lastName": "P" }));
        match result {
            Err(FormError::Invalid(errors)) => assert!(errors.get("email").is_some()),
            other => panic!("expected invalid form, got {other:?}"),
        }

        let malformed = FormKind::Assignment.validate_payload(json!({ "sentResumes": "many" }));
        assert!(matches!(malformed, Err(FormError::Malformed(_))));
        assert!(matches!(
            "invoice".parse::<FormKind>(),
            Err(FormError::UnknownForm(_))
        ));
    }
}
