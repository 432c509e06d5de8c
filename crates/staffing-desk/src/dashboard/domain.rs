use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

identifier!(
    /// Identifier of a recruiter as issued by the upstream API.
    RecruiterId
);
identifier!(
    /// Identifier of a client company.
    CompanyId
);
identifier!(
    /// Identifier of a vacancy.
    VacancyId
);
identifier!(
    /// Identifier of a recruiter-to-vacancy assignment.
    AssignmentId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruiter {
    pub id: RecruiterId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Recruiter {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Client company a vacancy is staffed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacancy {
    pub id: VacancyId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    pub company_id: CompanyId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Vacancy fields the API embeds into assignment payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancySnapshot {
    pub id: VacancyId,
    #[serde(default)]
    pub title: String,
    pub company_id: CompanyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
}

/// Recruiter fields the API embeds into assignment payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterSnapshot {
    pub id: RecruiterId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Link between one recruiter and one vacancy carrying resume-flow counters.
///
/// Counters missing from the payload deserialize as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: AssignmentId,
    pub recruiter_id: RecruiterId,
    pub vacancy_id: VacancyId,
    #[serde(default)]
    pub required_resumes: i64,
    #[serde(default)]
    pub sent_resumes: i64,
    #[serde(default)]
    pub accepted_resumes: i64,
    #[serde(default)]
    pub rejected_resumes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vacancy: Option<VacancySnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter: Option<RecruiterSnapshot>,
}

impl Assignment {
    pub fn counters(&self) -> ResumeCounters {
        ResumeCounters {
            required: self.required_resumes,
            sent: self.sent_resumes,
            accepted: self.accepted_resumes,
            rejected: self.rejected_resumes,
        }
    }

    pub fn company_id(&self) -> Option<&CompanyId> {
        self.vacancy.as_ref().map(|vacancy| &vacancy.company_id)
    }
}

/// The four resume-flow counters of an assignment, or their sum across many.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeCounters {
    pub required: i64,
    pub sent: i64,
    pub accepted: i64,
    pub rejected: i64,
}

impl ResumeCounters {
    pub const fn new(required: i64, sent: i64, accepted: i64, rejected: i64) -> Self {
        Self {
            required,
            sent,
            accepted,
            rejected,
        }
    }
}

impl Add for ResumeCounters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            required: self.required.saturating_add(rhs.required),
            sent: self.sent.saturating_add(rhs.sent),
            accepted: self.accepted.saturating_add(rhs.accepted),
            rejected: self.rejected.saturating_add(rhs.rejected),
        }
    }
}

impl Sum for ResumeCounters {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
