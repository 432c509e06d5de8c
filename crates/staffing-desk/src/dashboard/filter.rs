//! Free-text search over directory entities and company scoping of assignments.

use std::collections::HashSet;

use serde::Serialize;

use super::domain::{Assignment, Company, CompanyId, Recruiter, Vacancy};

/// Value the company picker uses for "every company".
pub const ALL_COMPANIES: &str = "0";
const ALL_COMPANIES_LABEL: &str = "All";

/// Entities that expose text fields to the search box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<Option<&str>>;
}

impl Searchable for Recruiter {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.first_name.as_str()),
            Some(self.last_name.as_str()),
            Some(self.email.as_str()),
        ]
    }
}

impl Searchable for Vacancy {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.title.as_str()), self.description.as_deref()]
    }
}

impl Searchable for Company {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.name.as_str()),
            self.email.as_deref(),
            self.phone.as_deref(),
            self.address.as_deref(),
        ]
    }
}

/// Case-insensitive substring query. The raw input is not trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        if self.is_empty() {
            return true;
        }

        item.search_fields()
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Keep the items whose searchable fields contain `query`, preserving source order.
pub fn search<T: Searchable>(items: Vec<T>, query: &str) -> Vec<T> {
    let query = SearchQuery::new(query);
    items.into_iter().filter(|item| query.matches(item)).collect()
}

/// Company restriction applied to a recruiter's assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CompanyScope {
    #[default]
    All,
    Company(CompanyId),
}

impl CompanyScope {
    /// Absent, empty and the `"0"` sentinel all select every company.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(ALL_COMPANIES) => Self::All,
            Some(id) => Self::Company(CompanyId::new(id)),
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_COMPANIES,
            Self::Company(id) => id.as_str(),
        }
    }

    /// Assignments without an embedded vacancy never match, even for [`CompanyScope::All`].
    pub fn includes(&self, assignment: &Assignment) -> bool {
        match (self, assignment.company_id()) {
            (_, None) => false,
            (Self::All, Some(_)) => true,
            (Self::Company(selected), Some(company_id)) => selected == company_id,
        }
    }
}

pub fn scope_assignments<'a>(
    assignments: &'a [Assignment],
    scope: &CompanyScope,
) -> Vec<&'a Assignment> {
    assignments
        .iter()
        .filter(|assignment| scope.includes(assignment))
        .collect()
}

/// Companies referenced by the assignments' vacancies, in `companies` order.
pub fn recruiter_companies<'a>(
    assignments: &[Assignment],
    companies: &'a [Company],
) -> Vec<&'a Company> {
    let referenced: HashSet<&CompanyId> = assignments
        .iter()
        .filter_map(Assignment::company_id)
        .collect();

    companies
        .iter()
        .filter(|company| referenced.contains(&company.id))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeOption {
    pub value: String,
    pub label: String,
}

/// Picker entries: the "all" sentinel first, then one entry per company.
pub fn scope_options<'a, I>(companies: I) -> Vec<ScopeOption>
where
    I: IntoIterator<Item = &'a Company>,
{
    std::iter::once(ScopeOption {
        value: ALL_COMPANIES.to_string(),
        label: ALL_COMPANIES_LABEL.to_string(),
    })
    .chain(companies.into_iter().map(|company| ScopeOption {
        value: company.id.to_string(),
        label: company.name.clone(),
    }))
    .collect()
}
