use std::collections::HashSet;

use serde::Serialize;

use super::domain::{Assignment, AssignmentId, RecruiterId};

const AVATAR_PALETTE: [&str; 14] = [
    "dark", "gray", "red", "pink", "grape", "violet", "indigo", "blue", "cyan", "green", "lime",
    "yellow", "orange", "teal",
];

/// Assignment calls needed to move a vacancy's recruiters to a desired set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterChange {
    pub recruiters_to_assign: Vec<RecruiterId>,
    pub assignments_to_remove: Vec<AssignmentId>,
}

impl RosterChange {
    /// `current` are the vacancy's existing assignments.
    pub fn plan(current: &[Assignment], desired: &[RecruiterId]) -> Self {
        let assigned: HashSet<&RecruiterId> = current
            .iter()
            .map(|assignment| &assignment.recruiter_id)
            .collect();
        let wanted: HashSet<&RecruiterId> = desired.iter().collect();

        let recruiters_to_assign = desired
            .iter()
            .filter(|id| !assigned.contains(id))
            .cloned()
            .collect();

        let assignments_to_remove = current
            .iter()
            .filter(|assignment| !wanted.contains(&assignment.recruiter_id))
            .map(|assignment| assignment.id.clone())
            .collect();

        Self {
            recruiters_to_assign,
            assignments_to_remove,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recruiters_to_assign.is_empty() && self.assignments_to_remove.is_empty()
    }
}

/// Stable palette color for an identifier, so avatars keep their color across renders.
pub fn avatar_color(id: &str) -> &'static str {
    let sum = id
        .encode_utf16()
        .fold(0usize, |acc, unit| acc.wrapping_add(usize::from(unit)));
    AVATAR_PALETTE[sum % AVATAR_PALETTE.len()]
}
