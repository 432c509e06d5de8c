use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::domain::ResumeCounters;

/// Traffic-light band for a percentage rendered on a progress ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    Red,
    Yellow,
    Green,
}

impl ProgressBand {
    /// Lower bound of each band is inclusive: 30 is yellow, 70 is green.
    pub const fn classify(value: u8) -> Self {
        if value < 30 {
            Self::Red
        } else if value < 70 {
            Self::Yellow
        } else {
            Self::Green
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

/// Band describing how the client responded to the resumes sent so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeBand {
    HighRisk,
    Caution,
    Positive,
    Neutral,
}

impl OutcomeBand {
    pub fn classify(counters: &ResumeCounters) -> Self {
        if counters.rejected > 0 && counters.sent > 0 {
            // Round to two decimals before comparing against the threshold.
            let rounded = (counters.rejected as f64 / counters.sent as f64 * 100.0 + 0.5).floor();
            let rejected_ratio = rounded / 100.0;
            return if rejected_ratio > 0.5 {
                Self::HighRisk
            } else {
                Self::Caution
            };
        }

        if counters.accepted > 0 {
            Self::Positive
        } else {
            Self::Neutral
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::HighRisk => "red",
            Self::Caution => "orange",
            Self::Positive => "green",
            Self::Neutral => "blue",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighRisk => "High Risk",
            Self::Caution => "Caution",
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
        }
    }
}

/// Reference date for deadline badges when the caller supplies none.
///
/// Deadlines are compared by their UTC calendar date, so "today" is taken on the same clock.
pub fn current_date() -> NaiveDate {
    Utc::now().date_naive()
}

/// Badge shown next to a vacancy deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineBand {
    Overdue,
    Upcoming,
}

impl DeadlineBand {
    /// Compares calendar days only; a deadline falling on `today` is still upcoming.
    pub fn classify(deadline: NaiveDate, today: NaiveDate) -> Self {
        if deadline < today {
            Self::Overdue
        } else {
            Self::Upcoming
        }
    }

    pub fn for_deadline(deadline: DateTime<Utc>, today: NaiveDate) -> Self {
        Self::classify(deadline.date_naive(), today)
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Overdue => "red",
            Self::Upcoming => "orange",
        }
    }
}

/// Indicator for the number of resumes a recruiter still owes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainingBand {
    Pending,
    Complete,
}

impl RemainingBand {
    pub const fn classify(remaining: i64) -> Self {
        if remaining > 0 {
            Self::Pending
        } else {
            Self::Complete
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Pending => "orange",
            Self::Complete => "green",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn counters(sent: i64, accepted: i64, rejected: i64) -> ResumeCounters {
        ResumeCounters::new(0, sent, accepted, rejected)
    }

    #[test]
    fn progress_band_boundaries_are_inclusive_on_the_low_end() {
        assert_eq!(ProgressBand::classify(0), ProgressBand::Red);
        assert_eq!(ProgressBand::classify(29), ProgressBand::Red);
        assert_eq!(ProgressBand::classify(30), ProgressBand::Yellow);
        assert_eq!(ProgressBand::classify(69), ProgressBand::Yellow);
        assert_eq!(ProgressBand::classify(70), ProgressBand::Green);
        assert_eq!(ProgressBand::classify(100).color(), "green");
    }

    #[test]
    fn outcome_band_flags_majority_rejections() {
        assert_eq!(OutcomeBand::classify(&counters(10, 2, 6)), OutcomeBand::HighRisk);
        assert_eq!(OutcomeBand::classify(&counters(10, 2, 5)), OutcomeBand::Caution);
        assert_eq!(OutcomeBand::classify(&counters(10, 0, 1)).color(), "orange");
    }

    #[test]
    fn outcome_band_rounds_ratio_before_comparing() {
        // 1001 / 2000 = 0.5005, which rounds to 0.50 and stays in caution.
        assert_eq!(
            OutcomeBand::classify(&counters(2000, 0, 1001)),
            OutcomeBand::Caution
        );
        // 1011 / 2000 = 0.5055 rounds to 0.51.
        assert_eq!(
            OutcomeBand::classify(&counters(2000, 0, 1011)),
            OutcomeBand::HighRisk
        );
    }

    #[test]
    fn outcome_band_falls_back_to_acceptance_then_neutral() {
        assert_eq!(OutcomeBand::classify(&counters(5, 3, 0)), OutcomeBand::Positive);
        assert_eq!(OutcomeBand::classify(&counters(0, 2, 4)), OutcomeBand::Positive);
        assert_eq!(OutcomeBand::classify(&counters(0, 0, 0)), OutcomeBand::Neutral);
        assert_eq!(OutcomeBand::Neutral.color(), "blue");
    }

    #[test]
    fn deadline_band_compares_calendar_days() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 10).expect("valid date");
        let yesterday = NaiveDate::from_ymd_opt(2025, 10, 9).expect("valid date");
        assert_eq!(DeadlineBand::classify(yesterday, today), DeadlineBand::Overdue);
        assert_eq!(DeadlineBand::classify(today, today), DeadlineBand::Upcoming);
    }

    #[test]
    fn deadline_late_in_the_utc_day_is_still_upcoming_that_day() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 10).expect("valid date");
        let late = Utc
            .with_ymd_and_hms(2025, 10, 10, 23, 30, 0)
            .single()
            .expect("valid timestamp");
        let early_next_day = Utc
            .with_ymd_and_hms(2025, 10, 11, 0, 15, 0)
            .single()
            .expect("valid timestamp");
        assert_eq!(DeadlineBand::for_deadline(late, today), DeadlineBand::Upcoming);
        assert_eq!(
            DeadlineBand::for_deadline(late, today.succ_opt().expect("next day")),
            DeadlineBand::Overdue
        );
        assert_eq!(
            DeadlineBand::for_deadline(early_next_day, today),
            DeadlineBand::Upcoming
        );
    }

    #[test]
    fn current_date_uses_the_utc_clock() {
        let before = Utc::now().date_naive();
        let today = current_date();
        let after = Utc::now().date_naive();
        assert!(today == before || today == after);
    }

    #[test]
    fn remaining_band_turns_green_when_nothing_is_owed() {
        assert_eq!(RemainingBand::classify(3).color(), "orange");
        assert_eq!(RemainingBand::classify(0), RemainingBand::Complete);
    }
}
