mod summary;
pub mod views;

pub use summary::{
    assignment_card, efficiency_percent, ratio_percent, relevance_percent, AssignmentStats,
    RecruiterRollup,
};
