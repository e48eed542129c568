use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The goal text selected for a plan: two short-term and two long-term
/// entries (one pair keyed by stage, one by motivation level).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GoalSet {
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}
