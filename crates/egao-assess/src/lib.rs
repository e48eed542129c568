//! egao-assess
//!
//! Deterministic scoring over an ADL assessment. Pure data and arithmetic —
//! no AWS dependency, no I/O, no state between calls.
//!
//! Three operations, composable via [`assess`]:
//!
//! - [`stage::compute_stage`] — weighted average of the rating weights over
//!   the items present, mapped onto a 1–5 dependency stage;
//! - [`motivation::compute_motivation`] — the cognition/communication/sleep
//!   items scored against a fixed-sum denominator, yielding a 0–2 level;
//! - [`goals::select_goals`] — short-/long-term goal text from the fixed
//!   tables keyed by stage and truncated motivation level.

pub mod error;
pub mod goals;
pub mod motivation;
pub mod stage;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use egao_core::models::adl::AdlAssessment;
use egao_core::models::care_plan::ScoreSummary;
use egao_core::models::goal::GoalSet;

use crate::error::ScoringError;
use crate::motivation::MotivationLevel;
use crate::stage::Stage;

/// The full outcome of scoring one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentOutcome {
    pub stage: Stage,
    pub motivation: MotivationLevel,
    pub goals: GoalSet,
}

impl AssessmentOutcome {
    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            stage: self.stage.get(),
            motivation: self.motivation.value(),
        }
    }
}

/// Score an assessment end to end: stage, motivation, and the goal set
/// derived from both.
pub fn assess(assessment: &AdlAssessment) -> Result<AssessmentOutcome, ScoringError> {
    let stage = stage::compute_stage(assessment)?;
    let motivation = motivation::compute_motivation(assessment)?;
    let goals = goals::select_goals(stage, motivation)?;
    Ok(AssessmentOutcome {
        stage,
        motivation,
        goals,
    })
}
