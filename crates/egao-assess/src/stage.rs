//! Dependency-stage computation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use egao_core::models::adl::{self, AdlAssessment};

use crate::error::ScoringError;

/// Overall dependency stage, always in 1..=5.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Stage(u8);

impl Stage {
    /// Construct from an already-derived value, rejecting anything outside
    /// 1..=5. Scoring itself goes through [`Stage::clamped`]; this is for
    /// callers re-hydrating a stored stage.
    pub fn try_new(value: u8) -> Result<Stage, ScoringError> {
        if (1..=5).contains(&value) {
            Ok(Stage(value))
        } else {
            Err(ScoringError::InvariantViolation(format!(
                "stage {value} outside 1..=5"
            )))
        }
    }

    /// Clamp a raw computed value into range.
    pub fn clamped(raw: i64) -> Stage {
        Stage(raw.clamp(1, 5) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Compute the dependency stage from the items present in the assessment.
///
/// Each present item contributes its rating weight times its catalogue
/// priority multiplier (uncatalogued ids get 1.0); the weighted average is
/// scaled from the 1–4 rating range onto 1–5 and truncated — fractional
/// stages deliberately floor downward rather than round.
pub fn compute_stage(assessment: &AdlAssessment) -> Result<Stage, ScoringError> {
    if assessment.is_empty() {
        return Err(ScoringError::EmptyAssessment);
    }

    let mut total_weight = 0.0;
    let mut weighted_sum = 0.0;
    for (id, rating) in assessment.iter() {
        let multiplier = adl::stage_multiplier(id);
        total_weight += multiplier;
        weighted_sum += rating.stage_weight() * multiplier;
    }

    let average = weighted_sum / total_weight;
    let raw = ((average / 4.0) * 5.0) as i64;
    Ok(Stage::clamped(raw))
}
