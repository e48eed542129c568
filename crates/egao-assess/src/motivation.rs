//! Motivation-level computation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use egao_core::models::adl::{self, AdlAssessment};

use crate::error::ScoringError;

/// Motivation level in 0.0..=2.0, held at one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct MotivationLevel(f64);

impl MotivationLevel {
    pub fn new(value: f64) -> MotivationLevel {
        MotivationLevel((value * 10.0).round() / 10.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Goal-table key: the level truncated (not rounded) to an integer and
    /// clamped into {0, 1, 2}.
    pub fn index(self) -> usize {
        (self.0.floor() as i64).clamp(0, 2) as usize
    }
}

/// Compute the motivation level from the communication/cognition/sleep
/// items.
///
/// The denominator is the FIXED sum of all three motivation weights (4.0),
/// regardless of which of the items are actually present — a missing item
/// lowers the level instead of renormalizing. This asymmetry with the
/// stage denominator is observed product behavior and is kept as-is.
pub fn compute_motivation(assessment: &AdlAssessment) -> Result<MotivationLevel, ScoringError> {
    if assessment.is_empty() {
        return Err(ScoringError::EmptyAssessment);
    }

    let total_weight: f64 = adl::motivation_items()
        .filter_map(|d| d.motivation_weight)
        .sum();

    let mut weighted_sum = 0.0;
    for def in adl::motivation_items() {
        let Some(weight) = def.motivation_weight else {
            continue;
        };
        if let Some(rating) = assessment.get(def.id) {
            weighted_sum += rating.motivation_score() * weight;
        }
    }

    Ok(MotivationLevel::new(weighted_sum / total_weight))
}
