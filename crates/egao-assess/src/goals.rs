//! Goal selection from the fixed stage/motivation tables.

use egao_core::models::goal::GoalSet;

use crate::error::ScoringError;
use crate::motivation::MotivationLevel;
use crate::stage::Stage;

/// (short-term, long-term) goal text per stage 1..=5.
const STAGE_GOALS: [(&str, &str); 5] = [
    ("基本的なADLの安定", "一部介助レベルへの改善"),
    ("介助量の軽減", "見守りレベルへの改善"),
    ("見守り場面の特定", "部分的な自立達成"),
    ("自立範囲の拡大", "完全自立の維持"),
    ("現状機能の維持", "社会参加の促進"),
];

/// (short-term, long-term) goal text per motivation index 0..=2.
const MOTIVATION_GOALS: [(&str, &str); 3] = [
    ("基本的なコミュニケーションの確立", "意思表示の改善"),
    ("日常的な意思疎通の向上", "積極的な活動参加"),
    ("社会的交流の促進", "自己実現の支援"),
];

/// Select the goal set for a derived stage and motivation level.
///
/// Short-term goals are the stage entry followed by the motivation entry;
/// likewise for long-term. The lookups cannot miss for values produced by
/// the scoring functions — a miss means a caller bypassed the clamping and
/// is reported as [`ScoringError::InvariantViolation`].
pub fn select_goals(stage: Stage, motivation: MotivationLevel) -> Result<GoalSet, ScoringError> {
    let stage_index = usize::from(stage.get()) - 1;
    let (stage_short, stage_long) = STAGE_GOALS.get(stage_index).ok_or_else(|| {
        ScoringError::InvariantViolation(format!("no stage goal entry for stage {}", stage.get()))
    })?;

    let motivation_index = motivation.index();
    let (motivation_short, motivation_long) =
        MOTIVATION_GOALS.get(motivation_index).ok_or_else(|| {
            ScoringError::InvariantViolation(format!(
                "no motivation goal entry for index {motivation_index}"
            ))
        })?;

    Ok(GoalSet {
        short_term: vec![stage_short.to_string(), motivation_short.to_string()],
        long_term: vec![stage_long.to_string(), motivation_long.to_string()],
    })
}
