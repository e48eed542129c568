//! The generated care-plan document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::goal::GoalSet;
use super::usage::TokenUsage;

/// Scoring summary attached to a plan so exports can show how the goals
/// were derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreSummary {
    /// Overall dependency stage, 1–5.
    pub stage: u8,
    /// Motivation level, 0.0–2.0, one decimal place.
    pub motivation: f64,
}

/// A generated care plan: the three narrative sections of 第1表 plus the
/// goal set and scoring summary that seed 第2表.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CarePlan {
    pub id: Uuid,
    pub client_name: String,
    /// 利用者及び家族の生活に対する意向
    pub intentions: String,
    /// 介護認定審査会の意見及びサービスの種類の指定
    pub certification_opinion: String,
    /// 総合的な援助の方針
    pub support_policy: String,
    pub goals: GoalSet,
    pub scores: ScoreSummary,
    /// Additional named sections a deployment may configure (kept in
    /// document order by section key).
    #[serde(default)]
    pub extra_sections: BTreeMap<String, String>,
    pub model_id: String,
    pub usage: TokenUsage,
    pub created_at: jiff::Timestamp,
}

impl CarePlan {
    /// The plan body as labeled plain-text sections, in document order.
    /// Used by previews and the text exporter.
    pub fn sections(&self) -> Vec<(&str, &str)> {
        let mut sections = vec![
            ("利用者及び家族の生活に対する意向", self.intentions.as_str()),
            (
                "介護認定審査会の意見及びサービスの種類の指定",
                self.certification_opinion.as_str(),
            ),
            ("総合的な援助の方針", self.support_policy.as_str()),
        ];
        sections.extend(
            self.extra_sections
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
        sections
    }
}
