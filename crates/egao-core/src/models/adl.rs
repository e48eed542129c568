//! The ADL (activities of daily living) catalogue and assessment types.
//!
//! The catalogue is fixed product data: twelve items across three form
//! categories, with the scoring multipliers the stage/motivation
//! computations consume. Assessments are permissive by policy: unknown
//! item ids are accepted (they score with the default multiplier) and
//! unknown rating labels resolve to [`AdlRating::FullAssistance`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How much assistance the client needs for one ADL item, ordered from
/// most dependent to most independent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AdlRating {
    FullAssistance,
    PartialAssistance,
    Supervision,
    Independent,
}

impl AdlRating {
    pub const ALL: [AdlRating; 4] = [
        AdlRating::FullAssistance,
        AdlRating::PartialAssistance,
        AdlRating::Supervision,
        AdlRating::Independent,
    ];

    /// Weight used by the stage computation.
    pub fn stage_weight(self) -> f64 {
        match self {
            AdlRating::FullAssistance => 1.0,
            AdlRating::PartialAssistance => 2.0,
            AdlRating::Supervision => 3.0,
            AdlRating::Independent => 4.0,
        }
    }

    /// Score used by the motivation computation. A distinct scale from
    /// [`Self::stage_weight`] — Supervision sits at 1.5 here.
    pub fn motivation_score(self) -> f64 {
        match self {
            AdlRating::FullAssistance => 0.0,
            AdlRating::PartialAssistance => 1.0,
            AdlRating::Supervision => 1.5,
            AdlRating::Independent => 2.0,
        }
    }

    /// Form label shown to the operator.
    pub fn label_ja(self) -> &'static str {
        match self {
            AdlRating::FullAssistance => "要全介助",
            AdlRating::PartialAssistance => "一部介助",
            AdlRating::Supervision => "見守り",
            AdlRating::Independent => "自立",
        }
    }

    /// Badge color used by the form layer for this rating.
    pub fn status_color(self) -> &'static str {
        match self {
            AdlRating::FullAssistance => "#ff6b6b",
            AdlRating::PartialAssistance => "#ffd93d",
            AdlRating::Supervision => "#a3dc2e",
            AdlRating::Independent => "#4CAF50",
        }
    }

    /// Lenient parse of a rating label from the form layer.
    ///
    /// Accepts the Japanese form labels and the snake_case wire names.
    /// Anything unrecognized resolves to `FullAssistance` — the documented
    /// fallback policy, so malformed input degrades to the most
    /// conservative rating instead of failing the whole assessment.
    pub fn parse_lenient(label: &str) -> AdlRating {
        match label.trim() {
            "一部介助" | "partial_assistance" => AdlRating::PartialAssistance,
            "見守り" | "supervision" => AdlRating::Supervision,
            "自立" | "independent" => AdlRating::Independent,
            _ => AdlRating::FullAssistance,
        }
    }
}

/// Form section an ADL item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AdlCategory {
    BasicMotion,
    CognitionCommunication,
    SocialLife,
}

impl AdlCategory {
    pub fn label_ja(self) -> &'static str {
        match self {
            AdlCategory::BasicMotion => "基本動作",
            AdlCategory::CognitionCommunication => "認知・コミュニケーション",
            AdlCategory::SocialLife => "社会生活",
        }
    }
}

/// One entry of the fixed ADL catalogue.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct AdlItemDef {
    pub id: &'static str,
    pub label_ja: &'static str,
    pub category: AdlCategory,
    /// Priority multiplier applied in the stage computation.
    pub stage_multiplier: f64,
    /// Weight in the motivation computation; `None` for items that do not
    /// contribute to motivation.
    pub motivation_weight: Option<f64>,
}

/// The twelve catalogued ADL items.
pub static CATALOGUE: [AdlItemDef; 12] = [
    AdlItemDef {
        id: "meals",
        label_ja: "食事",
        category: AdlCategory::BasicMotion,
        stage_multiplier: 1.2,
        motivation_weight: None,
    },
    AdlItemDef {
        id: "toileting",
        label_ja: "排泄",
        category: AdlCategory::BasicMotion,
        stage_multiplier: 1.3,
        motivation_weight: None,
    },
    AdlItemDef {
        id: "bathing",
        label_ja: "入浴",
        category: AdlCategory::BasicMotion,
        stage_multiplier: 1.1,
        motivation_weight: None,
    },
    AdlItemDef {
        id: "mobility",
        label_ja: "移動",
        category: AdlCategory::BasicMotion,
        stage_multiplier: 1.5,
        motivation_weight: None,
    },
    AdlItemDef {
        id: "dressing",
        label_ja: "着替え",
        category: AdlCategory::BasicMotion,
        stage_multiplier: 1.0,
        motivation_weight: None,
    },
    AdlItemDef {
        id: "grooming",
        label_ja: "整容",
        category: AdlCategory::BasicMotion,
        stage_multiplier: 1.0,
        motivation_weight: None,
    },
    AdlItemDef {
        id: "communication",
        label_ja: "コミュニケーション",
        category: AdlCategory::CognitionCommunication,
        stage_multiplier: 1.0,
        motivation_weight: Some(1.5),
    },
    AdlItemDef {
        id: "cognition",
        label_ja: "認知機能",
        category: AdlCategory::CognitionCommunication,
        stage_multiplier: 1.0,
        motivation_weight: Some(1.3),
    },
    AdlItemDef {
        id: "sleep",
        label_ja: "睡眠",
        category: AdlCategory::CognitionCommunication,
        stage_multiplier: 1.0,
        motivation_weight: Some(1.2),
    },
    AdlItemDef {
        id: "medication_management",
        label_ja: "服薬管理",
        category: AdlCategory::SocialLife,
        stage_multiplier: 1.0,
        motivation_weight: None,
    },
    AdlItemDef {
        id: "money_management",
        label_ja: "金銭管理",
        category: AdlCategory::SocialLife,
        stage_multiplier: 1.0,
        motivation_weight: None,
    },
    AdlItemDef {
        id: "shopping",
        label_ja: "買い物",
        category: AdlCategory::SocialLife,
        stage_multiplier: 1.0,
        motivation_weight: None,
    },
];

/// Look up a catalogue entry by id.
pub fn item_def(id: &str) -> Option<&'static AdlItemDef> {
    CATALOGUE.iter().find(|d| d.id == id)
}

/// Stage multiplier for an item id. Unknown ids get the default 1.0 —
/// the documented permissive-fallback policy for uncatalogued items.
pub fn stage_multiplier(id: &str) -> f64 {
    item_def(id).map(|d| d.stage_multiplier).unwrap_or(1.0)
}

/// The catalogue entries that contribute to motivation.
pub fn motivation_items() -> impl Iterator<Item = &'static AdlItemDef> {
    CATALOGUE.iter().filter(|d| d.motivation_weight.is_some())
}

/// Operator-facing description of an item at a given rating.
pub fn rating_description(item_id: &str, rating: AdlRating) -> &'static str {
    match (item_id, rating) {
        ("meals", AdlRating::FullAssistance) => "食事の全過程で介助が必要",
        ("meals", AdlRating::PartialAssistance) => "食事の一部で介助が必要",
        ("toileting", AdlRating::FullAssistance) => "排泄の全過程で介助が必要",
        ("toileting", AdlRating::PartialAssistance) => "排泄の一部で介助が必要",
        ("bathing", AdlRating::FullAssistance) => "入浴の全過程で介助が必要",
        ("bathing", AdlRating::PartialAssistance) => "入浴の一部で介助が必要",
        (_, AdlRating::FullAssistance) => "常時介助が必要",
        (_, AdlRating::PartialAssistance) => "部分的な介助が必要",
        (_, AdlRating::Supervision) => "声かけ・見守りが必要",
        ("meals", AdlRating::Independent) => "自力で食事が可能",
        ("toileting", AdlRating::Independent) => "自力で排泄が可能",
        ("bathing", AdlRating::Independent) => "自力で入浴が可能",
        (_, AdlRating::Independent) => "自力で可能",
    }
}

/// A client's ADL assessment: item id → rating.
///
/// Keys need not cover the full catalogue; absent items are excluded from
/// scoring, never defaulted. Unknown ids are kept and scored with the
/// default multiplier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdlAssessment {
    pub entries: BTreeMap<String, AdlRating>,
}

impl AdlAssessment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an assessment from raw form labels, applying the lenient
    /// rating parse to each value.
    pub fn from_labels<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(id, label)| (id.into(), AdlRating::parse_lenient(label.as_ref())))
            .collect();
        Self { entries }
    }

    pub fn set(&mut self, id: impl Into<String>, rating: AdlRating) -> &mut Self {
        self.entries.insert(id.into(), rating);
        self
    }

    pub fn get(&self, id: &str) -> Option<AdlRating> {
        self.entries.get(id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, AdlRating)> {
        self.entries.iter().map(|(id, r)| (id.as_str(), *r))
    }

    /// Display label for an entry's item: the catalogue label when the id
    /// is known, the raw id otherwise.
    pub fn item_label(id: &str) -> &str {
        item_def(id).map(|d| d.label_ja).unwrap_or(id)
    }
}
