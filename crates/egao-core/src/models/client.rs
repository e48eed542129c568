//! Client profile captured by the basic-information form page.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClientProfile {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub care_level: CareLevel,
    pub birth_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub family_structure: String,
    #[serde(default)]
    pub key_person: String,
    /// Care manager responsible for the plan (居宅サービス計画作成者).
    #[serde(default)]
    pub care_manager: String,
    #[serde(default)]
    pub care_office: String,
    #[serde(default)]
    pub office_address: String,
    #[serde(default)]
    pub plan_status: PlanStatus,
    #[serde(default)]
    pub consent: Consent,
    pub created_at: jiff::Timestamp,
}

impl ClientProfile {
    /// The validation gate the plan-generation flow runs before any model
    /// call: the fields the form marks as required must be filled in.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::MissingField("name".to_string()));
        }
        if self.age == 0 {
            return Err(CoreError::MissingField("age".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label_ja(self) -> &'static str {
        match self {
            Gender::Male => "男性",
            Gender::Female => "女性",
        }
    }
}

/// Certified care level (要介護状態区分).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CareLevel {
    SupportLevel1,
    SupportLevel2,
    CareLevel1,
    CareLevel2,
    CareLevel3,
    CareLevel4,
    CareLevel5,
}

impl CareLevel {
    pub const ALL: [CareLevel; 7] = [
        CareLevel::SupportLevel1,
        CareLevel::SupportLevel2,
        CareLevel::CareLevel1,
        CareLevel::CareLevel2,
        CareLevel::CareLevel3,
        CareLevel::CareLevel4,
        CareLevel::CareLevel5,
    ];

    pub fn label_ja(self) -> &'static str {
        match self {
            CareLevel::SupportLevel1 => "要支援１",
            CareLevel::SupportLevel2 => "要支援２",
            CareLevel::CareLevel1 => "要介護１",
            CareLevel::CareLevel2 => "要介護２",
            CareLevel::CareLevel3 => "要介護３",
            CareLevel::CareLevel4 => "要介護４",
            CareLevel::CareLevel5 => "要介護５",
        }
    }

    /// Parse a form label. Unlike rating parsing this is strict — an
    /// unrecognized care level is a form bug, not a degradable input.
    pub fn from_label(label: &str) -> Option<CareLevel> {
        CareLevel::ALL.into_iter().find(|l| l.label_ja() == label.trim())
    }
}

/// Plan classification checkboxes on 第1表.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlanStatus {
    /// 初回
    pub initial: bool,
    /// 紹介
    pub introduced: bool,
    /// 継続
    pub continuous: bool,
    /// 認定済
    pub certified: bool,
    /// 申請中
    pub applying: bool,
}

/// Consent row at the bottom of 第1表.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Consent {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub signature: String,
}
