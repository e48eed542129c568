use uuid::Uuid;

use egao_core::error::CoreError;
use egao_core::models::adl::{AdlAssessment, AdlRating, CATALOGUE, rating_description};
use egao_core::models::care_plan::{CarePlan, ScoreSummary};
use egao_core::models::client::{CareLevel, ClientProfile, Gender};
use egao_core::models::goal::GoalSet;

#[test]
fn rating_labels_round_trip_through_the_lenient_parser() {
    for rating in AdlRating::ALL {
        assert_eq!(AdlRating::parse_lenient(rating.label_ja()), rating);
    }
}

#[test]
fn care_level_labels_round_trip() {
    for level in CareLevel::ALL {
        assert_eq!(CareLevel::from_label(level.label_ja()), Some(level));
    }
    assert_eq!(CareLevel::from_label("要介護６"), None);
}

#[test]
fn catalogue_has_twelve_unique_ids() {
    let mut ids: Vec<&str> = CATALOGUE.iter().map(|d| d.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 12);
}

#[test]
fn catalogue_motivation_weights_sum_to_four() {
    let total: f64 = CATALOGUE.iter().filter_map(|d| d.motivation_weight).sum();
    assert!((total - 4.0).abs() < 1e-9);
}

#[test]
fn descriptions_fall_back_to_generic_text_for_unlisted_items() {
    assert_eq!(
        rating_description("meals", AdlRating::FullAssistance),
        "食事の全過程で介助が必要"
    );
    assert_eq!(
        rating_description("shopping", AdlRating::FullAssistance),
        "常時介助が必要"
    );
    assert_eq!(
        rating_description("shopping", AdlRating::Independent),
        "自力で可能"
    );
}

#[test]
fn assessment_keeps_uncatalogued_entries() {
    let assessment = AdlAssessment::from_labels([("transfer_board", "見守り")]);
    assert_eq!(
        assessment.get("transfer_board"),
        Some(AdlRating::Supervision)
    );
    assert_eq!(AdlAssessment::item_label("transfer_board"), "transfer_board");
    assert_eq!(AdlAssessment::item_label("meals"), "食事");
}

fn profile(name: &str, age: u32) -> ClientProfile {
    ClientProfile {
        id: Uuid::new_v4(),
        name: name.to_string(),
        age,
        gender: Gender::Female,
        care_level: CareLevel::CareLevel1,
        birth_date: None,
        address: String::new(),
        family_structure: String::new(),
        key_person: String::new(),
        care_manager: String::new(),
        care_office: String::new(),
        office_address: String::new(),
        plan_status: Default::default(),
        consent: Default::default(),
        created_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn profile_validation_requires_name_and_age() {
    assert!(profile("山田 花子", 82).validate().is_ok());

    let err = profile("", 82).validate().unwrap_err();
    assert!(matches!(err, CoreError::MissingField(field) if field == "name"));

    let err = profile("山田 花子", 0).validate().unwrap_err();
    assert!(matches!(err, CoreError::MissingField(field) if field == "age"));
}

#[test]
fn plan_sections_keep_document_order() {
    let mut plan = CarePlan {
        id: Uuid::new_v4(),
        client_name: "山田 花子".to_string(),
        intentions: "意向".to_string(),
        certification_opinion: "意見".to_string(),
        support_policy: "方針".to_string(),
        goals: GoalSet::default(),
        scores: ScoreSummary {
            stage: 2,
            motivation: 0.8,
        },
        extra_sections: Default::default(),
        model_id: String::new(),
        usage: Default::default(),
        created_at: jiff::Timestamp::UNIX_EPOCH,
    };
    plan.extra_sections
        .insert("モニタリング計画".to_string(), "毎月確認".to_string());

    let sections = plan.sections();
    assert_eq!(sections.len(), 4);
    assert_eq!(sections[0].0, "利用者及び家族の生活に対する意向");
    assert_eq!(sections[2].1, "方針");
    assert_eq!(sections[3], ("モニタリング計画", "毎月確認"));
}
