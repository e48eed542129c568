use egao_assess::assess;
use egao_assess::error::ScoringError;
use egao_assess::goals::select_goals;
use egao_assess::motivation::{MotivationLevel, compute_motivation};
use egao_assess::stage::{Stage, compute_stage};

use egao_core::models::adl::{AdlAssessment, AdlRating, CATALOGUE};

fn full_catalogue(rating: AdlRating) -> AdlAssessment {
    let mut assessment = AdlAssessment::new();
    for def in CATALOGUE {
        assessment.set(def.id, rating);
    }
    assessment
}

fn mixed_assessment() -> AdlAssessment {
    let mut assessment = AdlAssessment::new();
    assessment
        .set("meals", AdlRating::PartialAssistance)
        .set("toileting", AdlRating::FullAssistance)
        .set("bathing", AdlRating::PartialAssistance)
        .set("mobility", AdlRating::Supervision)
        .set("dressing", AdlRating::Supervision)
        .set("grooming", AdlRating::Independent)
        .set("communication", AdlRating::Supervision)
        .set("cognition", AdlRating::PartialAssistance)
        .set("sleep", AdlRating::Independent)
        .set("medication_management", AdlRating::FullAssistance)
        .set("money_management", AdlRating::PartialAssistance)
        .set("shopping", AdlRating::FullAssistance);
    assessment
}

#[test]
fn stage_is_always_in_range() {
    let samples = [
        full_catalogue(AdlRating::FullAssistance),
        full_catalogue(AdlRating::PartialAssistance),
        full_catalogue(AdlRating::Supervision),
        full_catalogue(AdlRating::Independent),
        mixed_assessment(),
    ];
    for assessment in &samples {
        let stage = compute_stage(assessment).unwrap().get();
        assert!((1..=5).contains(&stage), "stage {stage} out of range");
    }
}

#[test]
fn all_full_assistance_is_stage_one() {
    let stage = compute_stage(&full_catalogue(AdlRating::FullAssistance)).unwrap();
    assert_eq!(stage.get(), 1);
}

#[test]
fn all_independent_is_stage_five() {
    let stage = compute_stage(&full_catalogue(AdlRating::Independent)).unwrap();
    assert_eq!(stage.get(), 5);
}

#[test]
fn fractional_stage_truncates_downward() {
    // All FullAssistance averages to 1.0, which scales to 1.25 on the
    // five-point range; truncation keeps it at stage 1.
    let stage = compute_stage(&full_catalogue(AdlRating::FullAssistance)).unwrap();
    assert_eq!(stage.get(), 1);

    // A single PartialAssistance item: average 2.0 scales to 2.5 and must
    // land on 2, not 3.
    let mut single = AdlAssessment::new();
    single.set("dressing", AdlRating::PartialAssistance);
    assert_eq!(compute_stage(&single).unwrap().get(), 2);
}

#[test]
fn upgrading_any_single_item_never_lowers_the_stage() {
    let baseline = mixed_assessment();
    let base_stage = compute_stage(&baseline).unwrap();

    for def in CATALOGUE {
        let current = baseline.get(def.id).unwrap();
        let current_pos = AdlRating::ALL.iter().position(|r| *r == current).unwrap();
        for upgraded in &AdlRating::ALL[current_pos..] {
            let mut changed = baseline.clone();
            changed.set(def.id, *upgraded);
            let stage = compute_stage(&changed).unwrap();
            assert!(
                stage >= base_stage,
                "upgrading {} to {:?} lowered stage {} -> {}",
                def.id,
                upgraded,
                base_stage.get(),
                stage.get(),
            );
        }
    }
}

#[test]
fn unknown_item_ids_score_with_default_multiplier() {
    // meals carries multiplier 1.2, an uncatalogued id carries 1.0:
    // (1*1.2 + 4*1.0) / (1.2 + 1.0) = 2.3636..., scaled = 2.95 -> stage 2.
    let mut assessment = AdlAssessment::new();
    assessment
        .set("meals", AdlRating::FullAssistance)
        .set("transfer_board", AdlRating::Independent);
    assert_eq!(compute_stage(&assessment).unwrap().get(), 2);
}

#[test]
fn unrecognized_rating_labels_fall_back_to_full_assistance() {
    let assessment = AdlAssessment::from_labels([
        ("meals", "完全に不明なラベル"),
        ("mobility", "自立"),
    ]);
    assert_eq!(
        assessment.get("meals"),
        Some(AdlRating::FullAssistance),
        "unknown label must degrade to the most conservative rating"
    );
    assert_eq!(assessment.get("mobility"), Some(AdlRating::Independent));
}

#[test]
fn motivation_all_independent_is_exactly_two() {
    let mut assessment = AdlAssessment::new();
    assessment
        .set("communication", AdlRating::Independent)
        .set("cognition", AdlRating::Independent)
        .set("sleep", AdlRating::Independent);
    let level = compute_motivation(&assessment).unwrap();
    assert_eq!(level.value(), 2.0);
}

#[test]
fn missing_motivation_item_keeps_the_fixed_denominator() {
    // sleep absent: (2*1.5 + 2*1.3) / 4.0 = 1.4 — the denominator still
    // counts the missing item's weight.
    let mut assessment = AdlAssessment::new();
    assessment
        .set("communication", AdlRating::Independent)
        .set("cognition", AdlRating::Independent);
    let level = compute_motivation(&assessment).unwrap();
    assert_eq!(level.value(), 1.4);
}

#[test]
fn non_motivation_items_contribute_nothing_to_motivation() {
    let mut assessment = AdlAssessment::new();
    assessment
        .set("meals", AdlRating::Independent)
        .set("mobility", AdlRating::Independent)
        .set("communication", AdlRating::PartialAssistance);
    // Only communication counts: (1 * 1.5) / 4.0 = 0.375 -> 0.4.
    let level = compute_motivation(&assessment).unwrap();
    assert_eq!(level.value(), 0.4);
}

#[test]
fn empty_assessment_is_rejected_by_both_computations() {
    let empty = AdlAssessment::new();
    assert_eq!(
        compute_stage(&empty).unwrap_err(),
        ScoringError::EmptyAssessment
    );
    assert_eq!(
        compute_motivation(&empty).unwrap_err(),
        ScoringError::EmptyAssessment
    );
}

#[test]
fn goal_selection_concatenates_stage_and_motivation_pairs() {
    let stage = Stage::try_new(3).unwrap();
    let motivation = MotivationLevel::new(1.5);
    let goals = select_goals(stage, motivation).unwrap();

    assert_eq!(
        goals.short_term,
        vec!["見守り場面の特定", "日常的な意思疎通の向上"]
    );
    assert_eq!(goals.long_term, vec!["部分的な自立達成", "積極的な活動参加"]);
}

#[test]
fn motivation_index_truncates_rather_than_rounds() {
    assert_eq!(MotivationLevel::new(1.9).index(), 1);
    assert_eq!(MotivationLevel::new(2.0).index(), 2);
    assert_eq!(MotivationLevel::new(0.9).index(), 0);
}

#[test]
fn out_of_range_stage_is_an_invariant_violation() {
    assert!(matches!(
        Stage::try_new(0),
        Err(ScoringError::InvariantViolation(_))
    ));
    assert!(matches!(
        Stage::try_new(6),
        Err(ScoringError::InvariantViolation(_))
    ));
}

#[test]
fn scoring_is_deterministic() {
    let assessment = mixed_assessment();
    let first = assess(&assessment).unwrap();
    let second = assess(&assessment).unwrap();
    assert_eq!(first, second);
}

#[test]
fn assess_composes_stage_motivation_and_goals() {
    let outcome = assess(&full_catalogue(AdlRating::Independent)).unwrap();
    assert_eq!(outcome.stage.get(), 5);
    assert_eq!(outcome.motivation.value(), 2.0);
    assert_eq!(
        outcome.goals.short_term,
        vec!["現状機能の維持", "社会的交流の促進"]
    );
    assert_eq!(outcome.goals.long_term, vec!["社会参加の促進", "自己実現の支援"]);
}
