use egao_bedrock::prompts::{
    build_certification_opinion_prompt, build_intentions_prompt, build_support_policy_prompt,
    format_assessment_block,
};

use egao_core::models::adl::{AdlAssessment, AdlRating};
use egao_core::models::client::{CareLevel, ClientProfile, Gender};
use uuid::Uuid;

fn sample_client() -> ClientProfile {
    ClientProfile {
        id: Uuid::new_v4(),
        name: "山田 花子".to_string(),
        age: 82,
        gender: Gender::Female,
        care_level: CareLevel::CareLevel3,
        birth_date: None,
        address: String::new(),
        family_structure: "長女と同居".to_string(),
        key_person: "長女".to_string(),
        care_manager: String::new(),
        care_office: String::new(),
        office_address: String::new(),
        plan_status: Default::default(),
        consent: Default::default(),
        created_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

fn sample_assessment() -> AdlAssessment {
    let mut assessment = AdlAssessment::new();
    assessment
        .set("meals", AdlRating::PartialAssistance)
        .set("mobility", AdlRating::Supervision)
        .set("communication", AdlRating::Independent);
    assessment
}

#[test]
fn assessment_block_uses_japanese_labels() {
    let block = format_assessment_block(&sample_assessment());
    assert!(block.contains("- 食事: 一部介助"));
    assert!(block.contains("- 移動: 見守り"));
    assert!(block.contains("- コミュニケーション: 自立"));
}

#[test]
fn assessment_block_keeps_uncatalogued_ids_verbatim() {
    let mut assessment = sample_assessment();
    assessment.set("transfer_board", AdlRating::FullAssistance);
    let block = format_assessment_block(&assessment);
    assert!(block.contains("- transfer_board: 要全介助"));
}

#[test]
fn intentions_prompt_embeds_client_and_needs() {
    let prompt = build_intentions_prompt(
        &sample_client(),
        &sample_assessment(),
        "母親の結婚式に参加したい",
    );
    assert!(prompt.contains("山田 花子様"));
    assert!(prompt.contains("要介護３"));
    assert!(prompt.contains("母親の結婚式に参加したい"));
    assert!(prompt.contains("【利用者本人の意向】"));
    assert!(prompt.contains("- 食事: 一部介助"));
}

#[test]
fn certification_opinion_prompt_embeds_assessment() {
    let prompt = build_certification_opinion_prompt(&sample_client(), &sample_assessment());
    assert!(prompt.contains("介護認定審査会の意見"));
    assert!(prompt.contains("山田 花子様"));
    assert!(prompt.contains("- 移動: 見守り"));
    assert!(prompt.contains("推奨サービス"));
}

#[test]
fn support_policy_prompt_embeds_upstream_sections() {
    let intentions = "【利用者本人の意向】\n・自宅での生活を続けたい";
    let opinion = "1. 要介護状態の状況：\n・移動に見守りが必要";
    let prompt = build_support_policy_prompt(
        &sample_client(),
        &sample_assessment(),
        intentions,
        opinion,
    );
    assert!(prompt.contains(intentions));
    assert!(prompt.contains(opinion));
    assert!(prompt.contains("総合的な援助の方針"));
    assert!(prompt.contains("ICFの視点"));
}
