use std::io::Cursor;

use uuid::Uuid;

use egao_core::models::care_plan::{CarePlan, ScoreSummary};
use egao_core::models::client::{CareLevel, ClientProfile, Gender};
use egao_core::models::goal::GoalSet;

use egao_export::bundle::{build_bundle, export_bundle};
use egao_export::pdf::build_pdf;
use egao_export::render::{render_plan_text, render_template};
use egao_export::styles::DocumentStyles;
use egao_export::xlsx::build_workbook;

fn sample_client() -> ClientProfile {
    ClientProfile {
        id: Uuid::new_v4(),
        name: "佐藤 太郎".to_string(),
        age: 78,
        gender: Gender::Male,
        care_level: CareLevel::CareLevel2,
        birth_date: Some(jiff::civil::date(1948, 3, 15)),
        address: "東京都台東区1-2-3".to_string(),
        family_structure: "妻と二人暮らし".to_string(),
        key_person: "妻".to_string(),
        care_manager: "田中 一郎".to_string(),
        care_office: "さくらケアプランセンター".to_string(),
        office_address: "東京都台東区4-5-6".to_string(),
        plan_status: Default::default(),
        consent: Default::default(),
        created_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

fn sample_plan() -> CarePlan {
    CarePlan {
        id: Uuid::new_v4(),
        client_name: "佐藤 太郎".to_string(),
        intentions: "【利用者本人の意向】\n・自宅での生活を続けたい".to_string(),
        certification_opinion: "1. 要介護状態の状況：\n・移動に見守りが必要".to_string(),
        support_policy: "【総合的な援助の方針】\n・転倒予防を中心に支援する".to_string(),
        goals: GoalSet {
            short_term: vec![
                "見守り場面の特定".to_string(),
                "日常的な意思疎通の向上".to_string(),
            ],
            long_term: vec![
                "部分的な自立達成".to_string(),
                "積極的な活動参加".to_string(),
            ],
        },
        scores: ScoreSummary {
            stage: 3,
            motivation: 1.5,
        },
        extra_sections: Default::default(),
        model_id: "us.anthropic.claude-sonnet-4-20250514-v1:0".to_string(),
        usage: Default::default(),
        created_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn text_render_contains_all_sections_and_goals() {
    let text = render_plan_text(&sample_plan()).unwrap();

    assert!(text.contains("佐藤 太郎様"));
    assert!(text.contains("■ 利用者及び家族の生活に対する意向"));
    assert!(text.contains("自宅での生活を続けたい"));
    assert!(text.contains("■ 総合的な援助の方針"));
    assert!(text.contains("・見守り場面の特定"));
    assert!(text.contains("・日常的な意思疎通の向上"));
    assert!(text.contains("・部分的な自立達成"));
    assert!(text.contains("・積極的な活動参加"));
    assert!(text.contains("判定ステージ：3"));
}

#[test]
fn text_render_includes_extra_sections() {
    let mut plan = sample_plan();
    plan.extra_sections
        .insert("モニタリング計画".to_string(), "月1回の訪問で確認".to_string());
    let text = render_plan_text(&plan).unwrap();
    assert!(text.contains("■ モニタリング計画"));
    assert!(text.contains("月1回の訪問で確認"));
}

#[test]
fn custom_templates_see_plan_fields() {
    let rendered = render_template(
        "summary",
        "{{ client_name }} / stage {{ scores.stage }}",
        &sample_plan(),
    )
    .unwrap();
    assert_eq!(rendered, "佐藤 太郎 / stage 3");
}

#[test]
fn malformed_templates_are_a_parse_error() {
    let err = render_template("broken", "{% for x in %}", &sample_plan()).unwrap_err();
    assert!(matches!(
        err,
        egao_export::error::ExportError::TemplateParse(_)
    ));
}

#[test]
fn workbook_bytes_are_a_zip_container() {
    let bytes = build_workbook(
        &sample_client(),
        &sample_plan(),
        "2026年8月6日",
        &DocumentStyles::default(),
    )
    .unwrap();
    // XLSX is an OOXML ZIP container.
    assert_eq!(&bytes[..4], b"PK\x03\x04");
}

#[test]
fn pdf_bytes_have_the_pdf_header() {
    let bytes = build_pdf(&sample_client(), &sample_plan(), "2026年8月6日").unwrap();
    assert_eq!(&bytes[..5], b"%PDF-");
}

#[test]
fn pdf_handles_long_sections_with_page_overflow() {
    let mut plan = sample_plan();
    plan.support_policy = "長い方針の記述。".repeat(400);
    let bytes = build_pdf(&sample_client(), &plan, "2026年8月6日").unwrap();
    assert_eq!(&bytes[..5], b"%PDF-");
}

#[test]
fn bundle_contains_the_three_expected_entries() {
    let bundle = build_bundle("plan text", b"xlsx", b"pdf", "20260806_120000").unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bundle)).unwrap();
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "care_plan_20260806_120000.txt",
            "care_plan_20260806_120000.xlsx",
            "care_plan_20260806_120000.pdf",
        ]
    );
}

#[test]
fn full_export_bundle_round_trips() {
    let bundle = export_bundle(
        &sample_client(),
        &sample_plan(),
        "2026年8月6日",
        "20260806_120000",
        &DocumentStyles::default(),
    )
    .unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(bundle)).unwrap();
    assert_eq!(archive.len(), 3);

    let text_entry = archive.by_name("care_plan_20260806_120000.txt").unwrap();
    assert!(text_entry.size() > 0);
}
