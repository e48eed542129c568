//! Prompt builders for the three narrative sections of 第1表.
//!
//! Pure string assembly — everything here is unit-testable without AWS.
//! Each builder embeds the client block and the ADL assessment block, so
//! the model sees the same structured input the operator entered.

use egao_core::models::adl::AdlAssessment;
use egao_core::models::client::ClientProfile;

/// System prompt for sections written in the care manager's voice.
pub const CARE_MANAGER_SYSTEM_PROMPT: &str = "あなたは経験豊富な介護支援専門員です。";

/// System prompt for the certification-board opinion section.
pub const CERTIFICATION_BOARD_SYSTEM_PROMPT: &str = "あなたは介護認定審査会の委員です。";

/// Format the assessment as a labeled bullet block for prompt embedding.
///
/// Catalogue ids render with their Japanese labels; uncatalogued ids
/// render verbatim so nothing the operator entered is dropped.
pub fn format_assessment_block(assessment: &AdlAssessment) -> String {
    let mut block = String::new();
    for (id, rating) in assessment.iter() {
        block.push_str(&format!(
            "- {}: {}\n",
            AdlAssessment::item_label(id),
            rating.label_ja()
        ));
    }
    block
}

fn client_block(client: &ClientProfile) -> String {
    format!(
        "利用者情報：\n- 氏名：{}様\n- 年齢：{}歳\n- 性別：{}\n- 要介護度：{}\n",
        client.name,
        client.age,
        client.gender.label_ja(),
        client.care_level.label_ja(),
    )
}

/// Prompt for 利用者及び家族の生活に対する意向.
pub fn build_intentions_prompt(
    client: &ClientProfile,
    assessment: &AdlAssessment,
    client_needs: &str,
) -> String {
    format!(
        "以下の情報を元に、利用者・家族の生活に対する意向を記載してください。\n\n\
         {client}\
         ADL状態：\n{adl}\n\
         利用者の要望：\n{needs}\n\n\
         以下の点に注意して記載してください：\n\
         1. 利用者本人の意向を最優先に記載\n\
         2. 家族の意向も考慮\n\
         3. 現実的で具体的な内容\n\
         4. 本人の強みや残存機能を活かした内容\n\
         5. 社会参加や生きがいに関する内容も含める\n\n\
         出力形式：\n\
         【利用者本人の意向】\n・\n・\n・\n\n\
         【家族の意向】\n・\n・\n・\n",
        client = client_block(client),
        adl = format_assessment_block(assessment),
        needs = client_needs,
    )
}

/// Prompt for 介護認定審査会の意見及びサービスの種類の指定.
pub fn build_certification_opinion_prompt(
    client: &ClientProfile,
    assessment: &AdlAssessment,
) -> String {
    format!(
        "以下の情報を元に、介護認定審査会の意見を記載してください。\n\n\
         {client}\
         ADL状態：\n{adl}\n\
         以下の点に注意して記載してください：\n\
         1. 要介護状態の原因疾患や障害の状況\n\
         2. 介護の手間や必要な支援の内容\n\
         3. 改善可能性や予防の視点\n\
         4. 医学的管理の必要性\n\
         5. 推奨されるサービスの種類\n\n\
         出力形式：\n\
         1. 要介護状態の状況：\n・\n\n\
         2. 改善可能性と予防：\n・\n\n\
         3. 医学的管理の必要性：\n・\n\n\
         4. 推奨サービス：\n・\n",
        client = client_block(client),
        adl = format_assessment_block(assessment),
    )
}

/// Prompt for 総合的な援助の方針. Embeds the two already-generated
/// sections so the policy stays consistent with them.
pub fn build_support_policy_prompt(
    client: &ClientProfile,
    assessment: &AdlAssessment,
    intentions: &str,
    certification_opinion: &str,
) -> String {
    format!(
        "以下の情報を元に、総合的な援助の方針を記載してください。\n\n\
         {client}\
         ADL状態：\n{adl}\n\
         利用者・家族の意向：\n{intentions}\n\n\
         認定審査会の意見：\n{certification_opinion}\n\n\
         以下の点に注意して記載してください：\n\
         1. ICFの視点（心身機能・身体構造、活動、参加）\n\
         2. 短期・長期の目標を明確に\n\
         3. 具体的なサービス内容と期待される効果\n\
         4. リスク管理と予防的視点\n\
         5. 多職種連携の方針\n\
         6. モニタリング方法\n\n\
         出力形式：\n\
         【総合的な援助の方針】\n・\n・\n・\n",
        client = client_block(client),
        adl = format_assessment_block(assessment),
        intentions = intentions,
        certification_opinion = certification_opinion,
    )
}
