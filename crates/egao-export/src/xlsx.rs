//! 居宅サービス計画書 workbook generation: 第1表 and 第2表 sheets.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use egao_core::models::care_plan::CarePlan;
use egao_core::models::client::{CareLevel, ClientProfile};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

fn checkbox(checked: bool, label: &str) -> String {
    format!("{}{label}", if checked { "☑" } else { "□" })
}

fn checkbox_row(items: &[(bool, &str)]) -> String {
    items
        .iter()
        .map(|(checked, label)| checkbox(*checked, label))
        .collect::<Vec<_>>()
        .join(" ・ ")
}

struct SheetFormats {
    title: Format,
    label: Format,
    body: Format,
}

impl SheetFormats {
    fn new(styles: &DocumentStyles) -> SheetFormats {
        let body = Format::new()
            .set_font_name(&styles.sheet_font)
            .set_font_size(styles.sheet_font_size)
            .set_text_wrap()
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin);
        SheetFormats {
            title: body.clone().set_bold().set_align(FormatAlign::Center),
            label: body.clone().set_bold(),
            body,
        }
    }
}

/// Generate the two-sheet workbook as XLSX bytes.
pub fn build_workbook(
    client: &ClientProfile,
    plan: &CarePlan,
    date_label: &str,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let formats = SheetFormats::new(styles);

    let mut workbook = Workbook::new();
    write_sheet1(workbook.add_worksheet(), client, plan, date_label, &formats, styles)?;
    write_sheet2(workbook.add_worksheet(), client, plan, date_label, &formats, styles)?;

    let bytes = workbook.save_to_buffer()?;
    Ok(bytes)
}

fn write_sheet1(
    sheet: &mut Worksheet,
    client: &ClientProfile,
    plan: &CarePlan,
    date_label: &str,
    formats: &SheetFormats,
    styles: &DocumentStyles,
) -> Result<(), ExportError> {
    sheet.set_name("第1表")?;

    sheet.merge_range(0, 0, 0, 9, "居宅サービス計画書（１）", &formats.title)?;
    sheet.merge_range(0, 10, 0, 12, &format!("作成年月日：{date_label}"), &formats.body)?;

    let status = &client.plan_status;
    sheet.merge_range(
        2,
        0,
        2,
        1,
        &checkbox_row(&[
            (status.initial, "初回"),
            (status.introduced, "紹介"),
            (status.continuous, "継続"),
        ]),
        &formats.body,
    )?;
    sheet.merge_range(
        2,
        10,
        2,
        12,
        &checkbox_row(&[(status.certified, "認定済"), (status.applying, "申請中")]),
        &formats.body,
    )?;

    let birth = client
        .birth_date
        .map(|d| d.strftime("%Y年%m月%d日").to_string())
        .unwrap_or_default();

    sheet.write_with_format(4, 0, "利用者名", &formats.label)?;
    sheet.merge_range(4, 1, 4, 3, &format!("{}様", client.name), &formats.body)?;
    sheet.merge_range(4, 4, 4, 12, &format!("生年月日 {birth}"), &formats.body)?;

    sheet.write_with_format(5, 0, "住所", &formats.label)?;
    sheet.merge_range(5, 1, 5, 12, &client.address, &formats.body)?;

    sheet.write_with_format(6, 0, "居宅サービス計画作成者氏名", &formats.label)?;
    sheet.merge_range(6, 1, 6, 12, &client.care_manager, &formats.body)?;

    sheet.write_with_format(
        7,
        0,
        "居宅介護支援事業者・事業所名及び所在地",
        &formats.label,
    )?;
    sheet.merge_range(
        7,
        1,
        7,
        12,
        &format!("{}　{}", client.care_office, client.office_address),
        &formats.body,
    )?;

    let level_checks: Vec<(bool, &str)> = CareLevel::ALL
        .iter()
        .map(|level| (*level == client.care_level, level.label_ja()))
        .collect();
    sheet.write_with_format(11, 0, "要介護状態区分", &formats.label)?;
    sheet.merge_range(11, 1, 11, 12, &checkbox_row(&level_checks), &formats.body)?;

    sheet.write_with_format(13, 0, "利用者及び家族の生活に対する意向", &formats.label)?;
    sheet.merge_range(13, 1, 18, 12, &plan.intentions, &formats.body)?;

    sheet.write_with_format(
        19,
        0,
        "介護認定審査会の意見及びサービスの種類の指定",
        &formats.label,
    )?;
    sheet.merge_range(19, 1, 22, 12, &plan.certification_opinion, &formats.body)?;

    sheet.write_with_format(23, 0, "総合的な援助の方針", &formats.label)?;
    sheet.merge_range(23, 1, 31, 12, &plan.support_policy, &formats.body)?;

    sheet.merge_range(
        34,
        0,
        34,
        3,
        "居宅サービス計画について説明を受け、内容に同意し、交付を受けました。",
        &formats.body,
    )?;
    sheet.merge_range(34, 4, 34, 7, &client.consent.date, &formats.body)?;
    sheet.merge_range(
        34,
        8,
        34,
        12,
        &format!("氏名：{}　印", client.consent.signature),
        &formats.body,
    )?;

    apply_grid(sheet, 35, styles)?;
    Ok(())
}

fn write_sheet2(
    sheet: &mut Worksheet,
    client: &ClientProfile,
    plan: &CarePlan,
    date_label: &str,
    formats: &SheetFormats,
    styles: &DocumentStyles,
) -> Result<(), ExportError> {
    sheet.set_name("第2表")?;

    sheet.merge_range(0, 0, 0, 1, "第2表", &formats.title)?;
    sheet.merge_range(0, 2, 0, 9, "居宅サービス計画書（２）", &formats.title)?;
    sheet.merge_range(0, 10, 0, 12, &format!("作成年月日：{date_label}"), &formats.body)?;

    sheet.write_with_format(2, 0, "利用者名", &formats.label)?;
    sheet.merge_range(2, 1, 2, 4, &client.name, &formats.body)?;
    sheet.write_with_format(2, 5, "様", &formats.body)?;
    sheet.merge_range(2, 6, 2, 8, "居宅サービス計画作成者", &formats.label)?;
    sheet.merge_range(2, 9, 2, 12, &client.care_manager, &formats.body)?;

    sheet.merge_range(4, 0, 5, 0, "生活全般の解決すべき課題（ニーズ）", &formats.label)?;
    sheet.merge_range(4, 1, 4, 4, "援助目標", &formats.label)?;
    sheet.merge_range(5, 1, 5, 2, "長期目標（期間）", &formats.label)?;
    sheet.merge_range(5, 3, 5, 4, "短期目標（期間）", &formats.label)?;
    sheet.merge_range(4, 5, 4, 12, "援助内容", &formats.label)?;
    sheet.merge_range(5, 5, 5, 12, "サービス内容", &formats.label)?;

    // One row per goal pair: the first pair is stage-derived, the second
    // motivation-derived.
    let needs_labels = ["ADL・身体機能に関する課題", "意欲・意思疎通に関する課題"];
    for (i, needs) in needs_labels.iter().enumerate() {
        let row = 6 + i as u32;
        let long_goal = plan.goals.long_term.get(i).map(String::as_str).unwrap_or("");
        let short_goal = plan.goals.short_term.get(i).map(String::as_str).unwrap_or("");
        sheet.write_with_format(row, 0, *needs, &formats.body)?;
        sheet.merge_range(row, 1, row, 2, long_goal, &formats.body)?;
        sheet.merge_range(row, 3, row, 4, short_goal, &formats.body)?;
    }
    sheet.merge_range(6, 5, 7, 12, &plan.support_policy, &formats.body)?;

    apply_grid(sheet, 8, styles)?;
    Ok(())
}

fn apply_grid(sheet: &mut Worksheet, rows: u32, styles: &DocumentStyles) -> Result<(), ExportError> {
    sheet.set_column_width(0, styles.label_column_width)?;
    for col in 1..=12u16 {
        sheet.set_column_width(col, styles.content_column_width)?;
    }
    for row in 0..rows {
        sheet.set_row_height(row, styles.row_height)?;
    }
    Ok(())
}
