//! Fixed-layout A4 PDF of the 第1表 content.
//!
//! Built with `printpdf` builtin fonts and a descending Mm cursor; long
//! paragraphs wrap by character count and spill onto continuation pages.

use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use egao_core::models::care_plan::CarePlan;
use egao_core::models::client::ClientProfile;

use crate::error::ExportError;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const WRAP_CHARS: usize = 48;

fn checkbox(checked: bool) -> &'static str {
    if checked { "☑" } else { "□" }
}

/// Wrap text by character count. The plan text is Japanese, so wrapping
/// on whitespace would never break a line.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.lines() {
        let chars: Vec<char> = raw_line.chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
            continue;
        }
        for chunk in chars.chunks(max_chars) {
            lines.push(chunk.iter().collect());
        }
    }
    lines
}

struct PageCursor {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    y: Mm,
}

impl PageCursor {
    fn ensure_space(&mut self, needed: Mm) {
        if self.y < needed {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = Mm(PAGE_HEIGHT - 25.0);
        }
    }

    fn line(&mut self, text: &str, size: f32, x: Mm, font: &IndirectFontRef, advance: Mm) {
        self.ensure_space(Mm(25.0));
        self.layer.use_text(text, size, x, self.y, font);
        self.y -= advance;
    }

    fn paragraph(&mut self, text: &str, font: &IndirectFontRef) {
        for line in wrap_text(text, WRAP_CHARS) {
            self.line(&line, 10.0, Mm(25.0), font, Mm(5.0));
        }
    }

    fn spacer(&mut self, gap: Mm) {
        self.y -= gap;
    }
}

/// Generate the plan PDF. Returns PDF bytes.
pub fn build_pdf(
    client: &ClientProfile,
    plan: &CarePlan,
    date_label: &str,
) -> Result<Vec<u8>, ExportError> {
    let (doc, page1, layer1) = PdfDocument::new(
        "居宅サービス計画書（１）",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;

    let mut cursor = PageCursor {
        doc,
        layer,
        y: Mm(PAGE_HEIGHT - 25.0),
    };

    // Title and creation date
    cursor.line("居宅サービス計画書（１）", 16.0, Mm(25.0), &bold, Mm(8.0));
    cursor.line(
        &format!("作成年月日：{date_label}"),
        10.0,
        Mm(25.0),
        &font,
        Mm(8.0),
    );

    // Plan classification and certification status
    let status = &client.plan_status;
    cursor.line(
        &format!(
            "計画区分：{}初回 {}紹介 {}継続",
            checkbox(status.initial),
            checkbox(status.introduced),
            checkbox(status.continuous),
        ),
        10.0,
        Mm(25.0),
        &font,
        Mm(5.0),
    );
    cursor.line(
        &format!(
            "認定状況：{}認定済 {}申請中",
            checkbox(status.certified),
            checkbox(status.applying),
        ),
        10.0,
        Mm(25.0),
        &font,
        Mm(8.0),
    );

    // Basic information block
    cursor.line("■ 基本情報", 12.0, Mm(25.0), &bold, Mm(6.0));
    let birth = client
        .birth_date
        .map(|d| d.strftime("%Y年%m月%d日").to_string())
        .unwrap_or_default();
    for info in [
        format!("利用者名：{} 様", client.name),
        format!("生年月日：{birth}"),
        format!("住所：{}", client.address),
        format!("居宅サービス計画作成者：{}", client.care_manager),
        format!("事業所：{}", client.care_office),
        format!("所在地：{}", client.office_address),
    ] {
        cursor.line(&info, 10.0, Mm(25.0), &font, Mm(5.0));
    }
    cursor.spacer(Mm(3.0));

    cursor.line("■ 要介護状態区分", 12.0, Mm(25.0), &bold, Mm(6.0));
    cursor.line(client.care_level.label_ja(), 10.0, Mm(25.0), &font, Mm(8.0));

    // Narrative sections
    for (heading, body) in [
        ("■ 利用者・家族の意向", plan.intentions.as_str()),
        ("■ 認定審査会意見", plan.certification_opinion.as_str()),
        ("■ 総合的な援助の方針", plan.support_policy.as_str()),
    ] {
        cursor.line(heading, 12.0, Mm(25.0), &bold, Mm(6.0));
        cursor.paragraph(body, &font);
        cursor.spacer(Mm(3.0));
    }

    // Goals
    cursor.line("■ 援助目標", 12.0, Mm(25.0), &bold, Mm(6.0));
    for goal in &plan.goals.short_term {
        cursor.line(&format!("短期：{goal}"), 10.0, Mm(25.0), &font, Mm(5.0));
    }
    for goal in &plan.goals.long_term {
        cursor.line(&format!("長期：{goal}"), 10.0, Mm(25.0), &font, Mm(5.0));
    }
    cursor.spacer(Mm(5.0));

    // Consent
    cursor.line(
        "居宅サービス計画について説明を受け、内容に同意し、交付を受けました。",
        10.0,
        Mm(25.0),
        &font,
        Mm(5.0),
    );
    cursor.line(
        &format!("日付：{}", client.consent.date),
        10.0,
        Mm(25.0),
        &font,
        Mm(5.0),
    );
    cursor.line(
        &format!("署名：{}　印", client.consent.signature),
        10.0,
        Mm(25.0),
        &font,
        Mm(5.0),
    );

    let mut buf = BufWriter::new(Vec::new());
    cursor
        .doc
        .save(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Pdf(format!("buffer error: {e}")))
}
