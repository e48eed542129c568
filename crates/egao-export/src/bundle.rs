//! ZIP packaging of the three export formats.

use std::io::{Cursor, Write};

use tracing::info;
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use egao_core::models::care_plan::CarePlan;
use egao_core::models::client::ClientProfile;

use crate::error::ExportError;
use crate::render::render_plan_text;
use crate::styles::DocumentStyles;
use crate::{pdf, xlsx};

/// Package already-generated export bodies into a deflated ZIP.
///
/// Entry names follow the `care_plan_{timestamp}.{ext}` convention the
/// download flow expects.
pub fn build_bundle(
    text: &str,
    xlsx_bytes: &[u8],
    pdf_bytes: &[u8],
    timestamp: &str,
) -> Result<Vec<u8>, ExportError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(format!("care_plan_{timestamp}.txt"), options)?;
    zip.write_all(text.as_bytes())
        .map_err(|e| ExportError::Bundle(e.to_string()))?;

    zip.start_file(format!("care_plan_{timestamp}.xlsx"), options)?;
    zip.write_all(xlsx_bytes)
        .map_err(|e| ExportError::Bundle(e.to_string()))?;

    zip.start_file(format!("care_plan_{timestamp}.pdf"), options)?;
    zip.write_all(pdf_bytes)
        .map_err(|e| ExportError::Bundle(e.to_string()))?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Generate all three formats for a plan and package them.
pub fn export_bundle(
    client: &ClientProfile,
    plan: &CarePlan,
    date_label: &str,
    timestamp: &str,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let text = render_plan_text(plan)?;
    let xlsx_bytes = xlsx::build_workbook(client, plan, date_label, styles)?;
    let pdf_bytes = pdf::build_pdf(client, plan, date_label)?;

    let bundle = build_bundle(&text, &xlsx_bytes, &pdf_bytes, timestamp)?;
    info!(
        plan_id = %plan.id,
        bytes = bundle.len(),
        "export bundle assembled"
    );
    Ok(bundle)
}
