use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use egao_core::models::care_plan::CarePlan;
use egao_core::models::client::ClientProfile;
use egao_export::styles::DocumentStyles;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Clone, Copy)]
enum ExportFormat {
    Text,
    Xlsx,
    Pdf,
    Bundle,
}

impl ExportFormat {
    fn parse(s: &str) -> Option<ExportFormat> {
        match s {
            "text" => Some(ExportFormat::Text),
            "xlsx" => Some(ExportFormat::Xlsx),
            "pdf" => Some(ExportFormat::Pdf),
            "bundle" => Some(ExportFormat::Bundle),
            _ => None,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Bundle => "zip",
        }
    }

    fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Bundle => "application/zip",
        }
    }
}

/// Download the session's plan in one of the export formats.
pub async fn download_export(
    State(state): State<AppState>,
    Path((id, format)): Path<(Uuid, String)>,
) -> Result<Response, ApiError> {
    let format = ExportFormat::parse(&format)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown export format: {format}")))?;

    let (client, plan) = {
        let sessions = state.sessions.lock().await;
        let session = sessions
            .get(&id)
            .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))?;
        let client = session
            .client
            .clone()
            .ok_or_else(|| ApiError::BadRequest("client profile not set".to_string()))?;
        let plan = session
            .plan
            .clone()
            .ok_or_else(|| ApiError::NotFound(format!("no plan generated for session {id}")))?;
        (client, plan)
    };

    let now = jiff::Zoned::now();
    let date_label = now.strftime("%Y年%m月%d日").to_string();
    let timestamp = now.strftime("%Y%m%d_%H%M%S").to_string();

    let bytes = build_export(format, &client, &plan, &date_label, &timestamp)?;
    let filename = format!("care_plan_{timestamp}.{}", format.extension());

    tracing::info!(
        session_id = %id,
        format = format.extension(),
        bytes = bytes.len(),
        "export downloaded"
    );

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

fn build_export(
    format: ExportFormat,
    client: &ClientProfile,
    plan: &CarePlan,
    date_label: &str,
    timestamp: &str,
) -> Result<Vec<u8>, ApiError> {
    let styles = DocumentStyles::default();
    let bytes = match format {
        ExportFormat::Text => egao_export::render::render_plan_text(plan)?.into_bytes(),
        ExportFormat::Xlsx => egao_export::xlsx::build_workbook(client, plan, date_label, &styles)?,
        ExportFormat::Pdf => egao_export::pdf::build_pdf(client, plan, date_label)?,
        ExportFormat::Bundle => {
            egao_export::bundle::export_bundle(client, plan, date_label, timestamp, &styles)?
        }
    };
    Ok(bytes)
}
