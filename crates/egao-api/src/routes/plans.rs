use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use egao_core::models::care_plan::CarePlan;

use crate::error::ApiError;
use crate::state::AppState;

/// Generate the care plan for a session.
///
/// Requires the client profile, a non-empty assessment, and the client's
/// wishes — the same gate the form enforces before its generate button.
/// The session lock is released while the Bedrock calls run; the plan is
/// stored once generation completes.
pub async fn generate_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CarePlan>, ApiError> {
    let (client, assessment, client_needs) = {
        let sessions = state.sessions.lock().await;
        let session = sessions
            .get(&id)
            .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))?;

        let client = session
            .client
            .clone()
            .ok_or_else(|| ApiError::BadRequest("client profile not set".to_string()))?;
        if session.assessment.is_empty() {
            return Err(ApiError::BadRequest("assessment not set".to_string()));
        }
        let client_needs = session
            .client_needs
            .clone()
            .ok_or_else(|| ApiError::BadRequest("client needs not set".to_string()))?;
        (client, session.assessment.clone(), client_needs)
    };

    client.validate()?;
    let outcome = egao_assess::assess(&assessment)?;

    let plan = egao_bedrock::generate::generate_care_plan(
        &state.aws,
        &state.model_id,
        &client,
        &assessment,
        &outcome,
        &client_needs,
    )
    .await?;

    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))?;
    session.plan = Some(plan.clone());

    Ok(Json(plan))
}

pub async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CarePlan>, ApiError> {
    let sessions = state.sessions.lock().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))?;
    let plan = session
        .plan
        .clone()
        .ok_or_else(|| ApiError::NotFound(format!("no plan generated for session {id}")))?;
    Ok(Json(plan))
}
