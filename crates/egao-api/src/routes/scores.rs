use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use egao_assess::AssessmentOutcome;

use crate::error::ApiError;
use crate::state::AppState;

/// Run the scoring over the session's assessment and return stage,
/// motivation, and the selected goals. An empty assessment is a 400, not
/// a scoring crash.
pub async fn compute_scores(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentOutcome>, ApiError> {
    let sessions = state.sessions.lock().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))?;

    let outcome = egao_assess::assess(&session.assessment)?;
    tracing::info!(
        session_id = %id,
        stage = outcome.stage.get(),
        motivation = outcome.motivation.value(),
        "assessment scored"
    );
    Ok(Json(outcome))
}
