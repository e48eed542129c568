use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use uuid::Uuid;

use egao_core::models::adl::AdlAssessment;
use egao_core::models::client::{CareLevel, ClientProfile, Consent, Gender, PlanStatus};

use crate::error::ApiError;
use crate::state::{AppState, OperatorSession};

pub async fn create_session(State(state): State<AppState>) -> Json<OperatorSession> {
    let session = OperatorSession::new();
    let mut sessions = state.sessions.lock().await;
    sessions.insert(session.id, session.clone());
    tracing::info!(session_id = %session.id, "session opened");
    Json(session)
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OperatorSession>, ApiError> {
    let sessions = state.sessions.lock().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))?;
    Ok(Json(session.clone()))
}

/// Basic-information form payload. The server stamps id and created_at.
#[derive(Deserialize)]
pub struct ClientProfileRequest {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub care_level: CareLevel,
    #[serde(default)]
    pub birth_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub family_structure: String,
    #[serde(default)]
    pub key_person: String,
    #[serde(default)]
    pub care_manager: String,
    #[serde(default)]
    pub care_office: String,
    #[serde(default)]
    pub office_address: String,
    #[serde(default)]
    pub plan_status: PlanStatus,
    #[serde(default)]
    pub consent: Consent,
}

impl ClientProfileRequest {
    fn into_profile(self) -> ClientProfile {
        ClientProfile {
            id: Uuid::new_v4(),
            name: self.name,
            age: self.age,
            gender: self.gender,
            care_level: self.care_level,
            birth_date: self.birth_date,
            address: self.address,
            family_structure: self.family_structure,
            key_person: self.key_person,
            care_manager: self.care_manager,
            care_office: self.care_office,
            office_address: self.office_address,
            plan_status: self.plan_status,
            consent: self.consent,
            created_at: jiff::Timestamp::now(),
        }
    }
}

pub async fn put_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ClientProfileRequest>,
) -> Result<Json<ClientProfile>, ApiError> {
    let profile = request.into_profile();
    profile.validate()?;

    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))?;
    session.client = Some(profile.clone());
    Ok(Json(profile))
}

/// ADL form payload: raw labels as the form submits them. Values go
/// through the lenient rating parse, so the response shows the
/// normalized assessment.
#[derive(Deserialize)]
pub struct AdlRequest {
    pub entries: BTreeMap<String, String>,
}

pub async fn put_adl(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AdlRequest>,
) -> Result<Json<AdlAssessment>, ApiError> {
    let assessment = AdlAssessment::from_labels(request.entries);

    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))?;
    session.assessment = assessment.clone();
    Ok(Json(assessment))
}

#[derive(Deserialize)]
pub struct NeedsRequest {
    pub client_needs: String,
}

pub async fn put_needs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<NeedsRequest>,
) -> Result<Json<()>, ApiError> {
    if request.client_needs.trim().is_empty() {
        return Err(ApiError::BadRequest("client_needs must not be empty".to_string()));
    }

    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))?;
    session.client_needs = Some(request.client_needs);
    Ok(Json(()))
}
