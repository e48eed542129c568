use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use egao_core::models::adl::AdlAssessment;
use egao_core::models::care_plan::CarePlan;
use egao_core::models::client::ClientProfile;

/// One operator's in-progress form data.
///
/// Explicit and session-scoped: scoring and generation receive the pieces
/// they need as arguments, never a shared global.
#[derive(Debug, Clone, Serialize)]
pub struct OperatorSession {
    pub id: Uuid,
    pub client: Option<ClientProfile>,
    pub assessment: AdlAssessment,
    pub client_needs: Option<String>,
    pub plan: Option<CarePlan>,
    pub created_at: jiff::Timestamp,
}

impl OperatorSession {
    pub fn new() -> OperatorSession {
        OperatorSession {
            id: Uuid::new_v4(),
            client: None,
            assessment: AdlAssessment::new(),
            client_needs: None,
            plan: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

/// Shared application state, injected into all route handlers via Axum
/// state. The session map is the only shared mutable resource; the lock is
/// held only across map operations, never across a Bedrock call.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, OperatorSession>>>,
    pub aws: aws_config::SdkConfig,
    pub model_id: String,
}
