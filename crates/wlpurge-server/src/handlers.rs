//! HTTP request handlers for the purge service.
//!
//! Implements the stored-record event ingress and the worklist-purger
//! administration endpoints using axum.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use wlpurge_engine::{EngineError, PurgeEngine, PurgeOutcome};
use wlpurge_worklist::PassthroughDecoder;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Purge engine, shared across requests
    pub engine: Arc<PurgeEngine<PassthroughDecoder>>,
}

/// Stored-record event payload
#[derive(Debug, Deserialize)]
pub struct RecordStoredRequest {
    /// Identifier of the stored record, used for logging
    pub id: String,
    /// The record's field-keyed textual representation
    pub record: String,
}

/// Stored-record event response
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordStoredResponse {
    /// How the event resolved (e.g., "purged", "no-match", "disabled")
    pub outcome: String,
    /// Path of the deleted worklist file, when one was purged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purged_path: Option<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Engine-related error (the watched directory could not be scanned)
    EngineError(EngineError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::EngineError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<EngineError> for AppError {
    fn from(e: EngineError) -> Self {
        AppError::EngineError(e)
    }
}

/// POST /events/record-stored - Process one stored-record event
async fn record_stored(
    State(state): State<AppState>,
    Json(request): Json<RecordStoredRequest>,
) -> Result<Json<RecordStoredResponse>, AppError> {
    let outcome = state.engine.on_record_stored(&request.record, &request.id)?;

    let purged_path = match &outcome {
        PurgeOutcome::Purged { path } => Some(path.display().to_string()),
        _ => None,
    };

    Ok(Json(RecordStoredResponse {
        outcome: outcome.label().to_string(),
        purged_path,
    }))
}

/// GET /worklist-purger/enable - Turn the purger on
async fn enable_purger(State(state): State<AppState>) -> Html<String> {
    state.engine.gate().enable();
    info!("Worklist purger enabled via admin endpoint");
    Html(page("Worklist purger enabled"))
}

/// GET /worklist-purger/disable - Turn the purger off
async fn disable_purger(State(state): State<AppState>) -> Html<String> {
    state.engine.gate().disable();
    info!("Worklist purger disabled via admin endpoint");
    Html(page("Worklist purger disabled"))
}

/// GET /worklist-purger/status - Report the gate and the running counters
async fn purger_status(State(state): State<AppState>) -> Html<String> {
    let gate = if state.engine.gate().is_enabled() {
        "Enabled"
    } else {
        "Disabled"
    };
    let body = format!(
        "Worklist purger status is: {}<pre>{}</pre>",
        gate,
        state.engine.metrics().summary()
    );
    Html(page(&body))
}

fn page(body: &str) -> String {
    format!(
        "<html>\n<head>\n<title>Worklist Purger</title>\n</head>\n<body>{}</body>\n</html>\n",
        body
    )
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/events/record-stored", post(record_stored))
        .route("/worklist-purger/enable", get(enable_purger))
        .route("/worklist-purger/disable", get(disable_purger))
        .route("/worklist-purger/status", get(purger_status))
        .with_state(state)
}
