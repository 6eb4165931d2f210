use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::scopes::ScopeIndex;
use crate::service::{self, RenameError, RenameOutcome};
use crate::store::StoreError;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub facet: String,
}

#[derive(Serialize)]
pub struct AuthScopesResponse {
    pub scopes: ScopeIndex,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    pub current_name: String,
    pub new_name: String,
}

#[derive(Serialize)]
pub struct SaveResponse {
    pub written: Vec<String>,
}

/// Errors a handler can answer with.
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

impl From<RenameError> for ApiError {
    fn from(err: RenameError) -> Self {
        match err {
            RenameError::NotFound(_) => ApiError::NotFound(err.to_string()),
            RenameError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        facet: state.facet,
    })
}

/// `GET /authScopes`: the scope → route index computed live from the store.
pub async fn get_auth_scopes(
    State(state): State<AppState>,
) -> Result<Json<AuthScopesResponse>, ApiError> {
    let start = Instant::now();
    let result = service::get_auth_scopes(state.store.as_ref()).await;
    metrics::record_request("authScopes", status_of(&result), start);

    let scopes = result?;
    Ok(Json(AuthScopesResponse { scopes }))
}

/// `POST /gatewayMappings/rename`: rename a mapping by its unique name.
///
/// Answers with the updated mapping as the response root, or `false` when
/// the new name equals the current one and nothing changed.
pub async fn rename_mapping(
    State(state): State<AppState>,
    Json(request): Json<RenameRequest>,
) -> Result<Json<Value>, ApiError> {
    let start = Instant::now();
    let result = service::rename(
        state.store.as_ref(),
        &request.current_name,
        &request.new_name,
    )
    .await;
    metrics::record_request("rename", rename_status(&result), start);

    match result? {
        RenameOutcome::Renamed(mapping) => {
            let body = serde_json::to_value(&mapping)
                .map_err(|e| ApiError::Internal(e.to_string()))?;
            Ok(Json(body))
        }
        RenameOutcome::Unchanged => Ok(Json(Value::Bool(false))),
    }
}

/// `POST /workspace/save`: persist every artifact of the served facet.
pub async fn save_workspace(
    State(state): State<AppState>,
) -> Result<Json<SaveResponse>, ApiError> {
    let files = state.registry.save_facet(&state.cache, &state.facet);
    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        file.save(&state.workspace_root)
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        written.push(file.path.clone());
    }
    tracing::info!(facet = %state.facet, files = written.len(), "Workspace saved");
    Ok(Json(SaveResponse { written }))
}

fn status_of<T>(result: &Result<T, StoreError>) -> u16 {
    match result {
        Ok(_) => 200,
        Err(_) => 500,
    }
}

fn rename_status(result: &Result<RenameOutcome, RenameError>) -> u16 {
    match result {
        Ok(_) => 200,
        Err(RenameError::NotFound(_)) => 404,
        Err(RenameError::Store(_)) => 500,
    }
}
