//! Request handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use curricula_core::{
    Grade, Jurisdiction, RecordId, ResolvedStandard, StandardId, Subject, ValidationError,
};
use curricula_engine::{EngineError, Layer, ResolutionEngine, ResolutionRequest, StandardsAdmin};

/// Application state.
pub struct AppState {
    /// The resolution engine
    pub engine: Arc<ResolutionEngine>,
    /// Admin API over the engine's store
    pub admin: StandardsAdmin,
}

impl AppState {
    /// Create state for the given engine.
    pub fn new(engine: Arc<ResolutionEngine>) -> Self {
        let admin = engine.admin();
        Self { engine, admin }
    }
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// ERRORS
// =============================================================================

/// A single field error in a 400 response.
#[derive(Debug, Serialize)]
pub struct FieldError {
    field: String,
    message: String,
}

impl From<&ValidationError> for FieldError {
    fn from(e: &ValidationError) -> Self {
        Self {
            field: e.field.clone(),
            message: e.message.clone(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldError>,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            fields: Vec::new(),
        }
    }
}

fn error_response(status: StatusCode, body: ErrorResponse) -> Response {
    (status, Json(body)).into_response()
}

fn validation_failed(errors: &[ValidationError]) -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        ErrorResponse {
            error: "validation failed".to_string(),
            fields: errors.iter().map(FieldError::from).collect(),
        },
    )
}

fn engine_error(e: EngineError) -> Response {
    match e {
        EngineError::Validation(errors) => validation_failed(&errors),
        other => {
            error!("admin write failed: {}", other);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(other.to_string()),
            )
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Query parameters for standards resolution.
#[derive(Debug, Deserialize)]
pub struct StandardsQuery {
    /// Jurisdiction code. Defaults to the engine's default jurisdiction.
    pub jurisdiction: Option<String>,
    /// Subject display name
    pub subject: String,
    /// Grade level, 0 for kindergarten
    pub grade: u32,
    /// Optional district scope
    pub district_id: Option<String>,
    /// Optional school scope
    pub school_id: Option<String>,
}

impl StandardsQuery {
    fn into_request(self, default_jurisdiction: &Jurisdiction) -> ResolutionRequest {
        let jurisdiction = non_blank(self.jurisdiction)
            .map(Jurisdiction::from)
            .unwrap_or_else(|| default_jurisdiction.clone());

        let mut request =
            ResolutionRequest::new(jurisdiction, Subject::parse(&self.subject), self.grade);
        if let Some(district_id) = non_blank(self.district_id) {
            request = request.with_district(district_id);
        }
        if let Some(school_id) = non_blank(self.school_id) {
            request = request.with_school(school_id);
        }
        request
    }
}

/// Wire form of a resolved standard, carrying both `id` and `standardId`.
#[derive(Debug, Serialize)]
pub struct StandardDto<'a> {
    id: &'a StandardId,
    #[serde(flatten)]
    standard: &'a ResolvedStandard,
}

impl<'a> From<&'a ResolvedStandard> for StandardDto<'a> {
    fn from(standard: &'a ResolvedStandard) -> Self {
        Self {
            id: standard.id(),
            standard,
        }
    }
}

/// Resolution response.
#[derive(Debug, Serialize)]
pub struct StandardsResponse<'a> {
    standards: Vec<StandardDto<'a>>,
    degraded_layers: &'a [Layer],
}

/// Resolve standards for a jurisdiction/subject/grade and optional scope.
pub async fn resolve_standards(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StandardsQuery>,
) -> Response {
    let request = query.into_request(&state.engine.config().default_jurisdiction);
    let resolution = state.engine.resolve_detailed(&request).await;

    let body = StandardsResponse {
        standards: resolution.standards.iter().map(StandardDto::from).collect(),
        degraded_layers: &resolution.degraded_layers,
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Resolve standards and project them to lesson-plan lines.
pub async fn standards_for_lesson(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StandardsQuery>,
) -> Json<Vec<String>> {
    let request = query.into_request(&state.engine.config().default_jurisdiction);
    Json(state.engine.standards_for_lesson(&request).await)
}

// =============================================================================
// ADMIN
// =============================================================================

/// Request body for a new district standard.
#[derive(Debug, Deserialize)]
pub struct NewDistrictStandard {
    /// Subject display name
    #[serde(default)]
    pub subject: String,
    /// Grade level, 0 for kindergarten
    pub grade: Option<u32>,
    /// Standard text
    #[serde(default)]
    pub description: String,
}

/// Request body for a new school override.
#[derive(Debug, Deserialize)]
pub struct NewSchoolOverride {
    /// Standard whose description is replaced
    #[serde(default, alias = "overrides_standard_id")]
    pub standard_id: String,
    /// Replacement description
    #[serde(default)]
    pub custom_description: String,
}

/// Request body for a new state override.
#[derive(Debug, Deserialize)]
pub struct NewStateOverride {
    /// Subject display name
    #[serde(default)]
    pub subject: String,
    /// Standard being replaced
    #[serde(default)]
    pub replaces_standard_id: String,
    /// Identifier of the replacement
    #[serde(default)]
    pub new_standard_id: String,
    /// Replacement text
    #[serde(default)]
    pub description: String,
}

/// Add a district custom standard.
pub async fn create_district_standard(
    State(state): State<Arc<AppState>>,
    Path(district_id): Path<String>,
    Json(body): Json<NewDistrictStandard>,
) -> Response {
    let Some(grade) = body.grade else {
        return validation_failed(&[ValidationError::required("grade")]);
    };

    match state
        .admin
        .add_district_standard(district_id, Subject::parse(&body.subject), Grade::new(grade), body.description)
        .await
    {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => engine_error(e),
    }
}

/// Delete a district custom standard.
pub async fn delete_district_standard(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let result = state.admin.delete_district_standard(&RecordId::new(&id)).await;
    deleted("District standard", &id, result)
}

/// Add a school description override.
pub async fn create_school_override(
    State(state): State<Arc<AppState>>,
    Path(school_id): Path<String>,
    Json(body): Json<NewSchoolOverride>,
) -> Response {
    match state
        .admin
        .add_school_override(school_id, body.standard_id, body.custom_description)
        .await
    {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => engine_error(e),
    }
}

/// Delete a school override.
pub async fn delete_school_override(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let result = state.admin.delete_school_override(&RecordId::new(&id)).await;
    deleted("School override", &id, result)
}

/// Add a state override.
pub async fn create_state_override(
    State(state): State<Arc<AppState>>,
    Path(jurisdiction): Path<String>,
    Json(body): Json<NewStateOverride>,
) -> Response {
    match state
        .admin
        .add_state_override(
            Jurisdiction::new(&jurisdiction),
            Subject::parse(&body.subject),
            body.replaces_standard_id,
            body.new_standard_id,
            body.description,
        )
        .await
    {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => engine_error(e),
    }
}

/// Delete a state override.
pub async fn delete_state_override(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let result = state.admin.delete_state_override(&RecordId::new(&id)).await;
    deleted("State override", &id, result)
}

fn deleted(kind: &str, id: &str, result: Result<bool, EngineError>) -> Response {
    match result {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => error_response(
            StatusCode::NOT_FOUND,
            ErrorResponse::new(format!("{kind} not found: {id}")),
        ),
        Err(e) => engine_error(e),
    }
}
