//! Application lifecycle: multipart intake with optional resume PDF,
//! listing, detail, and status transitions.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::applications::store::{self, NewApplication};
use crate::errors::AppError;
use crate::models::application::{ApplicationRow, APPLICATION_STATUSES};
use crate::resume::profile;
use crate::state::AppState;
use crate::verification::claims::lenient_string_list;

const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

/// Metadata part of the intake form.
#[derive(Debug, Deserialize)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub github_url: Option<String>,
    pub role_applied: String,
    #[serde(default)]
    pub claimed_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusFilter {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// POST /api/v1/applications
///
/// Multipart parts: `application` (JSON metadata, required), `resume`
/// (PDF bytes, optional), `claims` (serialized JSON array of skill
/// claims, optional, parsed leniently).
pub async fn handle_create_application(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApplicationRow>), AppError> {
    let mut form: Option<ApplicationForm> = None;
    let mut resume_bytes: Option<Bytes> = None;
    let mut extra_claims: Vec<String> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        match field.name().unwrap_or("") {
            "application" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable application part: {e}")))?;
                form = Some(
                    serde_json::from_str(&text)
                        .map_err(|e| AppError::Validation(format!("Invalid application JSON: {e}")))?,
                );
            }
            "resume" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable resume part: {e}")))?;
                if data.len() > MAX_RESUME_BYTES {
                    return Err(AppError::Validation(
                        "Resume exceeds the 10MB limit".to_string(),
                    ));
                }
                resume_bytes = Some(data);
            }
            "claims" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable claims part: {e}")))?;
                extra_claims = lenient_string_list(&text);
            }
            _ => {}
        }
    }

    let form = form
        .ok_or_else(|| AppError::Validation("Missing 'application' multipart part".to_string()))?;
    if form.full_name.trim().is_empty() {
        return Err(AppError::Validation("full_name must not be empty".to_string()));
    }
    if form.email.trim().is_empty() {
        return Err(AppError::Validation("email must not be empty".to_string()));
    }
    if form.role_applied.trim().is_empty() {
        return Err(AppError::Validation("role_applied must not be empty".to_string()));
    }

    let id = Uuid::new_v4();
    let claimed_skills = merge_claims(form.claimed_skills, extra_claims);

    let mut resume_s3_key: Option<String> = None;
    let mut resume_profile = None;
    if let Some(data) = resume_bytes {
        if !data.is_empty() {
            let key = format!("resumes/{id}.pdf");
            state
                .s3
                .put_object()
                .bucket(&state.config.s3_bucket)
                .key(&key)
                .body(ByteStream::from(data.clone()))
                .content_type("application/pdf")
                .send()
                .await
                .map_err(|e| AppError::Storage(format!("Resume upload failed: {e}")))?;
            info!(
                "Archived resume for application {id} to s3://{}/{key}",
                state.config.s3_bucket
            );
            resume_s3_key = Some(key);
        }
        // Empty uploads still yield a (zeroed) profile; nothing is archived.
        resume_profile = Some(profile::analyze_bytes(&data));
    }

    let row = store::insert_application(
        &state.db,
        NewApplication {
            id,
            full_name: &form.full_name,
            email: &form.email,
            github_url: form.github_url.as_deref(),
            role_applied: &form.role_applied,
            claimed_skills: &claimed_skills,
            resume_s3_key: resume_s3_key.as_deref(),
            resume_profile: resume_profile.as_ref(),
        },
    )
    .await?;

    info!("Created application {id} for role '{}'", row.role_applied);
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> Result<Json<Vec<ApplicationRow>>, AppError> {
    let rows = store::list_applications(&state.db, filter.status.as_deref()).await?;
    Ok(Json(rows))
}

/// GET /api/v1/applications/:id
pub async fn handle_get_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicationRow>, AppError> {
    let row = store::fetch_application(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
    Ok(Json(row))
}

/// PATCH /api/v1/applications/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StatusUpdate>,
) -> Result<Json<ApplicationRow>, AppError> {
    if !APPLICATION_STATUSES.contains(&req.status.as_str()) {
        return Err(AppError::Validation(format!(
            "Unknown status '{}', expected one of: {}",
            req.status,
            APPLICATION_STATUSES.join(", ")
        )));
    }
    let row = store::update_status(&state.db, id, &req.status)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
    info!("Application {id} moved to status '{}'", row.status);
    Ok(Json(row))
}

/// Appends boundary-supplied claims to the form's list, skipping exact
/// duplicates while preserving arrival order.
fn merge_claims(mut base: Vec<String>, extra: Vec<String>) -> Vec<String> {
    for claim in extra {
        if !base.contains(&claim) {
            base.push(claim);
        }
    }
    base
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
