//! Verification endpoints: claim cross-referencing and the mock
//! registry background check.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::applications::store;
use crate::errors::AppError;
use crate::state::AppState;
use crate::verification::claims::{
    trust_score, verify_claims, LanguageEvidence, VerificationReport,
};
use crate::verification::government::{run_background_check, GovernmentRecord};

/// Body for POST :id/verify. Both fields are optional; omitted ones fall
/// back to what the application already stores.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VerifyRequest {
    pub claims: Option<Vec<String>>,
    pub github_languages: Option<LanguageEvidence>,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub application_id: Uuid,
    pub verification_report: VerificationReport,
    pub trust_score: f64,
}

/// POST /api/v1/applications/:id/verify
pub async fn handle_verify_claims(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Option<Json<VerifyRequest>>,
) -> Result<Json<VerifyResponse>, AppError> {
    let req = body.map(|Json(b)| b).unwrap_or_default();

    let row = store::fetch_application(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    let claims = req.claims.unwrap_or_else(|| row.claimed_skills.clone());
    let evidence = req
        .github_languages
        .or_else(|| row.github_metrics.as_ref().map(|m| m.0.languages.clone()))
        .unwrap_or_default();

    let report = verify_claims(&claims, &evidence);
    let trust = trust_score(&report);

    store::save_verification(&state.db, id, &report, trust)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    info!(
        "Verified {} claim(s) for application {id}: trust score {trust}",
        report.total_claims
    );
    Ok(Json(VerifyResponse {
        application_id: id,
        verification_report: report,
        trust_score: trust,
    }))
}

/// POST /api/v1/applications/:id/background
pub async fn handle_background_check(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GovernmentRecord>, AppError> {
    let row = store::fetch_application(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    let record = run_background_check(row.id, &row.full_name);

    store::save_background_record(&state.db, id, &record)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    info!(
        "Background check for application {id} finished with status '{}'",
        record.overall_status.as_str()
    );
    Ok(Json(record))
}
