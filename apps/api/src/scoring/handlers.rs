//! Scoring endpoint: turns stored analysis artifacts (or caller-supplied
//! dimension scores) into a persisted master score and confidence band.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::applications::store;
use crate::errors::AppError;
use crate::resume::profile;
use crate::scoring::aggregate::{aggregate_scores, PartialDimensionScores, ScoreBreakdown};
use crate::scoring::dimensions::GithubMetrics;
use crate::state::AppState;

/// Body for POST :id/score. `dimensions`, when present, must carry all
/// five scores; partial payloads are rejected rather than defaulted.
/// Without it the injected evaluator derives the dimensions from stored
/// artifacts and the metrics snapshot.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScoreRequest {
    pub github_metrics: Option<GithubMetrics>,
    pub dimensions: Option<PartialDimensionScores>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub application_id: Uuid,
    pub breakdown: ScoreBreakdown,
}

/// POST /api/v1/applications/:id/score
pub async fn handle_score_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Option<Json<ScoreRequest>>,
) -> Result<Json<ScoreResponse>, AppError> {
    let req = body.map(|Json(b)| b).unwrap_or_default();

    let row = store::fetch_application(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    let breakdown = match req.dimensions {
        Some(partial) => {
            let dimensions = partial
                .complete()
                .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;
            aggregate_scores(&dimensions)
        }
        None => {
            let resume_profile = match &row.resume_profile {
                Some(json) => json.0.clone(),
                None => profile::analyze_text(String::new()),
            };
            let report = row.verification_report.as_ref().map(|json| &json.0);
            let metrics = match (&req.github_metrics, &row.github_metrics) {
                (Some(m), _) => m.clone(),
                (None, Some(json)) => json.0.clone(),
                (None, None) => GithubMetrics::default(),
            };
            let dimensions = state
                .evaluator
                .evaluate(&resume_profile, report, &metrics, &row.role_applied)
                .await?;
            aggregate_scores(&dimensions)
        }
    };

    store::save_score(&state.db, id, req.github_metrics.as_ref(), &breakdown)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    info!(
        "Scored application {id}: master {} ({})",
        breakdown.master_score,
        breakdown.confidence_band.as_str()
    );
    Ok(Json(ScoreResponse {
        application_id: id,
        breakdown,
    }))
}
