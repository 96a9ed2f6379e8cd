//! sqlx query layer for the `applications` table. Handlers stay thin;
//! every statement lives here.

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::application::ApplicationRow;
use crate::resume::profile::ResumeProfile;
use crate::scoring::aggregate::ScoreBreakdown;
use crate::scoring::dimensions::GithubMetrics;
use crate::verification::claims::VerificationReport;
use crate::verification::government::GovernmentRecord;

/// Parameters for inserting a freshly received application.
pub struct NewApplication<'a> {
    pub id: Uuid,
    pub full_name: &'a str,
    pub email: &'a str,
    pub github_url: Option<&'a str>,
    pub role_applied: &'a str,
    pub claimed_skills: &'a [String],
    pub resume_s3_key: Option<&'a str>,
    pub resume_profile: Option<&'a ResumeProfile>,
}

/// Inserts a new application in `pending` status and returns the stored row.
pub async fn insert_application(
    pool: &PgPool,
    params: NewApplication<'_>,
) -> Result<ApplicationRow, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications
            (id, full_name, email, github_url, role_applied, claimed_skills,
             resume_s3_key, resume_profile)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(params.id)
    .bind(params.full_name)
    .bind(params.email)
    .bind(params.github_url)
    .bind(params.role_applied)
    .bind(params.claimed_skills)
    .bind(params.resume_s3_key)
    .bind(params.resume_profile.map(Json))
    .fetch_one(pool)
    .await
}

/// Lists applications newest-first, optionally filtered by status.
pub async fn list_applications(
    pool: &PgPool,
    status: Option<&str>,
) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    match status {
        Some(status) => {
            sqlx::query_as::<_, ApplicationRow>(
                "SELECT * FROM applications WHERE status = $1 ORDER BY created_at DESC",
            )
            .bind(status)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, ApplicationRow>(
                "SELECT * FROM applications ORDER BY created_at DESC",
            )
            .fetch_all(pool)
            .await
        }
    }
}

pub async fn fetch_application(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>("SELECT * FROM applications WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Moves an application to a new status. Returns `None` for unknown ids.
pub async fn update_status(
    pool: &PgPool,
    id: Uuid,
    status: &str,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        UPDATE applications
        SET status = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .await
}

/// Stores a verification report and the trust score derived from it.
pub async fn save_verification(
    pool: &PgPool,
    id: Uuid,
    report: &VerificationReport,
    trust_score: f64,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        UPDATE applications
        SET verification_report = $2, trust_score = $3, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(Json(report))
    .bind(trust_score)
    .fetch_optional(pool)
    .await
}

/// Stores a score breakdown, lifting master score and band into their
/// own columns for filtering. A metrics snapshot is stored only when the
/// caller supplied one; otherwise the existing snapshot is kept.
pub async fn save_score(
    pool: &PgPool,
    id: Uuid,
    metrics: Option<&GithubMetrics>,
    breakdown: &ScoreBreakdown,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        UPDATE applications
        SET github_metrics = COALESCE($2, github_metrics),
            score_breakdown = $3,
            master_score = $4,
            confidence_band = $5,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(metrics.map(Json))
    .bind(Json(breakdown))
    .bind(breakdown.master_score)
    .bind(breakdown.confidence_band.as_str())
    .fetch_optional(pool)
    .await
}

/// Stores the registry record produced by a background check.
pub async fn save_background_record(
    pool: &PgPool,
    id: Uuid,
    record: &GovernmentRecord,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        UPDATE applications
        SET background_record = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(Json(record))
    .fetch_optional(pool)
    .await
}
