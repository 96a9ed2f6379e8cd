#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::resume::profile::ResumeProfile;
use crate::scoring::aggregate::ScoreBreakdown;
use crate::scoring::dimensions::GithubMetrics;
use crate::verification::claims::VerificationReport;
use crate::verification::government::GovernmentRecord;

/// One candidate application, as stored. The JSONB columns hold typed
/// snapshots of the analysis artifacts so every screening verdict stays
/// inspectable after the fact.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub github_url: Option<String>,
    pub role_applied: String,
    pub status: String,
    pub claimed_skills: Vec<String>,
    pub resume_s3_key: Option<String>,
    pub master_score: Option<f64>,
    pub trust_score: Option<f64>,
    pub confidence_band: Option<String>,
    pub resume_profile: Option<Json<ResumeProfile>>,
    pub github_metrics: Option<Json<GithubMetrics>>,
    pub verification_report: Option<Json<VerificationReport>>,
    pub score_breakdown: Option<Json<ScoreBreakdown>>,
    pub background_record: Option<Json<GovernmentRecord>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Statuses an application can move through. PATCH validates against
/// this set.
pub const APPLICATION_STATUSES: &[&str] = &["pending", "in_review", "accepted", "rejected"];
