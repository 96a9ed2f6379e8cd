//! Dimension evaluation — pluggable, trait-based computation of the five
//! scores the aggregator consumes.
//!
//! Default: `HeuristicEvaluator` (pure, fast, deterministic, fully
//! testable). `AppState` holds an `Arc<dyn DimensionEvaluator>` so a
//! different backend can be swapped in at startup without touching
//! handlers.
//!
//! Dimension formulas:
//!   resume_skills    verification-weighted when claims exist (verified
//!                    1.0, partial 0.6, unverifiable 0.3, contradicted
//!                    0.0), otherwise keyword breadth capped at 60
//!   github_activity  capped sum over repos, recent commits, stars, and
//!                    language spread
//!   project_depth    the profile's project_quality, unchanged
//!   role_alignment   coverage of the applied role's expected stack by
//!                    detected keywords and claimed skills
//!   recency          banded days since the last public push

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::resume::profile::ResumeProfile;
use crate::scoring::aggregate::DimensionScores;
use crate::scoring::round1;
use crate::verification::claims::{ClaimStatus, LanguageEvidence, VerificationReport};

// ────────────────────────────────────────────────────────────────────────────
// External activity input
// ────────────────────────────────────────────────────────────────────────────

/// Externally observed GitHub activity. Pure input: recency arrives as a
/// precomputed day count so the engine never reads the clock, and
/// `languages` doubles as the claim verifier's evidence map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubMetrics {
    pub public_repos: u32,
    pub total_stars: u32,
    pub commits_last_90_days: u32,
    pub followers: u32,
    pub languages: LanguageEvidence,
    pub days_since_last_push: Option<u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Role expectations
// ────────────────────────────────────────────────────────────────────────────

/// Expected stack per advertised role. Coverage is measured against the
/// union of detected keywords and claimed skills.
const ROLE_STACKS: &[(&str, &[&str])] = &[
    (
        "backend",
        &[
            "python",
            "java",
            "go",
            "node.js",
            "sql",
            "postgresql",
            "api",
            "docker",
            "rest",
            "microservices",
        ],
    ),
    (
        "frontend",
        &[
            "javascript",
            "typescript",
            "react",
            "vue",
            "angular",
            "html",
            "css",
            "next.js",
            "tailwind",
            "webpack",
        ],
    ),
    (
        "fullstack",
        &[
            "javascript",
            "typescript",
            "react",
            "node.js",
            "sql",
            "api",
            "python",
            "docker",
            "html",
            "css",
        ],
    ),
    (
        "devops",
        &[
            "docker",
            "kubernetes",
            "aws",
            "terraform",
            "ansible",
            "jenkins",
            "ci/cd",
            "linux",
            "bash",
            "prometheus",
        ],
    ),
    (
        "data",
        &[
            "python",
            "sql",
            "pandas",
            "numpy",
            "tensorflow",
            "pytorch",
            "spark",
            "airflow",
            "jupyter",
            "sklearn",
        ],
    ),
    (
        "mobile",
        &[
            "swift",
            "kotlin",
            "flutter",
            "react native",
            "dart",
            "java",
            "firebase",
            "sqlite",
            "api",
            "android",
        ],
    ),
];

/// Score for a role the catalogue does not know. Neither reward nor
/// penalty.
const UNKNOWN_ROLE_SCORE: f64 = 50.0;

// ────────────────────────────────────────────────────────────────────────────
// Per-dimension formulas
// ────────────────────────────────────────────────────────────────────────────

/// Resume-skill alignment. Verification outcomes dominate when the
/// candidate made claims; otherwise fall back to raw keyword breadth.
pub fn resume_skills_score(profile: &ResumeProfile, report: Option<&VerificationReport>) -> f64 {
    if let Some(report) = report {
        if report.total_claims > 0 {
            let credit: f64 = report
                .verification_results
                .iter()
                .map(|v| match v.status {
                    ClaimStatus::Verified => 1.0,
                    ClaimStatus::Partial => 0.6,
                    ClaimStatus::Unverifiable => 0.3,
                    ClaimStatus::Contradicted => 0.0,
                })
                .sum();
            return round1((100.0 * credit / report.total_claims as f64).clamp(0.0, 100.0));
        }
    }
    round1((profile.keywords_detected.len() as f64 * 4.0).min(60.0))
}

/// Capped component sum over public activity volume.
pub fn github_activity_score(metrics: &GithubMetrics) -> f64 {
    let repos = (f64::from(metrics.public_repos) * 3.0).min(30.0);
    let commits = (f64::from(metrics.commits_last_90_days) * 0.5).min(40.0);
    let stars = (f64::from(metrics.total_stars) * 0.3).min(15.0);
    let languages = (metrics.languages.len() as f64 * 3.0).min(15.0);
    round1((repos + commits + stars + languages).clamp(0.0, 100.0))
}

/// Coverage of the role's expected stack. Hitting 40% of the stack is
/// already a full score; screening rewards overlap, not completeness.
pub fn role_alignment_score(role: &str, keywords: &[String], claims: &[String]) -> f64 {
    let normalized = role.trim().to_lowercase();
    let Some((_, stack)) = ROLE_STACKS.iter().find(|(name, _)| *name == normalized) else {
        return UNKNOWN_ROLE_SCORE;
    };

    let known: Vec<String> = keywords
        .iter()
        .map(|k| k.to_lowercase())
        .chain(claims.iter().map(|c| c.trim().to_lowercase()))
        .collect();
    let matched = stack.iter().filter(|term| known.iter().any(|k| k == *term)).count();
    let coverage = matched as f64 / stack.len() as f64;
    round1((100.0 * (2.5 * coverage).min(1.0)).clamp(0.0, 100.0))
}

/// Banded freshness of public activity. Absent evidence scores zero.
pub fn recency_score(days_since_last_push: Option<u32>) -> f64 {
    match days_since_last_push {
        None => 0.0,
        Some(days) if days <= 7 => 100.0,
        Some(days) if days <= 30 => 85.0,
        Some(days) if days <= 90 => 65.0,
        Some(days) if days <= 180 => 40.0,
        Some(days) if days <= 365 => 20.0,
        Some(_) => 5.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The dimension evaluator contract. Implement this to swap scoring
/// backends without touching the endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn DimensionEvaluator>`.
#[async_trait]
pub trait DimensionEvaluator: Send + Sync {
    async fn evaluate(
        &self,
        profile: &ResumeProfile,
        report: Option<&VerificationReport>,
        metrics: &GithubMetrics,
        role: &str,
    ) -> Result<DimensionScores, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicEvaluator — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Pure-Rust heuristic evaluator. Fast, deterministic, no I/O.
pub struct HeuristicEvaluator;

#[async_trait]
impl DimensionEvaluator for HeuristicEvaluator {
    async fn evaluate(
        &self,
        profile: &ResumeProfile,
        report: Option<&VerificationReport>,
        metrics: &GithubMetrics,
        role: &str,
    ) -> Result<DimensionScores, AppError> {
        Ok(compute_heuristic_dimensions(profile, report, metrics, role))
    }
}

/// The default evaluator's core, kept synchronous and side-effect free.
pub fn compute_heuristic_dimensions(
    profile: &ResumeProfile,
    report: Option<&VerificationReport>,
    metrics: &GithubMetrics,
    role: &str,
) -> DimensionScores {
    let claims: Vec<String> = report
        .map(|r| {
            r.verification_results
                .iter()
                .map(|v| v.skill.clone())
                .collect()
        })
        .unwrap_or_default();

    DimensionScores {
        resume_skills: resume_skills_score(profile, report),
        github_activity: github_activity_score(metrics),
        project_depth: profile.project_quality.clamp(0.0, 100.0),
        role_alignment: role_alignment_score(role, &profile.keywords_detected, &claims),
        recency: recency_score(metrics.days_since_last_push),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
