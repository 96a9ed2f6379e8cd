//! Score aggregation — weighted roll-up of the five dimension scores into
//! a master score and confidence band.
//!
//! The weights are fixed constants summing to 1.0; they are part of the
//! published contract and never derived from data. A missing dimension is
//! a contract violation surfaced to the caller — the aggregator never
//! substitutes a default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::round1;

// ────────────────────────────────────────────────────────────────────────────
// Contract types
// ────────────────────────────────────────────────────────────────────────────

/// The five dimension scores feeding the aggregator, each on 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub resume_skills: f64,
    pub github_activity: f64,
    pub project_depth: f64,
    pub role_alignment: f64,
    pub recency: f64,
}

impl DimensionScores {
    fn clamped(&self) -> DimensionScores {
        DimensionScores {
            resume_skills: self.resume_skills.clamp(0.0, 100.0),
            github_activity: self.github_activity.clamp(0.0, 100.0),
            project_depth: self.project_depth.clamp(0.0, 100.0),
            role_alignment: self.role_alignment.clamp(0.0, 100.0),
            recency: self.recency.clamp(0.0, 100.0),
        }
    }
}

/// Dimension scores as supplied by an external caller, any of which may be
/// absent. Completing the set is the caller's obligation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialDimensionScores {
    pub resume_skills: Option<f64>,
    pub github_activity: Option<f64>,
    pub project_depth: Option<f64>,
    pub role_alignment: Option<f64>,
    pub recency: Option<f64>,
}

impl PartialDimensionScores {
    /// Promotes to a full score set, naming the first absent dimension.
    pub fn complete(&self) -> Result<DimensionScores, AggregateError> {
        Ok(DimensionScores {
            resume_skills: self
                .resume_skills
                .ok_or(AggregateError::MissingDimension("resume_skills"))?,
            github_activity: self
                .github_activity
                .ok_or(AggregateError::MissingDimension("github_activity"))?,
            project_depth: self
                .project_depth
                .ok_or(AggregateError::MissingDimension("project_depth"))?,
            role_alignment: self
                .role_alignment
                .ok_or(AggregateError::MissingDimension("role_alignment"))?,
            recency: self.recency.ok_or(AggregateError::MissingDimension("recency"))?,
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("missing dimension score: {0}")]
    MissingDimension(&'static str),
}

/// The fixed dimension weights. Published alongside every breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionWeights {
    pub resume_skills: f64,
    pub github_activity: f64,
    pub project_depth: f64,
    pub role_alignment: f64,
    pub recency: f64,
}

pub const DIMENSION_WEIGHTS: DimensionWeights = DimensionWeights {
    resume_skills: 0.30,
    github_activity: 0.25,
    project_depth: 0.20,
    role_alignment: 0.15,
    recency: 0.10,
};

/// Categorical read of the master score, using the product's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceBand {
    #[serde(rename = "High Potential")]
    HighPotential,
    Medium,
    Risk,
}

const BAND_HIGH_MIN: f64 = 80.0;
const BAND_MEDIUM_MIN: f64 = 65.0;

impl ConfidenceBand {
    pub fn from_master(master_score: f64) -> ConfidenceBand {
        if master_score >= BAND_HIGH_MIN {
            ConfidenceBand::HighPotential
        } else if master_score >= BAND_MEDIUM_MIN {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Risk
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceBand::HighPotential => "High Potential",
            ConfidenceBand::Medium => "Medium",
            ConfidenceBand::Risk => "Risk",
        }
    }
}

/// Full aggregation output: per-dimension breakdown, the weights applied,
/// the weighted master score, and its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub dimensions: DimensionScores,
    pub weights: DimensionWeights,
    pub master_score: f64,
    pub confidence_band: ConfidenceBand,
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

/// Clamps every dimension into 0..=100, applies the fixed weights, clamps
/// and rounds the sum, and derives the confidence band.
pub fn aggregate_scores(dimensions: &DimensionScores) -> ScoreBreakdown {
    let clamped = dimensions.clamped();
    let weighted = clamped.resume_skills * DIMENSION_WEIGHTS.resume_skills
        + clamped.github_activity * DIMENSION_WEIGHTS.github_activity
        + clamped.project_depth * DIMENSION_WEIGHTS.project_depth
        + clamped.role_alignment * DIMENSION_WEIGHTS.role_alignment
        + clamped.recency * DIMENSION_WEIGHTS.recency;
    let master_score = round1(weighted.clamp(0.0, 100.0));

    ScoreBreakdown {
        dimensions: clamped,
        weights: DIMENSION_WEIGHTS,
        master_score,
        confidence_band: ConfidenceBand::from_master(master_score),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(v: f64) -> DimensionScores {
        DimensionScores {
            resume_skills: v,
            github_activity: v,
            project_depth: v,
            role_alignment: v,
            recency: v,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sum = DIMENSION_WEIGHTS.resume_skills
            + DIMENSION_WEIGHTS.github_activity
            + DIMENSION_WEIGHTS.project_depth
            + DIMENSION_WEIGHTS.role_alignment
            + DIMENSION_WEIGHTS.recency;
        assert!((sum - 1.0).abs() < 1e-9, "weights sum to {sum}");
    }

    #[test]
    fn test_uniform_inputs_reproduce_themselves() {
        assert_eq!(aggregate_scores(&uniform(100.0)).master_score, 100.0);
        assert_eq!(aggregate_scores(&uniform(0.0)).master_score, 0.0);
        assert_eq!(aggregate_scores(&uniform(50.0)).master_score, 50.0);
    }

    #[test]
    fn test_weighted_sum_of_a_known_mix() {
        let breakdown = aggregate_scores(&DimensionScores {
            resume_skills: 80.0,
            github_activity: 60.0,
            project_depth: 70.0,
            role_alignment: 90.0,
            recency: 50.0,
        });
        // 24 + 15 + 14 + 13.5 + 5
        assert_eq!(breakdown.master_score, 71.5);
        assert_eq!(breakdown.confidence_band, ConfidenceBand::Medium);
    }

    #[test]
    fn test_out_of_range_dimensions_are_clamped_before_weighting() {
        let breakdown = aggregate_scores(&DimensionScores {
            resume_skills: 150.0,
            github_activity: -20.0,
            project_depth: 50.0,
            role_alignment: 50.0,
            recency: 50.0,
        });
        assert_eq!(breakdown.dimensions.resume_skills, 100.0);
        assert_eq!(breakdown.dimensions.github_activity, 0.0);
        assert_eq!(breakdown.master_score, 52.5);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(aggregate_scores(&uniform(80.0)).confidence_band, ConfidenceBand::HighPotential);
        assert_eq!(aggregate_scores(&uniform(79.9)).confidence_band, ConfidenceBand::Medium);
        assert_eq!(aggregate_scores(&uniform(65.0)).confidence_band, ConfidenceBand::Medium);
        assert_eq!(aggregate_scores(&uniform(64.9)).confidence_band, ConfidenceBand::Risk);
        assert_eq!(aggregate_scores(&uniform(0.0)).confidence_band, ConfidenceBand::Risk);
    }

    #[test]
    fn test_band_labels_use_product_wording() {
        let json = serde_json::to_string(&ConfidenceBand::HighPotential).unwrap();
        assert_eq!(json, "\"High Potential\"");
        let json = serde_json::to_string(&ConfidenceBand::Risk).unwrap();
        assert_eq!(json, "\"Risk\"");
    }

    #[test]
    fn test_breakdown_always_carries_dimensions_and_weights() {
        let breakdown = aggregate_scores(&uniform(70.0));
        let value = serde_json::to_value(breakdown).unwrap();
        assert!(value.get("dimensions").is_some());
        assert!(value.get("weights").is_some());
        assert!(value.get("master_score").is_some());
        assert!(value.get("confidence_band").is_some());
    }

    #[test]
    fn test_partial_scores_complete_when_all_present() {
        let partial = PartialDimensionScores {
            resume_skills: Some(80.0),
            github_activity: Some(60.0),
            project_depth: Some(70.0),
            role_alignment: Some(90.0),
            recency: Some(50.0),
        };
        let full = partial.complete().unwrap();
        assert_eq!(full.resume_skills, 80.0);
        assert_eq!(full.recency, 50.0);
    }

    #[test]
    fn test_missing_dimension_is_named_not_defaulted() {
        let partial = PartialDimensionScores {
            resume_skills: Some(80.0),
            github_activity: None,
            project_depth: Some(70.0),
            role_alignment: Some(90.0),
            recency: Some(50.0),
        };
        assert_eq!(
            partial.complete(),
            Err(AggregateError::MissingDimension("github_activity"))
        );
    }

    #[test]
    fn test_empty_partial_names_the_first_missing_dimension() {
        let partial = PartialDimensionScores::default();
        assert_eq!(
            partial.complete(),
            Err(AggregateError::MissingDimension("resume_skills"))
        );
    }

    #[test]
    fn test_aggregation_is_byte_identical_across_runs() {
        let dims = DimensionScores {
            resume_skills: 63.3,
            github_activity: 48.0,
            project_depth: 85.0,
            role_alignment: 100.0,
            recency: 85.0,
        };
        let a = serde_json::to_string(&aggregate_scores(&dims)).unwrap();
        let b = serde_json::to_string(&aggregate_scores(&dims)).unwrap();
        assert_eq!(a, b);
    }
}
