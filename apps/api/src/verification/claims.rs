//! Claim verification — cross-references claimed skills against observed
//! language evidence.
//!
//! Evidence is a language→usage-percentage map (typically derived from a
//! candidate's public repositories). Each claim is classified by the first
//! rule that applies:
//!
//! 1. Direct: the claim names an evidence language. Over 10% usage reads
//!    as `verified`, anything else as `partial`.
//! 2. Technology table: the claim is a known technology. An empty parent
//!    list marks skills that code evidence can never confirm (`unverifiable`);
//!    otherwise presence of any parent language reads as `partial` and
//!    absence of all of them as `contradicted`.
//! 3. Fuzzy fallback: substring overlap in either direction with any
//!    evidence language reads as `partial`; no overlap as `unverifiable`.
//!
//! `contradicted` is reserved for claims whose own dependency chain is
//! demonstrably absent. `unverifiable` stays neutral so infrastructure and
//! process skills are never penalized for lacking code evidence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scoring::round1;

/// Language→usage-percentage evidence map. Ordered so reports serialize
/// identically across runs.
pub type LanguageEvidence = BTreeMap<String, f64>;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Outcome category for a single claim. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Verified,
    Partial,
    Contradicted,
    Unverifiable,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Verified => "verified",
            ClaimStatus::Partial => "partial",
            ClaimStatus::Contradicted => "contradicted",
            ClaimStatus::Unverifiable => "unverifiable",
        }
    }
}

/// One classified claim. `skill` carries the claim exactly as submitted;
/// normalization only happens for comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimVerdict {
    pub skill: String,
    pub status: ClaimStatus,
    pub evidence: String,
}

/// Per-status verdict tally. Always carries all four statuses; the counts
/// sum to the report's `total_claims`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub verified: usize,
    pub partial: usize,
    pub contradicted: usize,
    pub unverifiable: usize,
}

impl VerificationSummary {
    fn tally(verdicts: &[ClaimVerdict]) -> Self {
        let mut summary = VerificationSummary::default();
        for verdict in verdicts {
            match verdict.status {
                ClaimStatus::Verified => summary.verified += 1,
                ClaimStatus::Partial => summary.partial += 1,
                ClaimStatus::Contradicted => summary.contradicted += 1,
                ClaimStatus::Unverifiable => summary.unverifiable += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.verified + self.partial + self.contradicted + self.unverifiable
    }
}

/// Full verification report: verdicts in claim order plus the tally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub verification_results: Vec<ClaimVerdict>,
    pub summary: VerificationSummary,
    pub total_claims: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Technology → parent language table
// ────────────────────────────────────────────────────────────────────────────

/// Hand-curated mapping from technology claims to the languages their use
/// would leave behind in a repository. Empty lists mark technologies that
/// leave no language trace (infrastructure, databases, version control).
const TECH_LANGUAGE_MAP: &[(&str, &[&str])] = &[
    ("react", &["javascript", "typescript"]),
    ("vue", &["javascript", "typescript"]),
    ("angular", &["typescript", "javascript"]),
    ("next.js", &["javascript", "typescript"]),
    ("fastapi", &["python"]),
    ("django", &["python"]),
    ("flask", &["python"]),
    ("express", &["javascript", "typescript"]),
    ("spring", &["java", "kotlin"]),
    ("node.js", &["javascript", "typescript"]),
    ("tensorflow", &["python", "jupyter notebook"]),
    ("pytorch", &["python", "jupyter notebook"]),
    ("pandas", &["python", "jupyter notebook"]),
    ("sklearn", &["python"]),
    ("docker", &[]),
    ("kubernetes", &[]),
    ("aws", &[]),
    ("sql", &[]),
    ("postgresql", &[]),
    ("mongodb", &[]),
    ("redis", &[]),
    ("git", &[]),
];

fn parent_languages(tech: &str) -> Option<&'static [&'static str]> {
    TECH_LANGUAGE_MAP
        .iter()
        .find(|(name, _)| *name == tech)
        .map(|(_, langs)| *langs)
}

// ────────────────────────────────────────────────────────────────────────────
// Classifier
// ────────────────────────────────────────────────────────────────────────────

/// Classifies every claim against the evidence map and tallies the
/// results. Claims are processed in input order; identical inputs always
/// produce an identical report.
pub fn verify_claims(claims: &[String], evidence: &LanguageEvidence) -> VerificationReport {
    // Lowercase the evidence keys once. BTreeMap iteration is sorted, so
    // when two keys collide after lowering, the lexicographically later
    // original key wins - the same one every run.
    let mut lowered: BTreeMap<String, f64> = BTreeMap::new();
    for (lang, pct) in evidence {
        lowered.insert(lang.to_lowercase(), *pct);
    }

    let verification_results: Vec<ClaimVerdict> = claims
        .iter()
        .map(|claim| {
            let (status, evidence) = classify(claim, &lowered);
            ClaimVerdict {
                skill: claim.clone(),
                status,
                evidence,
            }
        })
        .collect();

    let summary = VerificationSummary::tally(&verification_results);

    VerificationReport {
        verification_results,
        summary,
        total_claims: claims.len(),
    }
}

fn classify(claim: &str, lowered: &BTreeMap<String, f64>) -> (ClaimStatus, String) {
    let normalized = claim.trim().to_lowercase();
    if normalized.is_empty() {
        return (
            ClaimStatus::Unverifiable,
            "Skill not detectable from public evidence".to_string(),
        );
    }

    // 1. Direct language match.
    if let Some(pct) = lowered.get(&normalized) {
        return if *pct > 10.0 {
            (
                ClaimStatus::Verified,
                format!("Found {pct:.1}% usage in GitHub repositories"),
            )
        } else {
            (
                ClaimStatus::Partial,
                format!("Found {pct:.1}% usage, minimal presence"),
            )
        };
    }

    // 2. Known technology: check its parent languages.
    if let Some(parents) = parent_languages(&normalized) {
        if parents.is_empty() {
            return (
                ClaimStatus::Unverifiable,
                "Infrastructure skill, cannot verify from code alone".to_string(),
            );
        }
        let present: Vec<&str> = parents
            .iter()
            .filter(|lang| lowered.contains_key(**lang))
            .copied()
            .collect();
        return if present.is_empty() {
            (
                ClaimStatus::Contradicted,
                format!("No {} found in GitHub repositories", parents.join("/")),
            )
        } else {
            (
                ClaimStatus::Partial,
                format!("Parent language(s) {} found in GitHub", present.join(", ")),
            )
        };
    }

    // 3. Fuzzy fallback: substring overlap in either direction.
    let loosely_related = lowered
        .keys()
        .any(|lang| lang.contains(&normalized) || normalized.contains(lang.as_str()));
    if loosely_related {
        (
            ClaimStatus::Partial,
            "Loosely related language found in GitHub".to_string(),
        )
    } else {
        (
            ClaimStatus::Unverifiable,
            "Skill not detectable from public evidence".to_string(),
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trust score
// ────────────────────────────────────────────────────────────────────────────

/// Share of claims that survived verification without contradiction,
/// on a 0..=100 scale. A candidate with no claims has nothing held
/// against them and scores 100.
pub fn trust_score(report: &VerificationReport) -> f64 {
    if report.total_claims == 0 {
        return 100.0;
    }
    let not_contradicted = report.total_claims - report.summary.contradicted;
    round1(100.0 * not_contradicted as f64 / report.total_claims as f64)
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient boundary parsers
// ────────────────────────────────────────────────────────────────────────────

/// Parses a serialized JSON string array, substituting an empty list for
/// anything malformed or wrong-shaped.
pub fn lenient_string_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Parses a serialized JSON name→percentage object, substituting an empty
/// map for anything malformed or wrong-shaped.
pub fn lenient_percentage_map(raw: &str) -> LanguageEvidence {
    serde_json::from_str(raw).unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
