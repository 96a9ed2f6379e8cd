//! Resume profile assembly — the full text-to-profile pipeline.
//!
//! Bytes go through extraction, then keyword and section detection, then
//! the two quality heuristics. Texts that are empty or trivially short
//! short-circuit to a zeroed profile without running the detectors; the
//! raw text (such as it is) is always preserved for audit.

use serde::{Deserialize, Serialize};

use crate::resume::sections::ResumeSection;
use crate::resume::{extract, keywords, quality, sections};

/// Minimum trimmed character count for a text to be worth analyzing.
pub const MIN_TEXT_CHARS: usize = 20;

/// Everything the engine derived from one uploaded resume. Computed once
/// per document and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub raw_text: String,
    pub keywords_detected: Vec<String>,
    pub sections_found: Vec<ResumeSection>,
    pub ats_score: f64,
    pub project_quality: f64,
}

/// Runs the whole pipeline on uploaded document bytes.
pub fn analyze_bytes(bytes: &[u8]) -> ResumeProfile {
    analyze_text(extract::extract_text(bytes))
}

/// Runs detection and scoring over already-extracted text.
pub fn analyze_text(raw_text: String) -> ResumeProfile {
    if raw_text.trim().chars().count() < MIN_TEXT_CHARS {
        return zeroed(raw_text);
    }

    let keywords_detected = keywords::detect_keywords(&raw_text);
    let sections_found = sections::detect_sections(&raw_text);
    let ats_score = quality::ats_score(&raw_text, &keywords_detected, &sections_found);
    let project_quality =
        quality::project_depth_score(&raw_text, &keywords_detected, &sections_found);

    ResumeProfile {
        raw_text,
        keywords_detected,
        sections_found,
        ats_score,
        project_quality,
    }
}

fn zeroed(raw_text: String) -> ResumeProfile {
    ResumeProfile {
        raw_text,
        keywords_detected: Vec::new(),
        sections_found: Vec::new(),
        ats_score: 0.0,
        project_quality: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "\
JANE DOE
jane@example.com | github.com/janedoe | 9876543210

EDUCATION
B.Tech Computer Science, 2024, CGPA 8.9

EXPERIENCE
Backend intern at Acme. Built REST APIs with FastAPI and PostgreSQL,
deployed to production on AWS with Docker.

PROJECTS
Developed a URL shortener in Rust. Created a CI/CD pipeline with
GitHub Actions.

SKILLS
Python, Rust, SQL, Docker, Git";

    #[test]
    fn test_empty_bytes_produce_zeroed_profile() {
        let profile = analyze_bytes(&[]);
        assert_eq!(profile.ats_score, 0.0);
        assert_eq!(profile.project_quality, 0.0);
        assert!(profile.keywords_detected.is_empty());
        assert!(profile.sections_found.is_empty());
        assert_eq!(profile.raw_text, "");
    }

    #[test]
    fn test_short_text_is_zeroed_but_preserved() {
        let profile = analyze_text("   hi   ".to_string());
        assert_eq!(profile.raw_text, "   hi   ");
        assert_eq!(profile.ats_score, 0.0);
        assert_eq!(profile.project_quality, 0.0);
        assert!(profile.keywords_detected.is_empty());
        assert!(profile.sections_found.is_empty());
    }

    #[test]
    fn test_twenty_trimmed_chars_is_the_analysis_threshold() {
        // 19 trimmed chars: short-circuit, detectors never run.
        let short = analyze_text("rust rust rust rust".to_string());
        assert!(short.keywords_detected.is_empty());

        // 20 trimmed chars: analyzed normally.
        let long = analyze_text("rust rust rust rusty".to_string());
        assert_eq!(long.keywords_detected, vec!["rust"]);
        assert_eq!(long.ats_score, 4.0);
    }

    #[test]
    fn test_surrounding_whitespace_does_not_defeat_the_threshold() {
        let padded = format!("        {}        ", "x".repeat(10));
        let profile = analyze_text(padded.clone());
        assert_eq!(profile.raw_text, padded);
        assert_eq!(profile.ats_score, 0.0);
    }

    #[test]
    fn test_realistic_resume_scores_are_bounded() {
        let profile = analyze_text(SAMPLE_RESUME.to_string());
        assert!(profile.ats_score > 0.0 && profile.ats_score <= 100.0);
        assert!(profile.project_quality > 0.0 && profile.project_quality <= 100.0);
        assert!(profile.keywords_detected.contains(&"rust".to_string()));
        assert!(profile.keywords_detected.contains(&"fastapi".to_string()));
        assert!(profile.sections_found.contains(&ResumeSection::Education));
        assert!(profile.sections_found.contains(&ResumeSection::Projects));
    }

    #[test]
    fn test_sections_come_back_in_canonical_order() {
        let profile = analyze_text(SAMPLE_RESUME.to_string());
        let edu = profile
            .sections_found
            .iter()
            .position(|s| *s == ResumeSection::Education);
        let skills = profile
            .sections_found
            .iter()
            .position(|s| *s == ResumeSection::Skills);
        assert!(edu < skills, "education must precede skills in canonical order");
    }

    #[test]
    fn test_pipeline_is_byte_identical_across_runs() {
        let a = analyze_text(SAMPLE_RESUME.to_string());
        let b = analyze_text(SAMPLE_RESUME.to_string());
        let a_json = serde_json::to_string(&a).unwrap();
        let b_json = serde_json::to_string(&b).unwrap();
        assert_eq!(a_json, b_json);
    }

    #[test]
    fn test_profile_serializes_with_stable_field_names() {
        let profile = analyze_text(SAMPLE_RESUME.to_string());
        let value = serde_json::to_value(&profile).unwrap();
        for field in [
            "raw_text",
            "keywords_detected",
            "sections_found",
            "ats_score",
            "project_quality",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }
}
