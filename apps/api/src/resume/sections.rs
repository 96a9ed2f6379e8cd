//! Resume section detection.
//!
//! Sections are inferred from trigger vocab rather than layout analysis:
//! each canonical section has a small set of trigger substrings, and the
//! section counts as present when any trigger occurs anywhere in the
//! lowercased text. Several triggers are deliberate stems ("certif",
//! "competenc") so that "certifications", "certified", "competency" and
//! "competencies" all register.

use serde::{Deserialize, Serialize};

/// The six canonical resume sections. Closed set; serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeSection {
    Education,
    Experience,
    Projects,
    Skills,
    Certifications,
    Summary,
}

impl ResumeSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeSection::Education => "education",
            ResumeSection::Experience => "experience",
            ResumeSection::Projects => "projects",
            ResumeSection::Skills => "skills",
            ResumeSection::Certifications => "certifications",
            ResumeSection::Summary => "summary",
        }
    }
}

/// Sections with their trigger substrings. Detection output preserves this
/// order, which follows how resumes usually read top to bottom.
const SECTION_TRIGGERS: &[(ResumeSection, &[&str])] = &[
    (
        ResumeSection::Education,
        &["education", "academic", "university", "degree", "gpa", "cgpa"],
    ),
    (
        ResumeSection::Experience,
        &["experience", "work history", "internship", "employment"],
    ),
    (
        ResumeSection::Projects,
        &["project", "portfolio", "built", "developed", "created"],
    ),
    (
        ResumeSection::Skills,
        &["skill", "technical", "technology", "proficient", "competenc"],
    ),
    (
        ResumeSection::Certifications,
        &["certif", "credential", "award", "achievement"],
    ),
    (
        ResumeSection::Summary,
        &["summary", "objective", "about me", "profile"],
    ),
];

/// Returns every section the text appears to contain, in canonical
/// definition order regardless of where the triggers occurred.
pub fn detect_sections(text: &str) -> Vec<ResumeSection> {
    if text.is_empty() {
        return Vec::new();
    }
    let lowered = text.to_lowercase();

    SECTION_TRIGGERS
        .iter()
        .filter(|(_, triggers)| triggers.iter().any(|t| lowered.contains(t)))
        .map(|(section, _)| *section)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_sections_from_headers() {
        let text = "EDUCATION\nB.Tech in CS\n\nEXPERIENCE\nIntern at Acme\n\nSKILLS\nRust";
        assert_eq!(
            detect_sections(text),
            vec![
                ResumeSection::Education,
                ResumeSection::Experience,
                ResumeSection::Skills
            ]
        );
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(detect_sections("Work History"), vec![ResumeSection::Experience]);
    }

    #[test]
    fn test_stem_triggers_match_inflected_forms() {
        assert_eq!(
            detect_sections("Certifications: AWS SAA"),
            vec![ResumeSection::Certifications]
        );
        assert_eq!(
            detect_sections("Core competencies include"),
            vec![ResumeSection::Skills]
        );
        assert_eq!(
            detect_sections("certified scrum master"),
            vec![ResumeSection::Certifications]
        );
    }

    #[test]
    fn test_project_verbs_imply_projects_section() {
        // "built" and "developed" count as project evidence even without a
        // literal "Projects" header.
        assert_eq!(detect_sections("Built a URL shortener"), vec![ResumeSection::Projects]);
        assert_eq!(
            detect_sections("developed an internal tool"),
            vec![ResumeSection::Projects]
        );
    }

    #[test]
    fn test_about_me_counts_as_summary() {
        assert_eq!(
            detect_sections("About Me\nI like systems programming"),
            vec![ResumeSection::Summary]
        );
    }

    #[test]
    fn test_output_follows_canonical_order_not_discovery_order() {
        let text = "profile first, then awards, then my degree";
        assert_eq!(
            detect_sections(text),
            vec![
                ResumeSection::Education,
                ResumeSection::Certifications,
                ResumeSection::Summary
            ]
        );
    }

    #[test]
    fn test_each_section_appears_once() {
        let text = "education education university degree";
        assert_eq!(detect_sections(text), vec![ResumeSection::Education]);
    }

    #[test]
    fn test_no_triggers_yield_empty() {
        assert!(detect_sections("lorem ipsum dolor sit amet").is_empty());
        assert!(detect_sections("").is_empty());
    }

    #[test]
    fn test_sections_serialize_lowercase() {
        let json = serde_json::to_string(&ResumeSection::Education).unwrap();
        assert_eq!(json, "\"education\"");
        let json = serde_json::to_string(&ResumeSection::Certifications).unwrap();
        assert_eq!(json, "\"certifications\"");
    }
}
