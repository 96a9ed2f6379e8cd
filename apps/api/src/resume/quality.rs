//! Resume quality heuristics: ATS readiness and project depth.
//!
//! Both scores are additive component sums over the extracted text, with
//! each component capped so no single signal can dominate, clamped to
//! 0..=100 and reported to one decimal place.
//!
//! ATS readiness components:
//!   keyword density   4 per detected keyword, cap 40
//!   structure         30 scaled by coverage of the four core sections
//!   contact info      5 each for an email marker, a profile link, a
//!                     10-digit phone number
//!   formatting        5 each for line count over 20, an uppercase header
//!                     line, word count in the 200..1500 band
//!
//! Project depth components:
//!   projects section  25 when present
//!   action verbs      5 per distinct verb, cap 25
//!   deploy signals    5 per distinct indicator, cap 20
//!   keyword breadth   2 per detected keyword, cap 20
//!   elaboration       10 over 300 words, 5 over 150

use once_cell::sync::Lazy;
use regex::Regex;

use crate::resume::sections::ResumeSection;
use crate::scoring::round1;

/// Verbs that signal hands-on build work. Matched by plain containment.
const ACTION_VERBS: &[&str] = &[
    "built",
    "developed",
    "designed",
    "implemented",
    "created",
    "deployed",
    "integrated",
    "architected",
    "optimized",
    "automated",
    "configured",
    "maintained",
    "contributed",
];

/// Terms that suggest something actually shipped, not just compiled.
const DEPLOY_INDICATORS: &[&str] = &[
    "deploy",
    "production",
    "live",
    "hosted",
    "aws",
    "heroku",
    "vercel",
    "netlify",
    "docker",
    "ci/cd",
    "kubernetes",
];

/// Sections an applicant-tracking system expects to find.
const CORE_SECTIONS: &[ResumeSection] = &[
    ResumeSection::Education,
    ResumeSection::Experience,
    ResumeSection::Skills,
    ResumeSection::Projects,
];

/// Profile links that make a candidate easy to follow up on.
const PROFILE_LINKS: &[&str] = &["github", "linkedin", "portfolio"];

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{10}").unwrap());

// ─────────────────────────────────────────────────────────────────────────────
// ATS readiness
// ─────────────────────────────────────────────────────────────────────────────

/// Scores how well the resume would survive automated applicant-tracking
/// parsing: keyword density, core-section coverage, contact details, and
/// basic formatting hygiene.
pub fn ats_score(text: &str, keywords: &[String], sections: &[ResumeSection]) -> f64 {
    let lowered = text.to_lowercase();
    let mut score = 0.0;

    score += (keywords.len() as f64 * 4.0).min(40.0);

    let core_found = CORE_SECTIONS
        .iter()
        .filter(|core| sections.contains(core))
        .count();
    score += 30.0 * core_found as f64 / CORE_SECTIONS.len() as f64;

    if lowered.contains('@') {
        score += 5.0;
    }
    if PROFILE_LINKS.iter().any(|link| lowered.contains(link)) {
        score += 5.0;
    }
    if PHONE_PATTERN.is_match(&lowered) {
        score += 5.0;
    }

    if text.lines().count() > 20 {
        score += 5.0;
    }
    if text.lines().any(is_upper_header) {
        score += 5.0;
    }
    let word_count = text.split_whitespace().count();
    if word_count > 200 && word_count < 1500 {
        score += 5.0;
    }

    round1(score.clamp(0.0, 100.0))
}

/// A header-style line: trimmed, longer than three chars, containing
/// uppercase letters and no lowercase ones.
fn is_upper_header(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() > 3
        && trimmed.chars().any(|c| c.is_uppercase())
        && !trimmed.chars().any(|c| c.is_lowercase())
}

// ─────────────────────────────────────────────────────────────────────────────
// Project depth
// ─────────────────────────────────────────────────────────────────────────────

/// Scores how substantively the resume describes project work: a projects
/// section, build verbs, deployment evidence, technical breadth, and
/// enough prose to have actually said something.
pub fn project_depth_score(text: &str, keywords: &[String], sections: &[ResumeSection]) -> f64 {
    let lowered = text.to_lowercase();
    let mut score = 0.0;

    if sections.contains(&ResumeSection::Projects) {
        score += 25.0;
    }

    let verbs = ACTION_VERBS
        .iter()
        .filter(|verb| lowered.contains(*verb))
        .count();
    score += (verbs as f64 * 5.0).min(25.0);

    let deploys = DEPLOY_INDICATORS
        .iter()
        .filter(|ind| lowered.contains(*ind))
        .count();
    score += (deploys as f64 * 5.0).min(20.0);

    score += (keywords.len() as f64 * 2.0).min(20.0);

    let word_count = text.split_whitespace().count();
    if word_count > 300 {
        score += 10.0;
    } else if word_count > 150 {
        score += 5.0;
    }

    round1(score.clamp(0.0, 100.0))
}
