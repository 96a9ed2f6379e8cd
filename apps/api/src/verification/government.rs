//! Mock government registry — deterministic demo records for background
//! checks.
//!
//! There is no real registry behind this; the record for a candidate is
//! synthesized from a pseudo-random stream seeded by SHA-256(candidate id,
//! registry salt). The guarantee callers rely on: the same candidate id
//! always yields a byte-identical record. Nothing here feeds scoring.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::scoring::round1;

/// Domain salt for the registry stream. Changing it re-rolls every record.
const REGISTRY_SALT: &str = "credence-registry-v1";

/// Issued document types with their reference-number prefixes, in the
/// order they appear on the record.
const DOC_TYPES: &[(&str, &str)] = &[
    ("national_id", "NID"),
    ("tax_card", "TAX"),
    ("driving_license", "DL"),
    ("secondary_school_certificate", "SSC"),
    ("degree_certificate", "DEG"),
];

const INSTITUTIONS: &[&str] = &[
    "Meridian Institute of Technology",
    "Northgate University",
    "St. Alder's College of Engineering",
    "Lakeview Technical University",
    "Crestfield Institute of Science",
    "Harrowell State University",
    "Bellmont College of Engineering",
    "Riverton Polytechnic",
];

const PROGRAMS: &[&str] = &[
    "B.Tech Computer Science",
    "B.E. Information Technology",
    "B.Sc Computer Science",
    "Bachelor of Computer Applications",
    "M.Tech Software Engineering",
];

const COURSES: &[&str] = &[
    "Data Structures and Algorithms",
    "Operating Systems",
    "Database Management Systems",
    "Computer Networks",
    "Software Engineering",
    "Discrete Mathematics",
    "Compiler Design",
    "Distributed Systems",
    "Machine Learning",
    "Web Technologies",
    "Computer Architecture",
    "Information Security",
];

// ────────────────────────────────────────────────────────────────────────────
// Record types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Clear,
    Pending,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Clear => "clear",
            RecordStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Verified,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedDocument {
    pub doc_type: String,
    pub reference: String,
    pub issued_year: u16,
    pub status: DocumentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGrade {
    pub course: String,
    pub credits: u8,
    pub grade_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicTranscript {
    pub institution: String,
    pub program: String,
    pub graduation_year: u16,
    pub gpa: f64,
    pub courses: Vec<CourseGrade>,
}

/// The full mock registry response for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernmentRecord {
    pub candidate_id: Uuid,
    pub full_name: String,
    pub documents: Vec<IssuedDocument>,
    pub academics: AcademicTranscript,
    pub overall_status: RecordStatus,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Produces the registry record for a candidate. Pure function of the id;
/// the name is echoed into the record but never seeds the stream.
pub fn run_background_check(candidate_id: Uuid, full_name: &str) -> GovernmentRecord {
    generate_record(candidate_id, full_name, REGISTRY_SALT)
}

fn generate_record(candidate_id: Uuid, full_name: &str, salt: &str) -> GovernmentRecord {
    let mut rng = ChaCha8Rng::seed_from_u64(record_seed(candidate_id, salt));

    let documents: Vec<IssuedDocument> = DOC_TYPES
        .iter()
        .map(|(doc_type, prefix)| {
            let reference = format!("{prefix}-{:09}", rng.gen_range(0..1_000_000_000u32));
            let issued_year = rng.gen_range(2012..=2023);
            // Roughly one degree in twenty is still awaiting issuance.
            let status = if *doc_type == "degree_certificate" && rng.gen_bool(0.05) {
                DocumentStatus::Pending
            } else {
                DocumentStatus::Verified
            };
            IssuedDocument {
                doc_type: doc_type.to_string(),
                reference,
                issued_year,
                status,
            }
        })
        .collect();

    let academics = generate_transcript(&mut rng);

    let overall_status = if documents.iter().any(|d| d.status == DocumentStatus::Pending) {
        RecordStatus::Pending
    } else {
        RecordStatus::Clear
    };

    GovernmentRecord {
        candidate_id,
        full_name: full_name.to_string(),
        documents,
        academics,
        overall_status,
    }
}

fn generate_transcript(rng: &mut ChaCha8Rng) -> AcademicTranscript {
    let institution = INSTITUTIONS[rng.gen_range(0..INSTITUTIONS.len())].to_string();
    let program = PROGRAMS[rng.gen_range(0..PROGRAMS.len())].to_string();
    let graduation_year = rng.gen_range(2018..=2025);

    let count = rng.gen_range(5..=8);
    let courses: Vec<CourseGrade> = COURSES
        .choose_multiple(rng, count)
        .map(|course| CourseGrade {
            course: course.to_string(),
            credits: rng.gen_range(2..=4),
            grade_points: round1(rng.gen_range(6.0..10.0)),
        })
        .collect();

    let total_credits: u32 = courses.iter().map(|c| u32::from(c.credits)).sum();
    let weighted: f64 = courses
        .iter()
        .map(|c| f64::from(c.credits) * c.grade_points)
        .sum();
    let gpa = if total_credits > 0 {
        round2(weighted / f64::from(total_credits))
    } else {
        0.0
    };

    AcademicTranscript {
        institution,
        program,
        graduation_year,
        gpa,
        courses,
    }
}

/// First eight bytes of SHA-256(id, salt) as the stream seed.
fn record_seed(candidate_id: Uuid, salt: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(candidate_id.as_bytes());
    hasher.update(salt.as_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_candidate_yields_byte_identical_record() {
        let id = Uuid::from_u128(0x0102_0304_0506_0708);
        let a = serde_json::to_string(&run_background_check(id, "Jane Doe")).unwrap();
        let b = serde_json::to_string(&run_background_check(id, "Jane Doe")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_candidates_yield_different_records() {
        let a = run_background_check(Uuid::from_u128(1), "Jane Doe");
        let b = run_background_check(Uuid::from_u128(2), "Jane Doe");
        assert_ne!(
            (a.documents, a.academics),
            (b.documents, b.academics),
            "distinct ids must not share a record"
        );
    }

    #[test]
    fn test_salt_change_rerolls_the_record() {
        let id = Uuid::from_u128(42);
        let a = generate_record(id, "Jane Doe", "salt-one");
        let b = generate_record(id, "Jane Doe", "salt-two");
        assert_ne!((a.documents, a.academics), (b.documents, b.academics));
    }

    #[test]
    fn test_name_is_echoed_but_does_not_seed_the_stream() {
        let id = Uuid::from_u128(7);
        let a = run_background_check(id, "Jane Doe");
        let b = run_background_check(id, "John Roe");
        assert_eq!(a.documents, b.documents);
        assert_eq!(a.academics, b.academics);
        assert_eq!(a.full_name, "Jane Doe");
        assert_eq!(b.full_name, "John Roe");
    }

    #[test]
    fn test_record_covers_all_document_types_in_order() {
        let record = run_background_check(Uuid::from_u128(99), "Jane Doe");
        let types: Vec<&str> = record.documents.iter().map(|d| d.doc_type.as_str()).collect();
        assert_eq!(
            types,
            vec![
                "national_id",
                "tax_card",
                "driving_license",
                "secondary_school_certificate",
                "degree_certificate"
            ]
        );
    }

    #[test]
    fn test_only_degrees_can_be_pending() {
        for n in 0..50u128 {
            let record = run_background_check(Uuid::from_u128(n), "Jane Doe");
            for doc in &record.documents {
                if doc.status == DocumentStatus::Pending {
                    assert_eq!(doc.doc_type, "degree_certificate");
                }
            }
        }
    }

    #[test]
    fn test_overall_status_reflects_document_statuses() {
        for n in 0..50u128 {
            let record = run_background_check(Uuid::from_u128(n), "Jane Doe");
            let any_pending = record
                .documents
                .iter()
                .any(|d| d.status == DocumentStatus::Pending);
            match record.overall_status {
                RecordStatus::Pending => assert!(any_pending),
                RecordStatus::Clear => assert!(!any_pending),
            }
        }
    }

    #[test]
    fn test_transcript_values_stay_in_range() {
        for n in 0..50u128 {
            let record = run_background_check(Uuid::from_u128(n), "Jane Doe");
            let transcript = &record.academics;
            assert!((5..=8).contains(&transcript.courses.len()));
            assert!((2018..=2025).contains(&transcript.graduation_year));
            assert!(transcript.gpa >= 6.0 && transcript.gpa <= 10.0, "gpa {}", transcript.gpa);
            for course in &transcript.courses {
                assert!((2..=4).contains(&course.credits));
                // Sampled below 10.0, but one-decimal rounding can land on it.
                assert!(course.grade_points >= 6.0 && course.grade_points <= 10.0);
            }
        }
    }

    #[test]
    fn test_references_are_prefixed_and_padded() {
        let record = run_background_check(Uuid::from_u128(123), "Jane Doe");
        for doc in &record.documents {
            let (prefix, digits) = doc
                .reference
                .split_once('-')
                .unwrap_or_else(|| panic!("unprefixed reference {}", doc.reference));
            assert!(!prefix.is_empty());
            assert_eq!(digits.len(), 9);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
