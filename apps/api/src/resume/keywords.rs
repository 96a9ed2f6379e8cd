//! Technical keyword detection over extracted resume text.
//!
//! Matching is case-insensitive. Terms of three characters or fewer match
//! only at word boundaries, so "django" never registers as "go" and
//! "rapid" never registers as "api"; longer terms match by plain substring
//! containment. Short terms with symbol edges ("c++", "c#") get boundary
//! guards only on their word-character side, avoiding the usual blind spot
//! where punctuation-adjacent terms can never match at end of text.

use once_cell::sync::Lazy;
use regex::Regex;

// ─────────────────────────────────────────────────────────────────────────────
// Keyword catalog
// ─────────────────────────────────────────────────────────────────────────────

/// The fixed vocabulary of technical terms recognized in resumes. All
/// lowercase; matching lowercases the input text first.
const TECH_KEYWORDS: &[&str] = &[
    // languages
    "python",
    "javascript",
    "typescript",
    "java",
    "go",
    "rust",
    "c++",
    "c#",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    "r",
    "dart",
    "lua",
    // frameworks
    "react",
    "vue",
    "angular",
    "next.js",
    "nuxt",
    "svelte",
    "django",
    "flask",
    "fastapi",
    "express",
    "spring",
    "spring boot",
    "rails",
    "laravel",
    ".net",
    "flutter",
    "react native",
    // data and ML
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "sklearn",
    "scikit-learn",
    "keras",
    "opencv",
    "matplotlib",
    "seaborn",
    "jupyter",
    "spark",
    "airflow",
    "hadoop",
    "dbt",
    // databases
    "sql",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "elasticsearch",
    "dynamodb",
    "firebase",
    "supabase",
    "sqlite",
    "cassandra",
    // devops and infrastructure
    "docker",
    "kubernetes",
    "aws",
    "gcp",
    "azure",
    "terraform",
    "ansible",
    "jenkins",
    "github actions",
    "ci/cd",
    "nginx",
    "linux",
    "shell",
    "bash",
    "prometheus",
    "grafana",
    // tools and practices
    "git",
    "rest",
    "graphql",
    "microservices",
    "api",
    "agile",
    "scrum",
    "jira",
    "figma",
    "html",
    "css",
    "sass",
    "tailwind",
    "webpack",
    "vite",
    "node.js",
];

/// Terms short enough to need boundary matching. The catalog is all ASCII,
/// so byte length is character length.
const BOUNDARY_MAX_LEN: usize = 3;

/// Catalog paired with a compiled boundary pattern for short terms; longer
/// terms carry `None` and match by containment.
static KEYWORD_MATCHERS: Lazy<Vec<(&'static str, Option<Regex>)>> = Lazy::new(|| {
    TECH_KEYWORDS
        .iter()
        .map(|kw| {
            let pattern = (kw.len() <= BOUNDARY_MAX_LEN).then(|| boundary_pattern(kw));
            (*kw, pattern)
        })
        .collect()
});

/// Compiles a pattern that rejects matches embedded in a longer word-char
/// run. Edges that are already symbols ("+", "#") need no guard on that
/// side; "c++" before a comma or at end of text still matches.
fn boundary_pattern(keyword: &str) -> Regex {
    let escaped = regex::escape(keyword);
    let starts_wordlike = keyword
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric());
    let ends_wordlike = keyword
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_alphanumeric());

    let prefix = if starts_wordlike {
        r"(?:^|[^a-z0-9_])"
    } else {
        ""
    };
    let suffix = if ends_wordlike {
        r"(?:[^a-z0-9_]|$)"
    } else {
        ""
    };

    // The catalog is static, so a malformed pattern is a programming error.
    Regex::new(&format!("{prefix}{escaped}{suffix}")).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Scans resume text and returns every catalog term it mentions, sorted
/// alphabetically. Each term appears at most once regardless of how many
/// times the text repeats it.
pub fn detect_keywords(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let lowered = text.to_lowercase();

    let mut found: Vec<&'static str> = KEYWORD_MATCHERS
        .iter()
        .filter(|(kw, pattern)| match pattern {
            Some(re) => re.is_match(&lowered),
            None => lowered.contains(kw),
        })
        .map(|(kw, _)| *kw)
        .collect();
    found.sort_unstable();
    found.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_plain_keywords_case_insensitively() {
        let found = detect_keywords("Experienced with Python, Docker and PostgreSQL.");
        assert_eq!(found, vec!["docker", "postgresql", "python"]);
    }

    #[test]
    fn test_short_terms_do_not_match_inside_words() {
        let found = detect_keywords("rapid delivery on django");
        assert!(
            !found.contains(&"go".to_string()),
            "'go' must not match inside 'django'"
        );
        assert!(
            !found.contains(&"api".to_string()),
            "'api' must not match inside 'rapid'"
        );
        assert_eq!(found, vec!["django"]);
    }

    #[test]
    fn test_long_terms_match_by_containment() {
        let found = detect_keywords("javascript everywhere");
        assert!(found.contains(&"java".to_string()), "containment picks up 'java'");
        assert!(found.contains(&"javascript".to_string()));
    }

    #[test]
    fn test_symbol_edged_short_terms_match_at_punctuation_and_end() {
        assert_eq!(detect_keywords("Fluent in C++"), vec!["c++"]);
        assert_eq!(detect_keywords("c++, then c#."), vec!["c#", "c++"]);
    }

    #[test]
    fn test_dot_net_matches_inside_compound_names() {
        let found = detect_keywords("Worked on asp.net services");
        assert!(found.contains(&".net".to_string()));
    }

    #[test]
    fn test_multi_word_terms() {
        let found = detect_keywords("Spring Boot apps deployed via GitHub Actions");
        assert_eq!(found, vec!["github actions", "spring", "spring boot"]);
    }

    #[test]
    fn test_single_letter_r_needs_boundaries() {
        let found = detect_keywords("Statistics in R and more");
        assert_eq!(found, vec!["r"]);
        assert!(!detect_keywords("react hooks").contains(&"r".to_string()));
    }

    #[test]
    fn test_sql_boundary_excludes_postgresql() {
        let found = detect_keywords("postgresql only");
        assert_eq!(found, vec!["postgresql"], "'sql' must not match inside 'postgresql'");
    }

    #[test]
    fn test_repeated_mentions_count_once() {
        let found = detect_keywords("rust rust rust and more rust");
        assert_eq!(found, vec!["rust"]);
    }

    #[test]
    fn test_output_is_sorted() {
        let found = detect_keywords("vue then angular then react");
        assert_eq!(found, vec!["angular", "react", "vue"]);
    }

    #[test]
    fn test_empty_text_yields_no_keywords() {
        assert!(detect_keywords("").is_empty());
    }

    #[test]
    fn test_detection_is_deterministic() {
        let text = "Kubernetes, Terraform, AWS, and a bit of Bash.";
        assert_eq!(detect_keywords(text), detect_keywords(text));
    }

    #[test]
    fn test_every_catalog_term_matches_itself() {
        for kw in TECH_KEYWORDS {
            let text = format!("skills: {kw} end");
            assert!(
                detect_keywords(&text).contains(&kw.to_string()),
                "catalog term {kw:?} failed to match itself"
            );
        }
    }
}
