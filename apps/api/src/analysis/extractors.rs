//! Field extractors: pattern-matching rules over raw resume text.
//!
//! Every extractor is total. Empty or unrecognisable input yields
//! [`NOT_FOUND`] (or an empty collection), never an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::models::{SkillSet, NOT_FOUND};
use crate::analysis::text::{non_empty_lines, raw_lines};
use crate::analysis::vocabulary::{DEGREE_KEYWORDS, NAME_BLACKLIST, SKILL_KEYWORDS};

/// How far down the document a name may appear.
const NAME_SCAN_LINES: usize = 8;
const NAME_MAX_WORDS: usize = 4;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

// `regex` has no lookaround. Each number sits in group 1, fenced by a
// non-digit (or text boundary) on both sides so it cannot be a slice of a
// longer digit run.
static PHONE_PATTERNS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        // International: +CC (AREA) NNN-NNNN and friends
        Regex::new(
            r"(?:^|[^0-9])(\+?[0-9]{1,3}[-.\s]?\(?[0-9]{2,4}\)?[-.\s]?[0-9]{3,4}[-.\s]?[0-9]{3,4})(?:[^0-9]|$)",
        )
        .unwrap(),
        // Bare ten-digit number
        Regex::new(r"(?:^|[^0-9])([0-9]{10})(?:[^0-9]|$)").unwrap(),
    ]
});

static EXPERIENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\+?\s*(years|yrs|year)").unwrap());

fn not_found() -> String {
    NOT_FOUND.to_string()
}

/// Candidate name: the first of the leading lines that reads like a name
/// rather than a section header or a contact line.
pub fn extract_name(text: &str) -> String {
    non_empty_lines(text)
        .take(NAME_SCAN_LINES)
        .find(|line| looks_like_name(line))
        .map(str::to_string)
        .unwrap_or_else(not_found)
}

fn looks_like_name(line: &str) -> bool {
    if NAME_BLACKLIST.contains(&line.to_uppercase().as_str()) {
        return false;
    }
    if line.contains('@') || line.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    (1..=NAME_MAX_WORDS).contains(&words.len())
        && words
            .iter()
            .any(|w| w.chars().next().is_some_and(char::is_uppercase))
}

pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(not_found)
}

/// First phone number, trying the international pattern before the bare one.
pub fn extract_phone(text: &str) -> String {
    PHONE_PATTERNS
        .iter()
        .find_map(|re| re.captures(text).and_then(|caps| caps.get(1)))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(not_found)
}

/// Skill vocabulary terms occurring anywhere in the text, case-insensitively.
pub fn extract_skills(text: &str) -> SkillSet {
    if text.is_empty() {
        return SkillSet::default();
    }
    let haystack = text.to_uppercase();
    SKILL_KEYWORDS
        .iter()
        .copied()
        .filter(|skill| haystack.contains(&skill.to_uppercase()))
        .collect()
}

/// First line mentioning a degree, with its original casing.
pub fn extract_education(text: &str) -> String {
    raw_lines(text)
        .find(|line| {
            let lower = line.to_lowercase();
            DEGREE_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .map(|line| line.trim().to_string())
        .unwrap_or_else(not_found)
}

/// Every "<n> years" style duration, normalised to `"<n> <unit>"`.
/// A resume without any yields a single [`NOT_FOUND`] entry.
pub fn extract_experience(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let durations: Vec<String> = EXPERIENCE_RE
        .captures_iter(&lower)
        .map(|caps| format!("{} {}", &caps[1], &caps[2]))
        .collect();

    if durations.is_empty() {
        vec![not_found()]
    } else {
        durations
    }
}
