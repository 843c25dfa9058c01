//! ATS scoring: a fixed, integer-only heuristic over skills, section words and
//! job-description overlap.
//!
//! Algorithm:
//! 1. Empty text scores 0. Otherwise start from a base of 20.
//! 2. Skill match: with a job description, 8 per skill named in it (max 50);
//!    without one, 5 per detected skill (max 40).
//! 3. Sections: 5 for each of experience / education / project / certification.
//! 4. Penalties: 5 each when "experience" or "education" is missing.
//! 5. Coverage: matched skills over unique job-description tokens, times 30.
//! 6. Clamp to 0..=100.

use std::collections::HashSet;

use serde::Serialize;

use crate::analysis::models::SkillSet;
use crate::analysis::vocabulary::SECTION_KEYWORDS;

const BASE_SCORE: i32 = 20;
const JD_MATCH_POINTS: i32 = 8;
const JD_MATCH_CAP: i32 = 50;
const SKILL_POINTS: i32 = 5;
const SKILL_CAP: i32 = 40;
const SECTION_POINTS: i32 = 5;
const MISSING_SECTION_PENALTY: i32 = 5;
const COVERAGE_WEIGHT: i32 = 30;
const MAX_SCORE: i32 = 100;

/// Sections whose absence costs points.
const REQUIRED_SECTIONS: &[&str] = &["experience", "education"];

/// Per-component view of a score, so the number can be explained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub base: i32,
    pub skill_match: i32,
    pub sections: i32,
    /// Zero or negative.
    pub penalties: i32,
    pub coverage: i32,
    /// Clamped sum of the components above.
    pub total: u32,
}

/// Treats an empty job description as absent. Whitespace-only text still
/// counts as present and takes the job-description branch.
pub fn normalize_job_description(raw: Option<&str>) -> Option<&str> {
    raw.filter(|jd| !jd.is_empty())
}

/// Skills whose label occurs in the job description, case-insensitively.
pub fn matched_skills<'a>(skills: &'a SkillSet, job_description: &str) -> Vec<&'a str> {
    let jd_upper = job_description.to_uppercase();
    skills
        .iter()
        .filter(|skill| jd_upper.contains(&skill.to_uppercase()))
        .collect()
}

pub fn score(skills: &SkillSet, text: &str, job_description: Option<&str>) -> u32 {
    score_breakdown(skills, text, job_description).total
}

pub fn score_breakdown(
    skills: &SkillSet,
    text: &str,
    job_description: Option<&str>,
) -> ScoreBreakdown {
    if text.is_empty() {
        return ScoreBreakdown::default();
    }

    let job_description = normalize_job_description(job_description);
    let text_lower = text.to_lowercase();

    let matched = job_description
        .map(|jd| matched_skills(skills, jd).len() as i32)
        .unwrap_or(0);

    let skill_match = match job_description {
        Some(_) => (matched * JD_MATCH_POINTS).min(JD_MATCH_CAP),
        None => (skills.len() as i32 * SKILL_POINTS).min(SKILL_CAP),
    };

    let sections = SECTION_KEYWORDS
        .iter()
        .filter(|kw| text_lower.contains(*kw))
        .count() as i32
        * SECTION_POINTS;

    let penalties = -(REQUIRED_SECTIONS
        .iter()
        .filter(|kw| !text_lower.contains(*kw))
        .count() as i32
        * MISSING_SECTION_PENALTY);

    let coverage = match job_description {
        Some(jd) if !skills.is_empty() => {
            let unique_tokens = jd.split_whitespace().collect::<HashSet<_>>().len() as i32;
            matched * COVERAGE_WEIGHT / unique_tokens.max(1)
        }
        _ => 0,
    };

    let sum = BASE_SCORE + skill_match + sections + penalties + coverage;
    let total = sum.clamp(0, MAX_SCORE) as u32;

    tracing::debug!(
        skill_match,
        sections,
        penalties,
        coverage,
        total,
        "ATS score computed"
    );

    ScoreBreakdown {
        base: BASE_SCORE,
        skill_match,
        sections,
        penalties,
        coverage,
        total,
    }
}
