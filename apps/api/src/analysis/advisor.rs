//! Improvement suggestions derived from the score and the skill gap.
//!
//! The order of the returned list is part of the contract: score verdict,
//! job-description advice, missing skills, skill count, closing advice.

use crate::analysis::models::SkillSet;
use crate::analysis::scoring::normalize_job_description;

const LOW_SCORE_THRESHOLD: u32 = 60;
const MID_SCORE_THRESHOLD: u32 = 75;
/// Missing skills named in a single suggestion.
const MISSING_SKILLS_SHOWN: usize = 4;
const MIN_SKILL_COUNT: usize = 5;

pub const LOW_SCORE_MESSAGE: &str =
    "🔴 ATS score is below average. Add more relevant skills & keywords.";
pub const MID_SCORE_MESSAGE: &str =
    "🟡 ATS score is good but can be improved with more technical skills.";
pub const HIGH_SCORE_MESSAGE: &str = "🟢 Great ATS score! Resume is fairly optimized.";
pub const TAILOR_MESSAGE: &str =
    "📌 Tailor your resume to better match the job description provided.";
pub const MORE_SKILLS_MESSAGE: &str = "📈 Add more technical skills to increase marketability.";
pub const CLOSING_MESSAGE: &str = "✨ Use action verbs and quantify achievements.";

pub fn suggest(
    skills: &SkillSet,
    all_known_skills: &[&str],
    score: u32,
    job_description: Option<&str>,
) -> Vec<String> {
    let mut suggestions = vec![score_message(score).to_string()];

    if normalize_job_description(job_description).is_some() {
        suggestions.push(TAILOR_MESSAGE.to_string());
    }

    let missing: Vec<&str> = all_known_skills
        .iter()
        .copied()
        .filter(|skill| !skills.contains(skill))
        .take(MISSING_SKILLS_SHOWN)
        .collect();
    if !missing.is_empty() {
        suggestions.push(format!("💡 Consider adding: {}", missing.join(", ")));
    }

    if skills.len() < MIN_SKILL_COUNT {
        suggestions.push(MORE_SKILLS_MESSAGE.to_string());
    }

    suggestions.push(CLOSING_MESSAGE.to_string());
    suggestions
}

fn score_message(score: u32) -> &'static str {
    if score < LOW_SCORE_THRESHOLD {
        LOW_SCORE_MESSAGE
    } else if score < MID_SCORE_THRESHOLD {
        MID_SCORE_MESSAGE
    } else {
        HIGH_SCORE_MESSAGE
    }
}
