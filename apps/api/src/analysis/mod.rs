//! Resume analysis: field extraction, ATS scoring and improvement advice.
//! Everything below `handlers` is synchronous and free of shared state.

pub mod advisor;
pub mod extractors;
pub mod handlers;
pub mod job_matches;
pub mod models;
pub mod scoring;
pub mod text;
pub mod vocabulary;

use crate::analysis::models::{AnalysisReport, ScoreBand};
use crate::analysis::scoring::normalize_job_description;
use crate::analysis::vocabulary::KNOWN_SKILLS;

/// Runs the full pipeline over already-decoded resume text.
///
/// Pipeline:
/// 1. Extract name, email, phone, skills, education and experience
/// 2. Score the skills against the text and optional job description
/// 3. Derive suggestions from the score and the skill gap
/// 4. Attach sample job matches and a text preview
pub fn analyse_resume(
    text: &str,
    job_description: Option<&str>,
    preview_chars: usize,
) -> AnalysisReport {
    let job_description = normalize_job_description(job_description);

    let skills = extractors::extract_skills(text);
    let breakdown = scoring::score_breakdown(&skills, text, job_description);
    let suggestions = advisor::suggest(&skills, KNOWN_SKILLS, breakdown.total, job_description);
    let job_matches = job_matches::match_jobs(&skills);

    AnalysisReport {
        name: extractors::extract_name(text),
        email: extractors::extract_email(text),
        phone: extractors::extract_phone(text),
        education: extractors::extract_education(text),
        experience: extractors::extract_experience(text),
        score: breakdown.total,
        score_band: ScoreBand::from_score(breakdown.total),
        score_breakdown: breakdown,
        skills,
        suggestions,
        job_matches,
        text_preview: text::preview(text, preview_chars),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::advisor::{CLOSING_MESSAGE, LOW_SCORE_MESSAGE, TAILOR_MESSAGE};
    use crate::analysis::models::NOT_FOUND;

    const RESUME: &str = "\
Curriculum Vitae
Arjun Mehta
arjun.mehta@mail.com
Phone: 555-123-4567
Skills: Python, SQL, Docker, Git
Experience
Backend engineer, 4 years at Flipkart.
Education
M.Tech, IIT Bombay
Projects: payment gateway
";

    #[test]
    fn test_empty_text_degrades_to_sentinels() {
        let report = analyse_resume("", Some("Python developer"), 3000);
        assert_eq!(report.name, NOT_FOUND);
        assert_eq!(report.email, NOT_FOUND);
        assert_eq!(report.phone, NOT_FOUND);
        assert_eq!(report.education, NOT_FOUND);
        assert_eq!(report.experience, vec![NOT_FOUND]);
        assert!(report.skills.is_empty());
        assert_eq!(report.score, 0);
        assert_eq!(report.score_band, ScoreBand::NeedsWork);
        assert!(report.job_matches.is_empty());
        assert_eq!(report.text_preview, None);
        assert_eq!(report.suggestions.first().map(String::as_str), Some(LOW_SCORE_MESSAGE));
        assert_eq!(report.suggestions.get(1).map(String::as_str), Some(TAILOR_MESSAGE));
        assert_eq!(report.suggestions.last().map(String::as_str), Some(CLOSING_MESSAGE));
    }

    #[test]
    fn test_full_resume_fields() {
        let report = analyse_resume(RESUME, None, 3000);
        assert_eq!(report.name, "Arjun Mehta");
        assert_eq!(report.email, "arjun.mehta@mail.com");
        assert_eq!(report.phone, "555-123-4567");
        assert_eq!(report.education, "M.Tech, IIT Bombay");
        assert_eq!(report.experience, vec!["4 years"]);
        for skill in ["Python", "SQL", "Docker", "Git"] {
            assert!(report.skills.contains(skill), "missing {skill}");
        }
        assert!(report.job_matches.contains(&"Python Developer at Infosys".to_string()));
    }

    #[test]
    fn test_score_matches_breakdown_and_band() {
        let report = analyse_resume(RESUME, None, 3000);
        assert_eq!(report.score, report.score_breakdown.total);
        assert_eq!(report.score_band, ScoreBand::from_score(report.score));
        assert!(report.score <= 100);
    }

    #[test]
    fn test_job_description_changes_scoring_branch() {
        let without = analyse_resume(RESUME, None, 3000);
        let with = analyse_resume(RESUME, Some("Senior Python and SQL engineer"), 3000);
        assert_ne!(without.score_breakdown, with.score_breakdown);
        assert!(with.suggestions.contains(&TAILOR_MESSAGE.to_string()));
        assert!(!without.suggestions.contains(&TAILOR_MESSAGE.to_string()));
    }

    #[test]
    fn test_preview_respects_limit() {
        let report = analyse_resume(RESUME, None, 16);
        assert_eq!(report.text_preview.as_deref(), Some("Curriculum Vitae"));
    }

    #[test]
    fn test_repeated_analysis_is_identical() {
        let first = analyse_resume(RESUME, Some("Python"), 3000);
        let second = analyse_resume(RESUME, Some("Python"), 3000);
        assert_eq!(first, second);
    }
}
