use crate::analysis::models::SkillSet;
use crate::analysis::vocabulary::JOB_DATABASE;

const MAX_JOB_MATCHES: usize = 6;

/// Sample openings for the detected skills, in skill order, without repeats.
pub fn match_jobs(skills: &SkillSet) -> Vec<String> {
    let mut matches: Vec<String> = Vec::new();

    for skill in skills.iter() {
        let Some((_, jobs)) = JOB_DATABASE.iter().find(|(key, _)| *key == skill) else {
            continue;
        };
        for job in jobs.iter() {
            if !matches.iter().any(|m| m == job) {
                matches.push(job.to_string());
            }
        }
    }

    matches.truncate(MAX_JOB_MATCHES);
    matches
}
