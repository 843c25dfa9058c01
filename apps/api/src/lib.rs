//! Resume analyser: extracts contact details, skills, education and experience
//! from resume text, scores ATS compatibility against an optional job
//! description and produces improvement suggestions.

pub mod analysis;
pub mod config;
pub mod decode;
pub mod errors;
pub mod routes;
pub mod state;

pub use analysis::analyse_resume;
pub use analysis::models::{AnalysisReport, ScoreBand, SkillSet, NOT_FOUND};
