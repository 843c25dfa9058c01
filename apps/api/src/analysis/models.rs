use std::collections::BTreeSet;

use serde::Serialize;

use crate::analysis::scoring::ScoreBreakdown;

/// Sentinel returned by every single-value extractor when nothing matches.
pub const NOT_FOUND: &str = "Not found";

/// Canonical skill labels detected in a resume.
///
/// Backed by a `BTreeSet`, so iteration is lexicographic and two extractions
/// of the same text always compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact, case-sensitive label lookup.
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SkillSet(iter.into_iter().map(Into::into).collect())
    }
}

/// Coarse verdict shown next to the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsWork
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent!",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsWork => "Needs Work",
        }
    }
}

/// Everything the presentation layer needs to render one analysed resume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: SkillSet,
    pub education: String,
    pub experience: Vec<String>,
    pub score: u32,
    pub score_band: ScoreBand,
    pub score_breakdown: ScoreBreakdown,
    pub suggestions: Vec<String>,
    pub job_matches: Vec<String>,
    /// Leading slice of the decoded text; `None` when no text could be decoded.
    pub text_preview: Option<String>,
}
