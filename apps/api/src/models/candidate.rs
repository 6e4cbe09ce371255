use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether one required skill was found in the candidate's extracted skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub skill: String,
    #[serde(rename = "match")]
    pub matched: bool,
}

/// A scored applicant. Created once per upload and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub resume_text: String,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    /// Years of experience.
    pub experience: u32,
    pub match_score: u32, // 0 – 100
    pub skill_matches: Vec<SkillMatch>, // one per required skill, requirement order
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendation: String,
}

/// Coarse colour band a results view uses for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong, // ≥ 80
    Good,   // 60 – 79
    Fair,   // 40 – 59
    Low,    // < 40
}

/// One row of the ranked results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub rank: usize, // 1-based
    pub candidate_id: Uuid,
    pub name: String,
    pub email: String,
    pub match_score: u32,
    pub match_label: String,
    pub score_band: ScoreBand,
    pub experience: u32,
    pub recommendation: String,
    pub selected: bool,
}
