//! Candidate-vs-job match score.
//!
//! Weighted linear sum, weights total 100:
//!   required skills  50 × matched / total
//!   preferred skills 20 × matched / total
//!   experience       15 × min(years / required_years, 1)
//!   education        15 if any extracted item contains any required item
//!
//! Empty required/preferred lists and a zero years requirement would divide
//! by zero; `EmptyRequirementCredit` decides what those components award.

use serde::{Deserialize, Serialize};

use crate::analysis::matching::{contains_ci, matched};
use crate::models::job::JobRequirement;
use crate::models::profile::ExtractedProfile;

pub const REQUIRED_SKILLS_WEIGHT: f64 = 50.0;
pub const PREFERRED_SKILLS_WEIGHT: f64 = 20.0;
pub const EXPERIENCE_WEIGHT: f64 = 15.0;
pub const EDUCATION_WEIGHT: f64 = 15.0;

/// Credit awarded by a component whose requirement is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyRequirementCredit {
    /// Nothing required means the requirement is met.
    #[default]
    Full,
    /// Nothing required contributes nothing.
    None,
}

/// Per-component contributions before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchBreakdown {
    pub required_skills: f64,
    pub preferred_skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl MatchBreakdown {
    pub fn total(&self) -> u32 {
        let sum = self.required_skills + self.preferred_skills + self.experience + self.education;
        sum.round().clamp(0.0, 100.0) as u32
    }
}

pub fn compute_breakdown(
    profile: &ExtractedProfile,
    requirement: &JobRequirement,
    credit: EmptyRequirementCredit,
) -> MatchBreakdown {
    let required_skills = ratio_component(
        matched(&profile.skills, &requirement.required_skills).len(),
        requirement.required_skills.len(),
        REQUIRED_SKILLS_WEIGHT,
        credit,
    );

    let preferred_skills = ratio_component(
        matched(&profile.skills, &requirement.preferred_skills).len(),
        requirement.preferred_skills.len(),
        PREFERRED_SKILLS_WEIGHT,
        credit,
    );

    let experience = if requirement.required_years_experience == 0 {
        empty_credit(EXPERIENCE_WEIGHT, credit)
    } else {
        let ratio =
            profile.experience_years as f64 / requirement.required_years_experience as f64;
        ratio.min(1.0) * EXPERIENCE_WEIGHT
    };

    let has_education = requirement
        .required_education
        .iter()
        .any(|req| contains_ci(&profile.education, req));
    let education = if has_education { EDUCATION_WEIGHT } else { 0.0 };

    MatchBreakdown {
        required_skills,
        preferred_skills,
        experience,
        education,
    }
}

/// Overall 0–100 match score of a profile against a job requirement.
pub fn compute_match_score(
    profile: &ExtractedProfile,
    requirement: &JobRequirement,
    credit: EmptyRequirementCredit,
) -> u32 {
    compute_breakdown(profile, requirement, credit).total()
}

fn ratio_component(hits: usize, total: usize, weight: f64, credit: EmptyRequirementCredit) -> f64 {
    if total == 0 {
        return empty_credit(weight, credit);
    }
    hits as f64 / total as f64 * weight
}

fn empty_credit(weight: f64, credit: EmptyRequirementCredit) -> f64 {
    match credit {
        EmptyRequirementCredit::Full => weight,
        EmptyRequirementCredit::None => 0.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
