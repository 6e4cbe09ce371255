//! Human-readable feedback for a scored candidate.

use crate::analysis::matching::{contains_ci, matched, missing};
use crate::analysis::random::{random_int, sample_phrases, RandomSource};
use crate::models::candidate::{ScoreBand, SkillMatch};
use crate::models::job::JobRequirement;

const GENERIC_STRENGTHS: &[&str] = &[
    "Excellent communication skills",
    "Strong problem-solving abilities",
    "Team leadership experience",
    "Project management expertise",
    "Exceptional attention to detail",
];

const GENERIC_WEAKNESSES: &[&str] = &[
    "Limited leadership experience",
    "Needs improvement in communication",
    "Lacks experience with enterprise systems",
    "May need additional training",
    "Has gaps in technical knowledge",
];

/// Narrative fields of a `Candidate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateNarrative {
    pub skill_matches: Vec<SkillMatch>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendation: String,
}

pub fn build_candidate_narrative(
    skills: &[String],
    requirement: &JobRequirement,
    match_score: u32,
    rng: &mut dyn RandomSource,
) -> CandidateNarrative {
    CandidateNarrative {
        skill_matches: build_skill_matches(skills, requirement),
        strengths: build_strengths(skills, requirement, rng),
        weaknesses: build_weaknesses(skills, requirement, rng),
        recommendation: recommendation_for(match_score).to_string(),
    }
}

/// One entry per required skill, in requirement order.
pub fn build_skill_matches(skills: &[String], requirement: &JobRequirement) -> Vec<SkillMatch> {
    requirement
        .required_skills
        .iter()
        .map(|skill| SkillMatch {
            skill: skill.clone(),
            matched: contains_ci(skills, skill),
        })
        .collect()
}

fn build_strengths(
    skills: &[String],
    requirement: &JobRequirement,
    rng: &mut dyn RandomSource,
) -> Vec<String> {
    let mut strengths = Vec::new();

    let required = matched(skills, &requirement.required_skills);
    if !required.is_empty() {
        strengths.push(format!("Strong match in key skills: {}", required.join(", ")));
    }

    let preferred = matched(skills, &requirement.preferred_skills);
    if !preferred.is_empty() {
        strengths.push(format!("Has preferred skills: {}", preferred.join(", ")));
    }

    let extra = random_int(rng, 1, 2) as usize;
    strengths.extend(sample_phrases(GENERIC_STRENGTHS, extra, rng));
    strengths
}

fn build_weaknesses(
    skills: &[String],
    requirement: &JobRequirement,
    rng: &mut dyn RandomSource,
) -> Vec<String> {
    let mut weaknesses = Vec::new();

    let gaps = missing(skills, &requirement.required_skills);
    if !gaps.is_empty() {
        weaknesses.push(format!("Missing required skills: {}", gaps.join(", ")));
    }

    let extra = random_int(rng, 0, 2) as usize;
    weaknesses.extend(sample_phrases(GENERIC_WEAKNESSES, extra, rng));
    weaknesses
}

/// Hiring recommendation. Depends on the score only.
pub fn recommendation_for(match_score: u32) -> &'static str {
    match match_score {
        90.. => "Strong recommend - Excellent candidate who exceeds requirements",
        75..=89 => "Recommend - Good candidate with strong qualifications",
        60..=74 => "Consider - Decent candidate with most qualifications",
        40..=59 => {
            "Interview with reservations - Has some relevant qualifications but missing key requirements"
        }
        _ => "Not recommended - Does not meet minimum requirements",
    }
}

/// Short label shown next to a score.
pub fn match_label(match_score: u32) -> &'static str {
    match match_score {
        90.. => "Strong Match",
        75..=89 => "Good Match",
        60..=74 => "Potential Match",
        40..=59 => "Weak Match",
        _ => "Not a Match",
    }
}

pub fn score_band(match_score: u32) -> ScoreBand {
    match match_score {
        80.. => ScoreBand::Strong,
        60..=79 => ScoreBand::Good,
        40..=59 => ScoreBand::Fair,
        _ => ScoreBand::Low,
    }
}
