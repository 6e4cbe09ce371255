//! Career-path scoring for the employee pipeline.
//!
//! Algorithm:
//! 1. Look up the department's role catalog (unknown → Engineering)
//! 2. Per role: substring-match each required skill, score = round(100 × hits / len)
//! 3. Readiness from score: ≥80 ready now, ≥60 3-6 months, ≥40 6-12 months, else 1-2 years
//! 4. Less than 3 years of experience caps readiness at 6-12 months
//! 5. Stable sort by score, highest first

use crate::analysis::matching::contains_ci;
use crate::models::employee::{CareerPathSuggestion, Department, TimeToReady};

/// Minimum tenure before anyone is considered ready now.
pub const MIN_YEARS_FOR_READY_NOW: u32 = 3;

/// A role and the skills it requires.
#[derive(Debug, Clone, Copy)]
pub struct CatalogRole {
    pub role: &'static str,
    pub required_skills: &'static [&'static str],
}

const fn role(role: &'static str, required_skills: &'static [&'static str]) -> CatalogRole {
    CatalogRole {
        role,
        required_skills,
    }
}

const ENGINEERING: &[CatalogRole] = &[
    role("Senior Developer", &["JavaScript", "TypeScript", "React"]),
    role(
        "Engineering Manager",
        &["Team Leadership", "Project Management", "Communication"],
    ),
    role("DevOps Engineer", &["DevOps", "Cloud Computing", "Python"]),
    role(
        "Solution Architect",
        &["System Design", "Cloud Computing", "Problem Solving"],
    ),
];

const PRODUCT: &[CatalogRole] = &[
    role(
        "Senior Product Manager",
        &["Product Management", "Strategic Planning", "Communication"],
    ),
    role(
        "Director of Product",
        &["Team Leadership", "Strategic Planning", "Budget Management"],
    ),
    role(
        "UX/UI Designer",
        &["UX/UI Design", "Communication", "Problem Solving"],
    ),
];

const MARKETING: &[CatalogRole] = &[
    role(
        "Marketing Manager",
        &["Strategic Planning", "Communication", "Budget Management"],
    ),
    role(
        "Content Strategist",
        &["Content Creation", "Strategic Planning", "Communication"],
    ),
    role(
        "Digital Marketing Specialist",
        &["Data Analysis", "Social Media", "Content Creation"],
    ),
];

const SALES: &[CatalogRole] = &[
    role(
        "Account Executive",
        &["Customer Relations", "Communication", "Strategic Planning"],
    ),
    role(
        "Sales Manager",
        &["Team Leadership", "Budget Management", "Strategic Planning"],
    ),
    role(
        "Customer Success Manager",
        &["Customer Relations", "Problem Solving", "Communication"],
    ),
];

const HR: &[CatalogRole] = &[
    role(
        "HR Manager",
        &["Team Leadership", "Communication", "Budget Management"],
    ),
    role(
        "Talent Acquisition Specialist",
        &["Recruitment", "Communication", "Strategic Planning"],
    ),
    role(
        "Learning & Development Specialist",
        &["Training", "Communication", "Strategic Planning"],
    ),
];

/// Role catalog for a department name. Names without a catalog of their own
/// (including Finance and Operations) get the Engineering catalog.
pub fn catalog_for(department: &str) -> &'static [CatalogRole] {
    match department.parse::<Department>() {
        Ok(Department::Engineering) => ENGINEERING,
        Ok(Department::Product) => PRODUCT,
        Ok(Department::Marketing) => MARKETING,
        Ok(Department::Sales) => SALES,
        Ok(Department::Hr) => HR,
        Ok(Department::Finance) | Ok(Department::Operations) | Err(_) => ENGINEERING,
    }
}

pub fn compute_career_paths(
    department: &str,
    skills: &[String],
    experience_years: u32,
) -> Vec<CareerPathSuggestion> {
    score_catalog(catalog_for(department), skills, experience_years)
}

/// Scores every role in `catalog` and orders them by score. Ties keep catalog order.
pub fn score_catalog(
    catalog: &[CatalogRole],
    skills: &[String],
    experience_years: u32,
) -> Vec<CareerPathSuggestion> {
    let mut paths: Vec<CareerPathSuggestion> = catalog
        .iter()
        .map(|entry| {
            let has_required_skills: Vec<bool> = entry
                .required_skills
                .iter()
                .map(|skill| contains_ci(skills, skill))
                .collect();
            let hits = has_required_skills.iter().filter(|h| **h).count();
            let match_score = percentage(hits, has_required_skills.len());

            CareerPathSuggestion {
                role: entry.role.to_string(),
                match_score,
                required_skills: entry.required_skills.iter().map(|s| s.to_string()).collect(),
                has_required_skills,
                time_to_ready: time_to_ready(match_score, experience_years),
            }
        })
        .collect();

    // sort_by is stable
    paths.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    paths
}

pub fn time_to_ready(match_score: u32, experience_years: u32) -> TimeToReady {
    let estimate = match match_score {
        80.. => TimeToReady::ReadyNow,
        60..=79 => TimeToReady::ThreeToSixMonths,
        40..=59 => TimeToReady::SixToTwelveMonths,
        _ => TimeToReady::OneToTwoYears,
    };

    if estimate == TimeToReady::ReadyNow && experience_years < MIN_YEARS_FOR_READY_NOW {
        TimeToReady::SixToTwelveMonths
    } else {
        estimate
    }
}

fn percentage(hits: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * hits as f64 / total as f64).round() as u32
}
