//! Fixed vocabularies the sampling extractor draws from.

use std::ops::RangeInclusive;

/// What a `VocabularyExtractor` samples from and how much it takes.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub skills: &'static [&'static str],
    pub skill_count: RangeInclusive<u32>,
    pub education: &'static [&'static str],
    pub education_count: RangeInclusive<u32>,
    pub experience_years: RangeInclusive<u32>,
}

pub const CANDIDATE_SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "SQL",
    "NoSQL",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "Agile",
    "Scrum",
    "Project Management",
    "Team Leadership",
    "Communication",
    "Problem Solving",
    "Data Analysis",
    "Machine Learning",
    "AI",
    "Big Data",
    "DevOps",
    "UX/UI Design",
];

pub const CANDIDATE_EDUCATION: &[&str] = &[
    "Bachelor's in Computer Science",
    "Master's in Computer Science",
    "Bachelor's in Information Technology",
    "Master's in Information Technology",
    "Bachelor's in Business Administration",
    "MBA",
    "Ph.D. in Computer Science",
    "Associate's in Web Development",
];

pub const EMPLOYEE_SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "SQL",
    "Project Management",
    "Team Leadership",
    "Communication",
    "Problem Solving",
    "Data Analysis",
    "Machine Learning",
    "UX/UI Design",
    "Agile",
    "Scrum",
    "Business Analytics",
    "DevOps",
    "Cloud Computing",
    "Public Speaking",
    "Customer Relations",
    "Strategic Planning",
    "Budget Management",
];

pub const EMPLOYEE_EDUCATION: &[&str] = &[
    "Bachelor's in Computer Science",
    "Master's in Computer Science",
    "Bachelor's in Business Administration",
    "MBA",
    "Bachelor's in Information Technology",
    "Master's in Information Technology",
    "Ph.D. in Computer Science",
    "Bachelor's in Psychology",
    "Master's in Organizational Psychology",
];

pub fn candidate_vocabulary() -> Vocabulary {
    Vocabulary {
        skills: CANDIDATE_SKILLS,
        skill_count: 5..=10,
        education: CANDIDATE_EDUCATION,
        education_count: 1..=2,
        experience_years: 1..=15,
    }
}

pub fn employee_vocabulary() -> Vocabulary {
    Vocabulary {
        skills: EMPLOYEE_SKILLS,
        skill_count: 6..=12,
        education: EMPLOYEE_EDUCATION,
        education_count: 1..=2,
        experience_years: 1..=15,
    }
}
