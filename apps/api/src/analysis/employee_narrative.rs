//! Career-development narrative: strengths, growth areas, training and
//! performance feedback for one employee.
//!
//! Skill categories use exact membership, unlike the substring matching of
//! the scorers.

use crate::analysis::matching::{any_exact, exact_members};
use crate::analysis::random::{sample_phrases, RandomSource};
use crate::models::employee::CareerPathSuggestion;

const TECHNICAL_SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "SQL",
];
const LEADERSHIP_SKILLS: &[&str] = &[
    "Project Management",
    "Team Leadership",
    "Strategic Planning",
    "Agile",
    "Scrum",
];
const ANALYTICAL_SKILLS: &[&str] = &[
    "Data Analysis",
    "Problem Solving",
    "Business Analytics",
    "Machine Learning",
];
const COMMUNICATION_SKILLS: &[&str] = &["Communication", "Public Speaking", "Customer Relations"];

/// Languages and frameworks that earn the technical feedback sentence.
const FEEDBACK_TECHNICAL_SKILLS: &[&str] = &["JavaScript", "TypeScript", "React", "Python", "Java"];

const GENERIC_STRENGTHS: &[&str] = &[
    "Strong communicator who can explain complex concepts simply",
    "Detail-oriented with excellent follow-through",
    "Adaptable and willing to learn new technologies and methodologies",
    "Collaborative team player who works well across departments",
    "Innovative thinker who brings fresh ideas to projects",
];

const GENERIC_IMPROVEMENTS: &[&str] = &[
    "Could benefit from deeper industry-specific knowledge",
    "Further development of strategic thinking would enhance leadership potential",
    "Expanding network within the organization would create more opportunities",
    "Additional certifications would strengthen expertise in key areas",
    "More experience with data-driven decision making would be beneficial",
    "Could improve work-life balance management for sustained performance",
];

const GENERAL_TRAINING: &[&str] = &[
    "Consider completing the internal leadership development program",
    "Enroll in advanced technical training for your current tech stack",
    "Participate in cross-functional projects to broaden experience",
    "Pursue relevant industry certifications to validate expertise",
    "Join a mentorship program to accelerate professional growth",
    "Attend industry conferences to expand knowledge and network",
    "Take public speaking workshops to enhance presentation skills",
    "Complete project management training to improve organizational skills",
];

/// Indexed by `floor(score * 5)`; the lowest scores land on index 0.
const PERFORMANCE_LEVELS: [&str; 5] = [
    "Consistently exceeds expectations with outstanding contributions to the team.",
    "Performs above expectations and delivers high-quality work consistently.",
    "Meets all performance expectations and is a reliable team member.",
    "Meeting most expectations but has specific areas for growth.",
    "Working to develop skills and meet performance expectations.",
];

const GENERIC_STRENGTH_COUNT: usize = 2;
const GENERIC_IMPROVEMENT_COUNT: usize = 2;
const GENERAL_TRAINING_COUNT: usize = 3;

pub fn build_strengths(skills: &[String], rng: &mut dyn RandomSource) -> Vec<String> {
    let mut strengths = Vec::new();

    let technical = exact_members(skills, TECHNICAL_SKILLS);
    if !technical.is_empty() {
        strengths.push(format!(
            "Strong technical capabilities, particularly in {}",
            technical.join(", ")
        ));
    }

    let leadership = exact_members(skills, LEADERSHIP_SKILLS);
    if !leadership.is_empty() {
        strengths.push(format!(
            "Excellent leadership abilities, with experience in {}",
            leadership.join(", ")
        ));
    }

    if any_exact(skills, ANALYTICAL_SKILLS) {
        strengths.push("Exceptional analytical thinking and problem-solving skills".to_string());
    }

    strengths.extend(sample_phrases(GENERIC_STRENGTHS, GENERIC_STRENGTH_COUNT, rng));
    strengths
}

pub fn build_areas_for_improvement(skills: &[String], rng: &mut dyn RandomSource) -> Vec<String> {
    let mut areas = Vec::new();

    if !any_exact(skills, TECHNICAL_SKILLS) {
        areas.push(
            "Technical skills could be enhanced, particularly in modern programming languages and frameworks"
                .to_string(),
        );
    }
    if !any_exact(skills, LEADERSHIP_SKILLS) {
        areas.push(
            "Leadership and project management experience would benefit career advancement"
                .to_string(),
        );
    }
    if !any_exact(skills, COMMUNICATION_SKILLS) {
        areas.push(
            "Communication skills could be further developed for more effective team collaboration"
                .to_string(),
        );
    }

    areas.extend(sample_phrases(GENERIC_IMPROVEMENTS, GENERIC_IMPROVEMENT_COUNT, rng));
    areas
}

/// Training aimed at the top-ranked career path, then general suggestions.
/// `career_paths` must already be sorted best first.
pub fn build_training_recommendations(
    career_paths: &[CareerPathSuggestion],
    rng: &mut dyn RandomSource,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if let Some(top) = career_paths.first() {
        let missing = top.missing_skills();
        if !missing.is_empty() {
            recommendations.push(format!(
                "Training in {} would prepare you for a {} role",
                missing.join(", "),
                top.role
            ));
        }
    }

    recommendations.extend(sample_phrases(GENERAL_TRAINING, GENERAL_TRAINING_COUNT, rng));
    recommendations
}

/// Blend of skill breadth (70%) and tenure (30%), in `[0, 1]`.
pub fn performance_score(skill_count: usize, experience_years: u32) -> f64 {
    let skill_score = (skill_count as f64 / 20.0).min(1.0);
    let experience_score = experience_years.min(10) as f64 / 10.0;
    skill_score * 0.7 + experience_score * 0.3
}

pub fn build_performance_feedback(skills: &[String], experience_years: u32) -> String {
    let score = performance_score(skills.len(), experience_years);
    let index = ((score * 5.0).floor() as usize).min(PERFORMANCE_LEVELS.len() - 1);

    let mut feedback = PERFORMANCE_LEVELS[index].to_string();

    let has = |name: &str| skills.iter().any(|s| s == name);

    if has("Team Leadership") || has("Project Management") {
        feedback.push_str(" Demonstrates strong leadership qualities and effectively manages projects.");
    }
    if has("Communication") {
        feedback.push_str(" Communicates clearly and effectively with team members and stakeholders.");
    }
    if any_exact(skills, FEEDBACK_TECHNICAL_SKILLS) {
        feedback.push_str(
            " Technical expertise is a notable strength that adds significant value to the team.",
        );
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::career_paths::compute_career_paths;
    use crate::analysis::random::{FixedSequence, StdRandom};

    fn s(items: &[&str]) -> Vec<String> {
        items.iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_strengths_per_category_then_two_generic() {
        let skills = s(&["SQL", "Scrum", "React", "Data Analysis"]);
        let strengths = build_strengths(&skills, &mut FixedSequence::zeros());
        assert_eq!(
            strengths,
            vec![
                "Strong technical capabilities, particularly in SQL, React",
                "Excellent leadership abilities, with experience in Scrum",
                "Exceptional analytical thinking and problem-solving skills",
                "Strong communicator who can explain complex concepts simply",
                "Detail-oriented with excellent follow-through",
            ]
        );
    }

    #[test]
    fn test_category_membership_is_exact() {
        // "React.js" is not in the technical category
        let strengths = build_strengths(&s(&["React.js"]), &mut FixedSequence::zeros());
        assert_eq!(strengths.len(), 2);
    }

    #[test]
    fn test_areas_for_empty_categories() {
        let areas = build_areas_for_improvement(&s(&["Python"]), &mut StdRandom::seeded(3));
        assert_eq!(areas.len(), 4);
        assert!(areas[0].starts_with("Leadership and project management"));
        assert!(areas[1].starts_with("Communication skills"));
        assert!(GENERIC_IMPROVEMENTS.contains(&areas[2].as_str()));
        assert_ne!(areas[2], areas[3]);
    }

    #[test]
    fn test_full_coverage_only_generic_areas() {
        let skills = s(&["Java", "Agile", "Public Speaking"]);
        let areas = build_areas_for_improvement(&skills, &mut StdRandom::seeded(3));
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn test_training_targets_top_path_gaps() {
        let paths = compute_career_paths("Engineering", &s(&["DevOps", "Python"]), 5);
        assert_eq!(paths[0].role, "DevOps Engineer");
        let training = build_training_recommendations(&paths, &mut FixedSequence::zeros());
        assert_eq!(training.len(), 4);
        assert_eq!(
            training[0],
            "Training in Cloud Computing would prepare you for a DevOps Engineer role"
        );
        assert_eq!(training[1], GENERAL_TRAINING[0]);
    }

    #[test]
    fn test_training_without_gaps_is_only_general() {
        let paths = compute_career_paths(
            "Engineering",
            &s(&["JavaScript", "TypeScript", "React"]),
            5,
        );
        let training = build_training_recommendations(&paths, &mut StdRandom::seeded(9));
        assert_eq!(training.len(), 3);
        assert!(training.iter().all(|t| GENERAL_TRAINING.contains(&t.as_str())));
    }

    #[test]
    fn test_performance_score_weights() {
        assert!((performance_score(20, 10) - 1.0).abs() < 1e-9);
        assert!((performance_score(40, 30) - 1.0).abs() < 1e-9);
        assert_eq!(performance_score(0, 0), 0.0);
        assert!((performance_score(10, 5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_feedback_base_levels() {
        // 0.7 * 6/20 + 0.3 * 0.1 = 0.24 → index 1
        let feedback = build_performance_feedback(&s(&["a", "b", "c", "d", "e", "f"]), 1);
        assert_eq!(feedback, PERFORMANCE_LEVELS[1]);

        // full score clamps to the last level
        let many: Vec<String> = (0..20).map(|i| format!("skill{i}")).collect();
        assert_eq!(build_performance_feedback(&many, 10), PERFORMANCE_LEVELS[4]);

        assert_eq!(build_performance_feedback(&[], 0), PERFORMANCE_LEVELS[0]);
    }

    #[test]
    fn test_feedback_appends_skill_sentences() {
        let feedback =
            build_performance_feedback(&s(&["Project Management", "Communication", "Java"]), 1);
        assert!(feedback.contains("Demonstrates strong leadership qualities"));
        assert!(feedback.contains("Communicates clearly"));
        assert!(feedback.contains("Technical expertise is a notable strength"));

        let plain = build_performance_feedback(&s(&["SQL"]), 1);
        assert!(!plain.contains("Technical expertise"));
    }
}
