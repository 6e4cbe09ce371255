//! End-to-end analysis pipelines: extract → score → narrate.
//!
//! Both functions are synchronous and side-effect free apart from the draws
//! they take from `rng` and `ids`. Latency simulation, session bookkeeping and
//! notices live in the handlers.

use serde::Deserialize;

use crate::analysis::candidate_narrative::build_candidate_narrative;
use crate::analysis::career_paths::compute_career_paths;
use crate::analysis::demo::{random_employee_email, random_employee_name};
use crate::analysis::employee_narrative::{
    build_areas_for_improvement, build_performance_feedback, build_strengths,
    build_training_recommendations,
};
use crate::analysis::extractor::ProfileExtractor;
use crate::analysis::ids::IdGenerator;
use crate::analysis::match_scoring::{compute_match_score, EmptyRequirementCredit};
use crate::analysis::random::RandomSource;
use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::models::employee::{Department, EmployeeAnalysis};
use crate::models::job::JobRequirement;

/// Applicant details submitted alongside a resume.
#[derive(Debug, Clone, Deserialize)]
pub struct Applicant {
    pub name: String,
    pub email: String,
    pub resume_text: String,
}

/// An employee resume submitted for career analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeSubmission {
    pub resume_text: String,
    pub current_role: String,
    pub department: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Applicant {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_blank("name", &self.name)?;
        require_non_blank("email", &self.email)?;
        require_non_blank("resume_text", &self.resume_text)
    }
}

impl EmployeeSubmission {
    /// Checks required fields and resolves the department.
    pub fn validate(&self) -> Result<Department, AppError> {
        require_non_blank("resume_text", &self.resume_text)?;
        require_non_blank("current_role", &self.current_role)?;
        require_non_blank("department", &self.department)?;
        self.department.trim().parse().map_err(AppError::Validation)
    }
}

pub fn analyze_candidate(
    extractor: &dyn ProfileExtractor,
    rng: &mut dyn RandomSource,
    ids: &dyn IdGenerator,
    applicant: Applicant,
    requirement: &JobRequirement,
    credit: EmptyRequirementCredit,
) -> Result<Candidate, AppError> {
    applicant.validate()?;

    let profile = extractor.extract(&applicant.resume_text, rng)?;
    let match_score = compute_match_score(&profile, requirement, credit);
    let narrative = build_candidate_narrative(&profile.skills, requirement, match_score, rng);

    Ok(Candidate {
        id: ids.next_id(),
        name: applicant.name.trim().to_string(),
        email: applicant.email.trim().to_string(),
        resume_text: applicant.resume_text,
        skills: profile.skills,
        education: profile.education,
        experience: profile.experience_years,
        match_score,
        skill_matches: narrative.skill_matches,
        strengths: narrative.strengths,
        weaknesses: narrative.weaknesses,
        recommendation: narrative.recommendation,
    })
}

pub fn analyze_employee(
    extractor: &dyn ProfileExtractor,
    rng: &mut dyn RandomSource,
    ids: &dyn IdGenerator,
    submission: EmployeeSubmission,
) -> Result<EmployeeAnalysis, AppError> {
    let department = submission.validate()?;

    let profile = extractor.extract(&submission.resume_text, rng)?;

    let name = match non_blank(submission.name) {
        Some(name) => name,
        None => random_employee_name(rng),
    };
    let email = match non_blank(submission.email) {
        Some(email) => email,
        None => random_employee_email(&name, rng),
    };

    let strengths = build_strengths(&profile.skills, rng);
    let areas_for_improvement = build_areas_for_improvement(&profile.skills, rng);
    let career_path_suggestions =
        compute_career_paths(department.as_str(), &profile.skills, profile.experience_years);
    let training_recommendations = build_training_recommendations(&career_path_suggestions, rng);
    let performance_feedback =
        build_performance_feedback(&profile.skills, profile.experience_years);

    Ok(EmployeeAnalysis {
        id: ids.next_id(),
        name,
        email,
        resume_text: submission.resume_text,
        current_role: submission.current_role.trim().to_string(),
        department,
        skills: profile.skills,
        experience: profile.experience_years,
        education: profile.education,
        strengths,
        areas_for_improvement,
        career_path_suggestions,
        training_recommendations,
        performance_feedback,
    })
}

fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::VocabularyExtractor;
    use crate::analysis::ids::SequentialIds;
    use crate::analysis::random::{FixedSequence, StdRandom};
    use crate::analysis::vocabulary::{candidate_vocabulary, employee_vocabulary};
    use crate::models::employee::TimeToReady;
    use crate::models::profile::ExtractedProfile;
    use uuid::Uuid;

    fn applicant(name: &str) -> Applicant {
        Applicant {
            name: name.to_string(),
            email: "ada@example.com".to_string(),
            resume_text: "Ten years of frontend work".to_string(),
        }
    }

    fn submission(department: &str) -> EmployeeSubmission {
        EmployeeSubmission {
            resume_text: "Platform engineer".to_string(),
            current_role: "Software Engineer".to_string(),
            department: department.to_string(),
            name: None,
            email: None,
        }
    }

    /// Extractor returning a fixed profile, to test the pipeline in isolation.
    struct StaticExtractor(ExtractedProfile);

    impl ProfileExtractor for StaticExtractor {
        fn extract(
            &self,
            _resume_text: &str,
            _rng: &mut dyn RandomSource,
        ) -> Result<ExtractedProfile, AppError> {
            Ok(self.0.clone())
        }
    }

    struct FailingExtractor;

    impl ProfileExtractor for FailingExtractor {
        fn extract(
            &self,
            _resume_text: &str,
            _rng: &mut dyn RandomSource,
        ) -> Result<ExtractedProfile, AppError> {
            Err(AppError::Analysis("parser unavailable".into()))
        }
    }

    #[test]
    fn test_candidate_pipeline_with_zero_source() {
        let extractor = VocabularyExtractor::new(candidate_vocabulary());
        let ids = SequentialIds::default();
        let candidate = analyze_candidate(
            &extractor,
            &mut FixedSequence::zeros(),
            &ids,
            applicant("Ada Lovelace"),
            &JobRequirement::default(),
            EmptyRequirementCredit::Full,
        )
        .unwrap();

        // skills: JavaScript, TypeScript, React, Node.js, Python; 1 year; BSc CS
        // 50 + 20 * 1/2 + 15 * 1/3 + 15 = 80
        assert_eq!(candidate.id, Uuid::from_u128(1));
        assert_eq!(candidate.match_score, 80);
        assert!(candidate.skill_matches.iter().all(|m| m.matched));
        assert_eq!(
            candidate.recommendation,
            "Recommend - Good candidate with strong qualifications"
        );
        assert_eq!(
            candidate.strengths[0],
            "Strong match in key skills: JavaScript, React, TypeScript"
        );
        assert_eq!(candidate.strengths[1], "Has preferred skills: Node.js");
        assert!(candidate.weaknesses.is_empty());
    }

    #[test]
    fn test_candidate_pipeline_is_reproducible() {
        let extractor = VocabularyExtractor::new(candidate_vocabulary());
        let run = || {
            analyze_candidate(
                &extractor,
                &mut StdRandom::seeded(2024),
                &SequentialIds::default(),
                applicant("Grace Hopper"),
                &JobRequirement::default(),
                EmptyRequirementCredit::Full,
            )
            .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_candidate_requires_name_email_and_text() {
        let extractor = VocabularyExtractor::new(candidate_vocabulary());
        let ids = SequentialIds::default();
        let mut blank = applicant(" ");
        let err = analyze_candidate(
            &extractor,
            &mut FixedSequence::zeros(),
            &ids,
            blank.clone(),
            &JobRequirement::default(),
            EmptyRequirementCredit::Full,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("name")));

        blank.name = "Ada".into();
        blank.resume_text = "\n".into();
        let err = analyze_candidate(
            &extractor,
            &mut FixedSequence::zeros(),
            &ids,
            blank,
            &JobRequirement::default(),
            EmptyRequirementCredit::Full,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("resume_text")));
    }

    #[test]
    fn test_extractor_failure_propagates() {
        let err = analyze_candidate(
            &FailingExtractor,
            &mut FixedSequence::zeros(),
            &SequentialIds::default(),
            applicant("Ada"),
            &JobRequirement::default(),
            EmptyRequirementCredit::Full,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Analysis(_)));
    }

    #[test]
    fn test_react_js_profile_against_minimal_job() {
        let extractor = StaticExtractor(ExtractedProfile {
            skills: vec!["React.js".into()],
            education: vec![],
            experience_years: 0,
        });
        let job = JobRequirement {
            title: "Frontend".into(),
            description: String::new(),
            required_skills: vec!["React".into()],
            preferred_skills: vec![],
            required_years_experience: 0,
            required_education: vec![],
        };
        let candidate = analyze_candidate(
            &extractor,
            &mut FixedSequence::zeros(),
            &SequentialIds::default(),
            applicant("Ada"),
            &job,
            EmptyRequirementCredit::Full,
        )
        .unwrap();
        assert_eq!(candidate.skill_matches.len(), 1);
        assert!(candidate.skill_matches[0].matched);
        assert_eq!(candidate.match_score, 85);
    }

    #[test]
    fn test_employee_pipeline_with_static_profile() {
        let extractor = StaticExtractor(ExtractedProfile {
            skills: vec!["DevOps".into(), "Python".into(), "Communication".into()],
            education: vec!["MBA".into()],
            experience_years: 2,
        });
        let analysis = analyze_employee(
            &extractor,
            &mut FixedSequence::zeros(),
            &SequentialIds::default(),
            submission("Engineering"),
        )
        .unwrap();

        assert_eq!(analysis.name, "Alex Johnson");
        assert_eq!(analysis.email, "alex.johnson@company.com");
        assert_eq!(analysis.department, Department::Engineering);
        assert_eq!(analysis.career_path_suggestions[0].role, "DevOps Engineer");
        assert_eq!(analysis.career_path_suggestions[0].match_score, 67);
        assert_eq!(
            analysis.training_recommendations[0],
            "Training in Cloud Computing would prepare you for a DevOps Engineer role"
        );
        assert!(analysis
            .career_path_suggestions
            .iter()
            .all(|p| p.time_to_ready != TimeToReady::ReadyNow));
        assert!(analysis
            .performance_feedback
            .contains("Communicates clearly"));
    }

    #[test]
    fn test_employee_keeps_supplied_identity() {
        let extractor = VocabularyExtractor::new(employee_vocabulary());
        let mut sub = submission("Sales");
        sub.name = Some(" Dana Scully ".into());
        sub.email = Some("dana@fbi.gov".into());
        let analysis = analyze_employee(
            &extractor,
            &mut StdRandom::seeded(6),
            &SequentialIds::default(),
            sub,
        )
        .unwrap();
        assert_eq!(analysis.name, "Dana Scully");
        assert_eq!(analysis.email, "dana@fbi.gov");
        assert_eq!(analysis.career_path_suggestions.len(), 3);
    }

    #[test]
    fn test_employee_rejects_unknown_department() {
        let extractor = VocabularyExtractor::new(employee_vocabulary());
        let err = analyze_employee(
            &extractor,
            &mut FixedSequence::zeros(),
            &SequentialIds::default(),
            submission("Legal"),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("Legal")));
    }

    #[test]
    fn test_employee_pipeline_is_reproducible() {
        let extractor = VocabularyExtractor::new(employee_vocabulary());
        let run = || {
            analyze_employee(
                &extractor,
                &mut StdRandom::seeded(77),
                &SequentialIds::default(),
                submission("Product"),
            )
            .unwrap()
        };
        assert_eq!(run(), run());
    }
}
