//! Profile extraction: the pluggable seam between resume text and
//! the scorers.
//!
//! Default: `VocabularyExtractor`, which samples skills, education and
//! experience from a fixed vocabulary and ignores the text content. A real
//! resume parser implements the same trait; scorers and narrative generators
//! only ever see `ExtractedProfile`.
//!
//! `AppState` holds one `Arc<dyn ProfileExtractor>` per pipeline.

use crate::analysis::random::{random_int, sample_without_replacement, RandomSource};
use crate::analysis::vocabulary::Vocabulary;
use crate::errors::AppError;
use crate::models::profile::ExtractedProfile;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Derives a profile from resume text. Implement this to swap extraction
/// backends without touching scoring or narrative code.
pub trait ProfileExtractor: Send + Sync {
    fn extract(
        &self,
        resume_text: &str,
        rng: &mut dyn RandomSource,
    ) -> Result<ExtractedProfile, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// VocabularyExtractor: sampling stand-in
// ────────────────────────────────────────────────────────────────────────────

/// Samples a profile from a fixed vocabulary:
/// 1. skill count uniform in `skill_count`, skills drawn without replacement
/// 2. education count uniform in `education_count`, drawn without replacement
/// 3. experience uniform in `experience_years`
pub struct VocabularyExtractor {
    vocabulary: Vocabulary,
}

impl VocabularyExtractor {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }
}

impl ProfileExtractor for VocabularyExtractor {
    fn extract(
        &self,
        _resume_text: &str,
        rng: &mut dyn RandomSource,
    ) -> Result<ExtractedProfile, AppError> {
        let v = &self.vocabulary;
        if v.skills.is_empty()
            || v.skill_count.is_empty()
            || v.education_count.is_empty()
            || v.experience_years.is_empty()
        {
            return Err(AppError::Analysis(
                "extraction vocabulary has no skills or an empty range".to_string(),
            ));
        }

        let skill_count = random_int(rng, *v.skill_count.start(), *v.skill_count.end());
        let skills = sample_without_replacement(v.skills, skill_count as usize, rng)
            .into_iter()
            .map(str::to_string)
            .collect();

        let education_count =
            random_int(rng, *v.education_count.start(), *v.education_count.end());
        let education = sample_without_replacement(v.education, education_count as usize, rng)
            .into_iter()
            .map(str::to_string)
            .collect();

        let experience_years =
            random_int(rng, *v.experience_years.start(), *v.experience_years.end());

        Ok(ExtractedProfile {
            skills,
            education,
            experience_years,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
