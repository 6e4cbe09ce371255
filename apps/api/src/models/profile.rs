use serde::{Deserialize, Serialize};

/// Attributes derived from a single resume. Produced once per analysis and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    /// Distinct skill names, in the order the extractor produced them.
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience_years: u32,
}
