use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Organisational departments an employee can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Product,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Operations,
}

impl Department {
    pub const ALL: [Department; 7] = [
        Department::Engineering,
        Department::Product,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Finance,
        Department::Operations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Product => "Product",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = String;

    /// Exact, case-sensitive match on the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown department '{s}'"))
    }
}

/// Readiness estimate for a suggested role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeToReady {
    #[serde(rename = "Ready now")]
    ReadyNow,
    #[serde(rename = "3-6 months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12 months")]
    SixToTwelveMonths,
    #[serde(rename = "1-2 years")]
    OneToTwoYears,
}

/// A possible next role for an employee.
///
/// `has_required_skills` is parallel to `required_skills` and
/// `match_score == round(100 * trues / required_skills.len())`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPathSuggestion {
    pub role: String,
    pub match_score: u32,
    pub required_skills: Vec<String>,
    pub has_required_skills: Vec<bool>,
    pub time_to_ready: TimeToReady,
}

impl CareerPathSuggestion {
    pub fn missing_skills(&self) -> Vec<&str> {
        self.required_skills
            .iter()
            .zip(&self.has_required_skills)
            .filter(|(_, has)| !**has)
            .map(|(skill, _)| skill.as_str())
            .collect()
    }
}

/// Career-development analysis of one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAnalysis {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub resume_text: String,
    pub current_role: String,
    pub department: Department,
    pub skills: Vec<String>,
    pub experience: u32,
    pub education: Vec<String>,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub career_path_suggestions: Vec<CareerPathSuggestion>, // highest score first
    pub training_recommendations: Vec<String>,
    pub performance_feedback: String,
}
