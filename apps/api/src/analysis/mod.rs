//! Resume analysis: mock profile extraction, job-match scoring and the
//! narrative generators for candidates and employees.

pub mod candidate_narrative;
pub mod career_paths;
pub mod demo;
pub mod employee_narrative;
pub mod extractor;
pub mod ids;
pub mod match_scoring;
pub mod matching;
pub mod pipeline;
pub mod random;
pub mod vocabulary;
