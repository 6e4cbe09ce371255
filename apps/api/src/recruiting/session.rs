use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::candidate_narrative::{match_label, score_band};
use crate::errors::AppError;
use crate::models::candidate::{Candidate, RankedCandidate};
use crate::models::job::{JobRequirement, RequirementList};
use crate::models::notice::{AnalysisStatus, Notice};

/// Add or remove one entry of a requirement list.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum JobItemEdit {
    Add { list: RequirementList, item: String },
    Remove { list: RequirementList, item: String },
}

/// State of one candidate-screening session.
#[derive(Debug, Clone, Serialize)]
pub struct RecruitingSession {
    pub id: Uuid,
    pub job: JobRequirement,
    pub job_saved: bool,
    pub candidates: Vec<Candidate>,
    pub selected_candidate_id: Option<Uuid>,
    pub status: AnalysisStatus,
    pub last_notice: Option<Notice>,
    pub created_at: DateTime<Utc>,
}

impl RecruitingSession {
    pub fn new(id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            job: JobRequirement::default(),
            job_saved: false,
            candidates: Vec::new(),
            selected_candidate_id: None,
            status: AnalysisStatus::Idle,
            last_notice: None,
            created_at,
        }
    }

    /// Replaces the job requirement. Saved requirements are frozen.
    pub fn replace_job(&mut self, job: JobRequirement) -> Result<(), AppError> {
        self.ensure_job_editable()?;
        self.job = job.normalized();
        Ok(())
    }

    pub fn edit_job_item(&mut self, edit: JobItemEdit) -> Result<(), AppError> {
        self.ensure_job_editable()?;
        match edit {
            JobItemEdit::Add { list, item } => {
                if !self.job.add_item(list, &item) {
                    return Err(AppError::Validation("item cannot be empty".to_string()));
                }
            }
            JobItemEdit::Remove { list, item } => {
                self.job.remove_item(list, &item);
            }
        }
        Ok(())
    }

    pub fn save_job(&mut self) -> Result<Notice, AppError> {
        if self.job.title.trim().is_empty() {
            return Err(AppError::Validation(
                "Please enter a job title before saving.".to_string(),
            ));
        }
        self.job_saved = true;
        Ok(self.notify(Notice::info(
            "Job Requirements Saved",
            "You can now upload candidate resumes for analysis.",
        )))
    }

    /// The saved job requirement, or a conflict if it has not been saved yet.
    pub fn saved_job(&self) -> Result<JobRequirement, AppError> {
        if !self.job_saved {
            return Err(AppError::Conflict(
                "Please define and save job requirements before uploading resumes.".to_string(),
            ));
        }
        Ok(self.job.clone())
    }

    pub fn begin_analysis(&mut self) {
        self.status = AnalysisStatus::Loading;
    }

    pub fn record_candidates(&mut self, candidates: Vec<Candidate>, notice: Notice) -> Notice {
        self.candidates.extend(candidates);
        self.status = AnalysisStatus::Success;
        self.notify(notice)
    }

    pub fn record_failure(&mut self, notice: Notice) {
        self.status = AnalysisStatus::Error;
        self.notify(notice);
    }

    /// Selects a candidate, or clears the selection if it is already selected.
    /// Returns a notice only when a candidate becomes selected.
    pub fn toggle_selection(&mut self, candidate_id: Uuid) -> Result<Option<Notice>, AppError> {
        let candidate = self
            .candidates
            .iter()
            .find(|c| c.id == candidate_id)
            .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))?;

        if self.selected_candidate_id == Some(candidate_id) {
            self.selected_candidate_id = None;
            return Ok(None);
        }

        let notice = Notice::info(
            "Candidate Selected",
            format!("{} has been selected as a potential match.", candidate.name),
        );
        self.selected_candidate_id = Some(candidate_id);
        Ok(Some(self.notify(notice)))
    }

    /// Candidates ordered by score, best first. Equal scores keep upload order.
    pub fn ranked(&self) -> Vec<RankedCandidate> {
        let mut sorted: Vec<&Candidate> = self.candidates.iter().collect();
        sorted.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        sorted
            .into_iter()
            .enumerate()
            .map(|(i, c)| RankedCandidate {
                rank: i + 1,
                candidate_id: c.id,
                name: c.name.clone(),
                email: c.email.clone(),
                match_score: c.match_score,
                match_label: match_label(c.match_score).to_string(),
                score_band: score_band(c.match_score),
                experience: c.experience,
                recommendation: c.recommendation.clone(),
                selected: self.selected_candidate_id == Some(c.id),
            })
            .collect()
    }

    /// Clears candidates, selection and the saved job.
    pub fn reset(&mut self) -> Notice {
        self.job = JobRequirement::default();
        self.job_saved = false;
        self.candidates.clear();
        self.selected_candidate_id = None;
        self.status = AnalysisStatus::Idle;
        self.notify(Notice::info(
            "Data Cleared",
            "All job and candidate data has been reset.",
        ))
    }

    fn ensure_job_editable(&self) -> Result<(), AppError> {
        if self.job_saved {
            return Err(AppError::Conflict(
                "Job requirements are saved; reset the session to edit them.".to_string(),
            ));
        }
        Ok(())
    }

    fn notify(&mut self, notice: Notice) -> Notice {
        self.last_notice = Some(notice.clone());
        notice
    }
}
