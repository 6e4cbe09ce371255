use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::employee::EmployeeAnalysis;
use crate::models::notice::{AnalysisStatus, Notice};

/// State of one career-development session. Holds at most one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct DevelopmentSession {
    pub id: Uuid,
    pub analysis: Option<EmployeeAnalysis>,
    pub status: AnalysisStatus,
    pub last_notice: Option<Notice>,
    pub created_at: DateTime<Utc>,
}

impl DevelopmentSession {
    pub fn new(id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            analysis: None,
            status: AnalysisStatus::Idle,
            last_notice: None,
            created_at,
        }
    }

    pub fn begin_analysis(&mut self) {
        self.status = AnalysisStatus::Loading;
    }

    /// Stores `analysis`, replacing any previous one.
    pub fn record_analysis(&mut self, analysis: EmployeeAnalysis, notice: Notice) -> Notice {
        self.analysis = Some(analysis);
        self.status = AnalysisStatus::Success;
        self.notify(notice)
    }

    /// The previous analysis, if any, is kept.
    pub fn record_failure(&mut self, notice: Notice) {
        self.status = AnalysisStatus::Error;
        self.notify(notice);
    }

    pub fn reset(&mut self) -> Notice {
        self.analysis = None;
        self.status = AnalysisStatus::Idle;
        self.notify(Notice::info(
            "Analysis Reset",
            "Your career analysis data has been cleared.",
        ))
    }

    fn notify(&mut self, notice: Notice) -> Notice {
        self.last_notice = Some(notice.clone());
        notice
    }
}
