//! Axum route handlers for the employee career-development workflow.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::pipeline::{analyze_employee, EmployeeSubmission};
use crate::development::session::DevelopmentSession;
use crate::errors::AppError;
use crate::models::employee::{Department, EmployeeAnalysis};
use crate::models::notice::Notice;
use crate::state::AppState;
use crate::uploads::read_resume_upload;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: DevelopmentSession,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: EmployeeAnalysis,
    pub notice: Notice,
}

/// POST /api/v1/development/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let id = state.ids.next_id();
    let session = DevelopmentSession::new(id, Utc::now());
    state.development.insert(id, session.clone()).await;
    info!("Created development session {id}");

    (
        StatusCode::CREATED,
        Json(SessionResponse {
            session,
            notice: None,
        }),
    )
}

/// GET /api/v1/development/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.development.get(id).await?;
    Ok(Json(SessionResponse {
        session,
        notice: None,
    }))
}

/// POST /api/v1/development/sessions/:id/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(submission): Json<EmployeeSubmission>,
) -> Result<Json<AnalysisResponse>, AppError> {
    submission.validate()?;
    let notice = Notice::info(
        "Analysis Complete",
        "Your resume has been analyzed. View your career development insights.",
    );
    let failure = Notice::error("Analysis Failed", "There was a problem analyzing the resume.");
    analyze_and_record(&state, id, submission, notice, failure)
        .await
        .map(Json)
}

/// POST /api/v1/development/sessions/:id/upload
///
/// Multipart: `current_role`, `department`, optional `name`/`email`, and one
/// resume file.
pub async fn handle_upload(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let upload = read_resume_upload(multipart).await?;
    let submission = EmployeeSubmission {
        resume_text: upload.resume_text.clone(),
        current_role: upload.required_field("current_role")?,
        department: upload.required_field("department")?,
        name: upload.field("name"),
        email: upload.field("email"),
    };
    submission.validate()?;

    let notice = Notice::info(
        "Resume Uploaded",
        format!("{} was successfully uploaded for analysis.", upload.file_name),
    );
    let failure = Notice::error("Analysis Failed", "There was a problem analyzing the resume.");
    analyze_and_record(&state, id, submission, notice, failure)
        .await
        .map(Json)
}

/// POST /api/v1/development/sessions/:id/demo
pub async fn handle_demo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let submission = EmployeeSubmission {
        resume_text: "Demo resume text".to_string(),
        current_role: "Software Engineer".to_string(),
        department: Department::Engineering.to_string(),
        name: None,
        email: None,
    };
    let notice = Notice::info(
        "Demo Analysis Generated",
        "A sample career analysis has been created for demonstration purposes.",
    );
    let failure = Notice::error(
        "Generation Failed",
        "There was a problem generating the demo analysis.",
    );
    analyze_and_record(&state, id, submission, notice, failure)
        .await
        .map(Json)
}

/// POST /api/v1/development/sessions/:id/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let (session, notice) = state
        .development
        .update(id, |s| {
            let notice = s.reset();
            Ok((s.clone(), notice))
        })
        .await?;
    Ok(Json(SessionResponse {
        session,
        notice: Some(notice),
    }))
}

/// Runs one employee analysis and stores it in the session.
/// Whichever overlapping request finishes last owns the stored analysis.
async fn analyze_and_record(
    state: &AppState,
    session_id: Uuid,
    submission: EmployeeSubmission,
    notice: Notice,
    failure: Notice,
) -> Result<AnalysisResponse, AppError> {
    state
        .development
        .update(session_id, |s| {
            s.begin_analysis();
            Ok(())
        })
        .await?;

    let result = state
        .analyze_after_delay(|rng| {
            analyze_employee(
                state.employee_extractor.as_ref(),
                rng,
                state.ids.as_ref(),
                submission,
            )
        })
        .await;

    match result {
        Ok(analysis) => {
            info!(
                "Analyzed employee {} for session {session_id}: top path={:?}",
                analysis.id,
                analysis
                    .career_path_suggestions
                    .first()
                    .map(|p| (&p.role, p.match_score))
            );
            let notice = state
                .development
                .update(session_id, |s| Ok(s.record_analysis(analysis.clone(), notice)))
                .await?;
            Ok(AnalysisResponse { analysis, notice })
        }
        Err(e) => {
            warn!("Employee analysis failed for session {session_id}: {e}");
            state
                .development
                .update(session_id, |s| {
                    s.record_failure(failure);
                    Ok(())
                })
                .await?;
            Err(e)
        }
    }
}
