//! Axum route handlers for the candidate-screening workflow.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::demo::{
    demo_resume_text, random_candidate_email, random_candidate_name, DEMO_CANDIDATE_COUNT,
};
use crate::analysis::pipeline::{analyze_candidate, Applicant};
use crate::errors::AppError;
use crate::models::candidate::{Candidate, RankedCandidate};
use crate::models::job::JobRequirement;
use crate::models::notice::Notice;
use crate::recruiting::session::{JobItemEdit, RecruitingSession};
use crate::state::AppState;
use crate::uploads::read_resume_upload;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: RecruitingSession,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

#[derive(Debug, Serialize)]
pub struct CandidatesResponse {
    pub candidates: Vec<Candidate>,
    pub notice: Notice,
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub job: JobRequirement,
    pub results: Vec<RankedCandidate>,
    pub selected_candidate: Option<Candidate>,
}

// ────────────────────────────────────────────────────────────────────────────
// Session handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recruiting/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let id = state.ids.next_id();
    let session = RecruitingSession::new(id, Utc::now());
    state.recruiting.insert(id, session.clone()).await;
    info!("Created recruiting session {id}");

    (
        StatusCode::CREATED,
        Json(SessionResponse {
            session,
            notice: None,
        }),
    )
}

/// GET /api/v1/recruiting/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.recruiting.get(id).await?;
    Ok(Json(SessionResponse {
        session,
        notice: None,
    }))
}

/// POST /api/v1/recruiting/sessions/:id/reset
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let (session, notice) = state
        .recruiting
        .update(id, |s| {
            let notice = s.reset();
            Ok((s.clone(), notice))
        })
        .await?;
    info!("Reset recruiting session {id}");
    Ok(Json(SessionResponse {
        session,
        notice: Some(notice),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Job requirement handlers
// ────────────────────────────────────────────────────────────────────────────

/// PUT /api/v1/recruiting/sessions/:id/job
pub async fn handle_replace_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(job): Json<JobRequirement>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state
        .recruiting
        .update(id, |s| {
            s.replace_job(job)?;
            Ok(s.clone())
        })
        .await?;
    Ok(Json(SessionResponse {
        session,
        notice: None,
    }))
}

/// POST /api/v1/recruiting/sessions/:id/job/items
pub async fn handle_edit_job_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(edit): Json<JobItemEdit>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state
        .recruiting
        .update(id, |s| {
            s.edit_job_item(edit)?;
            Ok(s.clone())
        })
        .await?;
    Ok(Json(SessionResponse {
        session,
        notice: None,
    }))
}

/// POST /api/v1/recruiting/sessions/:id/job/save
pub async fn handle_save_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let (session, notice) = state
        .recruiting
        .update(id, |s| {
            let notice = s.save_job()?;
            Ok((s.clone(), notice))
        })
        .await?;
    info!("Saved job requirements for session {id}: {}", session.job.title);
    Ok(Json(SessionResponse {
        session,
        notice: Some(notice),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Candidate handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recruiting/sessions/:id/candidates
///
/// Analyzes one applicant against the saved job and adds the result.
pub async fn handle_add_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(applicant): Json<Applicant>,
) -> Result<(StatusCode, Json<CandidatesResponse>), AppError> {
    applicant.validate()?;
    let name = applicant.name.trim().to_string();
    let notice = Notice::info(
        "Analysis Complete",
        format!("{name}'s resume has been analyzed."),
    );
    let response = analyze_and_record(&state, id, vec![applicant], notice, failure_notice()).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/recruiting/sessions/:id/candidates/upload
///
/// Multipart: `name`, `email` and one resume file.
pub async fn handle_upload_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CandidatesResponse>), AppError> {
    let upload = read_resume_upload(multipart).await?;
    let applicant = Applicant {
        name: upload.required_field("name")?,
        email: upload.required_field("email")?,
        resume_text: upload.resume_text.clone(),
    };
    let notice = Notice::info(
        "Resume Uploaded",
        format!(
            "{} was successfully uploaded and analyzed for {}.",
            upload.file_name, applicant.name
        ),
    );
    let response = analyze_and_record(&state, id, vec![applicant], notice, failure_notice()).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/recruiting/sessions/:id/candidates/demo
///
/// Saves the job if needed, then analyzes five generated applicants.
pub async fn handle_generate_demo_candidates(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<CandidatesResponse>), AppError> {
    state
        .recruiting
        .update(id, |s| {
            if !s.job_saved {
                s.save_job()?;
            }
            Ok(())
        })
        .await?;

    let applicants = state.rng.with(|rng| {
        (0..DEMO_CANDIDATE_COUNT)
            .map(|_| {
                let name = random_candidate_name(rng);
                let email = random_candidate_email(&name, rng);
                Applicant {
                    resume_text: demo_resume_text(&name),
                    name,
                    email,
                }
            })
            .collect::<Vec<_>>()
    })?;

    let notice = Notice::info(
        "Test Data Generated",
        format!("{DEMO_CANDIDATE_COUNT} test candidates have been created and analyzed."),
    );
    let failure = Notice::error(
        "Generation Failed",
        "There was a problem generating test data.",
    );
    let response = analyze_and_record(&state, id, applicants, notice, failure).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/recruiting/sessions/:id/candidates/:candidate_id/select
pub async fn handle_toggle_selection(
    State(state): State<AppState>,
    Path((id, candidate_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<SessionResponse>, AppError> {
    let (session, notice) = state
        .recruiting
        .update(id, |s| {
            let notice = s.toggle_selection(candidate_id)?;
            Ok((s.clone(), notice))
        })
        .await?;
    Ok(Json(SessionResponse { session, notice }))
}

/// GET /api/v1/recruiting/sessions/:id/results
pub async fn handle_get_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResultsResponse>, AppError> {
    let session = state.recruiting.get(id).await?;
    let selected_candidate = session
        .selected_candidate_id
        .and_then(|sel| session.candidates.iter().find(|c| c.id == sel).cloned());

    Ok(Json(ResultsResponse {
        results: session.ranked(),
        job: session.job,
        selected_candidate,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestration
// ────────────────────────────────────────────────────────────────────────────

fn failure_notice() -> Notice {
    Notice::error("Analysis Failed", "There was a problem analyzing the resume.")
}

/// Marks the session as loading, analyzes each applicant after the simulated
/// latency, then records the results. A failure marks the session as errored
/// and discards the whole batch.
///
/// The session lock is not held while waiting, so overlapping requests are
/// not de-duplicated; each one appends its own candidates when it finishes.
async fn analyze_and_record(
    state: &AppState,
    session_id: Uuid,
    applicants: Vec<Applicant>,
    notice: Notice,
    failure: Notice,
) -> Result<CandidatesResponse, AppError> {
    let job = state
        .recruiting
        .update(session_id, |s| {
            let job = s.saved_job()?;
            s.begin_analysis();
            Ok(job)
        })
        .await?;

    let credit = state.config.empty_requirement_credit;
    let mut candidates = Vec::with_capacity(applicants.len());
    let mut failed = None;

    for applicant in applicants {
        let result = state
            .analyze_after_delay(|rng| {
                analyze_candidate(
                    state.candidate_extractor.as_ref(),
                    rng,
                    state.ids.as_ref(),
                    applicant,
                    &job,
                    credit,
                )
            })
            .await;

        match result {
            Ok(candidate) => candidates.push(candidate),
            Err(e) => {
                failed = Some(e);
                break;
            }
        }
    }

    if let Some(e) = failed {
        warn!("Candidate analysis failed for session {session_id}: {e}");
        state
            .recruiting
            .update(session_id, |s| {
                s.record_failure(failure);
                Ok(())
            })
            .await?;
        return Err(e);
    }

    for c in &candidates {
        info!(
            "Analyzed candidate {} for session {session_id}: score={}",
            c.id, c.match_score
        );
    }

    let notice = state
        .recruiting
        .update(session_id, |s| Ok(s.record_candidates(candidates.clone(), notice)))
        .await?;

    Ok(CandidatesResponse { candidates, notice })
}
