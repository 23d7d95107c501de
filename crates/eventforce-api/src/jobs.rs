//! Handlers for `/jobs` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/jobs` | Feed of [`JobListing`], newest first; optional `?organizer_id` |
//! | `POST` | `/jobs` | Body: [`JobDraft`]; published as the active profile, returns 201 |
//! | `GET`  | `/jobs/:id` | Single [`JobListing`] |
//! | `POST` | `/jobs/:id/status` | Body: `{"status":"completed"}` |
//! | `GET`  | `/jobs/:id/applications` | Applicants joined with their profiles |
//! | `GET`  | `/jobs/:id/reviews` | Reviews written for the job |
//! | `POST` | `/jobs/:id/requirements/:rid/apply` | 201 on a new application, 200 if already applied |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use eventforce_core::{
  Error,
  application::Applicant,
  id::{JobId, ProfileId, RequirementId},
  job::{Job, JobDraft, JobStatus},
  review::Review,
  store::{LedgerStore, Outcome},
};
use serde::{Deserialize, Serialize};

use crate::{AppState, created_or_ok, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

/// A job as shown in the feed, with the positions still open across its
/// requirements.
#[derive(Debug, Serialize)]
pub struct JobListing {
  #[serde(flatten)]
  pub job:            Job,
  pub positions_left: u32,
}

impl From<Job> for JobListing {
  fn from(job: Job) -> Self {
    Self { positions_left: job.positions_left(), job }
  }
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// If set, only jobs posted by this organizer.
  pub organizer_id: Option<ProfileId>,
}

/// `GET /jobs[?organizer_id=<id>]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<JobListing>>, ApiError>
where
  S: LedgerStore + 'static,
{
  let jobs = match params.organizer_id {
    Some(organizer_id) => state.ledger.jobs_by_organizer(&organizer_id)?,
    None => state.ledger.jobs()?,
  };
  Ok(Json(jobs.into_iter().map(JobListing::from).collect()))
}

// ─── Publish ──────────────────────────────────────────────────────────────────

/// `POST /jobs`: returns 201 and the published [`Job`].
pub async fn publish<S>(
  State(state): State<AppState<S>>,
  Json(draft): Json<JobDraft>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LedgerStore + 'static,
{
  let actor = state.actor().await;
  let job = state.ledger.publish_job(&actor, draft)?;
  Ok((StatusCode::CREATED, Json(job)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /jobs/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<JobId>,
) -> Result<Json<JobListing>, ApiError>
where
  S: LedgerStore + 'static,
{
  let job = state.ledger.job(id)?.ok_or(Error::JobNotFound(id))?;
  Ok(Json(job.into()))
}

// ─── Status ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatusBody {
  pub status: JobStatus,
}

/// `POST /jobs/:id/status` with body `{"status":"completed"}`
pub async fn update_status<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<JobId>,
  Json(body): Json<StatusBody>,
) -> Result<Json<Outcome<Job>>, ApiError>
where
  S: LedgerStore + 'static,
{
  let actor = state.actor().await;
  Ok(Json(state.ledger.update_job_status(&actor, id, body.status)?))
}

// ─── Applicants ───────────────────────────────────────────────────────────────

/// `GET /jobs/:id/applications`
pub async fn applications<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<JobId>,
) -> Result<Json<Vec<Applicant>>, ApiError>
where
  S: LedgerStore + 'static,
{
  Ok(Json(state.ledger.applicants_for_job(id)?))
}

/// `GET /jobs/:id/reviews`
pub async fn reviews<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<JobId>,
) -> Result<Json<Vec<Review>>, ApiError>
where
  S: LedgerStore + 'static,
{
  state.ledger.job(id)?.ok_or(Error::JobNotFound(id))?;
  Ok(Json(state.ledger.reviews_for_job(id)?))
}

// ─── Apply ────────────────────────────────────────────────────────────────────

/// `POST /jobs/:id/requirements/:rid/apply`: applies as the active profile.
pub async fn apply<S>(
  State(state): State<AppState<S>>,
  Path((job_id, requirement_id)): Path<(JobId, RequirementId)>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LedgerStore + 'static,
{
  let actor = state.actor().await;
  let outcome = state.ledger.apply(&actor, job_id, requirement_id)?;
  Ok(created_or_ok(outcome))
}
