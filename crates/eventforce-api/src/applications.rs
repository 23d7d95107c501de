//! Handlers for `/applications` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/applications` | `?candidate_id`, defaults to the active profile |
//! | `GET`  | `/applications/exists` | `?requirement_id` required, `?candidate_id` optional |
//! | `GET`  | `/applications/:id` | Single application |
//! | `POST` | `/applications/:id/status` | Body: `{"status":"accepted"\|"rejected"}` |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use eventforce_core::{
  Error,
  application::{Application, ApplicationStatus},
  id::{ApplicationId, ProfileId, RequirementId},
  store::{LedgerStore, Outcome},
};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub candidate_id: Option<ProfileId>,
}

/// `GET /applications[?candidate_id=<id>]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Application>>, ApiError>
where
  S: LedgerStore + 'static,
{
  let candidate_id = match params.candidate_id {
    Some(id) => id,
    None => state.actor().await.id,
  };
  Ok(Json(state.ledger.applications_by_candidate(&candidate_id)?))
}

#[derive(Debug, Deserialize)]
pub struct ExistsParams {
  pub requirement_id: RequirementId,
  pub candidate_id:   Option<ProfileId>,
}

#[derive(Debug, Serialize)]
pub struct Exists {
  pub exists: bool,
}

/// `GET /applications/exists?requirement_id=<id>[&candidate_id=<id>]`
pub async fn exists<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<ExistsParams>,
) -> Result<Json<Exists>, ApiError>
where
  S: LedgerStore + 'static,
{
  let candidate_id = match params.candidate_id {
    Some(id) => id,
    None => state.actor().await.id,
  };
  let exists = state
    .ledger
    .has_applied(params.requirement_id, &candidate_id)?;
  Ok(Json(Exists { exists }))
}

/// `GET /applications/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<ApplicationId>,
) -> Result<Json<Application>, ApiError>
where
  S: LedgerStore + 'static,
{
  let application = state
    .ledger
    .application(id)?
    .ok_or(Error::ApplicationNotFound(id))?;
  Ok(Json(application))
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
  pub status: ApplicationStatus,
}

/// `POST /applications/:id/status`: decides as the active profile.
pub async fn update_status<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<ApplicationId>,
  Json(body): Json<StatusBody>,
) -> Result<Json<Outcome<Application>>, ApiError>
where
  S: LedgerStore + 'static,
{
  let actor = state.actor().await;
  let outcome = state
    .ledger
    .update_application_status(&actor, id, body.status)?;
  Ok(Json(outcome))
}
