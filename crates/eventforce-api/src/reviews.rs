//! Handlers for `/reviews` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/reviews` | Body: [`NewReview`]; 201 on a new review, 200 if one exists |
//! | `GET`  | `/reviews` | `?reviewee_id`, defaults to the active profile |
//! | `GET`  | `/reviews/exists` | `?job_id&reviewee_id` |

use axum::{
  Json,
  extract::{Query, State},
  response::IntoResponse,
};
use eventforce_core::{
  id::{JobId, ProfileId},
  review::{NewReview, Review},
  store::LedgerStore,
};
use serde::Deserialize;

use crate::{AppState, applications::Exists, created_or_ok, error::ApiError};

/// `POST /reviews`: the active profile is the reviewer.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<NewReview>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LedgerStore + 'static,
{
  let actor = state.actor().await;
  let outcome = state.ledger.submit_review(&actor, body)?;
  Ok(created_or_ok(outcome))
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub reviewee_id: Option<ProfileId>,
}

/// `GET /reviews[?reviewee_id=<id>]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Review>>, ApiError>
where
  S: LedgerStore + 'static,
{
  let reviewee_id = match params.reviewee_id {
    Some(id) => id,
    None => state.actor().await.id,
  };
  Ok(Json(state.ledger.reviews_for_profile(&reviewee_id)?))
}

#[derive(Debug, Deserialize)]
pub struct ExistsParams {
  pub job_id:      JobId,
  pub reviewee_id: ProfileId,
}

/// `GET /reviews/exists?job_id=<id>&reviewee_id=<id>`
pub async fn exists<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<ExistsParams>,
) -> Result<Json<Exists>, ApiError>
where
  S: LedgerStore + 'static,
{
  let exists = state
    .ledger
    .review_exists(params.job_id, &params.reviewee_id)?;
  Ok(Json(Exists { exists }))
}
