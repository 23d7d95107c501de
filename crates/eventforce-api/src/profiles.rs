//! Handlers for `/profiles` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/profiles` | Optional `?role=organizer\|candidate` |
//! | `GET`  | `/profiles/:id` | 404 if not registered |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use eventforce_core::{
  Error,
  id::ProfileId,
  profile::{Profile, Role},
  store::LedgerStore,
};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub role: Option<Role>,
}

/// `GET /profiles[?role=<role>]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Profile>>, ApiError>
where
  S: LedgerStore + 'static,
{
  Ok(Json(state.ledger.profiles(params.role)?))
}

/// `GET /profiles/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<ProfileId>,
) -> Result<Json<Profile>, ApiError>
where
  S: LedgerStore + 'static,
{
  let profile = state
    .ledger
    .profile(&id)?
    .ok_or(Error::ProfileNotFound(id))?;
  Ok(Json(profile))
}
