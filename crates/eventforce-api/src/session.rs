//! Handlers for `/session` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/session` | The active profile |
//! | `POST` | `/session/switch` | Toggle roles, or `?role=organizer\|candidate` to pick one |

use axum::{
  Json,
  extract::{Query, State},
};
use eventforce_core::{
  profile::{Profile, Role},
  store::LedgerStore,
};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

/// `GET /session`
pub async fn current<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Profile>, ApiError>
where
  S: LedgerStore + 'static,
{
  Ok(Json(state.actor().await))
}

#[derive(Debug, Deserialize)]
pub struct SwitchParams {
  pub role: Option<Role>,
}

/// `POST /session/switch[?role=<role>]`
pub async fn switch<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<SwitchParams>,
) -> Result<Json<Profile>, ApiError>
where
  S: LedgerStore + 'static,
{
  let mut session = state.session.write().await;
  let active = match params.role {
    Some(role) => session.act_as(role),
    None => session.switch_role(),
  };
  Ok(Json(active.clone()))
}
