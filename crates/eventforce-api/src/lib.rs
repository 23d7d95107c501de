//! JSON REST API for EventForce.
//!
//! Exposes an axum [`Router`] backed by any
//! [`eventforce_core::store::LedgerStore`] and a shared [`Session`] that
//! decides who the acting profile is. Auth, TLS, and transport concerns are
//! the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", eventforce_api::api_router(state))
//! ```

pub mod applications;
pub mod error;
pub mod jobs;
pub mod profiles;
pub mod reviews;
pub mod session;

use std::sync::Arc;

use axum::{
  Json, Router,
  http::StatusCode,
  routing::{get, post},
};
use eventforce_core::{
  profile::Profile,
  session::Session,
  store::{LedgerStore, Outcome},
};
use tokio::sync::RwLock;

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct AppState<S> {
  pub ledger:  Arc<S>,
  pub session: Arc<RwLock<Session>>,
}

impl<S> AppState<S> {
  pub fn new(ledger: Arc<S>, session: Session) -> Self {
    Self { ledger, session: Arc::new(RwLock::new(session)) }
  }

  /// The profile the next operation acts as.
  pub async fn actor(&self) -> Profile { self.session.read().await.active().clone() }
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      ledger:  Arc::clone(&self.ledger),
      session: Arc::clone(&self.session),
    }
  }
}

/// `201 Created` for a new entity, `200 OK` when the call found an existing
/// one.
pub(crate) fn created_or_ok<T>(outcome: Outcome<T>) -> (StatusCode, Json<T>) {
  let status = if outcome.is_changed() {
    StatusCode::CREATED
  } else {
    StatusCode::OK
  };
  (status, Json(outcome.into_inner()))
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: LedgerStore + 'static,
{
  Router::new()
    // Session
    .route("/session", get(session::current::<S>))
    .route("/session/switch", post(session::switch::<S>))
    // Profiles
    .route("/profiles", get(profiles::list::<S>))
    .route("/profiles/{id}", get(profiles::get_one::<S>))
    // Jobs
    .route("/jobs", get(jobs::list::<S>).post(jobs::publish::<S>))
    .route("/jobs/{id}", get(jobs::get_one::<S>))
    .route("/jobs/{id}/status", post(jobs::update_status::<S>))
    .route("/jobs/{id}/applications", get(jobs::applications::<S>))
    .route("/jobs/{id}/reviews", get(jobs::reviews::<S>))
    .route("/jobs/{id}/requirements/{rid}/apply", post(jobs::apply::<S>))
    // Applications
    .route("/applications", get(applications::list::<S>))
    .route("/applications/exists", get(applications::exists::<S>))
    .route("/applications/{id}", get(applications::get_one::<S>))
    .route("/applications/{id}/status", post(applications::update_status::<S>))
    // Reviews
    .route("/reviews", get(reviews::list::<S>).post(reviews::submit::<S>))
    .route("/reviews/exists", get(reviews::exists::<S>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
