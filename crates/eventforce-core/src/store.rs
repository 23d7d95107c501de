//! The `LedgerStore` trait and the [`Outcome`] of a transition.
//!
//! The trait is implemented by storage backends (e.g.
//! `eventforce-store-memory`). Higher layers (`eventforce-api`,
//! `eventforce-server`) depend on this abstraction, not on any concrete
//! backend.
//!
//! Backends report their own failures (I/O, lost connections) as
//! [`Error::Backend`](crate::Error::Backend). The in-memory backend has no
//! such failures and never returns it.

use serde::Serialize;

use crate::{
  Result,
  application::{Applicant, Application, ApplicationStatus},
  id::{ApplicationId, JobId, ProfileId, RequirementId},
  job::{Job, JobDraft, JobStatus},
  profile::{Profile, Role},
  review::{NewReview, Review},
};

// ─── Outcome ─────────────────────────────────────────────────────────────────

/// Result of a transition that may legitimately change nothing.
///
/// Repeating a decision, applying twice or reviewing twice are not errors;
/// they report `Unchanged` together with the current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum Outcome<T> {
  Changed(T),
  Unchanged(T),
}

impl<T> Outcome<T> {
  pub fn is_changed(&self) -> bool { matches!(self, Self::Changed(_)) }

  pub fn value(&self) -> &T {
    match self {
      Self::Changed(v) | Self::Unchanged(v) => v,
    }
  }

  pub fn into_inner(self) -> T {
    match self {
      Self::Changed(v) | Self::Unchanged(v) => v,
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over an EventForce ledger backend.
///
/// Every transition is atomic: no reader observes it half applied, and two
/// concurrent transitions behave as if they ran one after the other.
///
/// Operations that act on behalf of someone take the acting [`Profile`]
/// (the session's active profile) as `actor`.
pub trait LedgerStore: Send + Sync {
  // ── Profiles ──────────────────────────────────────────────────────────

  /// Make an externally created profile known to the ledger.
  ///
  /// Returns `InvalidInput` if a profile with the same id exists.
  fn register_profile(&self, profile: Profile) -> Result<Profile>;

  fn profile(&self, id: &ProfileId) -> Result<Option<Profile>>;

  /// Registered profiles in registration order, optionally filtered by role.
  fn profiles(&self, role: Option<Role>) -> Result<Vec<Profile>>;

  // ── Jobs ──────────────────────────────────────────────────────────────

  /// Publish a new open job owned by `actor`, who must be an organizer.
  /// The job is placed first in [`LedgerStore::jobs`].
  fn publish_job(&self, actor: &Profile, draft: JobDraft) -> Result<Job>;

  fn job(&self, id: JobId) -> Result<Option<Job>>;

  /// All jobs, most recently published first.
  fn jobs(&self) -> Result<Vec<Job>>;

  fn jobs_by_organizer(&self, organizer_id: &ProfileId) -> Result<Vec<Job>>;

  /// Move a job owned by `actor` to `status`. Jobs cannot be reopened.
  fn update_job_status(
    &self,
    actor: &Profile,
    job_id: JobId,
    status: JobStatus,
  ) -> Result<Outcome<Job>>;

  // ── Applications ──────────────────────────────────────────────────────

  /// Apply `actor`, who must be a candidate, to a requirement of an open
  /// job. Applying twice to the same requirement returns the existing
  /// application as `Unchanged`.
  fn apply(
    &self,
    actor: &Profile,
    job_id: JobId,
    requirement_id: RequirementId,
  ) -> Result<Outcome<Application>>;

  fn application(&self, id: ApplicationId) -> Result<Option<Application>>;

  fn applications_by_candidate(
    &self,
    candidate_id: &ProfileId,
  ) -> Result<Vec<Application>>;

  /// Applications to any requirement of `job_id`.
  fn applications_for_job(&self, job_id: JobId) -> Result<Vec<Application>>;

  /// [`LedgerStore::applications_for_job`] joined with each candidate's
  /// profile and review state, read as one consistent view.
  fn applicants_for_job(&self, job_id: JobId) -> Result<Vec<Applicant>>;

  /// Whether `candidate_id` applied to `requirement_id`, whatever the status.
  fn has_applied(
    &self,
    requirement_id: RequirementId,
    candidate_id: &ProfileId,
  ) -> Result<bool>;

  /// Decide a pending application on a job owned by `actor`.
  ///
  /// Accepting counts the candidate against the requirement's headcount in
  /// the same step. Deciding an application that is no longer pending is a
  /// no-op returning `Unchanged`.
  fn update_application_status(
    &self,
    actor: &Profile,
    application_id: ApplicationId,
    status: ApplicationStatus,
  ) -> Result<Outcome<Application>>;

  // ── Reviews ───────────────────────────────────────────────────────────

  /// Record a review written by `actor`. A second review of the same
  /// reviewee for the same job returns the first one as `Unchanged`.
  fn submit_review(
    &self,
    actor: &Profile,
    review: NewReview,
  ) -> Result<Outcome<Review>>;

  fn reviews_for_job(&self, job_id: JobId) -> Result<Vec<Review>>;

  fn reviews_for_profile(&self, reviewee_id: &ProfileId) -> Result<Vec<Review>>;

  fn review_exists(&self, job_id: JobId, reviewee_id: &ProfileId)
  -> Result<bool>;
}
