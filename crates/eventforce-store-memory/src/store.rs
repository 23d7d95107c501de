//! [`MemoryLedger`], the in-memory implementation of [`LedgerStore`].

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use eventforce_core::{
  Error, Result,
  application::{Applicant, Application, ApplicationStatus},
  id::{ApplicationId, JobId, ProfileId, RequirementId},
  job::{Job, JobDraft, JobStatus},
  profile::{Profile, Role},
  review::{NewReview, Review},
  store::{LedgerStore, Outcome},
};

use crate::snapshot::{LedgerSnapshot, SNAPSHOT_VERSION};

// ─── State ───────────────────────────────────────────────────────────────────

/// Every collection the ledger owns. Entities refer to each other by id only.
#[derive(Debug, Default)]
pub(crate) struct LedgerState {
  pub(crate) profiles:     Vec<Profile>,
  /// Most recently published first.
  pub(crate) jobs:         Vec<Job>,
  pub(crate) applications: Vec<Application>,
  pub(crate) reviews:      Vec<Review>,
}

impl LedgerState {
  fn job(&self, id: JobId) -> Option<&Job> {
    self.jobs.iter().find(|j| j.id == id)
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A ledger held entirely in process memory.
///
/// Cloning is cheap; clones share the same state. Reads take a shared lock
/// and every transition takes the exclusive lock for its whole duration.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
  state: Arc<RwLock<LedgerState>>,
}

impl MemoryLedger {
  /// An empty ledger.
  pub fn new() -> Self { Self::default() }

  /// Rebuild a ledger from a snapshot, rejecting snapshots that break any
  /// ledger invariant.
  pub fn from_snapshot(snapshot: LedgerSnapshot) -> crate::Result<Self> {
    snapshot.validate()?;
    let state = LedgerState {
      profiles:     snapshot.profiles,
      jobs:         snapshot.jobs,
      applications: snapshot.applications,
      reviews:      snapshot.reviews,
    };
    Ok(Self { state: Arc::new(RwLock::new(state)) })
  }

  /// Copy the current state out as a snapshot.
  pub fn snapshot(&self) -> LedgerSnapshot {
    let state = self.read();
    LedgerSnapshot {
      version:      SNAPSHOT_VERSION,
      profiles:     state.profiles.clone(),
      jobs:         state.jobs.clone(),
      applications: state.applications.clone(),
      reviews:      state.reviews.clone(),
    }
  }

  // A panic while holding the lock cannot leave a transition half applied:
  // each one checks everything before its first write.
  fn read(&self) -> RwLockReadGuard<'_, LedgerState> {
    self.state.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> RwLockWriteGuard<'_, LedgerState> {
    self.state.write().unwrap_or_else(PoisonError::into_inner)
  }
}

fn require_owner(actor: &Profile, job: &Job) -> Result<()> {
  if job.organizer_id == actor.id {
    Ok(())
  } else {
    Err(Error::NotJobOwner {
      profile_id: actor.id.clone(),
      job_id:     job.id,
    })
  }
}

// ─── LedgerStore impl ────────────────────────────────────────────────────────

impl LedgerStore for MemoryLedger {
  // ── Profiles ──────────────────────────────────────────────────────────────

  fn register_profile(&self, profile: Profile) -> Result<Profile> {
    let mut state = self.write();
    if state.profiles.iter().any(|p| p.id == profile.id) {
      return Err(Error::InvalidInput(format!(
        "profile {} is already registered",
        profile.id
      )));
    }
    state.profiles.push(profile.clone());
    debug!(profile_id = %profile.id, role = %profile.role, "registered profile");
    Ok(profile)
  }

  fn profile(&self, id: &ProfileId) -> Result<Option<Profile>> {
    Ok(self.read().profiles.iter().find(|p| &p.id == id).cloned())
  }

  fn profiles(&self, role: Option<Role>) -> Result<Vec<Profile>> {
    Ok(
      self
        .read()
        .profiles
        .iter()
        .filter(|p| role.is_none_or(|r| p.role == r))
        .cloned()
        .collect(),
    )
  }

  // ── Jobs ──────────────────────────────────────────────────────────────────

  fn publish_job(&self, actor: &Profile, draft: JobDraft) -> Result<Job> {
    actor.require_role(Role::Organizer)?;
    let job = draft.into_job(actor.id.clone())?;

    self.write().jobs.insert(0, job.clone());
    info!(
      job_id = %job.id,
      organizer_id = %job.organizer_id,
      requirements = job.requirements.len(),
      "published job"
    );
    Ok(job)
  }

  fn job(&self, id: JobId) -> Result<Option<Job>> {
    Ok(self.read().job(id).cloned())
  }

  fn jobs(&self) -> Result<Vec<Job>> { Ok(self.read().jobs.clone()) }

  fn jobs_by_organizer(&self, organizer_id: &ProfileId) -> Result<Vec<Job>> {
    Ok(
      self
        .read()
        .jobs
        .iter()
        .filter(|j| &j.organizer_id == organizer_id)
        .cloned()
        .collect(),
    )
  }

  fn update_job_status(
    &self,
    actor: &Profile,
    job_id: JobId,
    status: JobStatus,
  ) -> Result<Outcome<Job>> {
    let mut state = self.write();
    let job = state
      .jobs
      .iter_mut()
      .find(|j| j.id == job_id)
      .ok_or(Error::JobNotFound(job_id))?;
    require_owner(actor, job)?;

    if job.status == status {
      debug!(%job_id, ?status, "job already in requested status");
      return Ok(Outcome::Unchanged(job.clone()));
    }
    if job.status == JobStatus::Completed {
      return Err(Error::InvalidInput(format!(
        "job {job_id} is completed and cannot be reopened"
      )));
    }

    job.status = status;
    info!(%job_id, ?status, "job status changed");
    Ok(Outcome::Changed(job.clone()))
  }

  // ── Applications ──────────────────────────────────────────────────────────

  fn apply(
    &self,
    actor: &Profile,
    job_id: JobId,
    requirement_id: RequirementId,
  ) -> Result<Outcome<Application>> {
    actor.require_role(Role::Candidate)?;

    let mut guard = self.write();
    let state = &mut *guard;

    let job = state.job(job_id).ok_or(Error::JobNotFound(job_id))?;
    if !job.has_requirement(requirement_id) {
      return Err(Error::RequirementNotFound(requirement_id));
    }

    if let Some(existing) = state
      .applications
      .iter()
      .find(|a| a.is_for(requirement_id, &actor.id))
    {
      debug!(
        application_id = %existing.id,
        candidate_id = %actor.id,
        "candidate already applied to requirement"
      );
      return Ok(Outcome::Unchanged(existing.clone()));
    }

    if !job.is_open() {
      return Err(Error::JobClosed(job_id));
    }

    // Headcount is not checked here: organizers may collect more applicants
    // than positions and pick among them.
    let application = Application {
      id: ApplicationId::generate(),
      requirement_id,
      candidate_id: actor.id.clone(),
      status: ApplicationStatus::Pending,
      job_title: job.title.clone(),
    };
    state.applications.push(application.clone());

    info!(
      application_id = %application.id,
      %job_id,
      %requirement_id,
      candidate_id = %actor.id,
      "application submitted"
    );
    Ok(Outcome::Changed(application))
  }

  fn application(&self, id: ApplicationId) -> Result<Option<Application>> {
    Ok(self.read().applications.iter().find(|a| a.id == id).cloned())
  }

  fn applications_by_candidate(
    &self,
    candidate_id: &ProfileId,
  ) -> Result<Vec<Application>> {
    Ok(
      self
        .read()
        .applications
        .iter()
        .filter(|a| &a.candidate_id == candidate_id)
        .cloned()
        .collect(),
    )
  }

  fn applications_for_job(&self, job_id: JobId) -> Result<Vec<Application>> {
    let state = self.read();
    let job = state.job(job_id).ok_or(Error::JobNotFound(job_id))?;
    Ok(
      state
        .applications
        .iter()
        .filter(|a| job.has_requirement(a.requirement_id))
        .cloned()
        .collect(),
    )
  }

  fn applicants_for_job(&self, job_id: JobId) -> Result<Vec<Applicant>> {
    let state = self.read();
    let job = state.job(job_id).ok_or(Error::JobNotFound(job_id))?;
    Ok(
      state
        .applications
        .iter()
        .filter(|a| job.has_requirement(a.requirement_id))
        .map(|a| Applicant {
          application: a.clone(),
          candidate:   state
            .profiles
            .iter()
            .find(|p| p.id == a.candidate_id)
            .cloned(),
          reviewed:    state
            .reviews
            .iter()
            .any(|r| r.job_id == job_id && r.reviewee_id == a.candidate_id),
        })
        .collect(),
    )
  }

  fn has_applied(
    &self,
    requirement_id: RequirementId,
    candidate_id: &ProfileId,
  ) -> Result<bool> {
    Ok(
      self
        .read()
        .applications
        .iter()
        .any(|a| a.is_for(requirement_id, candidate_id)),
    )
  }

  fn update_application_status(
    &self,
    actor: &Profile,
    application_id: ApplicationId,
    status: ApplicationStatus,
  ) -> Result<Outcome<Application>> {
    if status == ApplicationStatus::Pending {
      return Err(Error::InvalidInput(
        "an application cannot be moved back to pending".into(),
      ));
    }

    let mut guard = self.write();
    let state = &mut *guard;

    let application = state
      .applications
      .iter_mut()
      .find(|a| a.id == application_id)
      .ok_or(Error::ApplicationNotFound(application_id))?;
    let requirement_id = application.requirement_id;

    let job = state
      .jobs
      .iter_mut()
      .find(|j| j.has_requirement(requirement_id))
      .ok_or(Error::RequirementNotFound(requirement_id))?;
    require_owner(actor, job)?;

    if !application.status.can_transition_to(status) {
      debug!(
        %application_id,
        current = ?application.status,
        requested = ?status,
        "application already decided"
      );
      return Ok(Outcome::Unchanged(application.clone()));
    }

    if status == ApplicationStatus::Accepted {
      let requirement = job
        .requirement_mut(requirement_id)
        .ok_or(Error::RequirementNotFound(requirement_id))?;
      requirement.fill_one()?;
      info!(
        %requirement_id,
        filled = requirement.count_filled,
        needed = requirement.count_needed,
        "requirement headcount updated"
      );
    }
    application.status = status;

    info!(%application_id, ?status, "application decided");
    Ok(Outcome::Changed(application.clone()))
  }

  // ── Reviews ───────────────────────────────────────────────────────────────

  fn submit_review(
    &self,
    actor: &Profile,
    review: NewReview,
  ) -> Result<Outcome<Review>> {
    review.validate(&actor.id)?;

    let mut state = self.write();
    if state.job(review.job_id).is_none() {
      return Err(Error::JobNotFound(review.job_id));
    }

    if let Some(existing) = state
      .reviews
      .iter()
      .find(|r| r.job_id == review.job_id && r.reviewee_id == review.reviewee_id)
    {
      debug!(
        review_id = %existing.id,
        reviewee_id = %existing.reviewee_id,
        "reviewee already reviewed for this job"
      );
      return Ok(Outcome::Unchanged(existing.clone()));
    }

    let review = review.into_review(actor.id.clone());
    state.reviews.push(review.clone());
    info!(
      review_id = %review.id,
      job_id = %review.job_id,
      reviewee_id = %review.reviewee_id,
      rating = review.rating,
      "review submitted"
    );
    Ok(Outcome::Changed(review))
  }

  fn reviews_for_job(&self, job_id: JobId) -> Result<Vec<Review>> {
    Ok(
      self
        .read()
        .reviews
        .iter()
        .filter(|r| r.job_id == job_id)
        .cloned()
        .collect(),
    )
  }

  fn reviews_for_profile(&self, reviewee_id: &ProfileId) -> Result<Vec<Review>> {
    Ok(
      self
        .read()
        .reviews
        .iter()
        .filter(|r| &r.reviewee_id == reviewee_id)
        .cloned()
        .collect(),
    )
  }

  fn review_exists(
    &self,
    job_id: JobId,
    reviewee_id: &ProfileId,
  ) -> Result<bool> {
    Ok(
      self
        .read()
        .reviews
        .iter()
        .any(|r| r.job_id == job_id && &r.reviewee_id == reviewee_id),
    )
  }
}
