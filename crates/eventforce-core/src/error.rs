//! Error types for `eventforce-core`.

use thiserror::Error;

use crate::{
  id::{ApplicationId, JobId, ProfileId, RequirementId},
  profile::Role,
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("profile not found: {0}")]
  ProfileNotFound(ProfileId),

  #[error("job not found: {0}")]
  JobNotFound(JobId),

  #[error("requirement not found: {0}")]
  RequirementNotFound(RequirementId),

  #[error("application not found: {0}")]
  ApplicationNotFound(ApplicationId),

  #[error("invalid input: {0}")]
  InvalidInput(String),

  #[error("operation requires the {required} role, active role is {actual}")]
  Forbidden { required: Role, actual: Role },

  #[error("profile {profile_id} does not own job {job_id}")]
  NotJobOwner { profile_id: ProfileId, job_id: JobId },

  #[error("requirement {0} has no open positions left")]
  RequirementFull(RequirementId),

  #[error("job {0} is completed and no longer takes applications")]
  JobClosed(JobId),

  #[error("backend error: {0}")]
  Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Coarse classification of an [`Error`], used by adapters to pick a
/// response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  NotFound,
  InvalidInput,
  Forbidden,
  /// The request is well-formed but conflicts with the current state.
  Conflict,
  Backend,
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::ProfileNotFound(_)
      | Self::JobNotFound(_)
      | Self::RequirementNotFound(_)
      | Self::ApplicationNotFound(_) => ErrorKind::NotFound,
      Self::InvalidInput(_) => ErrorKind::InvalidInput,
      Self::Forbidden { .. } | Self::NotJobOwner { .. } => ErrorKind::Forbidden,
      Self::RequirementFull(_) | Self::JobClosed(_) => ErrorKind::Conflict,
      Self::Backend(_) => ErrorKind::Backend,
    }
  }

  pub(crate) fn invalid(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
