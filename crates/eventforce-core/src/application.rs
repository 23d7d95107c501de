//! Applications: a candidate's request to fill one requirement.
//!
//! Status moves `Pending → Accepted` or `Pending → Rejected`; both targets
//! are terminal.

use serde::{Deserialize, Serialize};

use crate::{
  id::{ApplicationId, ProfileId, RequirementId},
  profile::Profile,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
  Pending,
  Accepted,
  Rejected,
}

impl ApplicationStatus {
  pub fn is_terminal(self) -> bool { !matches!(self, Self::Pending) }

  /// Whether a decision may move an application from `self` to `next`.
  pub fn can_transition_to(self, next: Self) -> bool {
    !self.is_terminal() && next.is_terminal()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
  pub id:             ApplicationId,
  pub requirement_id: RequirementId,
  pub candidate_id:   ProfileId,
  pub status:         ApplicationStatus,
  /// The job title as it read when the application was made. A snapshot
  /// for display; later title edits are not reflected here.
  pub job_title:      String,
}

impl Application {
  pub fn is_for(
    &self,
    requirement_id: RequirementId,
    candidate_id: &ProfileId,
  ) -> bool {
    self.requirement_id == requirement_id && &self.candidate_id == candidate_id
  }
}

/// An application joined with the applicant's registered profile and
/// whether the applicant has been reviewed for the job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Applicant {
  #[serde(flatten)]
  pub application: Application,
  /// `None` when the candidate never registered a profile.
  pub candidate:   Option<Profile>,
  pub reviewed:    bool,
}
