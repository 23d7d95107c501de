//! The acting identity.
//!
//! A session holds one organizer identity and one candidate identity and
//! marks exactly one of them active. Ledger operations never consult the
//! session themselves; callers pass [`Session::active`] as the actor.

use crate::{
  Error, Result,
  profile::{Profile, Role},
};

#[derive(Debug, Clone)]
pub struct Session {
  organizer: Profile,
  candidate: Profile,
  active:    Role,
}

impl Session {
  /// Build a session starting as the organizer.
  pub fn new(organizer: Profile, candidate: Profile) -> Result<Self> {
    organizer.require_role(Role::Organizer).map_err(|_| {
      Error::InvalidInput(format!(
        "session organizer {} has role {}",
        organizer.id, organizer.role
      ))
    })?;
    candidate.require_role(Role::Candidate).map_err(|_| {
      Error::InvalidInput(format!(
        "session candidate {} has role {}",
        candidate.id, candidate.role
      ))
    })?;
    Ok(Self { organizer, candidate, active: Role::Organizer })
  }

  pub fn active(&self) -> &Profile {
    match self.active {
      Role::Organizer => &self.organizer,
      Role::Candidate => &self.candidate,
    }
  }

  pub fn role(&self) -> Role { self.active }

  /// Toggle between the organizer and candidate identities.
  pub fn switch_role(&mut self) -> &Profile {
    self.active = self.active.other();
    self.active()
  }

  pub fn act_as(&mut self, role: Role) -> &Profile {
    self.active = role;
    self.active()
  }
}
