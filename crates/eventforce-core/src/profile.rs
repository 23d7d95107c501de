//! Profiles: a person using the marketplace.
//!
//! Profiles are created outside the ledger and registered with it; the
//! ledger never edits them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, id::ProfileId};

/// Which side of the marketplace a profile acts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Organizer,
  Candidate,
}

impl Role {
  pub fn other(self) -> Self {
    match self {
      Self::Organizer => Self::Candidate,
      Self::Candidate => Self::Organizer,
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Organizer => "organizer",
      Self::Candidate => "candidate",
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
  pub id:               ProfileId,
  pub role:             Role,
  pub full_name:        String,
  pub bio:              String,
  pub location:         String,
  pub experience_years: u32,
  /// Image references in display order; the first is the avatar.
  pub profile_pics:     Vec<String>,
  /// Average rating, typically 0.0–5.0.
  pub rating:           f32,
}

impl Profile {
  /// Fail with [`Error::Forbidden`] unless this profile acts as `required`.
  pub fn require_role(&self, required: Role) -> Result<()> {
    if self.role == required {
      Ok(())
    } else {
      Err(Error::Forbidden { required, actual: self.role })
    }
  }
}
