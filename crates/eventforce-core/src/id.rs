//! Strongly typed identifiers.
//!
//! Identifiers allocated by the ledger wrap a random v4 UUID. Profile
//! identifiers are plain strings because profiles are created outside the
//! ledger (seed data, registration flows) and keep whatever id they arrive
//! with.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! ledger_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(
      Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
      Deserialize,
    )]
    #[serde(transparent)]
    pub struct $name(pub Uuid);

    impl $name {
      /// Allocate a fresh, random identifier.
      pub fn generate() -> Self { Self(Uuid::new_v4()) }
    }

    impl From<Uuid> for $name {
      fn from(id: Uuid) -> Self { Self(id) }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
      }
    }
  };
}

ledger_id!(
  /// Identifies a [`Job`](crate::job::Job).
  JobId
);
ledger_id!(
  /// Identifies a [`JobRequirement`](crate::job::JobRequirement).
  RequirementId
);
ledger_id!(
  /// Identifies an [`Application`](crate::application::Application).
  ApplicationId
);
ledger_id!(
  /// Identifies a [`Review`](crate::review::Review).
  ReviewId
);

/// Identifies a [`Profile`](crate::profile::Profile), e.g. `"cand-1"`.
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProfileId(pub String);

impl ProfileId {
  pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for ProfileId {
  fn from(id: &str) -> Self { Self(id.to_owned()) }
}

impl fmt::Display for ProfileId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
