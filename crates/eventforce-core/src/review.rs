//! Post-event reviews between profiles, scoped to a job.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  id::{JobId, ProfileId, ReviewId},
};

/// Star ratings a review may carry.
pub const RATING_RANGE: RangeInclusive<u8> = 1..=5;

/// An immutable rating and comment. At most one exists per
/// (`job_id`, `reviewee_id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
  pub id:          ReviewId,
  pub job_id:      JobId,
  pub reviewer_id: ProfileId,
  pub reviewee_id: ProfileId,
  pub rating:      u8,
  pub comment:     String,
  /// Ledger-assigned; never changes after creation.
  pub created_at:  DateTime<Utc>,
}

/// Input to [`crate::store::LedgerStore::submit_review`]. The reviewer is
/// the acting profile; id and timestamp are set by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
  pub job_id:      JobId,
  pub reviewee_id: ProfileId,
  pub rating:      u8,
  #[serde(default)]
  pub comment:     String,
}

impl NewReview {
  pub fn validate(&self, reviewer_id: &ProfileId) -> Result<()> {
    if !RATING_RANGE.contains(&self.rating) {
      return Err(Error::invalid(format!(
        "rating must be between {} and {}, got {}",
        RATING_RANGE.start(),
        RATING_RANGE.end(),
        self.rating
      )));
    }
    if &self.reviewee_id == reviewer_id {
      return Err(Error::invalid("a profile cannot review itself"));
    }
    Ok(())
  }

  pub fn into_review(self, reviewer_id: ProfileId) -> Review {
    Review {
      id: ReviewId::generate(),
      job_id: self.job_id,
      reviewer_id,
      reviewee_id: self.reviewee_id,
      rating: self.rating,
      comment: self.comment,
      created_at: Utc::now(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn input(rating: u8) -> NewReview {
    NewReview {
      job_id: JobId::generate(),
      reviewee_id: ProfileId::from("cand-1"),
      rating,
      comment: "Great work".into(),
    }
  }

  #[test]
  fn ratings_outside_one_to_five_are_rejected() {
    let reviewer = ProfileId::from("user-org-123");
    assert!(input(1).validate(&reviewer).is_ok());
    assert!(input(5).validate(&reviewer).is_ok());
    assert!(matches!(
      input(0).validate(&reviewer),
      Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
      input(6).validate(&reviewer),
      Err(Error::InvalidInput(_))
    ));
  }

  #[test]
  fn self_review_is_rejected() {
    let reviewer = ProfileId::from("cand-1");
    assert!(matches!(
      input(4).validate(&reviewer),
      Err(Error::InvalidInput(_))
    ));
  }
}
