//! JSON snapshot of a ledger: the five entity collections plus a format
//! version.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use eventforce_core::{
  application::{Application, ApplicationStatus},
  job::Job,
  profile::Profile,
  review::{RATING_RANGE, Review},
};

use crate::{Error, Result};

/// Bumped whenever the snapshot layout changes incompatibly.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
  pub version:      u32,
  #[serde(default)]
  pub profiles:     Vec<Profile>,
  /// Most recently published first.
  #[serde(default)]
  pub jobs:         Vec<Job>,
  #[serde(default)]
  pub applications: Vec<Application>,
  #[serde(default)]
  pub reviews:      Vec<Review>,
}

impl LedgerSnapshot {
  pub fn from_json(json: &str) -> Result<Self> {
    Ok(serde_json::from_str(json)?)
  }

  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  /// Check every invariant the ledger maintains for its own state.
  pub(crate) fn validate(&self) -> Result<()> {
    if self.version != SNAPSHOT_VERSION {
      return Err(Error::UnsupportedVersion {
        found:    self.version,
        expected: SNAPSHOT_VERSION,
      });
    }

    let mut profile_ids = HashSet::new();
    for profile in &self.profiles {
      if !profile_ids.insert(&profile.id) {
        return Err(inconsistent(format!("duplicate profile {}", profile.id)));
      }
    }

    let mut job_ids = HashSet::new();
    // Requirement id to (filled, needed) as recorded on the job.
    let mut requirements = HashMap::new();
    for job in &self.jobs {
      if !job_ids.insert(job.id) {
        return Err(inconsistent(format!("duplicate job {}", job.id)));
      }
      if job.requirements.is_empty() {
        return Err(inconsistent(format!("job {} has no requirements", job.id)));
      }
      for req in &job.requirements {
        if requirements
          .insert(req.id, (req.count_filled, req.count_needed))
          .is_some()
        {
          return Err(inconsistent(format!("duplicate requirement {}", req.id)));
        }
        if req.job_id != job.id {
          return Err(inconsistent(format!(
            "requirement {} claims job {} but is listed under job {}",
            req.id, req.job_id, job.id
          )));
        }
        if req.count_needed < 1 || req.count_filled > req.count_needed {
          return Err(inconsistent(format!(
            "requirement {} has {} of {} positions filled",
            req.id, req.count_filled, req.count_needed
          )));
        }
      }
    }

    let mut application_ids = HashSet::new();
    let mut applicants = HashSet::new();
    let mut accepted: HashMap<_, u32> = HashMap::new();
    for app in &self.applications {
      if !application_ids.insert(app.id) {
        return Err(inconsistent(format!("duplicate application {}", app.id)));
      }
      if !requirements.contains_key(&app.requirement_id) {
        return Err(inconsistent(format!(
          "application {} targets unknown requirement {}",
          app.id, app.requirement_id
        )));
      }
      if !applicants.insert((app.requirement_id, &app.candidate_id)) {
        return Err(inconsistent(format!(
          "candidate {} applied to requirement {} more than once",
          app.candidate_id, app.requirement_id
        )));
      }
      if app.status == ApplicationStatus::Accepted {
        *accepted.entry(app.requirement_id).or_default() += 1;
      }
    }

    for (id, (filled, needed)) in &requirements {
      let count = accepted.get(id).copied().unwrap_or(0);
      if count != *filled {
        return Err(inconsistent(format!(
          "requirement {id} records {filled} filled of {needed} but has \
           {count} accepted applications"
        )));
      }
    }

    let mut review_ids = HashSet::new();
    let mut reviewed = HashSet::new();
    for review in &self.reviews {
      if !review_ids.insert(review.id) {
        return Err(inconsistent(format!("duplicate review {}", review.id)));
      }
      if !job_ids.contains(&review.job_id) {
        return Err(inconsistent(format!(
          "review {} refers to unknown job {}",
          review.id, review.job_id
        )));
      }
      if !RATING_RANGE.contains(&review.rating) {
        return Err(inconsistent(format!(
          "review {} has rating {} outside {}..={}",
          review.id,
          review.rating,
          RATING_RANGE.start(),
          RATING_RANGE.end()
        )));
      }
      if review.reviewer_id == review.reviewee_id {
        return Err(inconsistent(format!(
          "review {} is a self review by {}",
          review.id, review.reviewer_id
        )));
      }
      if !reviewed.insert((review.job_id, &review.reviewee_id)) {
        return Err(inconsistent(format!(
          "{} reviewed more than once for job {}",
          review.reviewee_id, review.job_id
        )));
      }
    }

    Ok(())
  }
}

fn inconsistent(message: String) -> Error { Error::Inconsistent(message) }
