//! Jobs and their staffing requirements.
//!
//! A job is published once from a [`JobDraft`]. After that its requirement
//! list is fixed; the only field that keeps moving is each requirement's
//! `count_filled`, and the job's status, which only ever goes from `Open` to
//! `Completed`.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  id::{JobId, ProfileId, RequirementId},
};

// ─── Status ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
  Open,
  Completed,
}

// ─── Job details ─────────────────────────────────────────────────────────────

/// What the organizer provides on site.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Facilities {
  pub food:   bool,
  pub travel: bool,
  pub stay:   bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DressCode {
  pub male:   String,
  pub female: String,
}

// ─── Requirement ─────────────────────────────────────────────────────────────

/// One staffing slot-group within a job, e.g. four runners at 1500 each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirement {
  pub id:                RequirementId,
  pub job_id:            JobId,
  /// Free-text label such as `"Runner"` or `"Hostess"`.
  pub profile_type:      String,
  pub count_needed:      u32,
  /// Accepted applications counted against `count_needed`. Never exceeds it.
  pub count_filled:      u32,
  pub budget_per_person: u32,
  pub description:       String,
}

impl JobRequirement {
  /// Positions still open.
  pub fn remaining(&self) -> u32 {
    self.count_needed.saturating_sub(self.count_filled)
  }

  pub fn is_full(&self) -> bool { self.remaining() == 0 }

  /// Count one more accepted worker against this requirement.
  pub fn fill_one(&mut self) -> Result<()> {
    if self.is_full() {
      return Err(Error::RequirementFull(self.id));
    }
    self.count_filled += 1;
    Ok(())
  }
}

// ─── Job ─────────────────────────────────────────────────────────────────────

/// A staffing event posted by exactly one organizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
  pub id:            JobId,
  pub organizer_id:  ProfileId,
  pub title:         String,
  pub location_text: String,
  pub date:          NaiveDate,
  pub start_time:    NaiveTime,
  pub end_time:      NaiveTime,
  pub dress_code:    DressCode,
  pub facilities:    Facilities,
  pub status:        JobStatus,
  pub requirements:  Vec<JobRequirement>,
}

impl Job {
  pub fn is_open(&self) -> bool { self.status == JobStatus::Open }

  pub fn requirement(&self, id: RequirementId) -> Option<&JobRequirement> {
    self.requirements.iter().find(|r| r.id == id)
  }

  pub fn requirement_mut(
    &mut self,
    id: RequirementId,
  ) -> Option<&mut JobRequirement> {
    self.requirements.iter_mut().find(|r| r.id == id)
  }

  pub fn has_requirement(&self, id: RequirementId) -> bool {
    self.requirement(id).is_some()
  }

  /// Open positions summed over every requirement.
  pub fn positions_left(&self) -> u32 {
    self.requirements.iter().map(JobRequirement::remaining).sum()
  }
}

// ─── Drafts ──────────────────────────────────────────────────────────────────

/// Organizer input for one requirement of a job being published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementDraft {
  pub profile_type:      String,
  pub count_needed:      u32,
  pub budget_per_person: u32,
  #[serde(default)]
  pub description:       String,
}

impl RequirementDraft {
  pub fn new(
    profile_type: impl Into<String>,
    count_needed: u32,
    budget_per_person: u32,
  ) -> Self {
    Self {
      profile_type: profile_type.into(),
      count_needed,
      budget_per_person,
      description: String::new(),
    }
  }
}

/// Input to [`crate::store::LedgerStore::publish_job`]. Ids, owner and status
/// are always assigned by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
  pub title:         String,
  pub location_text: String,
  pub date:          NaiveDate,
  pub start_time:    NaiveTime,
  pub end_time:      NaiveTime,
  #[serde(default)]
  pub dress_code:    DressCode,
  #[serde(default)]
  pub facilities:    Facilities,
  pub requirements:  Vec<RequirementDraft>,
}

impl JobDraft {
  pub fn validate(&self) -> Result<()> {
    if self.title.trim().is_empty() {
      return Err(Error::invalid("job title must not be blank"));
    }
    if self.requirements.is_empty() {
      return Err(Error::invalid("a job needs at least one requirement"));
    }
    for (idx, req) in self.requirements.iter().enumerate() {
      if req.profile_type.trim().is_empty() {
        return Err(Error::invalid(format!(
          "requirement {idx}: profile type must not be blank"
        )));
      }
      if req.count_needed < 1 {
        return Err(Error::invalid(format!(
          "requirement {idx}: count_needed must be at least 1"
        )));
      }
    }
    Ok(())
  }

  /// Validate the draft and turn it into an open [`Job`] owned by
  /// `organizer_id`, allocating fresh ids for the job and each requirement.
  pub fn into_job(self, organizer_id: ProfileId) -> Result<Job> {
    self.validate()?;

    let job_id = JobId::generate();
    let requirements = self
      .requirements
      .into_iter()
      .map(|draft| JobRequirement {
        id:                RequirementId::generate(),
        job_id,
        profile_type:      draft.profile_type,
        count_needed:      draft.count_needed,
        count_filled:      0,
        budget_per_person: draft.budget_per_person,
        description:       draft.description,
      })
      .collect();

    Ok(Job {
      id: job_id,
      organizer_id,
      title: self.title,
      location_text: self.location_text,
      date: self.date,
      start_time: self.start_time,
      end_time: self.end_time,
      dress_code: self.dress_code,
      facilities: self.facilities,
      status: JobStatus::Open,
      requirements,
    })
  }
}
