//! Integration tests for `MemoryLedger`.

use chrono::{NaiveDate, NaiveTime};
use eventforce_core::{
  Error,
  application::ApplicationStatus,
  id::{ApplicationId, JobId, ProfileId, RequirementId, ReviewId},
  job::{DressCode, Facilities, Job, JobDraft, JobStatus, RequirementDraft},
  profile::{Profile, Role},
  review::NewReview,
  store::{LedgerStore, Outcome},
};

use crate::{Error as SnapshotError, LedgerSnapshot, MemoryLedger};

fn profile(id: &str, role: Role) -> Profile {
  Profile {
    id: ProfileId::from(id),
    role,
    full_name: id.to_uppercase(),
    bio: String::new(),
    location: "Noida, UP".into(),
    experience_years: 2,
    profile_pics: vec![],
    rating: 4.7,
  }
}

fn organizer() -> Profile { profile("user-org-123", Role::Organizer) }

fn candidate(id: &str) -> Profile { profile(id, Role::Candidate) }

fn draft(title: &str, requirements: Vec<RequirementDraft>) -> JobDraft {
  JobDraft {
    title: title.into(),
    location_text: "Pari Chowk, Greater Noida".into(),
    date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
    start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
    end_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    dress_code: DressCode {
      male:   "Black Suit".into(),
      female: "Saree".into(),
    },
    facilities: Facilities { food: true, travel: true, stay: false },
    requirements,
  }
}

/// A ledger with one published job holding a single requirement.
fn ledger_with_job(count_needed: u32) -> (MemoryLedger, Job) {
  let ledger = MemoryLedger::new();
  let job = ledger
    .publish_job(
      &organizer(),
      draft("Lakeside Wedding Ceremony", vec![RequirementDraft::new(
        "Runner",
        count_needed,
        1500,
      )]),
    )
    .unwrap();
  (ledger, job)
}

fn first_requirement(job: &Job) -> RequirementId { job.requirements[0].id }

fn count_filled(ledger: &MemoryLedger, job_id: JobId) -> u32 {
  ledger.job(job_id).unwrap().unwrap().requirements[0].count_filled
}

fn apply(
  ledger: &MemoryLedger,
  job: &Job,
  candidate_id: &str,
) -> ApplicationId {
  ledger
    .apply(&candidate(candidate_id), job.id, first_requirement(job))
    .unwrap()
    .into_inner()
    .id
}

// ─── Publishing ──────────────────────────────────────────────────────────────

#[test]
fn publish_creates_open_job_with_empty_requirement() {
  let (ledger, job) = ledger_with_job(4);

  assert_eq!(job.status, JobStatus::Open);
  assert_eq!(job.organizer_id, organizer().id);
  assert_eq!(job.requirements.len(), 1);
  let req = &job.requirements[0];
  assert_eq!(req.profile_type, "Runner");
  assert_eq!(req.count_needed, 4);
  assert_eq!(req.count_filled, 0);
  assert_eq!(req.budget_per_person, 1500);

  assert_eq!(ledger.job(job.id).unwrap(), Some(job));
}

#[test]
fn newest_job_is_listed_first() {
  let ledger = MemoryLedger::new();
  let org = organizer();
  let first = ledger
    .publish_job(&org, draft("First", vec![RequirementDraft::new("Runner", 1, 0)]))
    .unwrap();
  let second = ledger
    .publish_job(&org, draft("Second", vec![RequirementDraft::new("Host", 1, 0)]))
    .unwrap();

  let ids: Vec<_> = ledger.jobs().unwrap().into_iter().map(|j| j.id).collect();
  assert_eq!(ids, vec![second.id, first.id]);
}

#[test]
fn jobs_by_organizer_filters_owner() {
  let ledger = MemoryLedger::new();
  let other = profile("org-2", Role::Organizer);
  ledger
    .publish_job(&organizer(), draft("Mine", vec![RequirementDraft::new("Runner", 1, 0)]))
    .unwrap();
  ledger
    .publish_job(&other, draft("Theirs", vec![RequirementDraft::new("Runner", 1, 0)]))
    .unwrap();

  let mine = ledger.jobs_by_organizer(&organizer().id).unwrap();
  assert_eq!(mine.len(), 1);
  assert_eq!(mine[0].title, "Mine");
}

#[test]
fn candidates_cannot_publish() {
  let ledger = MemoryLedger::new();
  let err = ledger
    .publish_job(
      &candidate("cand-1"),
      draft("Nope", vec![RequirementDraft::new("Runner", 1, 0)]),
    )
    .unwrap_err();
  assert!(matches!(err, Error::Forbidden { required: Role::Organizer, .. }));
  assert!(ledger.jobs().unwrap().is_empty());
}

#[test]
fn publish_rejects_zero_headcount() {
  let ledger = MemoryLedger::new();
  let err = ledger
    .publish_job(
      &organizer(),
      draft("Bad", vec![RequirementDraft::new("Runner", 0, 100)]),
    )
    .unwrap_err();
  assert!(matches!(err, Error::InvalidInput(_)));
  assert!(ledger.jobs().unwrap().is_empty());
}

// ─── Applying ────────────────────────────────────────────────────────────────

#[test]
fn second_application_to_same_requirement_is_a_no_op() {
  let (ledger, job) = ledger_with_job(4);
  let cand = candidate("cand-1");
  let req = first_requirement(&job);

  let first = ledger.apply(&cand, job.id, req).unwrap();
  assert!(first.is_changed());
  assert_eq!(first.value().status, ApplicationStatus::Pending);
  assert_eq!(first.value().job_title, "Lakeside Wedding Ceremony");

  let second = ledger.apply(&cand, job.id, req).unwrap();
  assert_eq!(second, Outcome::Unchanged(first.value().clone()));

  assert_eq!(ledger.applications_by_candidate(&cand.id).unwrap().len(), 1);
  assert!(ledger.has_applied(req, &cand.id).unwrap());
  assert!(!ledger.has_applied(req, &ProfileId::from("cand-2")).unwrap());
}

#[test]
fn organizers_cannot_apply() {
  let (ledger, job) = ledger_with_job(4);
  let err = ledger
    .apply(&organizer(), job.id, first_requirement(&job))
    .unwrap_err();
  assert!(matches!(err, Error::Forbidden { required: Role::Candidate, .. }));
  assert!(ledger.applications_for_job(job.id).unwrap().is_empty());
}

#[test]
fn apply_checks_the_requirement_belongs_to_the_job() {
  let (ledger, job) = ledger_with_job(4);
  let cand = candidate("cand-1");

  let err = ledger
    .apply(&cand, job.id, RequirementId::generate())
    .unwrap_err();
  assert!(matches!(err, Error::RequirementNotFound(_)));

  let err = ledger
    .apply(&cand, JobId::generate(), first_requirement(&job))
    .unwrap_err();
  assert!(matches!(err, Error::JobNotFound(_)));
}

#[test]
fn applicants_may_outnumber_positions() {
  let (ledger, job) = ledger_with_job(1);
  for id in ["cand-1", "cand-2", "cand-3"] {
    apply(&ledger, &job, id);
  }
  assert_eq!(ledger.applications_for_job(job.id).unwrap().len(), 3);
}

#[test]
fn completed_jobs_take_no_new_applications() {
  let (ledger, job) = ledger_with_job(2);
  ledger
    .update_job_status(&organizer(), job.id, JobStatus::Completed)
    .unwrap();

  let err = ledger
    .apply(&candidate("cand-1"), job.id, first_requirement(&job))
    .unwrap_err();
  assert!(matches!(err, Error::JobClosed(_)));
}

#[test]
fn existing_application_survives_job_completion() {
  let (ledger, job) = ledger_with_job(2);
  let app_id = apply(&ledger, &job, "cand-1");
  ledger
    .update_job_status(&organizer(), job.id, JobStatus::Completed)
    .unwrap();

  let outcome = ledger
    .apply(&candidate("cand-1"), job.id, first_requirement(&job))
    .unwrap();
  assert!(!outcome.is_changed());
  assert_eq!(outcome.value().id, app_id);
}

#[test]
fn job_title_on_application_is_a_snapshot() {
  let (ledger, job) = ledger_with_job(2);
  let app_id = apply(&ledger, &job, "cand-1");
  let app = ledger.application(app_id).unwrap().unwrap();
  assert_eq!(app.job_title, job.title);
}

#[test]
fn applications_for_job_only_returns_that_jobs_requirements() {
  let (ledger, job) = ledger_with_job(2);
  let other = ledger
    .publish_job(
      &organizer(),
      draft("Other", vec![RequirementDraft::new("Valet", 3, 800)]),
    )
    .unwrap();
  apply(&ledger, &job, "cand-1");
  apply(&ledger, &other, "cand-1");
  apply(&ledger, &other, "cand-2");

  assert_eq!(ledger.applications_for_job(job.id).unwrap().len(), 1);
  assert_eq!(ledger.applications_for_job(other.id).unwrap().len(), 2);
  assert!(matches!(
    ledger.applications_for_job(JobId::generate()),
    Err(Error::JobNotFound(_))
  ));
}

// ─── Deciding applications ───────────────────────────────────────────────────

#[test]
fn accepting_twice_fills_exactly_once() {
  let (ledger, job) = ledger_with_job(4);
  let app_id = apply(&ledger, &job, "cand-1");
  let org = organizer();

  let first = ledger
    .update_application_status(&org, app_id, ApplicationStatus::Accepted)
    .unwrap();
  assert!(first.is_changed());
  assert_eq!(first.value().status, ApplicationStatus::Accepted);
  assert_eq!(count_filled(&ledger, job.id), 1);

  let second = ledger
    .update_application_status(&org, app_id, ApplicationStatus::Accepted)
    .unwrap();
  assert!(!second.is_changed());
  assert_eq!(count_filled(&ledger, job.id), 1);
}

#[test]
fn rejecting_leaves_headcount_alone() {
  let (ledger, job) = ledger_with_job(4);
  let app_id = apply(&ledger, &job, "cand-1");

  let outcome = ledger
    .update_application_status(&organizer(), app_id, ApplicationStatus::Rejected)
    .unwrap();
  assert_eq!(outcome.value().status, ApplicationStatus::Rejected);
  assert_eq!(count_filled(&ledger, job.id), 0);
}

#[test]
fn decided_applications_never_change_again() {
  let (ledger, job) = ledger_with_job(4);
  let org = organizer();
  let accepted = apply(&ledger, &job, "cand-1");
  let rejected = apply(&ledger, &job, "cand-2");
  ledger
    .update_application_status(&org, accepted, ApplicationStatus::Accepted)
    .unwrap();
  ledger
    .update_application_status(&org, rejected, ApplicationStatus::Rejected)
    .unwrap();

  let outcome = ledger
    .update_application_status(&org, accepted, ApplicationStatus::Rejected)
    .unwrap();
  assert_eq!(outcome.into_inner().status, ApplicationStatus::Accepted);

  let outcome = ledger
    .update_application_status(&org, rejected, ApplicationStatus::Accepted)
    .unwrap();
  assert_eq!(outcome.into_inner().status, ApplicationStatus::Rejected);
  assert_eq!(count_filled(&ledger, job.id), 1);

  let err = ledger
    .update_application_status(&org, accepted, ApplicationStatus::Pending)
    .unwrap_err();
  assert!(matches!(err, Error::InvalidInput(_)));
  assert_eq!(
    ledger.application(accepted).unwrap().unwrap().status,
    ApplicationStatus::Accepted
  );
}

#[test]
fn accepting_into_a_full_requirement_changes_nothing() {
  let (ledger, job) = ledger_with_job(1);
  let org = organizer();
  let first = apply(&ledger, &job, "cand-1");
  let second = apply(&ledger, &job, "cand-2");

  ledger
    .update_application_status(&org, first, ApplicationStatus::Accepted)
    .unwrap();
  let err = ledger
    .update_application_status(&org, second, ApplicationStatus::Accepted)
    .unwrap_err();
  assert!(matches!(err, Error::RequirementFull(_)));

  assert_eq!(count_filled(&ledger, job.id), 1);
  assert_eq!(
    ledger.application(second).unwrap().unwrap().status,
    ApplicationStatus::Pending
  );
}

#[test]
fn only_the_owning_organizer_decides() {
  let (ledger, job) = ledger_with_job(2);
  let app_id = apply(&ledger, &job, "cand-1");

  let err = ledger
    .update_application_status(
      &profile("org-2", Role::Organizer),
      app_id,
      ApplicationStatus::Accepted,
    )
    .unwrap_err();
  assert!(matches!(err, Error::NotJobOwner { .. }));
  assert_eq!(count_filled(&ledger, job.id), 0);
}

#[test]
fn deciding_an_unknown_application_is_not_found() {
  let (ledger, _) = ledger_with_job(2);
  let err = ledger
    .update_application_status(
      &organizer(),
      ApplicationId::generate(),
      ApplicationStatus::Accepted,
    )
    .unwrap_err();
  assert!(matches!(err, Error::ApplicationNotFound(_)));
}

#[test]
fn fill_count_never_exceeds_headcount() {
  let ledger = MemoryLedger::new();
  let org = organizer();
  let job = ledger
    .publish_job(
      &org,
      draft("Gala", vec![
        RequirementDraft::new("Runner", 2, 1500),
        RequirementDraft::new("Hostess", 1, 2000),
      ]),
    )
    .unwrap();

  let mut apps = Vec::new();
  for req in &job.requirements {
    for n in 0..4 {
      let cand = candidate(&format!("cand-{n}"));
      apps.push(ledger.apply(&cand, job.id, req.id).unwrap().into_inner().id);
    }
  }
  for app in &apps {
    let _ = ledger.update_application_status(&org, *app, ApplicationStatus::Accepted);
    let _ = ledger.update_application_status(&org, *app, ApplicationStatus::Accepted);
  }

  let job = ledger.job(job.id).unwrap().unwrap();
  for req in &job.requirements {
    assert_eq!(req.count_filled, req.count_needed);
  }
}

// ─── Job status ──────────────────────────────────────────────────────────────

#[test]
fn completing_twice_is_idempotent() {
  let (ledger, job) = ledger_with_job(2);
  let org = organizer();

  let first = ledger
    .update_job_status(&org, job.id, JobStatus::Completed)
    .unwrap();
  assert!(first.is_changed());
  let second = ledger
    .update_job_status(&org, job.id, JobStatus::Completed)
    .unwrap();
  assert!(!second.is_changed());
  assert_eq!(second.value().status, JobStatus::Completed);
}

#[test]
fn completed_jobs_cannot_reopen() {
  let (ledger, job) = ledger_with_job(2);
  let org = organizer();
  ledger
    .update_job_status(&org, job.id, JobStatus::Completed)
    .unwrap();

  let err = ledger
    .update_job_status(&org, job.id, JobStatus::Open)
    .unwrap_err();
  assert!(matches!(err, Error::InvalidInput(_)));
  assert_eq!(
    ledger.job(job.id).unwrap().unwrap().status,
    JobStatus::Completed
  );
}

#[test]
fn job_status_requires_owner() {
  let (ledger, job) = ledger_with_job(2);
  let err = ledger
    .update_job_status(&candidate("cand-1"), job.id, JobStatus::Completed)
    .unwrap_err();
  assert!(matches!(err, Error::NotJobOwner { .. }));
}

#[test]
fn applicants_join_profile_and_review_state() {
  let (ledger, job) = ledger_with_job(2);
  let rahul = candidate("cand-1");
  ledger.register_profile(rahul.clone()).unwrap();
  apply(&ledger, &job, "cand-1");
  apply(&ledger, &job, "cand-2");
  ledger
    .submit_review(&organizer(), review(job.id, "cand-1", 5))
    .unwrap();

  let applicants = ledger.applicants_for_job(job.id).unwrap();
  assert_eq!(applicants.len(), 2);
  assert_eq!(applicants[0].candidate, Some(rahul));
  assert!(applicants[0].reviewed);
  assert_eq!(applicants[1].application.candidate_id.as_str(), "cand-2");
  assert_eq!(applicants[1].candidate, None);
  assert!(!applicants[1].reviewed);

  assert!(matches!(
    ledger.applicants_for_job(JobId::generate()),
    Err(Error::JobNotFound(_))
  ));
}

// ─── Reviews ─────────────────────────────────────────────────────────────────

fn review(job_id: JobId, reviewee: &str, rating: u8) -> NewReview {
  NewReview {
    job_id,
    reviewee_id: ProfileId::from(reviewee),
    rating,
    comment: "Great work".into(),
  }
}

#[test]
fn review_after_completion_is_recorded() {
  let (ledger, job) = ledger_with_job(2);
  let org = organizer();
  ledger
    .update_job_status(&org, job.id, JobStatus::Completed)
    .unwrap();

  let outcome = ledger.submit_review(&org, review(job.id, "cand-1", 5)).unwrap();
  assert!(outcome.is_changed());
  let stored = outcome.into_inner();
  assert_eq!(stored.rating, 5);
  assert_eq!(stored.reviewer_id, org.id);

  let cand = ProfileId::from("cand-1");
  assert!(ledger.review_exists(job.id, &cand).unwrap());
  assert_eq!(ledger.reviews_for_job(job.id).unwrap(), vec![stored.clone()]);
  assert_eq!(ledger.reviews_for_profile(&cand).unwrap(), vec![stored]);
}

#[test]
fn one_review_per_reviewee_and_job() {
  let (ledger, job) = ledger_with_job(2);
  let org = organizer();

  let first = ledger
    .submit_review(&org, review(job.id, "cand-1", 5))
    .unwrap()
    .into_inner();
  let second = ledger.submit_review(&org, review(job.id, "cand-1", 2)).unwrap();
  assert_eq!(second, Outcome::Unchanged(first));
  assert_eq!(ledger.reviews_for_job(job.id).unwrap().len(), 1);

  let other = ledger.submit_review(&org, review(job.id, "cand-2", 3)).unwrap();
  assert!(other.is_changed());
}

#[test]
fn review_input_is_validated() {
  let (ledger, job) = ledger_with_job(2);
  let org = organizer();

  assert!(matches!(
    ledger.submit_review(&org, review(job.id, "cand-1", 0)),
    Err(Error::InvalidInput(_))
  ));
  assert!(matches!(
    ledger.submit_review(&org, review(JobId::generate(), "cand-1", 4)),
    Err(Error::JobNotFound(_))
  ));
  assert!(!ledger.review_exists(job.id, &ProfileId::from("cand-1")).unwrap());
}

// ─── Profiles ────────────────────────────────────────────────────────────────

#[test]
fn profiles_register_once_and_filter_by_role() {
  let ledger = MemoryLedger::new();
  ledger.register_profile(organizer()).unwrap();
  ledger.register_profile(candidate("cand-1")).unwrap();
  ledger.register_profile(candidate("cand-2")).unwrap();

  assert!(matches!(
    ledger.register_profile(candidate("cand-1")),
    Err(Error::InvalidInput(_))
  ));
  assert_eq!(ledger.profiles(None).unwrap().len(), 3);
  assert_eq!(ledger.profiles(Some(Role::Candidate)).unwrap().len(), 2);
  assert_eq!(
    ledger.profile(&ProfileId::from("cand-2")).unwrap(),
    Some(candidate("cand-2"))
  );
  assert_eq!(ledger.profile(&ProfileId::from("ghost")).unwrap(), None);
}

// ─── Concurrency ─────────────────────────────────────────────────────────────

#[test]
fn concurrent_accepts_respect_headcount() {
  let (ledger, job) = ledger_with_job(3);
  let apps: Vec<_> = (0..12)
    .map(|n| apply(&ledger, &job, &format!("cand-{n}")))
    .collect();

  std::thread::scope(|scope| {
    for app in &apps {
      let ledger = ledger.clone();
      scope.spawn(move || {
        let _ = ledger.update_application_status(
          &organizer(),
          *app,
          ApplicationStatus::Accepted,
        );
      });
    }
  });

  let accepted = ledger
    .applications_for_job(job.id)
    .unwrap()
    .into_iter()
    .filter(|a| a.status == ApplicationStatus::Accepted)
    .count();
  assert_eq!(accepted, 3);
  assert_eq!(count_filled(&ledger, job.id), 3);
}

// ─── Snapshots ───────────────────────────────────────────────────────────────

#[test]
fn snapshot_restores_the_same_ledger() {
  let (ledger, job) = ledger_with_job(2);
  let org = organizer();
  ledger.register_profile(org.clone()).unwrap();
  let app = apply(&ledger, &job, "cand-1");
  ledger
    .update_application_status(&org, app, ApplicationStatus::Accepted)
    .unwrap();
  ledger.submit_review(&org, review(job.id, "cand-1", 4)).unwrap();

  let json = ledger.snapshot().to_json().unwrap();
  let restored =
    MemoryLedger::from_snapshot(LedgerSnapshot::from_json(&json).unwrap())
      .unwrap();

  assert_eq!(restored.jobs().unwrap(), ledger.jobs().unwrap());
  assert_eq!(
    restored.applications_for_job(job.id).unwrap(),
    ledger.applications_for_job(job.id).unwrap()
  );
  assert!(restored.review_exists(job.id, &ProfileId::from("cand-1")).unwrap());
  assert_eq!(restored.profiles(None).unwrap(), vec![org]);
}

#[test]
fn snapshot_with_overfilled_requirement_is_rejected() {
  let (ledger, _) = ledger_with_job(2);
  let mut snapshot = ledger.snapshot();
  snapshot.jobs[0].requirements[0].count_filled = 3;

  assert!(matches!(
    MemoryLedger::from_snapshot(snapshot),
    Err(SnapshotError::Inconsistent(_))
  ));
}

#[test]
fn snapshot_with_duplicate_application_is_rejected() {
  let (ledger, job) = ledger_with_job(2);
  apply(&ledger, &job, "cand-1");
  let mut snapshot = ledger.snapshot();
  let mut copy = snapshot.applications[0].clone();
  copy.id = ApplicationId::generate();
  snapshot.applications.push(copy);

  assert!(matches!(
    MemoryLedger::from_snapshot(snapshot),
    Err(SnapshotError::Inconsistent(_))
  ));
}

#[test]
fn snapshot_version_is_checked() {
  let mut snapshot = MemoryLedger::new().snapshot();
  snapshot.version = 99;
  assert!(matches!(
    MemoryLedger::from_snapshot(snapshot),
    Err(SnapshotError::UnsupportedVersion { found: 99, .. })
  ));
}

/// A ledger holding one accepted runner and one review, for snapshot
/// tampering.
fn reviewed_ledger() -> (MemoryLedger, Job) {
  let (ledger, job) = ledger_with_job(1);
  let org = organizer();
  let app = apply(&ledger, &job, "cand-1");
  apply(&ledger, &job, "cand-2");
  ledger
    .update_application_status(&org, app, ApplicationStatus::Accepted)
    .unwrap();
  ledger.submit_review(&org, review(job.id, "cand-1", 4)).unwrap();
  (ledger, job)
}

fn assert_inconsistent(snapshot: LedgerSnapshot) {
  let result = MemoryLedger::from_snapshot(snapshot);
  assert!(
    matches!(result, Err(SnapshotError::Inconsistent(_))),
    "expected an inconsistent snapshot, got {result:?}"
  );
}

#[test]
fn snapshot_fill_count_must_match_accepted_applications() {
  let (ledger, _) = reviewed_ledger();

  let mut snapshot = ledger.snapshot();
  for app in &mut snapshot.applications {
    app.status = ApplicationStatus::Accepted;
  }
  assert_inconsistent(snapshot);

  let mut snapshot = ledger.snapshot();
  snapshot.jobs[0].requirements[0].count_filled = 0;
  assert_inconsistent(snapshot);
}

#[test]
fn snapshot_rejects_reviews_the_ledger_would_refuse() {
  let (ledger, job) = reviewed_ledger();

  let mut snapshot = ledger.snapshot();
  snapshot.reviews[0].rating = 0;
  assert_inconsistent(snapshot);

  let mut snapshot = ledger.snapshot();
  snapshot.reviews[0].reviewee_id = snapshot.reviews[0].reviewer_id.clone();
  assert_inconsistent(snapshot);

  let mut snapshot = ledger.snapshot();
  let mut copy = snapshot.reviews[0].clone();
  copy.id = ReviewId::generate();
  snapshot.reviews.push(copy);
  assert_inconsistent(snapshot);

  let mut snapshot = ledger.snapshot();
  snapshot.reviews[0].job_id = JobId::generate();
  assert_inconsistent(snapshot);

  assert!(MemoryLedger::from_snapshot(ledger.snapshot()).is_ok());
  assert!(ledger.review_exists(job.id, &ProfileId::from("cand-1")).unwrap());
}

#[test]
fn snapshot_requirement_must_point_at_its_job() {
  let (ledger, _) = ledger_with_job(2);
  let mut snapshot = ledger.snapshot();
  snapshot.jobs[0].requirements[0].job_id = JobId::generate();
  assert_inconsistent(snapshot);
}

#[test]
fn snapshot_application_must_target_a_known_requirement() {
  let (ledger, job) = ledger_with_job(2);
  apply(&ledger, &job, "cand-1");
  let mut snapshot = ledger.snapshot();
  snapshot.applications[0].requirement_id = RequirementId::generate();
  assert_inconsistent(snapshot);
}

#[test]
fn malformed_snapshot_json_is_rejected() {
  assert!(matches!(
    LedgerSnapshot::from_json("{\"version\": \"one\"}"),
    Err(SnapshotError::Json(_))
  ));
}
