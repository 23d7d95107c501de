//! Demo identities and the starter catalogue.
//!
//! The demo ledger holds one organizer, two candidates and a wedding job
//! with one accepted and one pending runner. The session switches between
//! the organizer and a third candidate identity.

use anyhow::Context as _;
use chrono::{NaiveDate, NaiveTime};
use eventforce_core::{
  application::ApplicationStatus,
  id::ProfileId,
  job::{DressCode, Facilities, JobDraft, RequirementDraft},
  profile::{Profile, Role},
  session::Session,
  store::LedgerStore,
};
use eventforce_store_memory::MemoryLedger;

pub fn organizer() -> Profile {
  Profile {
    id:               ProfileId::from("user-org-123"),
    role:             Role::Organizer,
    full_name:        "Vikram Mehta".into(),
    bio:              "Lead coordinator for Mehta Event Services. 10+ years \
                       experience in corporate hospitality."
      .into(),
    location:         "South Delhi, Delhi".into(),
    experience_years: 12,
    profile_pics:     vec!["https://picsum.photos/200/200?random=10".into()],
    rating:           4.9,
  }
}

/// The candidate identity the session switches to.
pub fn session_candidate() -> Profile {
  Profile {
    id:               ProfileId::from("cand-rahul-999"),
    role:             Role::Candidate,
    full_name:        "Rahul (Candidate)".into(),
    bio:              String::new(),
    location:         "Noida, UP".into(),
    experience_years: 2,
    profile_pics:     vec!["https://i.pravatar.cc/150?u=rahul".into()],
    rating:           4.7,
  }
}

fn candidates() -> [Profile; 2] {
  [
    Profile {
      id:               ProfileId::from("cand-1"),
      role:             Role::Candidate,
      full_name:        "Rahul Sharma".into(),
      bio:              "Energetic and punctual. I have worked as a runner \
                         for 5 big weddings."
        .into(),
      location:         "Noida, UP".into(),
      experience_years: 2,
      profile_pics:     vec!["https://i.pravatar.cc/150?u=rahul".into()],
      rating:           4.7,
    },
    Profile {
      id:               ProfileId::from("cand-2"),
      role:             Role::Candidate,
      full_name:        "Priya Verma".into(),
      bio:              "Experienced hostess with a background in hotel \
                         management."
        .into(),
      location:         "Gurgaon, Haryana".into(),
      experience_years: 4,
      profile_pics:     vec!["https://i.pravatar.cc/150?u=priya".into()],
      rating:           4.9,
    },
  ]
}

fn lakeside_wedding() -> anyhow::Result<JobDraft> {
  Ok(JobDraft {
    title:         "Lakeside Wedding Ceremony".into(),
    location_text: "Pari Chowk, Greater Noida".into(),
    date:          NaiveDate::from_ymd_opt(2024, 5, 20).context("demo date")?,
    start_time:    NaiveTime::from_hms_opt(14, 0, 0).context("demo start")?,
    end_time:      NaiveTime::from_hms_opt(22, 0, 0).context("demo end")?,
    dress_code:    DressCode {
      male:   "Black Suit".into(),
      female: "Saree".into(),
    },
    facilities:    Facilities { food: true, travel: true, stay: false },
    requirements:  vec![RequirementDraft {
      description: "Help with backstage logistics.".into(),
      ..RequirementDraft::new("Runner", 4, 1500)
    }],
  })
}

pub fn demo_session() -> anyhow::Result<Session> {
  Ok(Session::new(organizer(), session_candidate())?)
}

/// Build a ledger pre-populated with the demo catalogue.
pub fn demo_ledger() -> anyhow::Result<MemoryLedger> {
  let ledger = MemoryLedger::new();
  let organizer = organizer();
  let [rahul, priya] = candidates();

  for profile in [
    organizer.clone(),
    session_candidate(),
    rahul.clone(),
    priya.clone(),
  ] {
    ledger.register_profile(profile)?;
  }

  let job = ledger.publish_job(&organizer, lakeside_wedding()?)?;
  let runners = job.requirements[0].id;

  let accepted = ledger.apply(&rahul, job.id, runners)?.into_inner();
  ledger.apply(&priya, job.id, runners)?;
  ledger.update_application_status(
    &organizer,
    accepted.id,
    ApplicationStatus::Accepted,
  )?;

  Ok(ledger)
}
