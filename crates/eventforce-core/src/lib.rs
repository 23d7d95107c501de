//! Core types and trait definitions for the EventForce staffing ledger.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod application;
pub mod error;
pub mod id;
pub mod job;
pub mod profile;
pub mod review;
pub mod session;
pub mod store;

pub use error::{Error, ErrorKind, Result};
