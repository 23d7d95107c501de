//! In-memory backend for the EventForce ledger.
//!
//! All state lives behind one lock inside [`MemoryLedger`]; nothing is
//! written to disk. [`LedgerSnapshot`] is the JSON form of that state, used
//! to seed a ledger and to export it for inspection.

mod snapshot;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use snapshot::{LedgerSnapshot, SNAPSHOT_VERSION};
pub use store::MemoryLedger;

#[cfg(test)]
mod tests;
