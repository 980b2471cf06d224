//! Observable state containers.
//!
//! Stores wire one reactive cell per named field and derive a combined
//! stream that emits a fresh snapshot of every field whenever any one of
//! them changes.

mod store;

pub use store::{Snapshot, StateStream, Store, STATE_KEY};
