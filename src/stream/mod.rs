//! Reactive stream primitives.
//!
//! This module provides the building blocks the store is wired from:
//! - Cells: value holders that replay to late subscribers and notify
//!   synchronously on every push
//! - CombineLatest: a derived stream re-projected whenever any input changes

mod cell;
mod combine;

pub use cell::Cell;
pub use combine::CombineLatest;
