//! # Fluxcell
//!
//! Observable state stores built from reactive cells.
//!
//! Fluxcell turns a flat map of named initial values into a [`Store`]: each
//! field becomes an individually readable/writable reactive cell, and the
//! store exposes a single combined stream that emits a full [`Snapshot`] of
//! all field values every time any one field changes.
//!
//! ## Streams (low-level primitives)
//!
//! Minimal push-based primitives the store is wired from:
//! - `Cell<T>` - a current value with synchronous, replay-one subscriptions
//! - `CombineLatest<U>` - a derived stream re-projected on any input change
//!
//! ## Store (the state container)
//!
//! - One accessor pair per field, fixed field set for the store's lifetime
//! - A `state` stream of fresh, independent snapshots
//! - Construction-time validation; field access never fails
//!
//! ```
//! use fluxcell::Store;
//!
//! let store = Store::new([("count", 0)]).unwrap();
//! store.state().subscribe(|snapshot| {
//!     println!("count is now {}", snapshot["count"]);
//! });
//! store.set("count", 1);
//! ```

pub mod error;
pub mod store;
pub mod stream;

// Re-export main types for convenience
pub use error::StoreError;
pub use store::{Snapshot, StateStream, Store};
pub use stream::{Cell, CombineLatest};
