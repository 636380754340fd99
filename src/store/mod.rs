//! Post collection manager for blogd
//!
//! The store owns the authoritative in-memory post collection and implements
//! all read/write/query semantics. Insertion order is the canonical order.
//!
//! # Invariants Enforced
//!
//! - Post ids are unique within the store
//! - Ids are never reused after deletion, even when not contiguous
//! - Deletion preserves the relative order of the remaining posts
//!
//! The store has no interior locking; callers serialize access (the HTTP
//! layer wraps it in a single `RwLock`). Concurrent unsynchronized mutation
//! is undefined.

mod errors;
mod post;
mod store;

pub use errors::{StoreError, StoreResult};
pub use post::Post;
pub use store::PostStore;
