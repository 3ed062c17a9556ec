//! # flexconf-store: Transactional Configuration Store
//!
//! [`ConfigStore`] owns a configuration tree that is always valid against
//! its [`Schema`](flexconf_schema::Schema), plus at most one snapshot of
//! the tree as it was before the first uncommitted write.
//!
//! ## Transactions
//!
//! Every write builds a copy of the tree, validates the *whole* copy from
//! the root, and swaps it in only on success. A rejected write leaves the
//! store exactly as it was, so the store stays usable after any error.
//!
//! - [`ConfigStore::commit`] drops the snapshot.
//! - [`ConfigStore::discard_changes`] restores it.
//!
//! The snapshot is a single slot, not a history: a second uncommitted
//! write does not move it.
//!
//! ## Persistence (`persist`)
//!
//! JSON text and file helpers wrap the core operations: loading goes
//! through [`ConfigStore::set_whole_config`], saving serializes the tree
//! (pretty-printed, 4-space indentation, key order preserved) and then
//! commits.
//!
//! ## Crate Policy
//!
//! - Synchronous and lock-free. Mutation takes `&mut self`; embedders that
//!   share a store wrap it in their own lock.
//! - No `.unwrap()` outside tests.

pub mod error;
pub mod persist;
pub mod store;

pub use error::ConfigError;
pub use store::ConfigStore;
