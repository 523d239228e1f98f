//! Process-local state
//!
//! Holds the fixture-seeded in-memory property store.

pub mod storage;

pub use storage::PropertyStore;
