//! knowme Store — in-memory aggregate persistence.
//!
//! The game core is storage-agnostic; this crate provides the
//! repository implementation used by the server and by tests.

mod in_memory;

pub use in_memory::InMemoryRepository;
