//! Storage module — durable and in-memory candidate stores.
//!
//! All stores implement the [`RecordStore`] trait.
//! The query layer depends only on this trait (Dependency Inversion Principle).

pub mod file;
pub mod memory;
pub mod record_set;

pub use file::{FileRecordStore, LoadWarning};
pub use memory::MemoryRecordStore;
pub use record_set::RecordSet;

use crate::error::RosterResult;
use crate::model::Candidate;

/// Core record store interface.
///
/// # Design Principles
///
/// - **DIP**: `QueryEngine` and the seeding helpers depend on this trait, never on concrete types.
/// - **Value semantics**: every method copies on the way in and on the way out.
/// - **Thread Safety**: `Send + Sync` required; writes are serialised internally.
///
/// # Contract
///
/// - `find_all`: Snapshot of every record in insertion order, never fails.
/// - `add`: Assigns an ID when `id <= 0`, validates, stores. Returns the stored copy.
/// - `update`: Requires `id > 0` and an existing record. Position and registration time are kept.
/// - `delete`: Requires `id > 0` and an existing record.
/// - Any error leaves the store exactly as it was.
pub trait RecordStore: Send + Sync {
    /// Snapshot of all records.
    fn find_all(&self) -> Vec<Candidate>;

    /// Insert a new record.
    fn add(&self, candidate: &Candidate) -> RosterResult<Candidate>;

    /// Replace an existing record by ID.
    fn update(&self, candidate: &Candidate) -> RosterResult<Candidate>;

    /// Remove a record by ID.
    fn delete(&self, id: i64) -> RosterResult<()>;

    /// Number of stored records.
    fn len(&self) -> usize {
        self.find_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
