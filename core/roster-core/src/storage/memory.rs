//! In-memory record store
//!
//! Same semantics as [`FileRecordStore`](super::FileRecordStore) without a backing file.

use crate::error::RosterResult;
use crate::model::Candidate;
use crate::storage::{RecordSet, RecordStore};
use parking_lot::RwLock;

/// In-memory [`RecordStore`], used for tests and ephemeral sessions.
pub struct MemoryRecordStore {
    state: RwLock<RecordSet>,
}

impl MemoryRecordStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RecordSet::new()),
        }
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryRecordStore {
    fn find_all(&self) -> Vec<Candidate> {
        self.state.read().records().to_vec()
    }

    fn add(&self, candidate: &Candidate) -> RosterResult<Candidate> {
        self.state.write().add(candidate)
    }

    fn update(&self, candidate: &Candidate) -> RosterResult<Candidate> {
        self.state.write().update(candidate)
    }

    fn delete(&self, id: i64) -> RosterResult<()> {
        self.state.write().delete(id).map(|_| ())
    }

    fn len(&self) -> usize {
        self.state.read().len()
    }
}
