//! QueryEngine — 스냅샷 위에서 필터 + 정렬 실행
//!
//! 스토어를 변경하지 않습니다. 매 호출마다 `find_all()` 스냅샷을 새로 가져옵니다.

use super::{QuerySpec, build_comparator, build_predicate};
use crate::model::Candidate;
use crate::storage::RecordStore;
use std::cmp::Ordering;
use tracing::debug;

/// Read-only query executor over a [`RecordStore`].
pub struct QueryEngine<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> QueryEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Runs a structured query.
    ///
    /// # 예제
    ///
    /// ```rust
    /// use roster_core::query::{Field, QueryEngine, QuerySpec, SortMode, TextOp};
    /// use roster_core::{Candidate, MemoryRecordStore, RecordStore};
    ///
    /// # fn main() -> roster_core::RosterResult<()> {
    /// let store = MemoryRecordStore::new();
    /// store.add(&Candidate::new("Alice", 28, "Software", 5))?;
    /// store.add(&Candidate::new("Bob", 35, "Finance", 10))?;
    ///
    /// let spec = QuerySpec::text(Field::Name, TextOp::Contains, "A").with_sort(SortMode::NameDesc);
    /// let found = QueryEngine::new(&store).query(&spec);
    /// assert_eq!(found.len(), 1);
    /// assert_eq!(found[0].name, "Alice");
    /// # Ok(())
    /// # }
    /// ```
    pub fn query(&self, spec: &QuerySpec) -> Vec<Candidate> {
        let filter = build_predicate(spec);
        let sort = spec.sort.map(build_comparator);
        self.query_with(Some(filter), sort)
    }

    /// Runs an explicit filter and comparator. `None` filter keeps every
    /// record; `None` sort keeps snapshot order.
    pub fn query_with<F, C>(&self, filter: Option<F>, sort: Option<C>) -> Vec<Candidate>
    where
        F: Fn(&Candidate) -> bool,
        C: Fn(&Candidate, &Candidate) -> Ordering,
    {
        let mut out: Vec<Candidate> = match filter {
            Some(f) => self.store.find_all().into_iter().filter(|c| f(c)).collect(),
            None => self.store.find_all(),
        };

        if let Some(cmp) = sort {
            // stable
            out.sort_by(|a, b| cmp(a, b));
        }

        debug!(result = out.len(), "query");
        out
    }

    /// Every record in snapshot order.
    pub fn find_all(&self) -> Vec<Candidate> {
        self.store.find_all()
    }
}
