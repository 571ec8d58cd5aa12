//! RecordSet — 캐시 + ID 카운터
//!
//! 스토어는 쓰기 연산을 항상 복사본(staged)에 적용하고, 영속화가 성공한 뒤에만
//! 복사본을 현재 상태로 교체합니다. 검증 실패나 I/O 실패 시 원본은 그대로 남습니다.

use crate::error::{RosterError, RosterResult};
use crate::model::Candidate;
use crate::validation::{MAX_ID, require_positive_id, validate};

/// In-memory record set with sequential ID allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Candidate>,
    next_id: i64,
}

impl RecordSet {
    /// 빈 레코드 셋 (첫 ID = 1)
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a set from already-persisted records.
    ///
    /// The counter starts at one past the highest ID (or 1 when empty). It
    /// saturates, so a set holding `i64::MAX` refuses further auto IDs.
    pub fn from_records(records: Vec<Candidate>) -> Self {
        let next_id = records
            .iter()
            .map(|c| c.id)
            .max()
            .unwrap_or(0)
            .max(0)
            .saturating_add(1);
        Self { records, next_id }
    }

    pub fn records(&self) -> &[Candidate] {
        &self.records
    }

    /// ID that the next `add` without an explicit ID will receive.
    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Candidate> {
        self.records.iter().find(|c| c.id == id)
    }

    /// Runs `op` against a copy of this set.
    ///
    /// Returns the modified copy together with the operation's output; `self`
    /// is never touched, so the caller decides when to commit.
    pub fn stage<T>(
        &self,
        op: impl FnOnce(&mut RecordSet) -> RosterResult<T>,
    ) -> RosterResult<(RecordSet, T)> {
        let mut staged = self.clone();
        let output = op(&mut staged)?;
        Ok((staged, output))
    }

    /// 새 레코드 추가
    pub fn add(&mut self, candidate: &Candidate) -> RosterResult<Candidate> {
        let mut stored = candidate.clone();
        if stored.id <= 0 {
            if self.next_id > MAX_ID {
                return Err(RosterError::validation("add(): no ids left"));
            }
            stored.id = self.next_id;
        } else if stored.id > MAX_ID {
            return Err(RosterError::validation(format!(
                "add(): id must be <= {MAX_ID}"
            )));
        }
        if self.get(stored.id).is_some() {
            return Err(RosterError::validation(format!(
                "add(): id={} already exists",
                stored.id
            )));
        }

        validate(&stored)?;

        stored.stamp_registration();
        self.next_id = self.next_id.max(stored.id + 1);
        self.records.push(stored.clone());
        Ok(stored)
    }

    /// 기존 레코드 교체 (위치와 등록 시각 유지)
    pub fn update(&mut self, candidate: &Candidate) -> RosterResult<Candidate> {
        require_positive_id(candidate.id, "update")?;
        validate(candidate)?;

        let slot = self
            .records
            .iter_mut()
            .find(|c| c.id == candidate.id)
            .ok_or_else(|| {
                RosterError::not_found(format!("update(): id={} not found", candidate.id))
            })?;

        let mut stored = candidate.clone();
        stored.set_registered_at(slot.registered_at());
        *slot = stored.clone();
        Ok(stored)
    }

    /// 레코드 삭제. 삭제된 레코드를 반환
    pub fn delete(&mut self, id: i64) -> RosterResult<Candidate> {
        require_positive_id(id, "delete")?;

        let pos = self
            .records
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| RosterError::not_found(format!("delete(): id={id} not found")))?;
        Ok(self.records.remove(pos))
    }
}

impl Default for RecordSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn sample(name: &str) -> Candidate {
        Candidate::new(name, 30, "Software", 5)
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let mut set = RecordSet::new();
        let a = set.add(&sample("Alice")).unwrap();
        let b = set.add(&sample("Bob")).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(set.next_id(), 3);
        assert!(a.registered_at().is_some());
    }

    #[test]
    fn failed_add_does_not_consume_id() {
        let mut set = RecordSet::new();
        assert!(set.add(&Candidate::new("Kid", 15, "Tech", 0)).is_err());
        assert_eq!(set.next_id(), 1);
        assert!(set.is_empty());

        let ok = set.add(&sample("Adult")).unwrap();
        assert_eq!(ok.id, 1);
    }

    #[test]
    fn add_with_explicit_id_advances_counter() {
        let mut set = RecordSet::new();
        set.add(&sample("Imported").with_id(10)).unwrap();
        let next = set.add(&sample("Fresh")).unwrap();
        assert_eq!(next.id, 11);
    }

    #[test]
    fn add_rejects_duplicate_explicit_id() {
        let mut set = RecordSet::new();
        set.add(&sample("Alice")).unwrap();
        let err = set.add(&sample("Clone").with_id(1)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ids_stay_unique_at_upper_bound() {
        let mut set = RecordSet::new();
        let err = set.add(&sample("Max").with_id(i64::MAX)).unwrap_err();
        assert!(err.is_validation());
        assert!(set.is_empty());

        let last = set.add(&sample("Last").with_id(MAX_ID)).unwrap();
        assert_eq!(last.id, MAX_ID);
        assert_eq!(set.next_id(), i64::MAX);

        let err = set.add(&sample("Overflow")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn from_records_saturates_counter() {
        let mut set = RecordSet::from_records(vec![sample("Max").with_id(i64::MAX)]);
        assert_eq!(set.next_id(), i64::MAX);
        assert!(set.add(&sample("Next")).unwrap_err().is_validation());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ids_never_reused_after_delete() {
        let mut set = RecordSet::new();
        set.add(&sample("Alice")).unwrap();
        let b = set.add(&sample("Bob")).unwrap();
        set.delete(b.id).unwrap();
        let c = set.add(&sample("Carla")).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn from_records_computes_next_id() {
        let set = RecordSet::from_records(vec![sample("A").with_id(4), sample("B").with_id(9)]);
        assert_eq!(set.next_id(), 10);
        assert_eq!(RecordSet::from_records(Vec::new()).next_id(), 1);
    }

    #[test]
    fn update_keeps_position_and_registration_time() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let mut set = RecordSet::new();
        set.add(&sample("Alice").with_registered_at(ts)).unwrap();
        set.add(&sample("Bob")).unwrap();

        let later = NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let changed = Candidate::new("Alice", 31, "Recruitment", 6)
            .with_id(1)
            .with_registered_at(later);
        let stored = set.update(&changed).unwrap();

        assert_eq!(stored.registered_at(), Some(ts));
        assert_eq!(set.records()[0].industry, "Recruitment");
        assert_eq!(set.records()[1].name, "Bob");
    }

    #[test]
    fn update_errors() {
        let mut set = RecordSet::new();
        assert!(set.update(&sample("NoId")).unwrap_err().is_validation());
        assert!(
            set.update(&sample("Missing").with_id(999))
                .unwrap_err()
                .is_not_found()
        );
        set.add(&sample("Alice")).unwrap();
        let invalid = Candidate::new("Alice", 15, "IT", 1).with_id(1);
        assert!(set.update(&invalid).unwrap_err().is_validation());
        assert_eq!(set.records()[0].age, 30);
    }

    #[test]
    fn delete_errors_and_success() {
        let mut set = RecordSet::new();
        assert!(set.delete(0).unwrap_err().is_validation());
        assert!(set.delete(999).unwrap_err().is_not_found());

        set.add(&sample("Alice")).unwrap();
        set.add(&sample("Bob")).unwrap();
        let removed = set.delete(1).unwrap();
        assert_eq!(removed.name, "Alice");
        assert_eq!(set.len(), 1);
        assert_eq!(set.records()[0].name, "Bob");
    }

    #[test]
    fn stage_leaves_original_untouched() {
        let set = RecordSet::new();
        let (staged, stored) = set.stage(|s| s.add(&sample("Alice"))).unwrap();
        assert!(set.is_empty());
        assert_eq!(staged.len(), 1);
        assert_eq!(stored.id, 1);

        let err = set.stage(|s| s.delete(42));
        assert!(err.is_err());
    }

    proptest! {
        #[test]
        fn assigned_ids_strictly_increase(ages in proptest::collection::vec(16i32..80, 1..20)) {
            let mut set = RecordSet::new();
            let mut last = 0;
            for age in ages {
                let stored = set.add(&Candidate::new("P", age, "Ops", 0)).unwrap();
                prop_assert!(stored.id > last);
                last = stored.id;
            }
        }
    }
}
