//! Validation rules applied at the storage boundary.
//!
//! `add` and `update` run the same predicate; the first violated rule wins.

use crate::error::{RosterError, RosterResult};
use crate::model::Candidate;

/// 최소 나이
pub const MIN_AGE: i32 = 16;

/// 업종 최소 길이 (trim 이후)
pub const MIN_INDUSTRY_LEN: usize = 2;

/// 저장 가능한 최대 ID. 다음 ID(`id + 1`)가 항상 `i64` 범위 안에 있어야 함
pub const MAX_ID: i64 = i64::MAX - 1;

/// Checks the domain rules for a candidate.
pub fn validate(candidate: &Candidate) -> RosterResult<()> {
    let name = candidate.name.trim();
    let industry = candidate.industry.trim();

    if name.is_empty() {
        return Err(RosterError::validation("Name is required"));
    }
    if industry.chars().count() < MIN_INDUSTRY_LEN {
        return Err(RosterError::validation(
            "Industry must be at least 2 characters",
        ));
    }
    if industry.chars().all(|c| c.is_ascii_digit()) {
        return Err(RosterError::validation(
            "Industry must be text, not a number",
        ));
    }
    if candidate.age < MIN_AGE {
        return Err(RosterError::validation("Minimum age is 16"));
    }
    if candidate.years_of_experience < 0 || candidate.years_of_experience > candidate.age {
        return Err(RosterError::validation("Invalid years of experience"));
    }
    Ok(())
}

/// `update`/`delete` 대상 ID 검사 (`id > 0` 필수)
pub fn require_positive_id(id: i64, operation: &str) -> RosterResult<()> {
    if id <= 0 {
        return Err(RosterError::validation(format!(
            "{operation}(): id must be > 0"
        )));
    }
    Ok(())
}

/// Whether `id` can be stored: positive and at most [`MAX_ID`].
pub fn is_storable_id(id: i64) -> bool {
    (1..=MAX_ID).contains(&id)
}
