//! Candidate 레코드 타입
//!
//! 스토어가 소유하는 값 타입입니다. 스토어는 항상 복사본을 저장하고 복사본을 반환하므로
//! 호출자가 가진 인스턴스를 수정해도 캐시에는 영향이 없습니다.

use chrono::{Local, NaiveDateTime, Timelike};
use std::fmt;

/// `registered_at` 직렬화 포맷 (초 단위)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One candidate entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Candidate {
    /// 0 (or negative) means "not yet persisted"
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub industry: String,
    pub years_of_experience: i32,
    registered_at: Option<NaiveDateTime>,
}

impl Candidate {
    /// 새 후보자 생성 (ID 없음, 등록 시각은 `add` 시점에 기록)
    pub fn new(
        name: impl Into<String>,
        age: i32,
        industry: impl Into<String>,
        years_of_experience: i32,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            age,
            industry: industry.into(),
            years_of_experience,
            registered_at: None,
        }
    }

    /// ID 지정 (update/delete 대상 지정용)
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Builds a candidate carrying an explicit registration time, e.g. when
    /// importing records created elsewhere.
    pub fn with_registered_at(mut self, registered_at: NaiveDateTime) -> Self {
        self.registered_at = Some(truncate_to_seconds(registered_at));
        self
    }

    /// 등록 시각. 스토어에 추가되기 전이거나 파일에 시각이 없으면 `None`
    pub fn registered_at(&self) -> Option<NaiveDateTime> {
        self.registered_at
    }

    /// Whether the record has been assigned an ID by a store.
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    /// Stamps the registration time if none is set. An existing value is kept.
    pub(crate) fn stamp_registration(&mut self) {
        if self.registered_at.is_none() {
            self.registered_at = Some(now());
        }
    }

    pub(crate) fn set_registered_at(&mut self, registered_at: Option<NaiveDateTime>) {
        self.registered_at = registered_at;
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Candidate{{id={}, name='{}', age={}, industry='{}', yearsOfExperience={}, registeredAt=",
            self.id, self.name, self.age, self.industry, self.years_of_experience
        )?;
        match self.registered_at {
            Some(ts) => write!(f, "'{}'}}", ts.format(TIMESTAMP_FORMAT)),
            None => f.write_str("-}"),
        }
    }
}

/// 현재 로컬 시각 (파일 포맷에 맞춰 초 단위로 절삭)
pub(crate) fn now() -> NaiveDateTime {
    truncate_to_seconds(Local::now().naive_local())
}

fn truncate_to_seconds(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_nanosecond(0).unwrap_or(ts)
}
