//! # Roster — File-Backed Candidate Store
//!
//! Roster는 후보자 레코드(이름, 나이, 업종, 경력 연수)를 TSV 파일 하나에 저장하는
//! 임베디드 레코드 스토어입니다. 모든 쓰기는 임시 파일에 전체를 기록한 뒤
//! 원자적으로 교체하므로, 쓰기 도중 프로세스가 중단되어도 파일은 항상
//! 이전 상태 또는 새 상태 중 하나입니다.
//!
//! ## 주요 특징
//!
//! - **원자적 영속화**: 임시 파일 + rename으로 부분 쓰기 방지
//! - **관대한 로딩**: 손상된 라인은 경고로 기록하고 건너뜀
//! - **방어적 복사**: 읽기/쓰기 모두 값 복사, 외부 별칭으로 캐시 오염 불가
//! - **타입 쿼리**: `QuerySpec` → Predicate + 안정 정렬
//!
//! ## 빠른 시작
//!
//! ```rust
//! use roster_core::query::{Field, NumOp, QueryEngine, QuerySpec, SortMode};
//! use roster_core::{Candidate, FileRecordStore, RecordStore};
//!
//! # fn main() -> roster_core::RosterResult<()> {
//! let dir = tempfile::tempdir().unwrap();
//! let store = FileRecordStore::open(&dir.path().join("candidates.tsv"))?;
//!
//! // 추가 (ID 자동 할당)
//! let alice = store.add(&Candidate::new("Alice", 28, "Software", 5))?;
//! store.add(&Candidate::new("Bob", 35, "Finance", 10))?;
//!
//! // 수정
//! let mut changed = alice.clone();
//! changed.years_of_experience = 6;
//! store.update(&changed)?;
//!
//! // 조회
//! let spec = QuerySpec::numeric(Field::Years, NumOp::Gte, "6").with_sort(SortMode::NameDesc);
//! let seniors = QueryEngine::new(&store).query(&spec);
//! assert_eq!(seniors.len(), 2);
//! assert_eq!(seniors[0].name, "Bob");
//!
//! // 삭제
//! store.delete(alice.id)?;
//! assert_eq!(store.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## 모듈 구조
//!
//! - [`storage`] — [`RecordStore`] 트레이트, 파일/메모리 스토어
//! - [`query`] — `QuerySpec`, 필터/정렬 빌더, `QueryEngine`
//! - [`codec`] — TSV 라인 포맷 (escape/unescape)
//! - [`validation`] — 공통 검증 규칙
//! - [`config`] — `StoreConfig`
//! - [`seed`] — 샘플 데이터

pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod seed;
pub mod storage;
pub mod validation;

// Logging utilities
pub mod logging;

// Re-export commonly used types
pub use config::StoreConfig;
pub use error::{RosterError, RosterResult, StorageOp};
pub use model::Candidate;
pub use query::{QueryEngine, QuerySpec};
pub use storage::{FileRecordStore, LoadWarning, MemoryRecordStore, RecordStore};
