//! 기본 CRUD + 쿼리 예제
//!
//! 실행: cargo run --example basic_crud

use roster_core::query::{Field, NumOp, QueryEngine, QuerySpec, SortMode, TextOp};
use roster_core::{Candidate, FileRecordStore, RecordStore, seed};

fn main() -> roster_core::RosterResult<()> {
    println!("=== Roster 기본 CRUD 예제 ===\n");

    // 1. 임시 디렉토리에 스토어 열기
    println!("1. 스토어 열기...");
    let dir = std::env::temp_dir().join("roster-basic-crud");
    let _ = std::fs::remove_dir_all(&dir);
    let store = FileRecordStore::open(&dir.join("candidates.tsv"))?;
    println!("   ✓ {}\n", store.path().display());

    // 2. 샘플 데이터 시딩
    println!("2. 샘플 데이터 시딩...");
    let seeded = seed::load_if_empty(&store)?;
    println!("   ✓ {}건 추가\n", seeded);

    // 3. 추가 (Create)
    println!("3. 후보자 추가...");
    let zoe = store.add(&Candidate::new("Zoe Park", 23, "Design", 1))?;
    println!("   {}\n", zoe);

    // 4. 수정 (Update)
    println!("4. 후보자 수정...");
    let mut changed = zoe.clone();
    changed.years_of_experience = 2;
    let updated = store.update(&changed)?;
    println!("   {} (수정됨)\n", updated);

    // 5. 검증 실패
    println!("5. 잘못된 입력...");
    if let Err(e) = store.add(&Candidate::new("Kid", 12, "Toys", 0)) {
        println!("   ✗ [{}] {}\n", e.code(), e);
    }

    // 6. 쿼리 (Read)
    println!("6. 쿼리...");
    let engine = QueryEngine::new(&store);
    let software = QuerySpec::text(Field::Industry, TextOp::Equals, "software");
    for c in engine.query(&software) {
        println!("   software: {}", c.name);
    }
    let seniors = QuerySpec::numeric(Field::Years, NumOp::Gte, "10").with_sort(SortMode::NameDesc);
    for c in engine.query(&seniors) {
        println!("   10년 이상: {} ({}년)", c.name, c.years_of_experience);
    }
    println!();

    // 7. 삭제 (Delete)
    println!("7. 후보자 삭제...");
    store.delete(zoe.id)?;
    println!("   ✓ id={} 삭제, 남은 레코드 수: {}\n", zoe.id, store.len());

    println!("=== 예제 완료 ===");
    Ok(())
}
