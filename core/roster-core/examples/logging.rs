//! 로깅 시스템 사용 예제
//!
//! 실행: RUST_LOG=debug cargo run --example logging --features logging

use roster_core::query::{QueryEngine, QuerySpec};
use roster_core::{FileRecordStore, seed};
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 로깅 초기화
    #[cfg(feature = "logging")]
    roster_core::logging::init();

    println!("=== Roster 로깅 예제 ===\n");
    println!("환경 변수 RUST_LOG로 로그 레벨 조정 가능:");
    println!("  RUST_LOG=debug  - 쿼리/필드 파싱 로그 포함");
    println!("  RUST_LOG=info   - 스토어 열기, 시딩 (기본값)");
    println!("  RUST_LOG=warn   - 손상된 라인 경고만\n");

    // 손상된 라인이 섞인 파일 → 로딩 시 warn 로그
    let dir = std::env::temp_dir().join("roster-logging");
    fs::create_dir_all(&dir)?;
    let path = dir.join("candidates.tsv");
    fs::write(
        &path,
        format!(
            "{}\n1\tJohn\t30\tIT\t5\t2025-10-31 12:00:00\nbroken line\n",
            roster_core::codec::HEADER
        ),
    )?;

    println!("스토어 열기 중...");
    let store = FileRecordStore::open(&path)?;
    for w in store.load_warnings() {
        println!("  건너뛴 라인 {}: {}", w.line, w.reason);
    }

    println!("\n시딩 중...");
    seed::load(&store)?;

    println!("\n쿼리 중...");
    let spec = QuerySpec::new().with_field_name("salary");
    let all = QueryEngine::new(&store).query(&spec);
    println!("  {}건", all.len());

    println!("\n=== 예제 완료 ===");
    println!("\n주의: logging feature가 활성화되어야 로그가 출력됩니다.");
    println!("실행: RUST_LOG=debug cargo run --example logging --features logging");

    Ok(())
}
