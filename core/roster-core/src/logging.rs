//! 로깅 초기화
//!
//! 라이브러리는 `tracing` 이벤트만 발생시키고, 출력 여부는 호스트가 결정합니다.
//! 기본 필터는 이 크레이트만 지정한 레벨로, 나머지 의존성은 `warn` 이상만 보여줍니다.
//! `RUST_LOG`가 설정되어 있으면 그 값이 우선합니다.

#[cfg(feature = "logging")]
use tracing_subscriber::{EnvFilter, fmt};

/// Crate target used in filter directives.
#[cfg(feature = "logging")]
const TARGET: &str = "roster_core";

/// `roster_core=<level>,warn`
#[cfg(feature = "logging")]
fn directive(level: &str) -> String {
    format!("{TARGET}={},warn", level.trim().to_ascii_lowercase())
}

#[cfg(feature = "logging")]
fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(level)))
}

/// Store events at `info` (open, seeding), skipped lines at `warn`.
///
/// ```rust
/// roster_core::logging::init();
/// ```
#[cfg(feature = "logging")]
pub fn init() {
    init_with_level("info")
}

/// Same as [`init`] with an explicit level for roster events. `debug` adds
/// every write and query. Calling it again is a no-op.
#[cfg(feature = "logging")]
pub fn init_with_level(level: &str) {
    let _ = fmt()
        .with_env_filter(filter_for(level))
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// Debug-level output captured by the test harness.
#[cfg(feature = "logging")]
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new(directive("debug")))
        .with_test_writer()
        .try_init();
}

#[cfg(not(feature = "logging"))]
pub fn init() {}

#[cfg(not(feature = "logging"))]
pub fn init_with_level(_level: &str) {}

#[cfg(not(feature = "logging"))]
pub fn init_test() {}
