//! Error types for the roster store.
//!
//! All public APIs return `RosterResult<T>` — no panics in library code.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which step of the persistence protocol failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    /// Creating the data directory or the initial header-only file
    Init,
    /// Reading the backing file on open
    Read,
    /// Writing the temporary file
    Write,
    /// Atomically swapping the temporary file over the target
    Replace,
}

impl StorageOp {
    /// 머신 리더블 코드
    pub fn code(&self) -> &'static str {
        match self {
            StorageOp::Init => "REPO_INIT",
            StorageOp::Read => "REPO_READ",
            StorageOp::Write => "REPO_WRITE",
            StorageOp::Replace => "REPO_REPLACE",
        }
    }
}

impl fmt::Display for StorageOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageOp::Init => "initialize",
            StorageOp::Read => "read",
            StorageOp::Write => "write",
            StorageOp::Replace => "replace",
        };
        f.write_str(name)
    }
}

/// Unified error type for all roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Bad input: missing/invalid fields, non-positive ID where one is required
    #[error("validation error: {0}")]
    Validation(String),

    /// The operation targets an ID absent from the store
    #[error("not found: {0}")]
    NotFound(String),

    /// I/O failure while touching the backing file
    #[error("storage error: failed to {op} {}: {source}", .path.display())]
    Storage {
        op: StorageOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file or environment override
    #[error("config error: {0}")]
    Config(String),
}

impl RosterError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        RosterError::Validation(message.into())
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        RosterError::NotFound(message.into())
    }

    pub(crate) fn storage(op: StorageOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RosterError::Storage {
            op,
            path: path.into(),
            source,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            RosterError::Validation(_) => "BAD_REQUEST",
            RosterError::NotFound(_) => "NOT_FOUND",
            RosterError::Storage { op, .. } => op.code(),
            RosterError::Config(_) => "CONFIG",
        }
    }

    /// HTTP 스타일 상태 코드 (프레젠테이션 계층에서 매핑용)
    pub fn status(&self) -> u16 {
        match self {
            RosterError::Validation(_) => 400,
            RosterError::NotFound(_) => 404,
            RosterError::Storage { .. } | RosterError::Config(_) => 500,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RosterError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RosterError::NotFound(_))
    }
}

/// Result type alias for all roster operations.
pub type RosterResult<T> = Result<T, RosterError>;

// From 구현들
impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Config(err.to_string())
    }
}
