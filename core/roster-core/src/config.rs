//! Store 설정
//!
//! 우선순위: 기본값 < JSON 설정 파일 < 환경 변수

use crate::error::{RosterError, RosterResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 데이터 파일 경로 환경 변수
pub const DATA_PATH_ENV: &str = "ROSTER_DATA_PATH";

/// 기본 데이터 파일 경로
pub const DEFAULT_DATA_PATH: &str = "data/candidates.tsv";

/// Configuration for opening a [`FileRecordStore`](crate::FileRecordStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backing TSV file
    pub data_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl StoreConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    /// 파일에서 로드. 파일에 없는 키는 기본값 사용
    pub fn load_from_file(path: &Path) -> RosterResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| RosterError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: StoreConfig = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// 파일에 저장
    pub fn save_to_file(&self, path: &Path) -> RosterResult<()> {
        let json = serde_json::to_string_pretty(self)?;

        // 디렉토리 생성
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                RosterError::Config(format!("cannot create {}: {e}", parent.display()))
            })?;
        }

        fs::write(path, json)
            .map_err(|e| RosterError::Config(format!("cannot write {}: {e}", path.display())))
    }

    /// 환경 변수 적용
    pub fn apply_env(&mut self) -> RosterResult<()> {
        match env::var(DATA_PATH_ENV) {
            Ok(value) if value.trim().is_empty() => Err(RosterError::Config(format!(
                "{DATA_PATH_ENV} is set but empty"
            ))),
            Ok(value) => {
                self.data_path = PathBuf::from(value);
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(env::VarError::NotUnicode(_)) => Err(RosterError::Config(format!(
                "{DATA_PATH_ENV} is not valid unicode"
            ))),
        }
    }

    /// Defaults, then the optional JSON file, then the environment.
    pub fn resolve(file: Option<&Path>) -> RosterResult<Self> {
        let mut config = match file {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }
}
