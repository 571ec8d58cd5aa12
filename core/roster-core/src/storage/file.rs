//! File-backed record store — TSV file with atomic full rewrite.
//!
//! Every write serialises the whole record set to a temporary file in the
//! same directory, fsyncs it, and renames it over the target. The file on disk
//! is therefore always either the previous complete state or the new one.
//!
//! One store instance per file: nothing here coordinates between processes.

use crate::codec::{self, HEADER};
use crate::config::StoreConfig;
use crate::error::{RosterError, RosterResult, StorageOp};
use crate::model::Candidate;
use crate::storage::{RecordSet, RecordStore};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, warn};

/// A line skipped while loading the backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// 1-based line number in the file
    pub line: usize,
    pub reason: String,
}

/// Durable TSV-backed [`RecordStore`].
pub struct FileRecordStore {
    path: PathBuf,
    state: RwLock<RecordSet>,
    warnings: Vec<LoadWarning>,
}

impl FileRecordStore {
    /// 저장 파일을 열거나 생성합니다.
    ///
    /// 상위 디렉토리가 없으면 생성하고, 파일이 없으면 헤더만 있는 파일을 만듭니다.
    /// 형식이 잘못된 라인은 건너뛰고 경고로 기록합니다.
    ///
    /// # 예제
    ///
    /// ```rust
    /// use roster_core::{Candidate, FileRecordStore, RecordStore};
    ///
    /// # fn main() -> roster_core::RosterResult<()> {
    /// let dir = tempfile::tempdir().unwrap();
    /// let store = FileRecordStore::open(&dir.path().join("candidates.tsv"))?;
    /// let stored = store.add(&Candidate::new("Alice", 28, "Software", 5))?;
    /// assert_eq!(stored.id, 1);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> RosterResult<Self> {
        init_storage(path)?;
        let (set, warnings) = load(path)?;

        info!(
            "Store opened with {} candidates, next id {} ({} lines skipped)",
            set.len(),
            set.next_id(),
            warnings.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            state: RwLock::new(set),
            warnings,
        })
    }

    /// Opens the store at `config.data_path`.
    pub fn from_config(config: &StoreConfig) -> RosterResult<Self> {
        Self::open(&config.data_path)
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines skipped during open.
    pub fn load_warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Applies `op` to a staged copy, persists it, then commits it.
    fn write_with<T>(
        &self,
        op: impl FnOnce(&mut RecordSet) -> RosterResult<T>,
    ) -> RosterResult<T> {
        let mut state = self.state.write();
        let (staged, output) = state.stage(op)?;
        self.persist(staged.records())?;
        *state = staged;
        Ok(output)
    }

    fn persist(&self, records: &[Candidate]) -> RosterResult<()> {
        let dir = parent_dir(&self.path);
        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|e| RosterError::storage(StorageOp::Write, dir, e))?;

        write_records(tmp.as_file_mut(), records)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| RosterError::storage(StorageOp::Write, tmp.path(), e))?;

        // rename(2) — 원자적 교체
        tmp.persist(&self.path)
            .map_err(|e| RosterError::storage(StorageOp::Replace, &self.path, e.error))?;

        debug!(records = records.len(), path = %self.path.display(), "persisted");
        Ok(())
    }
}

impl RecordStore for FileRecordStore {
    fn find_all(&self) -> Vec<Candidate> {
        self.state.read().records().to_vec()
    }

    fn add(&self, candidate: &Candidate) -> RosterResult<Candidate> {
        let stored = self.write_with(|set| set.add(candidate))?;
        debug!(id = stored.id, "add");
        Ok(stored)
    }

    fn update(&self, candidate: &Candidate) -> RosterResult<Candidate> {
        let stored = self.write_with(|set| set.update(candidate))?;
        debug!(id = stored.id, "update");
        Ok(stored)
    }

    fn delete(&self, id: i64) -> RosterResult<()> {
        self.write_with(|set| set.delete(id))?;
        debug!(id, "delete");
        Ok(())
    }

    fn len(&self) -> usize {
        self.state.read().len()
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn init_storage(path: &Path) -> RosterResult<()> {
    let dir = parent_dir(path);
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| RosterError::storage(StorageOp::Init, dir, e))?;
    }

    if !path.exists() {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| RosterError::storage(StorageOp::Init, path, e))?;
        writeln!(file, "{HEADER}").map_err(|e| RosterError::storage(StorageOp::Init, path, e))?;
        info!("Created new store file at {:?}", path);
    }
    Ok(())
}

fn load(path: &Path) -> RosterResult<(RecordSet, Vec<LoadWarning>)> {
    // 라인 단위로 UTF-8 검사: 손상된 바이트가 있는 라인만 건너뜀
    let content = fs::read(path).map_err(|e| RosterError::storage(StorageOp::Read, path, e))?;

    let mut records = Vec::new();
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for (idx, raw) in content.split(|&b| b == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                let reason = format!("invalid UTF-8: {e}");
                skip_line(&mut warnings, idx, reason, &String::from_utf8_lossy(raw));
                continue;
            }
        };

        if line.trim().is_empty() || (idx == 0 && codec::is_header(line)) {
            continue;
        }

        let reason = match codec::decode_line(line) {
            Ok(candidate) if seen.insert(candidate.id) => {
                records.push(candidate);
                continue;
            }
            Ok(candidate) => format!("duplicate id {}", candidate.id),
            Err(e) => e.to_string(),
        };
        skip_line(&mut warnings, idx, reason, line);
    }

    Ok((RecordSet::from_records(records), warnings))
}

fn skip_line(warnings: &mut Vec<LoadWarning>, idx: usize, reason: String, line: &str) {
    warn!(line_no = idx + 1, %reason, "Skipping malformed line: {}", line);
    warnings.push(LoadWarning {
        line: idx + 1,
        reason,
    });
}

fn write_records(file: &mut fs::File, records: &[Candidate]) -> std::io::Result<()> {
    let mut w = BufWriter::new(file);
    writeln!(w, "{HEADER}")?;
    for record in records {
        writeln!(w, "{}", codec::encode_line(record))?;
    }
    w.flush()
}
