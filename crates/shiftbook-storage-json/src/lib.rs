use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use shiftbook_core::{CoreError, EntryStore};
use shiftbook_domain::TimeEntry;
use tracing::debug;

/// Key the entry blob is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "timeEntries";
const BLOB_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed [`EntryStore`]: one JSON file per storage key.
#[derive(Debug, Clone)]
pub struct JsonEntryStore {
    path: PathBuf,
}

impl JsonEntryStore {
    /// Stores the blob for `key` at `<dir>/<key>.json`, creating `dir` if needed.
    pub fn new(dir: impl Into<PathBuf>, key: &str) -> Result<Self, CoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(format!("{}.{}", canonical_key(key), BLOB_EXTENSION)),
        })
    }

    pub fn with_default_key(dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
        Self::new(dir, DEFAULT_STORAGE_KEY)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryStore for JsonEntryStore {
    fn load(&self) -> Result<Vec<TimeEntry>, CoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&data).map_err(|err| {
            CoreError::Serde(format!("{}: {}", self.path.display(), err))
        })
    }

    fn save(&self, entries: &[TimeEntry]) -> Result<(), CoreError> {
        save_entries_to_path(entries, &self.path)?;
        debug!(path = %self.path.display(), entries = entries.len(), "Entries written.");
        Ok(())
    }
}

/// Writes `entries` to `path`, staging through a temporary sibling file.
pub fn save_entries_to_path(entries: &[TimeEntry], path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(entries)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Reads an entry blob from an arbitrary path.
pub fn load_entries_from_path(path: &Path) -> Result<Vec<TimeEntry>, CoreError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        DEFAULT_STORAGE_KEY.into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
