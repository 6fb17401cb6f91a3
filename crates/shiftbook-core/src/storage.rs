//! Persistence port for the entry ledger.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex, MutexGuard,
};

use shiftbook_domain::TimeEntry;

use crate::CoreError;

/// Durable home of the serialized entry sequence.
///
/// Implementations hold exactly one blob. `save` always receives the whole
/// sequence and overwrites whatever was stored before.
pub trait EntryStore: Send + Sync {
    /// Reads the stored sequence. A missing blob is an empty sequence, not an error.
    fn load(&self) -> Result<Vec<TimeEntry>, CoreError>;

    /// Replaces the stored sequence with `entries`.
    fn save(&self, entries: &[TimeEntry]) -> Result<(), CoreError>;
}

/// In-memory [`EntryStore`] that keeps the blob as JSON text.
///
/// Clones share state, so a test can keep a handle to inspect or corrupt the
/// blob after handing the store to a ledger.
#[derive(Debug, Clone, Default)]
pub struct MemoryEntryStore {
    blob: Arc<Mutex<Option<String>>>,
    fail_saves: Arc<AtomicBool>,
    saves: Arc<AtomicUsize>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        let store = Self::new();
        store.set_blob(Some(blob.into()));
        store
    }

    pub fn blob(&self) -> Option<String> {
        self.lock().ok().and_then(|guard| guard.clone())
    }

    pub fn set_blob(&self, blob: Option<String>) {
        if let Ok(mut guard) = self.lock() {
            *guard = blob;
        }
    }

    /// Makes every following `save` fail until switched off again.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<String>>, CoreError> {
        self.blob
            .lock()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))
    }
}

impl EntryStore for MemoryEntryStore {
    fn load(&self) -> Result<Vec<TimeEntry>, CoreError> {
        match self.lock()?.as_deref() {
            Some(data) => Ok(serde_json::from_str(data)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, entries: &[TimeEntry]) -> Result<(), CoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(CoreError::Storage("memory store rejected the write".into()));
        }
        let data = serde_json::to_string(entries)?;
        *self.lock()? = Some(data);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
