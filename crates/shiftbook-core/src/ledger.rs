//! The entry ledger: an ordered, persisted sequence of time entries.

use std::sync::Arc;

use shiftbook_domain::{EntryId, Identifiable, TimeEntry, Totals};
use tracing::{debug, info, warn};

use crate::{storage::EntryStore, time::Clock, CoreError};

/// Owns the recorded entries and keeps the store in sync with them.
///
/// Entries stay in insertion order. Every successful mutation rewrites the
/// whole sequence through the [`EntryStore`]; a mutation whose write fails is
/// undone before the error is returned, so memory never runs ahead of storage.
pub struct EntryLedger {
    entries: Vec<TimeEntry>,
    store: Box<dyn EntryStore>,
    clock: Arc<dyn Clock>,
}

impl EntryLedger {
    /// Opens the ledger from `store`. Unreadable state is logged and replaced by
    /// an empty ledger; this never fails.
    pub fn open(store: Box<dyn EntryStore>, clock: Arc<dyn Clock>) -> Self {
        let entries = load_or_empty(store.as_ref());
        info!(entries = entries.len(), "Entry ledger opened.");
        Self {
            entries,
            store,
            clock,
        }
    }

    /// Records a shift dated today and returns the stored entry.
    ///
    /// Numbers are taken as given: negative or `NaN` values are stored as-is.
    pub fn append(
        &mut self,
        company_name: impl Into<String>,
        hours: f64,
        hourly_wage: f64,
    ) -> Result<TimeEntry, CoreError> {
        let entry = TimeEntry::new(
            self.next_id(),
            self.clock.today(),
            company_name,
            hours,
            hourly_wage,
        );
        self.entries.push(entry.clone());
        if let Err(err) = self.persist() {
            self.entries.pop();
            return Err(err);
        }
        if entry.is_tainted() {
            warn!(id = %entry.id, "Recorded entry with non-finite numbers.");
        }
        info!(id = %entry.id, date = %entry.date, "Entry appended.");
        Ok(entry)
    }

    /// Removes the first entry with `id`. Unknown ids leave the ledger untouched
    /// and return `Ok(None)`.
    pub fn remove(&mut self, id: &EntryId) -> Result<Option<TimeEntry>, CoreError> {
        let Some(index) = self.entries.iter().position(|entry| entry.id() == id) else {
            debug!(%id, "Remove ignored; no such entry.");
            return Ok(None);
        };
        let removed = self.entries.remove(index);
        if let Err(err) = self.persist() {
            self.entries.insert(index, removed);
            return Err(err);
        }
        info!(%id, "Entry removed.");
        Ok(Some(removed))
    }

    /// Entries in insertion order.
    pub fn list(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn aggregate(&self) -> Totals {
        Totals::from_entries(&self.entries)
    }

    pub fn get(&self, id: &EntryId) -> Option<&TimeEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops the in-memory sequence and reads it back from the store.
    pub fn reload(&mut self) -> usize {
        self.entries = load_or_empty(self.store.as_ref());
        self.entries.len()
    }

    fn next_id(&self) -> EntryId {
        loop {
            let id = EntryId::generate();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    fn persist(&self) -> Result<(), CoreError> {
        self.store.save(&self.entries)?;
        debug!(entries = self.entries.len(), "Entry ledger saved.");
        Ok(())
    }
}

fn load_or_empty(store: &dyn EntryStore) -> Vec<TimeEntry> {
    match store.load() {
        Ok(entries) => entries,
        Err(err) => {
            warn!(error = %err, "Stored entries unreadable; starting with an empty ledger.");
            Vec::new()
        }
    }
}
