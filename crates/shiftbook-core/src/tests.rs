use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use shiftbook_domain::{EntryId, Totals};

use crate::{Clock, CoreError, EntryLedger, EntryStore, MemoryEntryStore};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2024, 4, 15, 9, 30, 0).unwrap(),
    ))
}

fn open(store: &MemoryEntryStore) -> EntryLedger {
    EntryLedger::open(Box::new(store.clone()), clock())
}

#[test]
fn append_records_income_and_date() {
    let store = MemoryEntryStore::new();
    let mut ledger = open(&store);

    let entry = ledger.append("Acme", 4.0, 1000.0).expect("append");

    assert_eq!(entry.total_income, 4000.0);
    assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 4, 15).unwrap());
    assert_eq!(
        ledger.aggregate(),
        Totals {
            total_hours: 4.0,
            total_income: 4000.0,
        }
    );
}

#[test]
fn aggregate_sums_every_append() {
    let store = MemoryEntryStore::new();
    let mut ledger = open(&store);

    ledger.append("Acme", 4.0, 1000.0).expect("append");
    ledger.append("Beta", 2.0, 1500.0).expect("append");

    let totals = ledger.aggregate();
    assert_eq!(totals.total_hours, 6.0);
    assert_eq!(totals.total_income, 7000.0);
}

#[test]
fn append_then_remove_empties_ledger() {
    let store = MemoryEntryStore::new();
    let mut ledger = open(&store);

    let entry = ledger.append("Acme", 4.0, 1000.0).expect("append");
    let removed = ledger.remove(&entry.id).expect("remove");

    assert_eq!(removed.map(|e| e.id), Some(entry.id));
    assert!(ledger.list().is_empty());
    assert_eq!(ledger.aggregate(), Totals::default());
}

#[test]
fn removing_unknown_id_is_a_silent_no_op() {
    let store = MemoryEntryStore::new();
    let mut ledger = open(&store);
    ledger.append("Acme", 4.0, 1000.0).expect("append");
    let before = ledger.list().to_vec();
    let saves = store.save_count();

    let removed = ledger.remove(&EntryId::from("missing")).expect("remove");

    assert!(removed.is_none());
    assert_eq!(ledger.list(), before.as_slice());
    assert_eq!(store.save_count(), saves);
}

#[test]
fn remove_only_drops_the_matching_entry() {
    let store = MemoryEntryStore::new();
    let mut ledger = open(&store);
    let first = ledger.append("Acme", 1.0, 10.0).expect("append");
    let second = ledger.append("Beta", 2.0, 20.0).expect("append");
    let third = ledger.append("Gamma", 3.0, 30.0).expect("append");

    ledger.remove(&second.id).expect("remove");

    let ids: Vec<_> = ledger.list().iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids, vec![first.id, third.id]);
    assert!(!ledger.contains(&second.id));
}

#[test]
fn ids_are_unique_across_a_session() {
    let store = MemoryEntryStore::new();
    let mut ledger = open(&store);
    let mut seen = std::collections::HashSet::new();
    for idx in 0..200 {
        let entry = ledger.append("Acme", idx as f64, 1.0).expect("append");
        assert!(seen.insert(entry.id));
    }
}

#[test]
fn every_mutation_rewrites_the_store() {
    let store = MemoryEntryStore::new();
    let mut ledger = open(&store);

    let entry = ledger.append("Acme", 4.0, 1000.0).expect("append");
    assert_eq!(store.save_count(), 1);
    assert_eq!(store.load().expect("load").len(), 1);

    ledger.remove(&entry.id).expect("remove");
    assert_eq!(store.save_count(), 2);
    assert_eq!(store.blob().as_deref(), Some("[]"));
}

#[test]
fn reopening_restores_entries_in_order() {
    let store = MemoryEntryStore::new();
    let mut ledger = open(&store);
    ledger.append("Acme", 4.0, 1000.0).expect("append");
    ledger.append("Beta", 2.5, 1200.0).expect("append");
    ledger.append("Acme", 1.0, 1000.0).expect("append");
    let original = ledger.list().to_vec();
    drop(ledger);

    let reopened = open(&store);

    assert_eq!(reopened.list(), original.as_slice());
}

#[test]
fn absent_state_opens_empty() {
    let ledger = open(&MemoryEntryStore::new());
    assert!(ledger.is_empty());
    assert_eq!(ledger.aggregate(), Totals::default());
}

#[test]
fn corrupt_state_opens_empty() {
    let store = MemoryEntryStore::with_blob("{not json");
    let ledger = open(&store);
    assert!(ledger.list().is_empty());
}

#[test]
fn failed_save_rolls_back_append() {
    let store = MemoryEntryStore::new();
    let mut ledger = open(&store);
    ledger.append("Acme", 4.0, 1000.0).expect("append");
    store.fail_saves(true);

    let err = ledger.append("Beta", 2.0, 1500.0).unwrap_err();

    assert!(matches!(err, CoreError::Storage(_)));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.aggregate().total_income, 4000.0);
}

#[test]
fn failed_save_rolls_back_remove() {
    let store = MemoryEntryStore::new();
    let mut ledger = open(&store);
    let first = ledger.append("Acme", 1.0, 10.0).expect("append");
    ledger.append("Beta", 2.0, 20.0).expect("append");
    store.fail_saves(true);

    assert!(ledger.remove(&first.id).is_err());

    assert_eq!(ledger.list()[0].id, first.id);
    assert_eq!(ledger.len(), 2);
}

#[test]
fn nan_input_is_stored_and_taints_totals() {
    let store = MemoryEntryStore::new();
    let mut ledger = open(&store);
    ledger.append("Acme", 4.0, 1000.0).expect("append");

    let entry = ledger.append("Broken", f64::NAN, 1000.0).expect("append");

    assert!(entry.total_income.is_nan());
    assert!(ledger.aggregate().total_hours.is_nan());

    let reopened = open(&store);
    assert_eq!(reopened.len(), 2);
    assert!(reopened.list()[1].hours.is_nan());
}

#[test]
fn list_and_aggregate_are_stable_without_mutation() {
    let store = MemoryEntryStore::new();
    let mut ledger = open(&store);
    ledger.append("Acme", 3.25, 1100.0).expect("append");

    assert_eq!(ledger.list(), ledger.list());
    assert_eq!(ledger.aggregate(), ledger.aggregate());
}

#[test]
fn reload_picks_up_external_changes() {
    let store = MemoryEntryStore::new();
    let mut ledger = open(&store);
    ledger.append("Acme", 4.0, 1000.0).expect("append");

    store.set_blob(None);

    assert_eq!(ledger.reload(), 0);
    assert!(ledger.is_empty());
}
