use std::{cell::RefCell, rc::Rc};

use chrono::Utc;
use tempfile::TempDir;

use super::*;

fn file_store() -> (TempDir, FileConsentStore) {
    let dir = TempDir::new().expect("temp dir");
    let store = FileConsentStore::new(dir.path());
    (dir, store)
}

#[test]
fn load_returns_none_for_missing_file() {
    let (_dir, store) = file_store();
    assert_eq!(store.load(), None);
}

#[test]
fn load_returns_none_for_garbage_bytes() {
    let (_dir, store) = file_store();
    std::fs::write(store.path(), b"\xff\xfenot json at all").expect("write");
    assert_eq!(store.load(), None);
}

#[test]
fn load_returns_none_for_empty_file() {
    let (_dir, store) = file_store();
    std::fs::write(store.path(), "").expect("write");
    assert_eq!(store.load(), None);
}

#[test]
fn load_returns_none_for_wrong_shape_json() {
    let (_dir, store) = file_store();
    std::fs::write(store.path(), r#"{"externalMedia": "yes please"}"#).expect("write");
    assert_eq!(store.load(), None);
}

#[test]
fn save_round_trips_record_and_creates_parent_dir() {
    let dir = TempDir::new().expect("temp dir");
    let mut store = FileConsentStore::new(&dir.path().join("nested").join("data"));

    let record = ConsentRecord {
        external_media: true,
        timestamp: Some(Utc::now()),
    };
    store.save(&record).expect("save");
    assert_eq!(store.load(), Some(record));
}

#[test]
fn wire_format_uses_camel_case_and_omits_absent_timestamp() {
    let undecided = serde_json::to_string(&ConsentRecord::undecided()).expect("serialize");
    assert_eq!(undecided, r#"{"externalMedia":false}"#);

    let decided = ConsentRecord {
        external_media: true,
        timestamp: Some("2025-10-01T12:00:00Z".parse().expect("timestamp")),
    };
    let serialized = serde_json::to_string(&decided).expect("serialize");
    assert!(serialized.contains(r#""externalMedia":true"#));
    assert!(serialized.contains("2025-10-01T12:00:00Z"));

    let parsed: ConsentRecord = serde_json::from_str(&serialized).expect("parse");
    assert_eq!(parsed, decided);
}

#[test]
fn record_without_timestamp_is_not_a_decision() {
    let (_dir, store) = file_store();
    std::fs::write(store.path(), r#"{"externalMedia": true}"#).expect("write");

    let record = store.load().expect("record loads");
    assert!(record.external_media);
    assert!(!record.is_decided());
}

#[test]
fn fresh_controller_is_fail_closed() {
    let controller = ConsentController::new(Box::new(MemoryConsentStore::new()));
    assert_eq!(controller.current(), ConsentRecord::undecided());
}

#[test]
fn controller_treats_corrupted_file_as_absent() {
    let (_dir, store) = file_store();
    std::fs::write(store.path(), "{{{{").expect("write");

    let controller = ConsentController::new(Box::new(store));
    assert_eq!(controller.current(), ConsentRecord::undecided());
}

#[test]
fn update_stamps_timestamp_and_persists_synchronously() {
    let (_dir, store) = file_store();
    let verify_store = FileConsentStore::new(store.path().parent().expect("parent"));
    let mut controller = ConsentController::new(Box::new(store));

    controller.update(ConsentUpdate::external_media(true));

    let current = controller.current();
    assert!(current.external_media);
    assert!(current.is_decided());
    // The durable entry already holds the committed value.
    assert_eq!(verify_store.load(), Some(current));
}

#[test]
fn repeated_update_keeps_flag_and_moves_timestamp_forward() {
    let mut controller = ConsentController::new(Box::new(MemoryConsentStore::new()));

    controller.update(ConsentUpdate::external_media(true));
    let first = controller.current().timestamp.expect("first timestamp");

    controller.update(ConsentUpdate::external_media(true));
    let second = controller.current().timestamp.expect("second timestamp");

    assert!(controller.current().external_media);
    assert!(second >= first);
}

#[test]
fn empty_update_still_counts_as_explicit_decision() {
    let mut controller = ConsentController::new(Box::new(MemoryConsentStore::new()));

    controller.update(ConsentUpdate::default());

    assert!(!controller.current().external_media);
    assert!(controller.current().is_decided());
}

#[test]
fn subscribers_observe_committed_record_during_update() {
    let seen: Rc<RefCell<Vec<ConsentRecord>>> = Rc::new(RefCell::new(Vec::new()));
    let mut controller = ConsentController::new(Box::new(MemoryConsentStore::new()));

    let sink = Rc::clone(&seen);
    controller.subscribe(move |record| sink.borrow_mut().push(*record));

    controller.update(ConsentUpdate::external_media(true));
    controller.update(ConsentUpdate::external_media(false));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].external_media);
    assert!(!seen[1].external_media);
    assert!(seen.iter().all(ConsentRecord::is_decided));
}

#[test]
fn unsubscribed_closures_are_not_called() {
    let calls: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));
    let mut controller = ConsentController::new(Box::new(MemoryConsentStore::new()));

    let counter = Rc::clone(&calls);
    let id = controller.subscribe(move |_| *counter.borrow_mut() += 1);

    controller.update(ConsentUpdate::external_media(true));
    controller.unsubscribe(id);
    controller.update(ConsentUpdate::external_media(false));

    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn controller_adopts_stored_flag_but_stays_undecided_without_timestamp() {
    let store = MemoryConsentStore::with_record(ConsentRecord {
        external_media: true,
        timestamp: None,
    });
    let controller = ConsentController::new(Box::new(store));

    assert!(controller.current().external_media);
    assert!(!controller.current().is_decided());
}
