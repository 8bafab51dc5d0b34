#![cfg(feature = "logging")]

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use slot_sentinel::{EmptyKey, EmptyValue, ErasedKey, Sentinels};

// Collects this crate's records so a test can inspect them.
struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if record.target().starts_with("slot_sentinel") {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    records: Mutex::new(Vec::new()),
};

fn take() -> Vec<(Level, String)> {
    std::mem::take(&mut *CAPTURE.records.lock().unwrap())
}

// The logger is process-global, so every check lives in one test.
#[test]
fn construction_logs_acceptance_and_rejection() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let rejected = Sentinels::new(
        EmptyKey::new(0xFFFF_FFFFu32),
        EmptyValue::new(0u32),
        ErasedKey::new(0xFFFF_FFFFu32),
    );
    assert!(rejected.is_err());
    let records = take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Level::Error);
    assert!(records[0].1.contains("0xffffffff"), "{}", records[0].1);

    let accepted = Sentinels::new(
        EmptyKey::new(0xFFFF_FFFFu32),
        EmptyValue::new(0u32),
        ErasedKey::new(0xFFFF_FFFEu32),
    );
    assert!(accepted.is_ok());
    let records = take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Level::Debug);
    assert!(records[0].1.contains("0xfffffffe"), "{}", records[0].1);

    // Probe decisions and slot CAS never log.
    let s = accepted.unwrap();
    let _ = s.classify(5);
    let _ = s.probe_for_find(5, 0xFFFF_FFFE);
    assert!(take().is_empty());
}
