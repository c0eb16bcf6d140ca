use std::path::PathBuf;

use stockledger_inventory::{AuditRecord, AuditSink, StockLedger, StoreError};

fn stock_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("inventory.json");
    std::fs::write(&path, contents).unwrap();
    path
}

fn snapshot(ledger: &StockLedger) -> Vec<(String, f64)> {
    ledger
        .items()
        .map(|(name, qty)| (name.to_string(), qty))
        .collect()
}

fn populated() -> StockLedger {
    let mut ledger = StockLedger::new();
    ledger.add("apple", 7.0, None).unwrap();
    ledger.add("banana", 12.0, None).unwrap();
    ledger.add("crème brûlée", 0.25, None).unwrap();
    ledger
}

#[test]
fn save_then_load_reproduces_populated_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let mut original = populated();
    original.save_to(&path).unwrap();

    let mut restored = StockLedger::new();
    restored.add("leftover", 1.0, None).unwrap();
    restored.load_from(&path).unwrap();

    assert_eq!(snapshot(&restored), snapshot(&original));
}

#[test]
fn save_then_load_reproduces_empty_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    StockLedger::new().save_to(&path).unwrap();

    let mut restored = populated();
    restored.load_from(&path).unwrap();
    assert!(restored.is_empty());
}

#[test]
fn zero_entries_survive_a_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let mut ledger = StockLedger::new();
    ledger.add("apple", 0.0, None).unwrap();
    ledger.save_to(&path).unwrap();

    let mut restored = StockLedger::new();
    restored.load_from(&path).unwrap();
    assert_eq!(restored.get_quantity("apple").unwrap(), 0.0);
}

#[test]
fn saved_file_is_a_plain_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let mut ledger = StockLedger::new();
    ledger.add("apple", 7.0, None).unwrap();
    ledger.add("banana", 12.0, None).unwrap();
    ledger.save_to(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "{\n  \"apple\": 7.0,\n  \"banana\": 12.0\n}\n");
}

#[test]
fn save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = stock_file(&dir, r#"{"old": 1, "older": 2}"#);

    let mut ledger = StockLedger::new();
    ledger.add("new", 3.0, None).unwrap();
    ledger.save_to(&path).unwrap();

    let mut restored = StockLedger::new();
    restored.load_from(&path).unwrap();
    assert_eq!(snapshot(&restored), [("new".to_string(), 3.0)]);
}

#[test]
fn integer_quantities_load_as_floats() {
    let dir = tempfile::tempdir().unwrap();
    let path = stock_file(&dir, r#"{"apple": 7, "banana": 12}"#);

    let mut ledger = StockLedger::new();
    ledger.load_from(&path).unwrap();
    assert_eq!(ledger.get_quantity("apple").unwrap(), 7.0);
    assert_eq!(ledger.get_quantity("banana").unwrap(), 12.0);
}

#[test]
fn rejected_files_leave_ledger_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let cases = [
        ("[1, 2, 3]", "array"),
        ("\"apple\"", "string"),
        (r#"{"apple": 1, "banana": "ten"}"#, "non-numeric value"),
        (r#"{"apple": 1, "banana": -4}"#, "negative value"),
        ("{not json", "malformed"),
        ("", "empty file"),
    ];

    for (contents, label) in cases {
        let path = stock_file(&dir, contents);
        let mut ledger = populated();
        let before = snapshot(&ledger);

        let err = ledger.load_from(&path).unwrap_err();
        assert!(
            matches!(err, StoreError::InvalidFormat { .. } | StoreError::Parse { .. }),
            "{label}: unexpected error {err:?}"
        );
        assert_eq!(snapshot(&ledger), before, "{label}");
    }
}

#[test]
fn missing_file_is_io_error_and_keeps_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let mut ledger = populated();
    let before = snapshot(&ledger);

    let err = ledger.load_from(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert_eq!(snapshot(&ledger), before);
}

#[test]
fn unwritable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("inventory.json");
    let err = populated().save_to(&path).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

struct Lines(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

impl AuditSink for Lines {
    fn record(&mut self, record: &AuditRecord) {
        self.0.lock().unwrap().push(record.to_string());
    }
}

#[test]
fn load_and_save_report_item_counts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let lines = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));

    let mut ledger = StockLedger::with_audit(Box::new(Lines(lines.clone())));
    ledger.add("apple", 1.0, None).unwrap();
    ledger.add("pear", 2.0, None).unwrap();
    ledger.save_to(&path).unwrap();
    ledger.load_from(&path).unwrap();

    let lines = lines.lock().unwrap();
    let expected_save = format!("Saved 2 items to {}", path.display());
    let expected_load = format!("Loaded 2 items from {}", path.display());
    assert!(lines[2].ends_with(&expected_save), "{}", lines[2]);
    assert!(lines[3].ends_with(&expected_load), "{}", lines[3]);
}
