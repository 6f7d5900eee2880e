//! Integration tests for the file-backed supplier store.
//! Tests: round-trip fidelity, recovery, writer serialization.

use std::collections::BTreeSet;
use std::fs;
use std::sync::Arc;
use std::thread;

use supplier_directory::{JsonFileStore, SupplierRecord, SupplierStore};
use tempfile::TempDir;

fn record(company: &str, logo: &str) -> SupplierRecord {
    SupplierRecord::new(
        company.to_string(),
        "งานโยธา".to_string(),
        "contact@example.com".to_string(),
        "Civil works".to_string(),
        logo.to_string(),
    )
}

#[test]
fn append_then_load_round_trips_field_for_field() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("suppliers.json"));

    let original = record("ACME Corp", "");
    store.append(original.clone()).unwrap();

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded, vec![original]);
    assert_eq!(loaded[0].company_logo_url, "", "no-logo records keep an empty string");
}

#[test]
fn load_all_on_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("suppliers.json"));
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn load_all_on_corrupt_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let list_path = dir.path().join("suppliers.json");
    fs::write(&list_path, b"[{\"id\": truncated").unwrap();

    let store = JsonFileStore::new(&list_path);
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn append_prepends_newest_first() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("suppliers.json"));

    store.append(record("Oldest", "")).unwrap();
    store.append(record("Middle", "")).unwrap();
    store.append(record("Newest", "")).unwrap();

    let names: Vec<_> = store
        .load_all()
        .unwrap()
        .into_iter()
        .map(|r| r.company_name)
        .collect();
    assert_eq!(names, ["Newest", "Middle", "Oldest"]);
}

#[test]
fn legacy_null_fields_load_as_empty_strings() {
    let dir = TempDir::new().unwrap();
    let list_path = dir.path().join("suppliers.json");
    fs::write(
        &list_path,
        r#"[{
            "id": 1700000000000,
            "companyName": "Legacy Co",
            "jobType": "งานขาย",
            "contactInfo": null,
            "jobResponsibilities": null,
            "companyLogoUrl": null,
            "createdAt": "2023-11-14T22:13:20.000Z"
        }]"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&list_path);
    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].contact_info, "");
    assert_eq!(records[0].company_logo_url, "");
}

/// Concurrent appends must all survive: the historical last-writer-wins race
/// on the read-modify-write cycle is removed by writer serialization.
#[test]
fn concurrent_appends_lose_no_records() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("suppliers.json")));

    let threads: usize = 8;
    let appends_per_thread: usize = 4;
    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..appends_per_thread {
                    store.append(record(&format!("Supplier {t}-{i}"), "")).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let names: BTreeSet<String> = store
        .load_all()
        .unwrap()
        .into_iter()
        .map(|r| r.company_name)
        .collect();
    assert_eq!(names.len(), threads * appends_per_thread, "no append may be lost");
    for t in 0..threads {
        for i in 0..appends_per_thread {
            assert!(names.contains(&format!("Supplier {t}-{i}")));
        }
    }
}

#[test]
fn rewrite_leaves_no_stray_temp_files() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("suppliers.json"));
    store.append(record("ACME Corp", "")).unwrap();
    store.append(record("Other", "")).unwrap();

    let entries: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    let mut expected: Vec<String> = entries.clone();
    expected.retain(|name| name == "suppliers.json" || name == "suppliers.json.lock");
    assert_eq!(
        entries.len(),
        expected.len(),
        "only the list and lock files should remain, got {entries:?}"
    );
}
