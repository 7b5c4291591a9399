use repairdesk::core::Shop;
use repairdesk::core::seed;
use repairdesk::store::{
    KEY_DAMAGES, KEY_EXPENSES, KEY_TRANSACTIONS, KeyValueStore, MemoryStore, SqliteStore,
};
use serde_json::json;
use std::env;
use std::path::PathBuf;

fn temp_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_repairdesk_store.sqlite", name));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

#[test]
fn test_memory_store_get_set_remove() {
    let mut store = MemoryStore::new();
    assert!(store.get("k").is_none());

    store.set("k", &json!({"a": 1})).unwrap();
    assert_eq!(store.get("k"), Some(json!({"a": 1})));

    store.remove("k").unwrap();
    assert!(store.get("k").is_none());

    // removing twice is fine
    store.remove("k").unwrap();
}

#[test]
fn test_malformed_json_reads_as_absent() {
    let mut store = MemoryStore::new();
    store.set_raw("broken", "{not json").unwrap();

    assert!(store.get("broken").is_none());
    assert_eq!(store.get_raw("broken").as_deref(), Some("{not json"));
}

#[test]
fn test_sqlite_store_is_idempotent_and_fails_soft() {
    let mut store = SqliteStore::in_memory().unwrap();

    store.set("k", &json!([1, 2, 3])).unwrap();
    store.set("k", &json!([1, 2, 3])).unwrap();
    assert_eq!(store.get("k"), Some(json!([1, 2, 3])));

    store.set_raw("k", "][").unwrap();
    assert!(store.get("k").is_none());

    store.remove("k").unwrap();
    assert!(store.get_raw("k").is_none());
}

#[test]
fn test_collections_round_trip_through_sqlite_file() {
    let db = temp_db("round_trip");

    let (damages, transactions, expenses) = {
        let mut shop = Shop::open(SqliteStore::open(&db).unwrap());
        shop.add_expense("Listrik", 350000.5).unwrap();
        shop.set_status("trx003", repairdesk::models::TransactionStatus::Completed)
            .unwrap();
        (
            shop.damages.list().to_vec(),
            shop.transactions.list().to_vec(),
            shop.expenses.list().to_vec(),
        )
    };

    // a fresh process
    let shop = Shop::open(SqliteStore::open(&db).unwrap());
    assert_eq!(shop.damages.list(), damages.as_slice());
    assert_eq!(shop.transactions.list(), transactions.as_slice());
    assert_eq!(shop.expenses.list(), expenses.as_slice());
    assert_eq!(shop.expenses.list().last().unwrap().amount, 350000.5);
}

#[test]
fn test_malformed_collections_restore_to_seed() {
    let mut store = MemoryStore::new();
    store.set_raw(KEY_DAMAGES, "[{\"id\": 1").unwrap();
    store.set_raw(KEY_TRANSACTIONS, "null").unwrap();
    store.set_raw(KEY_EXPENSES, "{\"oops\": true}").unwrap();

    let shop = Shop::open(store);
    assert_eq!(shop.damages.list(), seed::damages().as_slice());
    assert_eq!(shop.transactions.list(), seed::transactions().as_slice());
    assert_eq!(shop.expenses.list(), seed::expenses().as_slice());
}

#[test]
fn test_persisted_layout_uses_original_field_names() {
    let mut shop = Shop::open(MemoryStore::new());
    shop.set_pickup_date("trx003", None).unwrap();

    let stored = shop.store.get(KEY_TRANSACTIONS).unwrap();
    let trx003 = stored
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["id"] == "trx003")
        .unwrap();

    assert_eq!(trx003["customerName"], "Citra Lestari");
    assert_eq!(trx003["damageId"], "dmg003");
    assert_eq!(trx003["entryDate"], "2023-10-04");
    assert_eq!(trx003["pickupDate"], "");
    assert_eq!(trx003["status"], "Dalam Perbaikan");
}

#[test]
fn test_loading_seed_does_not_write() {
    let shop = Shop::open(MemoryStore::new());
    assert!(!shop.store.contains(KEY_DAMAGES));
    assert!(!shop.store.contains(KEY_TRANSACTIONS));
    assert!(!shop.store.contains(KEY_EXPENSES));
}
